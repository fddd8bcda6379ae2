//! User-facing notification capability.
//!
//! Executors and the orchestrator report outcomes through an injected
//! [`NotificationSink`] rather than a process-wide channel, so every component
//! in this crate is testable in isolation. Each failure produces exactly one
//! transient notification; successes notify only where the action has no other
//! visible effect.

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// One transient, user-facing notification.
///
/// `key` is a stable identifier for the translation layer (out of scope here);
/// `message` is the untranslated fallback text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub key: &'static str,
    pub message: String,
}

impl Notification {
    /// Builds an error notification.
    pub fn error(key: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            key,
            message: message.into(),
        }
    }

    /// Builds a success notification.
    pub fn success(key: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            key,
            message: message.into(),
        }
    }

    /// Builds a warning notification.
    pub fn warning(key: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            key,
            message: message.into(),
        }
    }
}

/// Receives transient notifications for display.
///
/// Implementations take `&self`; sinks that buffer (the test sink does) use
/// interior mutability.
pub trait NotificationSink {
    /// Publishes one notification.
    fn publish(&self, notification: Notification);
}
