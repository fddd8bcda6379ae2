//! Error types for the Huddle core layer.
//!
//! This module defines the centralized error type [`CoreError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait
//! implementation.
//!
//! # Propagation rules
//!
//! Resolvers never return errors; they degrade to documented defaults. Action
//! executors catch transport failures locally and convert them into user-facing
//! notifications, so `CoreError` values surface to callers only from the
//! orchestrator's synchronous validation paths (unsupported action, missing
//! object, confirmation mismatch).

use thiserror::Error;

/// The main error type for Huddle core operations.
///
/// This enum consolidates the failure taxonomy of the interaction layer. Each
/// variant corresponds to exactly one user-visible outcome: a generic
/// notification, an aborted action, or an inline validation block.
///
/// # Examples
///
/// ```
/// use huddle_core::domain::CoreError;
///
/// fn press_unwired() -> Result<(), CoreError> {
///     Err(CoreError::UnsupportedAction("Donate".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum CoreError {
    /// The pressed action is not available for this object kind.
    ///
    /// Surfaces as a generic "not supported" notification rather than a no-op
    /// or a panic. The string names the action that was pressed.
    #[error("Action not supported here: {0}")]
    UnsupportedAction(String),

    /// An action was invoked with no resolvable object.
    ///
    /// Surfaces as a notification; the action is aborted before any mutation
    /// is issued.
    #[error("No object to act on: {0}")]
    MissingObject(String),

    /// A mutation or query transport call was rejected.
    ///
    /// Executors catch this locally and emit an action-specific notification;
    /// in-memory state is left unpatched.
    #[error("Transport failure: {0}")]
    Transport(String),

    /// Bookmark removal found more than one matching record and no
    /// disambiguation choice was made.
    ///
    /// The string carries the target reference for logging. No deletion target
    /// is ever inferred from an ambiguous match set.
    #[error("Ambiguous state: {0}")]
    AmbiguousState(String),

    /// Delete-confirmation text did not match the object's display name.
    ///
    /// Blocks inline; the destructive mutation never fires.
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// A specialized `Result` type for Huddle core operations.
///
/// This is a type alias for `std::result::Result<T, CoreError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, CoreError>;
