//! Share link builder.
//!
//! Sharing never touches the transport: the deep link is derived purely from
//! the object reference and display title, so it works for anonymous users
//! and for objects the viewer cannot mutate.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::domain::ObjectRef;

/// Links offered by the share dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinks {
    /// Canonical deep link to the object.
    pub url: String,
    /// `mailto:` URL with the title as subject and the link as body.
    pub email: String,
    /// Prefilled post composer link.
    pub twitter: String,
    /// Prefilled share composer link.
    pub linkedin: String,
    /// Payload to render as a QR code, identical to the deep link.
    pub qr_payload: String,
}

/// Builds the canonical deep link for an object.
///
/// The path segment is the lowercased kind name, so a `Project` with id
/// `p1` under `https://example.com` links to `https://example.com/project/p1`.
#[must_use]
pub fn deep_link(base_url: &str, target: &ObjectRef) -> String {
    let base = base_url.trim_end_matches('/');
    let kind = target.kind.as_str().to_ascii_lowercase();
    let id = utf8_percent_encode(&target.id, NON_ALPHANUMERIC);
    format!("{base}/{kind}/{id}")
}

/// Builds the full set of share links for an object.
#[must_use]
pub fn share_links(base_url: &str, target: &ObjectRef, title: &str) -> ShareLinks {
    let url = deep_link(base_url, target);
    let encoded_url = utf8_percent_encode(&url, NON_ALPHANUMERIC).to_string();
    let encoded_title = utf8_percent_encode(title, NON_ALPHANUMERIC).to_string();

    ShareLinks {
        email: format!("mailto:?subject={encoded_title}&body={encoded_url}"),
        twitter: format!(
            "https://twitter.com/intent/tweet?text={encoded_title}&url={encoded_url}"
        ),
        linkedin: format!(
            "https://www.linkedin.com/sharing/share-offsite/?url={encoded_url}"
        ),
        qr_payload: url.clone(),
        url,
    }
}
