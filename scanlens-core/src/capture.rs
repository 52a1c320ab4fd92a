use serde::{Deserialize, Serialize};

/// Result of a successful scan, handed from the scan view to the result view:
/// an object URL for the captured photo plus the decoded QR payload.
///
/// This is a plain value that callers pass explicitly, not ambient shared
/// state. Whoever owns it is responsible for the explicit release of the
/// browser resource behind `photo_url` (revoking the object URL); dropping
/// the value does not release anything.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    photo_url: String,
    qr_text: String,
}

impl Capture {
    pub fn new(photo_url: String, qr_text: String) -> Self {
        Self { photo_url, qr_text }
    }

    pub fn photo_url(&self) -> &str {
        &self.photo_url
    }

    pub fn qr_text(&self) -> &str {
        &self.qr_text
    }

    /// Consumes the capture, handing the photo URL back to the owner for the
    /// release step.
    pub fn into_parts(self) -> (String, String) {
        (self.photo_url, self.qr_text)
    }
}
