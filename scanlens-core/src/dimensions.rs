use serde::{Deserialize, Serialize};

/// Width/height of a pixel space: either the on-screen box a video element is
/// rendered into, or the native resolution of the video frame itself.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both axes must be positive for a coordinate mapping into or out of
    /// this space to be defined.
    pub fn is_positive(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}
