use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle: top-left corner plus extent, all in one pixel
/// coordinate space (display space or video space, depending on context).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// x coordinate of the right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// y coordinate of the bottom edge
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// A rectangle with no positive area selects nothing.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_creation() {
        let rect = Rect::new(10.0, 20.0, 100.0, 200.0);

        assert_eq!(rect.x, 10.0);
        assert_eq!(rect.y, 20.0);
        assert_eq!(rect.width, 100.0);
        assert_eq!(rect.height, 200.0);
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);

        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.bottom(), 70.0);
    }

    #[test]
    fn test_rect_is_empty() {
        assert!(Rect::new(0.0, 0.0, 0.0, 50.0).is_empty());
        assert!(Rect::new(0.0, 0.0, 50.0, 0.0).is_empty());
        assert!(Rect::new(0.0, 0.0, -10.0, 50.0).is_empty());
        assert!(!Rect::new(0.0, 0.0, 1.0, 1.0).is_empty());
    }

    #[test]
    fn test_rect_serialization_roundtrip() {
        let original = Rect::new(100.0, 200.0, 640.0, 480.0);

        let json = serde_json::to_string(&original).unwrap();
        let restored: Rect = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, original);
    }
}
