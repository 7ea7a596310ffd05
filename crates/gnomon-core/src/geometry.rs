//! Rectangular frames handed to renderers.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in renderer coordinates.
///
/// `x` grows rightwards across lanes, `y` grows downwards along the time
/// axis. Units are whatever the caller's scale maps minutes onto (pixels,
/// points).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Frame {
    /// Creates a new frame from its top-left corner and size.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the horizontal offset of the left edge.
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the vertical offset of the top edge.
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns the width of the frame.
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height of the frame.
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the horizontal offset of the right edge.
    pub fn max_x(self) -> f32 {
        self.x + self.width
    }

    /// Returns the vertical offset of the bottom edge.
    pub fn max_y(self) -> f32 {
        self.y + self.height
    }

    /// Moves the frame by the specified offsets.
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Returns true if the two frames intersect with positive area.
    ///
    /// Frames that merely touch along an edge do not intersect, mirroring
    /// the strict time-overlap predicate.
    pub fn intersects(self, other: Frame) -> bool {
        self.x < other.max_x()
            && other.x < self.max_x()
            && self.y < other.max_y()
            && other.y < self.max_y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_frame_accessors() {
        let frame = Frame::new(10.0, 20.0, 30.0, 40.0);
        assert_approx_eq!(f32, frame.x(), 10.0);
        assert_approx_eq!(f32, frame.y(), 20.0);
        assert_approx_eq!(f32, frame.width(), 30.0);
        assert_approx_eq!(f32, frame.height(), 40.0);
        assert_approx_eq!(f32, frame.max_x(), 40.0);
        assert_approx_eq!(f32, frame.max_y(), 60.0);
    }

    #[test]
    fn test_frame_default_is_zero() {
        let frame = Frame::default();
        assert_approx_eq!(f32, frame.x(), 0.0);
        assert_approx_eq!(f32, frame.width(), 0.0);
    }

    #[test]
    fn test_frame_translate() {
        let frame = Frame::new(1.0, 2.0, 3.0, 4.0).translate(10.0, -2.0);
        assert_approx_eq!(f32, frame.x(), 11.0);
        assert_approx_eq!(f32, frame.y(), 0.0);
        assert_approx_eq!(f32, frame.width(), 3.0);
        assert_approx_eq!(f32, frame.height(), 4.0);
    }

    #[test]
    fn test_frame_intersection() {
        let a = Frame::new(0.0, 0.0, 10.0, 10.0);
        let b = Frame::new(5.0, 5.0, 10.0, 10.0);
        let c = Frame::new(20.0, 0.0, 5.0, 5.0);
        assert!(a.intersects(b));
        assert!(b.intersects(a));
        assert!(!a.intersects(c));
    }

    #[test]
    fn test_touching_frames_do_not_intersect() {
        let a = Frame::new(0.0, 0.0, 10.0, 10.0);
        let right = Frame::new(10.0, 0.0, 10.0, 10.0);
        let below = Frame::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(right));
        assert!(!a.intersects(below));
    }
}
