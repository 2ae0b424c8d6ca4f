//! Axis-aligned rectangles in world pixels (y grows downward)

use glam::Vec2;

/// An axis-aligned box described by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Build a rect from its center point
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Strict overlap: rects that only share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }

    /// Penetration depth on each axis, or None when not overlapping
    pub fn penetration(&self, other: &Rect) -> Option<Vec2> {
        if !self.overlaps(other) {
            return None;
        }
        let a_max = self.max();
        let b_max = other.max();
        let x = (a_max.x - other.min.x).min(b_max.x - self.min.x);
        let y = (a_max.y - other.min.y).min(b_max.y - self.min.y);
        Some(Vec2::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_center() {
        let r = Rect::from_center(Vec2::new(400.0, 568.0), Vec2::new(800.0, 64.0));
        assert_eq!(r.min, Vec2::new(0.0, 536.0));
        assert_eq!(r.max(), Vec2::new(800.0, 600.0));
        assert_eq!(r.center(), Vec2::new(400.0, 568.0));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&b));
        assert!(a.penetration(&b).is_none());
    }

    #[test]
    fn test_penetration_picks_shallow_side() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(2.0, 8.0), Vec2::new(20.0, 20.0));
        let pen = a.penetration(&b).unwrap();
        assert!((pen.x - 8.0).abs() < 1e-5);
        assert!((pen.y - 2.0).abs() < 1e-5);
    }
}
