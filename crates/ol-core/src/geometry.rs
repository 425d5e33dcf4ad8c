use serde::{Deserialize, Serialize};

/// A point in the 2D system plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Position {
    /// Create a position from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Angle in radians of the vector from `self` to `other`.
    pub fn bearing_to(&self, other: &Position) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Move `distance` units along `angle` (radians).
    pub fn advance(&mut self, angle: f64, distance: f64) {
        self.x += angle.cos() * distance;
        self.y += angle.sin() * distance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn bearing_points_at_target() {
        let a = Position::new(1.0, 1.0);
        assert!((a.bearing_to(&Position::new(5.0, 1.0))).abs() < 1e-12);
        let up = a.bearing_to(&Position::new(1.0, 9.0));
        assert!((up - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn advance_moves_along_angle() {
        let mut p = Position::new(0.0, 0.0);
        p.advance(std::f64::consts::PI, 2.0);
        assert!((p.x + 2.0).abs() < 1e-12);
        assert!(p.y.abs() < 1e-12);
    }
}
