use std::ops::{Mul, Neg};

/// A location in the plane.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns true if both coordinates are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A two-component vector: a gradient estimate or a step direction.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a new vector.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the Euclidean norm of the vector.
    #[must_use]
    pub fn intensity(self) -> f64 {
        intensity(self)
    }

    /// Returns the vector pointing the opposite way.
    ///
    /// Applied to a gradient, this is the direction of steepest descent.
    #[must_use]
    pub fn anti_gradient(self) -> Self {
        anti_gradient(self.x, self.y)
    }

    /// Returns the unit vector with the same direction.
    ///
    /// Returns `None` if the norm is zero or not finite, since no direction
    /// can be recovered from such a vector.
    #[must_use]
    pub fn normalized(self) -> Option<Self> {
        let norm = self.intensity();
        if norm == 0.0 || !norm.is_finite() {
            return None;
        }
        Some(Self::new(self.x / norm, self.y / norm))
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        self.anti_gradient()
    }
}

impl Mul<f64> for Vector {
    type Output = Self;

    fn mul(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k)
    }
}

/// Builds the anti-gradient `(-partial_x, -partial_y)`.
#[must_use]
pub fn anti_gradient(partial_x: f64, partial_y: f64) -> Vector {
    Vector::new(-partial_x, -partial_y)
}

/// Returns the Euclidean norm `sqrt(v.x² + v.y²)`.
///
/// Computed without intermediate overflow, so any finite vector has a finite
/// intensity.
#[must_use]
pub fn intensity(vector: Vector) -> f64 {
    vector.x.hypot(vector.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn anti_gradient_negates_both_components() {
        let v = anti_gradient(3.0, -4.0);

        assert_eq!(v, Vector::new(-3.0, 4.0));
        assert_eq!(-Vector::new(3.0, -4.0), v);
    }

    #[test]
    fn intensity_is_euclidean_norm() {
        assert_relative_eq!(intensity(Vector::new(3.0, -4.0)), 5.0);
        assert_relative_eq!(Vector::ZERO.intensity(), 0.0);
    }

    #[test]
    fn normalized_has_unit_length() {
        let unit = Vector::new(3.0, -4.0).normalized().expect("non-zero vector");

        assert_relative_eq!(unit.intensity(), 1.0, epsilon = 1e-15);
        assert_relative_eq!(unit.x, 0.6, epsilon = 1e-15);
        assert_relative_eq!(unit.y, -0.8, epsilon = 1e-15);
    }

    #[test]
    fn huge_vectors_keep_finite_intensity() {
        let v = Vector::new(3e200, -4e200);

        assert_relative_eq!(v.intensity(), 5e200, max_relative = 1e-15);

        let unit = v.normalized().expect("finite vector");
        assert_relative_eq!(unit.x, 0.6, epsilon = 1e-15);
        assert_relative_eq!(unit.y, -0.8, epsilon = 1e-15);
    }

    #[test]
    fn normalized_rejects_degenerate_vectors() {
        assert!(Vector::ZERO.normalized().is_none());
        assert!(Vector::new(f64::NAN, 1.0).normalized().is_none());
        assert!(Vector::new(f64::INFINITY, 0.0).normalized().is_none());
    }

    #[test]
    fn points_convert_from_pairs() {
        assert_eq!(Point::from([1.0, 2.0]), Point::new(1.0, 2.0));
        assert_eq!(Point::from((1.0, 2.0)), Point::new(1.0, 2.0));
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
    }
}
