use crate::{Point, Vector};

/// A trait for types that can be stepped using their derivative.
///
/// Implementing this trait lets a solver advance a value via
/// `derivative * delta`, where the derivative is with respect to `Delta`.
/// For descent, the value is a [`Point`], the derivative is a direction
/// [`Vector`], and `delta` is the gain applied to that direction.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
///
/// This is a convenience for accessing the [`StepIntegrable::Derivative`]
/// associated type without writing out the fully qualified syntax.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

impl StepIntegrable<f64> for Point {
    type Derivative = Vector;

    fn step(&self, direction: Vector, gain: f64) -> Self {
        Point::new(self.x + direction.x * gain, self.y + direction.y * gain)
    }
}
