use crate::Point;

/// A scalar function of two variables to be minimized.
///
/// Objectives must be pure: evaluating the same point twice yields the same
/// value. They may return `NaN` or `Inf` where the function is undefined;
/// solvers treat such values as a failed step rather than an error.
///
/// Closures of the form `Fn(f64, f64) -> f64` implement `Objective`
/// automatically.
pub trait Objective {
    /// Evaluates the objective at `point`.
    fn value(&self, point: Point) -> f64;
}

impl<F> Objective for F
where
    F: Fn(f64, f64) -> f64,
{
    fn value(&self, point: Point) -> f64 {
        self(point.x, point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_objectives() {
        let f = |x: f64, y: f64| x * y;

        assert_eq!(f.value(Point::new(2.0, 3.0)), 6.0);
    }

    #[test]
    fn evaluation_is_repeatable() {
        let f = |x: f64, y: f64| (5.0 * x).sin() * (5.0 * y).cos() / 5.0;
        let p = Point::new(0.3, -1.2);

        assert_eq!(f.value(p).to_bits(), f.value(p).to_bits());
    }
}
