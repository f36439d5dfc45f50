//! Finite-difference derivatives of two-variable objectives.
//!
//! The forward scheme is first-order accurate (error `O(h)`) and costs one
//! extra evaluation per partial. The central scheme is second-order accurate
//! (error `O(h²)`) and costs two. Neither adapts `h`; non-finite objective
//! values propagate into the result unchanged.

use gradwalk_core::{Objective, Point, Vector};

/// Finite-difference scheme used to estimate a gradient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Difference {
    /// `(f(p + h) - f(p)) / h`.
    #[default]
    Forward,

    /// `(f(p + h) - f(p - h)) / 2h`.
    Central,
}

impl Difference {
    /// Estimates the gradient of `objective` at `point` with this scheme.
    pub fn gradient<O>(self, objective: &O, point: Point, h: f64) -> Vector
    where
        O: Objective + ?Sized,
    {
        match self {
            Self::Forward => gradient(objective, point, h),
            Self::Central => {
                let Point { x, y } = point;
                let dx = objective.value(Point::new(x + h, y))
                    - objective.value(Point::new(x - h, y));
                let dy = objective.value(Point::new(x, y + h))
                    - objective.value(Point::new(x, y - h));
                Vector::new(dx / (2.0 * h), dy / (2.0 * h))
            }
        }
    }
}

/// Forward-difference estimate of `∂f/∂x`: `(f(x + h, y) - f(x, y)) / h`.
pub fn partial_x<O>(objective: &O, point: Point, h: f64) -> f64
where
    O: Objective + ?Sized,
{
    let shifted = Point::new(point.x + h, point.y);
    (objective.value(shifted) - objective.value(point)) / h
}

/// Forward-difference estimate of `∂f/∂y`: `(f(x, y + h) - f(x, y)) / h`.
pub fn partial_y<O>(objective: &O, point: Point, h: f64) -> f64
where
    O: Objective + ?Sized,
{
    let shifted = Point::new(point.x, point.y + h);
    (objective.value(shifted) - objective.value(point)) / h
}

/// Forward-difference gradient `(∂f/∂x, ∂f/∂y)` at `point`.
pub fn gradient<O>(objective: &O, point: Point, h: f64) -> Vector
where
    O: Objective + ?Sized,
{
    Vector::new(partial_x(objective, point, h), partial_y(objective, point, h))
}
