//! Sample surfaces for exercising the descent solver.
//!
//! Each surface is a zero-sized (or trivially small) [`Objective`]:
//!
//! - [`Paraboloid`] — `x² + y²`, single minimum at the origin
//! - [`RaisedParaboloid`] — `x² + y² + 2`, same shape shifted up
//! - [`EggCrate`] — `sin(5x)·cos(5y) / 5`, a lattice of minima and saddles
//! - [`Saddle`] — `x·y`, unbounded below along `y = -x`
//! - [`Flat`] — a constant, zero gradient everywhere

use crate::{Objective, Point};

/// `f(x, y) = x² + y²`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Paraboloid;

impl Objective for Paraboloid {
    fn value(&self, p: Point) -> f64 {
        p.x * p.x + p.y * p.y
    }
}

/// `f(x, y) = x² + y² + 2`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RaisedParaboloid;

impl Objective for RaisedParaboloid {
    fn value(&self, p: Point) -> f64 {
        p.x.powi(2) + p.y.powi(2) + 2.0
    }
}

/// `f(x, y) = sin(5x)·cos(5y) / 5`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EggCrate;

impl Objective for EggCrate {
    fn value(&self, p: Point) -> f64 {
        (5.0 * p.x).sin() * (5.0 * p.y).cos() / 5.0
    }
}

/// `f(x, y) = x·y`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Saddle;

impl Objective for Saddle {
    fn value(&self, p: Point) -> f64 {
        p.x * p.y
    }
}

/// `f(x, y) = c` for a constant `c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flat(pub f64);

impl Objective for Flat {
    fn value(&self, _: Point) -> f64 {
        self.0
    }
}
