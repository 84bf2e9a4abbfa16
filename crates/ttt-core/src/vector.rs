//! 2D integer coordinate / value type.
//!
//! Arithmetic comes in two explicit flavours:
//! - vector ⊕ vector (component-wise),
//! - vector ⊕ `i32`  (the scalar broadcasts to both axes).
//!
//! Folding many operands goes through [`Sum`] and [`Product`], which start
//! from their neutral elements `(0, 0)` and `(1, 1)`.

use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A coordinate or offset on a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector {
    pub x: i32,
    pub y: i32,
}

impl Vector {
    /// `(0, 0)`.
    pub const ZERO: Vector = Vector { x: 0, y: 0 };

    /// `(1, 1)`.
    pub const ONE: Vector = Vector { x: 1, y: 1 };

    pub const fn new(x: i32, y: i32) -> Self {
        Vector { x, y }
    }

    /// `v * -1`.
    pub fn inverse(self) -> Self {
        self * -1
    }

    /// Component-wise division by another vector.
    ///
    /// Returns `None` if either component of `rhs` is zero.
    pub fn checked_div(self, rhs: Vector) -> Option<Vector> {
        Some(Vector {
            x: self.x.checked_div(rhs.x)?,
            y: self.y.checked_div(rhs.y)?,
        })
    }

    /// Division of both components by a scalar.
    ///
    /// Returns `None` if `rhs` is zero.
    pub fn checked_div_scalar(self, rhs: i32) -> Option<Vector> {
        self.checked_div(Vector::new(rhs, rhs))
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl From<(i32, i32)> for Vector {
    fn from((x, y): (i32, i32)) -> Self {
        Vector { x, y }
    }
}

// -----------------------------------------------------------------------------
// Operators
// -----------------------------------------------------------------------------

macro_rules! vector_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait<Vector> for Vector {
            type Output = Vector;

            fn $method(self, rhs: Vector) -> Vector {
                Vector {
                    x: self.x $op rhs.x,
                    y: self.y $op rhs.y,
                }
            }
        }

        impl $trait<i32> for Vector {
            type Output = Vector;

            fn $method(self, rhs: i32) -> Vector {
                Vector {
                    x: self.x $op rhs,
                    y: self.y $op rhs,
                }
            }
        }
    };
}

vector_op!(Add, add, +);
vector_op!(Sub, sub, -);
vector_op!(Mul, mul, *);
// Panics on a zero divisor, like `i32`. Use `checked_div` for untrusted input.
vector_op!(Div, div, /);

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.inverse()
    }
}

impl Sum for Vector {
    fn sum<I: Iterator<Item = Vector>>(iter: I) -> Vector {
        iter.fold(Vector::ZERO, |acc, v| acc + v)
    }
}

impl Product for Vector {
    fn product<I: Iterator<Item = Vector>>(iter: I) -> Vector {
        iter.fold(Vector::ONE, |acc, v| acc * v)
    }
}
