//! Fixed-size 2D container addressed by [`Vector`].
//!
//! Cells are stored row-major: `index = y * width + x`.
//!
//! Every accessor checks bounds, so a coordinate such as `(-1, 1)` can
//! never alias a cell on the previous row.

use std::fmt;
use std::ops::{Add, Div, Mul, Range, Sub};

use crate::error::GridError;
use crate::vector::Vector;

/// A `width * height` grid of `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

/// Right-hand side of an elementwise grid operation.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a, T> {
    /// Combine with the cell at the same coordinate of another grid.
    Grid(&'a Grid<T>),
    /// Combine every cell with the same value.
    Scalar(T),
}

impl<'a, T> From<&'a Grid<T>> for Operand<'a, T> {
    fn from(grid: &'a Grid<T>) -> Self {
        Operand::Grid(grid)
    }
}

impl<T: Default> Grid<T> {
    /// Grid with every cell set to `T::default()`.
    pub fn new(width: usize, height: usize) -> Self {
        Grid::from_fn(width, height, |_| T::default())
    }
}

impl<T> Grid<T> {
    /// Build a grid by calling `generator` once per coordinate, in linear
    /// (row-major) order.
    pub fn from_fn<F>(width: usize, height: usize, mut generator: F) -> Self
    where
        F: FnMut(Vector) -> T,
    {
        let len = width * height;
        let mut cells = Vec::with_capacity(len);
        for index in 0..len {
            cells.push(generator(index_to_vector(width, index)));
        }

        Grid {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells (`width * height`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in linear order.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// True iff `0 <= x < width` and `0 <= y < height`.
    pub fn is_valid(&self, at: Vector) -> bool {
        self.index_of(at).is_some()
    }

    pub fn get(&self, at: Vector) -> Option<&T> {
        self.index_of(at).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, at: Vector) -> Option<&mut T> {
        self.index_of(at).map(move |i| &mut self.cells[i])
    }

    /// Replace the value at `at`, returning the previous one.
    pub fn set(&mut self, at: Vector, value: T) -> Result<T, GridError> {
        let (width, height) = (self.width, self.height);
        let slot = self
            .get_mut(at)
            .ok_or(GridError::OutOfBounds { at, width, height })?;
        Ok(std::mem::replace(slot, value))
    }

    /// Coordinate of a linear index.
    pub fn index_to_vector(&self, index: usize) -> Vector {
        index_to_vector(self.width, index)
    }

    /// Linear index of `at`, or `None` if it lies outside the grid.
    pub fn index_of(&self, at: Vector) -> Option<usize> {
        let x = usize::try_from(at.x).ok()?;
        let y = usize::try_from(at.y).ok()?;
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Every cell with its coordinate, in linear order (y outer, x inner).
    pub fn iter(&self) -> impl Iterator<Item = (Vector, &T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, value)| (index_to_vector(self.width, i), value))
    }

    /// Cells of the rectangle `xs × ys`, visited x outer, y inner.
    ///
    /// Coordinates that fall outside the grid are skipped.
    pub fn iter_range(
        &self,
        xs: Range<i32>,
        ys: Range<i32>,
    ) -> impl Iterator<Item = (Vector, &T)> + '_ {
        xs.flat_map(move |x| ys.clone().map(move |y| Vector::new(x, y)))
            .filter_map(move |at| self.get(at).map(|value| (at, value)))
    }

    /// New grid of the same shape with `f` applied to every cell.
    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    fn same_shape<U>(&self, other: &Grid<U>) -> Result<(), GridError> {
        if self.width == other.width && self.height == other.height {
            Ok(())
        } else {
            Err(GridError::ShapeMismatch {
                left: (self.width, self.height),
                right: (other.width, other.height),
            })
        }
    }
}

impl<T: Clone> Grid<T> {
    /// Overwrite every cell with `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl<T: PartialEq> Grid<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.cells.contains(value)
    }
}

// -----------------------------------------------------------------------------
// Elementwise arithmetic
// -----------------------------------------------------------------------------

impl<T: Copy> Grid<T> {
    /// Apply `op` cell-by-cell against `rhs`, producing a grid of the same
    /// shape. Fails only if `rhs` is a grid of a different shape.
    pub fn zip_with<'a, F>(&self, rhs: Operand<'a, T>, op: F) -> Result<Grid<T>, GridError>
    where
        F: Fn(T, T) -> T,
    {
        match rhs {
            Operand::Scalar(s) => Ok(self.map(|&v| op(v, s))),
            Operand::Grid(other) => {
                self.same_shape(other)?;
                let cells = self
                    .cells
                    .iter()
                    .zip(other.cells.iter())
                    .map(|(&a, &b)| op(a, b))
                    .collect();
                Ok(Grid {
                    width: self.width,
                    height: self.height,
                    cells,
                })
            }
        }
    }

    pub fn add<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> Result<Grid<T>, GridError>
    where
        T: Add<Output = T> + 'a,
    {
        self.zip_with(rhs.into(), |a, b| a + b)
    }

    pub fn subtract<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> Result<Grid<T>, GridError>
    where
        T: Sub<Output = T> + 'a,
    {
        self.zip_with(rhs.into(), |a, b| a - b)
    }

    pub fn multiply<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> Result<Grid<T>, GridError>
    where
        T: Mul<Output = T> + 'a,
    {
        self.zip_with(rhs.into(), |a, b| a * b)
    }

    /// Division follows `T`'s own semantics: `f64` grids produce
    /// infinity / NaN on a zero divisor, integer grids panic.
    pub fn divide<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> Result<Grid<T>, GridError>
    where
        T: Div<Output = T> + 'a,
    {
        self.zip_with(rhs.into(), |a, b| a / b)
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(self.width.max(1)).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, value) in chunk.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", value)?;
            }
        }
        Ok(())
    }
}

fn index_to_vector(width: usize, index: usize) -> Vector {
    let y = index / width;
    let x = index - y * width;
    Vector::new(x as i32, y as i32)
}
