//! Square matrices generic over element type and size.
//!
//! [`Matrix<T, N>`] is stored row-major. Vectors multiply from the left as row
//! vectors (`v * M`), so a rotation matrix built here maps `v` to `v · M` and
//! composing "first A, then B" is `A * B`.
//!
//! ```
//! use orient_core::{Matrix3, Vector3};
//!
//! let m = Matrix3::from_rows([
//!     [2.0, 0.0, 0.0],
//!     [0.0, 3.0, 0.0],
//!     [0.0, 0.0, 4.0],
//! ]);
//! assert_eq!(m.determinant(), 24.0);
//!
//! let v = Vector3::new([1.0, 1.0, 1.0]) * m;
//! assert_eq!(v, Vector3::new([2.0, 3.0, 4.0]));
//! ```
//!
//! # Determinant and inverse
//!
//! The determinant is a Laplace (cofactor) expansion along the first row, which
//! is exact for integer elements. The inverse is the adjoint (transposed cofactor
//! matrix) divided by the determinant and fails for a singular matrix:
//!
//! ```
//! use orient_core::Matrix2;
//!
//! let singular = Matrix2::from_rows([[1.0, 2.0], [2.0, 4.0]]);
//! assert!(singular.inverse().is_err());
//! ```

use super::vector::Vector;
use crate::math::Scalar;
use crate::{OrientError, OrientResult};
use std::fmt;

/// An `N`×`N` matrix of `T`, row-major.
#[derive(Debug, Clone, Copy)]
pub struct Matrix<T: Scalar, const N: usize> {
    rows: [[T; N]; N],
}

pub type Matrix2<T = f64> = Matrix<T, 2>;
pub type Matrix3<T = f64> = Matrix<T, 3>;
pub type Matrix4<T = f64> = Matrix<T, 4>;

impl<T: Scalar, const N: usize> Matrix<T, N> {
    #[inline]
    pub const fn from_rows(rows: [[T; N]; N]) -> Self {
        Self { rows }
    }

    pub fn zero() -> Self {
        Self {
            rows: [[T::ZERO; N]; N],
        }
    }

    pub fn identity() -> Self {
        let mut m = Self::zero();
        for i in 0..N {
            m.rows[i][i] = T::ONE;
        }
        m
    }

    #[inline]
    pub fn rows(&self) -> &[[T; N]; N] {
        &self.rows
    }

    pub fn row(&self, r: usize) -> Vector<T, N> {
        Vector::new(self.rows[r])
    }

    pub fn column(&self, c: usize) -> Vector<T, N> {
        Vector::new(std::array::from_fn(|r| self.rows[r][c]))
    }

    fn check_bounds(operation: &str, row: usize, col: usize) -> OrientResult<()> {
        if row >= N || col >= N {
            return Err(OrientError::math_error(
                operation,
                crate::MathErrorKind::OutOfRange,
                &format!("({}, {}) out of bounds for a {}x{} matrix", row, col, N, N),
            ));
        }
        Ok(())
    }

    /// Returns the element at (`row`, `col`), or an error when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> OrientResult<T> {
        Self::check_bounds("Matrix::get", row, col)?;
        Ok(self.rows[row][col])
    }

    /// Sets the element at (`row`, `col`), or returns an error when out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> OrientResult<()> {
        Self::check_bounds("Matrix::set", row, col)?;
        self.rows[row][col] = value;
        Ok(())
    }

    pub fn transpose(&self) -> Self {
        Self::from_rows(std::array::from_fn(|r| std::array::from_fn(|c| self.rows[c][r])))
    }

    pub fn multiply(&self, other: &Self) -> Self {
        let mut out = Self::zero();
        for r in 0..N {
            for c in 0..N {
                let mut sum = T::ZERO;
                for k in 0..N {
                    sum += self.rows[r][k] * other.rows[k][c];
                }
                out.rows[r][c] = sum;
            }
        }
        out
    }

    /// Row vector times matrix: `out[c] = Σ v[r] · m[r][c]`.
    pub fn premultiply(&self, v: &Vector<T, N>) -> Vector<T, N> {
        let mut out = Vector::zero();
        for c in 0..N {
            let mut sum = T::ZERO;
            for r in 0..N {
                sum += v[r] * self.rows[r][c];
            }
            out[c] = sum;
        }
        out
    }

    /// Laplace expansion over the sub-matrix picked out by `rows` × `cols`.
    fn expand(&self, rows: &[usize], cols: &[usize]) -> T {
        match rows.len() {
            0 => T::ONE,
            1 => self.rows[rows[0]][cols[0]],
            2 => {
                let (r0, r1) = (rows[0], rows[1]);
                let (c0, c1) = (cols[0], cols[1]);
                self.rows[r0][c0] * self.rows[r1][c1] - self.rows[r0][c1] * self.rows[r1][c0]
            }
            _ => {
                let mut det = T::ZERO;
                let mut rest = Vec::with_capacity(cols.len() - 1);
                for (j, &c) in cols.iter().enumerate() {
                    rest.clear();
                    rest.extend(cols.iter().enumerate().filter(|(k, _)| *k != j).map(|(_, c)| *c));
                    let term = self.rows[rows[0]][c] * self.expand(&rows[1..], &rest);
                    if j % 2 == 0 {
                        det += term;
                    } else {
                        det -= term;
                    }
                }
                det
            }
        }
    }

    pub fn determinant(&self) -> T {
        let all: Vec<usize> = (0..N).collect();
        self.expand(&all, &all)
    }

    /// Determinant of the matrix with `row` and `col` removed.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    pub fn minor(&self, row: usize, col: usize) -> T {
        assert!(row < N && col < N, "minor ({}, {}) out of bounds", row, col);
        let rows: Vec<usize> = (0..N).filter(|&r| r != row).collect();
        let cols: Vec<usize> = (0..N).filter(|&c| c != col).collect();
        self.expand(&rows, &cols)
    }

    /// Signed minor: `(-1)^(row + col) · minor(row, col)`.
    pub fn cofactor(&self, row: usize, col: usize) -> T {
        let m = self.minor(row, col);
        if (row + col) % 2 == 0 {
            m
        } else {
            -m
        }
    }

    /// Transposed cofactor matrix.
    pub fn adjoint(&self) -> Self {
        Self::from_rows(std::array::from_fn(|r| {
            std::array::from_fn(|c| self.cofactor(c, r))
        }))
    }

    /// `adjoint / determinant`.
    ///
    /// Fails with [`InvalidArgument`](OrientError::InvalidArgument) when the
    /// determinant is zero within the element epsilon. Integer matrices divide
    /// with truncation.
    pub fn inverse(&self) -> OrientResult<Self> {
        let det = self.determinant();
        if det.approx_eq(T::ZERO) {
            log::debug!("Matrix::inverse: determinant {} is zero", det);
            return Err(OrientError::invalid_argument(
                "Matrix::inverse",
                "matrix is singular (determinant is zero)",
            ));
        }
        Ok(self.adjoint() / det)
    }

    /// `M · Mᵀ` equals the identity within `tolerance`.
    pub fn is_orthogonal(&self, tolerance: f64) -> bool {
        self.multiply(&self.transpose())
            .approx_eq_within(&Self::identity(), tolerance)
    }

    /// Largest absolute element-wise difference, in `f64`.
    pub fn max_difference(&self, other: &Self) -> f64 {
        let mut max_diff: f64 = 0.0;
        for r in 0..N {
            for c in 0..N {
                let diff = (self.rows[r][c].to_f64() - other.rows[r][c].to_f64()).abs();
                max_diff = max_diff.max(diff);
            }
        }
        max_diff
    }

    pub fn approx_eq_within(&self, other: &Self, tolerance: f64) -> bool {
        self.max_difference(other) <= tolerance
    }

    /// Applies `f` to every element.
    pub fn map<U: Scalar, F: Fn(T) -> U>(&self, f: F) -> Matrix<U, N> {
        Matrix::from_rows(std::array::from_fn(|r| {
            std::array::from_fn(|c| f(self.rows[r][c]))
        }))
    }

    /// Converts every element to `f64`.
    #[inline]
    pub fn to_f64(&self) -> Matrix<f64, N> {
        self.map(T::to_f64)
    }
}

impl<T: Scalar, const N: usize> Default for Matrix<T, N> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar, const N: usize> PartialEq for Matrix<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.rows
            .iter()
            .flatten()
            .zip(other.rows.iter().flatten())
            .all(|(a, b)| a.approx_eq(*b))
    }
}

impl<T: Scalar, const N: usize> std::ops::Mul for Matrix<T, N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<T: Scalar, const N: usize> std::ops::Mul<&Matrix<T, N>> for &Matrix<T, N> {
    type Output = Matrix<T, N>;

    fn mul(self, rhs: &Matrix<T, N>) -> Matrix<T, N> {
        self.multiply(rhs)
    }
}

/// Row vector * Matrix
impl<T: Scalar, const N: usize> std::ops::Mul<Matrix<T, N>> for Vector<T, N> {
    type Output = Vector<T, N>;

    fn mul(self, m: Matrix<T, N>) -> Vector<T, N> {
        m.premultiply(&self)
    }
}

impl<T: Scalar, const N: usize> std::ops::Mul<&Matrix<T, N>> for Vector<T, N> {
    type Output = Vector<T, N>;

    fn mul(self, m: &Matrix<T, N>) -> Vector<T, N> {
        m.premultiply(&self)
    }
}

/// Matrix * scalar
impl<T: Scalar, const N: usize> std::ops::Mul<T> for Matrix<T, N> {
    type Output = Self;

    fn mul(self, k: T) -> Self {
        self.map(|v| v * k)
    }
}

/// Matrix / scalar
impl<T: Scalar, const N: usize> std::ops::Div<T> for Matrix<T, N> {
    type Output = Self;

    fn div(self, k: T) -> Self {
        self.map(|v| v / k)
    }
}

impl<T: Scalar, const N: usize> std::ops::Add for Matrix<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_rows(std::array::from_fn(|r| {
            std::array::from_fn(|c| self.rows[r][c] + rhs.rows[r][c])
        }))
    }
}

impl<T: Scalar, const N: usize> std::ops::Sub for Matrix<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_rows(std::array::from_fn(|r| {
            std::array::from_fn(|c| self.rows[r][c] - rhs.rows[r][c])
        }))
    }
}

impl<T: Scalar, const N: usize> std::ops::Neg for Matrix<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|v| -v)
    }
}

impl<T: Scalar, const N: usize> std::ops::Index<(usize, usize)> for Matrix<T, N> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.rows[row][col]
    }
}

impl<T: Scalar, const N: usize> std::ops::IndexMut<(usize, usize)> for Matrix<T, N> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.rows[row][col]
    }
}

/// One row per line, two decimals, each value followed by three spaces (two
/// when the value is negative).
impl<T: Scalar, const N: usize> fmt::Display for Matrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for v in row {
                let space = if *v < T::ZERO { "  " } else { "   " };
                write!(f, "{:.2}{}", v, space)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
