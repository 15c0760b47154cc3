//! Fixed-size vectors generic over element type and dimension.
//!
//! [`Vector<T, N>`] backs every Cartesian quantity in the workspace: rotation
//! axes, the vector part of a quaternion, and the Cartesian side of the polar
//! conversions. `T` is any [`Scalar`] (`f32`, `f64`, `i32`, `i64`).
//!
//! ```
//! use orient_core::Vector3;
//!
//! let x = Vector3::new([1.0, 0.0, 0.0]);
//! let y = Vector3::new([0.0, 1.0, 0.0]);
//!
//! assert_eq!(x.dot(&y), 0.0);
//! assert_eq!(x.cross(&y), Vector3::new([0.0, 0.0, 1.0]));
//! ```
//!
//! # Equality
//!
//! `==` compares element-wise with [`Scalar::approx_eq`]: exact for integer
//! elements, within the element type's machine epsilon for floats. Use
//! [`approx_eq_within`](Vector::approx_eq_within) for a looser tolerance.
//!
//! # Length and normalization
//!
//! Lengths are always computed in `f64`, whatever the element type. Normalizing
//! a zero vector fails instead of producing NaN:
//!
//! ```
//! use orient_core::Vector3;
//!
//! let v = Vector3::new([3.0, 4.0, 0.0]);
//! assert_eq!(v.length(), 5.0);
//! assert_eq!(v.normalized().unwrap(), Vector3::new([0.6, 0.8, 0.0]));
//!
//! assert!(Vector3::<f64>::zero().normalized().is_err());
//! ```

use crate::math::Scalar;
use crate::{MathErrorKind, OrientError, OrientResult};
use std::fmt;

/// An `N`-component vector of `T`.
#[derive(Debug, Clone, Copy)]
pub struct Vector<T: Scalar, const N: usize> {
    data: [T; N],
}

/// Two-component vector.
pub type Vector2<T = f64> = Vector<T, 2>;

/// Three-component vector.
pub type Vector3<T = f64> = Vector<T, 3>;

impl<T: Scalar, const N: usize> Vector<T, N> {
    #[inline]
    pub const fn new(data: [T; N]) -> Self {
        Self { data }
    }

    /// Returns the zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self { data: [T::ZERO; N] }
    }

    #[inline]
    pub fn to_array(&self) -> [T; N] {
        self.data
    }

    #[inline]
    pub fn as_array(&self) -> &[T; N] {
        &self.data
    }

    /// Returns the component at `index`, or an error past the last component.
    ///
    /// For unchecked access use `v[i]`, which panics instead.
    pub fn get(&self, index: usize) -> OrientResult<T> {
        self.data.get(index).copied().ok_or_else(|| {
            OrientError::math_error(
                "Vector::get",
                MathErrorKind::OutOfRange,
                &format!("index {} out of bounds (dimension {})", index, N),
            )
        })
    }

    /// Sets the component at `index`, or returns an error past the last component.
    pub fn set(&mut self, index: usize, value: T) -> OrientResult<()> {
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(OrientError::math_error(
                "Vector::set",
                MathErrorKind::OutOfRange,
                &format!("index {} out of bounds (dimension {})", index, N),
            )),
        }
    }

    /// Applies `f` to every component.
    pub fn map<U: Scalar, F: Fn(T) -> U>(&self, f: F) -> Vector<U, N> {
        Vector::new(std::array::from_fn(|i| f(self.data[i])))
    }

    /// Converts every component to `f64`.
    #[inline]
    pub fn to_f64(&self) -> Vector<f64, N> {
        self.map(T::to_f64)
    }

    /// Converts every component through `f64` into `U`.
    ///
    /// Integer targets truncate toward zero.
    #[inline]
    pub fn cast<U: Scalar>(&self) -> Vector<U, N> {
        self.map(|v| U::from_f64(v.to_f64()))
    }

    pub fn dot(&self, other: &Self) -> T {
        let mut sum = T::ZERO;
        for i in 0..N {
            sum += self.data[i] * other.data[i];
        }
        sum
    }

    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Euclidean length, computed in `f64`.
    pub fn length(&self) -> f64 {
        let sum: f64 = self.data.iter().map(|v| v.to_f64() * v.to_f64()).sum();
        libm::sqrt(sum)
    }

    /// Returns a unit vector in the same direction.
    ///
    /// The division happens in `f64` and is converted back to `T`, so integer
    /// vectors truncate (only axis-aligned integer vectors survive intact).
    /// A zero-length vector is an [`InvalidArgument`](OrientError::InvalidArgument) error.
    pub fn normalized(&self) -> OrientResult<Self> {
        let len = self.length();
        if len == 0.0 || !len.is_finite() {
            log::debug!("Vector::normalized: length {} cannot be normalized", len);
            return Err(OrientError::invalid_argument(
                "Vector::normalized",
                "cannot normalize a zero-length vector",
            ));
        }
        Ok(self.map(|v| T::from_f64(v.to_f64() / len)))
    }

    /// Element-wise comparison with an absolute tolerance in `f64`.
    pub fn approx_eq_within(&self, other: &Self, tolerance: f64) -> bool {
        self.max_difference(other) <= tolerance
    }

    /// Largest absolute element-wise difference.
    pub fn max_difference(&self, other: &Self) -> f64 {
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| (a.to_f64() - b.to_f64()).abs())
            .fold(0.0, f64::max)
    }
}

impl<T: Scalar> Vector<T, 2> {
    #[inline]
    pub fn x(&self) -> T {
        self.data[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.data[1]
    }

    /// Appends a third component.
    #[inline]
    pub fn extend(&self, z: T) -> Vector<T, 3> {
        Vector::new([self.data[0], self.data[1], z])
    }
}

impl<T: Scalar> Vector<T, 3> {
    #[inline]
    pub fn x(&self) -> T {
        self.data[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.data[1]
    }

    #[inline]
    pub fn z(&self) -> T {
        self.data[2]
    }

    /// Drops the third component.
    #[inline]
    pub fn truncate(&self) -> Vector<T, 2> {
        Vector::new([self.data[0], self.data[1]])
    }

    /// Right-handed cross product.
    pub fn cross(&self, other: &Self) -> Self {
        let (a, b) = (&self.data, &other.data);
        Self::new([
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ])
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(data: [T; N]) -> Self {
        Self::new(data)
    }
}

impl<T: Scalar, const N: usize> PartialEq for Vector<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.approx_eq(*b))
    }
}

/// Vector + Vector
impl<T: Scalar, const N: usize> std::ops::Add for Vector<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(std::array::from_fn(|i| self.data[i] + rhs.data[i]))
    }
}

/// Vector - Vector
impl<T: Scalar, const N: usize> std::ops::Sub for Vector<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(std::array::from_fn(|i| self.data[i] - rhs.data[i]))
    }
}

/// Vector * scalar
impl<T: Scalar, const N: usize> std::ops::Mul<T> for Vector<T, N> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        self.map(|v| v * scalar)
    }
}

/// scalar * Vector
impl<const N: usize> std::ops::Mul<Vector<f64, N>> for f64 {
    type Output = Vector<f64, N>;

    fn mul(self, vec: Vector<f64, N>) -> Vector<f64, N> {
        vec * self
    }
}

/// Vector / scalar
impl<T: Scalar, const N: usize> std::ops::Div<T> for Vector<T, N> {
    type Output = Self;

    fn div(self, scalar: T) -> Self {
        self.map(|v| v / scalar)
    }
}

/// -Vector
impl<T: Scalar, const N: usize> std::ops::Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|v| -v)
    }
}

impl<T: Scalar, const N: usize> std::ops::AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        for i in 0..N {
            self.data[i] += rhs.data[i];
        }
    }
}

impl<T: Scalar, const N: usize> std::ops::SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        for i in 0..N {
            self.data[i] -= rhs.data[i];
        }
    }
}

impl<T: Scalar, const N: usize> std::ops::MulAssign<T> for Vector<T, N> {
    fn mul_assign(&mut self, scalar: T) {
        for v in self.data.iter_mut() {
            *v *= scalar;
        }
    }
}

/// v[i] indexing (panics past the last component)
impl<T: Scalar, const N: usize> std::ops::Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.data.get(index) {
            Some(v) => v,
            None => panic!("Vector index out of bounds: {}", index),
        }
    }
}

/// v[i] = value mutable indexing (panics past the last component)
impl<T: Scalar, const N: usize> std::ops::IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.data.get_mut(index) {
            Some(v) => v,
            None => panic!("Vector index out of bounds: {}", index),
        }
    }
}

/// `[1.00, 2.00, 3.00]`. Integer elements ignore the precision.
impl<T: Scalar, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.2}", v)?;
        }
        write!(f, "]")
    }
}
