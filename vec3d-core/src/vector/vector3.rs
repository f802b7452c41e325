//! Generic 3D Cartesian vectors.
//!
//! [`Vector3<T>`] is a plain value: three public components and no invariants.
//! Every operation either returns a new vector or, for the explicitly in-place
//! methods, overwrites the receiver.
//!
//! # Coordinate Conventions
//!
//! Angles are documented for a left-handed coordinate system:
//!
//! - **+x** points right
//! - **+y** points up
//! - **+z** points forward
//!
//! [`elevation`](Vector3::elevation) is the vertical angle read from `y`, and
//! [`azimuth`](Vector3::azimuth) is the horizontal angle in the x-z plane measured
//! from +z toward +x. [`cross`](Vector3::cross) uses the conventional component
//! formula, so `x_axis × y_axis = z_axis` regardless of handedness.
//!
//! ```
//! use vec3d_core::Vector3;
//!
//! let a = Vector3::new(1.0, 2.0, 3.0);
//! let b = Vector3::new(4.0, 5.0, 6.0);
//!
//! assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
//! assert_eq!(a.dot(&b), 32.0);
//! assert_eq!(Vector3::<f64>::x_axis().cross(&Vector3::y_axis()), Vector3::z_axis());
//! ```
//!
//! # Component Types
//!
//! Any [`Scalar`] works: `f32`, `f64` and the signed integers. Operations that need a
//! square root or trigonometry widen to `f64` and narrow the result back with `as`
//! semantics, so integer vectors get truncated magnitudes and rotations:
//!
//! ```
//! use vec3d_core::Vector3;
//!
//! let v = Vector3::new(1, 1, 0);
//! assert_eq!(v.magnitude(), 1); // sqrt(2) truncated
//! ```
//!
//! # Degenerate Input
//!
//! Nothing here validates its input. Dividing by a zero scalar, normalising the zero
//! vector, or asking for the elevation of a non-unit vector all produce whatever the
//! component type produces natively: NaN or infinity for floats, a panic for integer
//! division by zero. The checked variants [`get`](Vector3::get),
//! [`set`](Vector3::set) and [`try_normalised`](Vector3::try_normalised) report
//! failures through [`VectorResult`] instead.

use crate::constants::PI;
use crate::errors::{VectorError, VectorErrorKind, VectorResult};
use crate::math;
use crate::scalar::Scalar;
use std::fmt;
use tracing::trace;

/// A 3D Cartesian vector with components of type `T`.
///
/// Components are public; there are no getters or setters for the common case.
///
/// ```
/// use vec3d_core::Vector3;
///
/// let v = Vector3::new(1.0, 2.0, 3.0);
/// let zero: Vector3<f32> = Vector3::default();
/// let from_array = Vector3::from([4, 5, 6]);
///
/// assert_eq!(v.y, 2.0);
/// assert_eq!(zero, Vector3::zeros());
/// assert_eq!(from_array.z, 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Vector3<T> {
    /// Creates a new vector from x, y, z components.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Scalar> Vector3<T> {
    /// Returns the zero vector `[0, 0, 0]`.
    #[inline]
    pub fn zeros() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ZERO)
    }

    /// Returns the unit vector along the X axis `[1, 0, 0]` (right).
    #[inline]
    pub fn x_axis() -> Self {
        Self::new(T::ONE, T::ZERO, T::ZERO)
    }

    /// Returns the unit vector along the Y axis `[0, 1, 0]` (up).
    #[inline]
    pub fn y_axis() -> Self {
        Self::new(T::ZERO, T::ONE, T::ZERO)
    }

    /// Returns the unit vector along the Z axis `[0, 0, 1]` (forward).
    #[inline]
    pub fn z_axis() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ONE)
    }

    /// Creates a vector from a `[T; 3]` array.
    #[inline]
    pub fn from_array(arr: [T; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Returns the components as a `[T; 3]` array.
    #[inline]
    pub fn to_array(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns the component at the given index (0=x, 1=y, 2=z).
    ///
    /// Unlike `v[i]`, which yields zero for any other index, this returns an error.
    pub fn get(&self, index: usize) -> VectorResult<T> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(VectorError::index_out_of_bounds("Vector3::get", index)),
        }
    }

    /// Sets the component at the given index (0=x, 1=y, 2=z).
    ///
    /// Returns an error for indices outside 0-2. Vectors have no mutable indexing;
    /// assign the public fields directly for unchecked writes.
    pub fn set(&mut self, index: usize, value: T) -> VectorResult<()> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            _ => return Err(VectorError::index_out_of_bounds("Vector3::set", index)),
        }
        Ok(())
    }

    /// Returns the vector unchanged (unary plus).
    #[inline]
    pub fn pos(self) -> Self {
        self
    }

    /// Returns `(-x, -y, -z)`. Same as `-v`.
    #[inline]
    pub fn negate(self) -> Self {
        -self
    }

    /// Returns every component multiplied by `s`. Same as `v * s`.
    #[inline]
    pub fn scale(self, s: T) -> Self {
        self * s
    }

    /// Returns every component divided by `s`. Same as `v / s`.
    ///
    /// A zero divisor is not special-cased.
    #[inline]
    pub fn divide(self, s: T) -> Self {
        self / s
    }

    /// Adds `other` in place and returns `self` for chaining.
    ///
    /// ```
    /// use vec3d_core::Vector3;
    ///
    /// let mut v = Vector3::new(1, 2, 3);
    /// v.add_mut(&Vector3::new(1, 1, 1)).scale_mut(2);
    /// assert_eq!(v, Vector3::new(4, 6, 8));
    /// ```
    #[inline]
    pub fn add_mut(&mut self, other: &Self) -> &mut Self {
        *self = *self + *other;
        self
    }

    /// Subtracts `other` in place and returns `self` for chaining.
    #[inline]
    pub fn sub_mut(&mut self, other: &Self) -> &mut Self {
        *self = *self - *other;
        self
    }

    /// Multiplies every component by `s` in place and returns `self` for chaining.
    #[inline]
    pub fn scale_mut(&mut self, s: T) -> &mut Self {
        *self = *self * s;
        self
    }

    /// Divides every component by `s` in place and returns `self` for chaining.
    #[inline]
    pub fn div_mut(&mut self, s: T) -> &mut Self {
        *self = *self / s;
        self
    }

    /// Computes the dot product `x*ox + y*oy + z*oz`.
    ///
    /// ```
    /// use vec3d_core::Vector3;
    ///
    /// let a = Vector3::new(1, 2, 3);
    /// let b = Vector3::new(4, 5, 6);
    /// assert_eq!(a.dot(&b), 32);
    /// ```
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the squared magnitude, the dot product of the vector with itself.
    #[inline]
    pub fn square(&self) -> T {
        self.dot(self)
    }

    /// Computes the cross product with another vector.
    ///
    /// Uses the conventional formula `(y*oz - z*oy, z*ox - x*oz, x*oy - y*ox)`.
    ///
    /// ```
    /// use vec3d_core::Vector3;
    ///
    /// let x = Vector3::<f64>::x_axis();
    /// let y = Vector3::<f64>::y_axis();
    /// assert_eq!(x.cross(&y), Vector3::z_axis());
    /// assert_eq!(y.cross(&x), -Vector3::z_axis());
    /// ```
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Returns the Euclidean length of the vector.
    ///
    /// The square root is taken in `f64` and narrowed back to `T`, so integer
    /// vectors report a truncated length.
    ///
    /// ```
    /// use vec3d_core::Vector3;
    ///
    /// assert_eq!(Vector3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
    /// assert_eq!(Vector3::new(3, 4, 0).magnitude(), 5);
    /// ```
    #[inline]
    pub fn magnitude(&self) -> T {
        T::from_f64(math::sqrt(self.square().to_f64()))
    }

    /// Scales the vector to unit length in place.
    ///
    /// There is no guard against the zero vector: float vectors become NaN and
    /// integer vectors panic on the division. Use
    /// [`try_normalised`](Self::try_normalised) when the input may be degenerate.
    ///
    /// ```
    /// use vec3d_core::Vector3;
    ///
    /// let mut v = Vector3::new(3.0, 4.0, 0.0);
    /// v.normalise();
    /// assert_eq!(v, Vector3::new(0.6, 0.8, 0.0));
    /// ```
    pub fn normalise(&mut self) {
        let magnitude = self.magnitude();
        if magnitude == T::ZERO {
            trace!("normalising zero-magnitude vector {}", self);
        }
        self.div_mut(magnitude);
    }

    /// Returns a normalised copy. Same edge-case behaviour as [`normalise`](Self::normalise).
    pub fn normalised(&self) -> Self {
        let mut v = *self;
        v.normalise();
        v
    }

    /// Returns a copy divided by its magnitude, or an error when the magnitude is zero
    /// or not finite.
    ///
    /// The result is unit length only for float components. For integer vectors the
    /// magnitude truncates before the division, so `(1, 1, 0)` comes back unchanged.
    ///
    /// ```
    /// use vec3d_core::{Vector3, VectorErrorKind};
    ///
    /// let unit = Vector3::new(0.0, 2.0, 0.0).try_normalised().unwrap();
    /// assert_eq!(unit, Vector3::y_axis());
    ///
    /// let err = Vector3::<f64>::zeros().try_normalised().unwrap_err();
    /// assert_eq!(err.kind(), Some(VectorErrorKind::ZeroMagnitude));
    /// ```
    pub fn try_normalised(&self) -> VectorResult<Self> {
        let magnitude = self.magnitude();
        if magnitude == T::ZERO {
            return Err(VectorError::math_error(
                "Vector3::try_normalised",
                VectorErrorKind::ZeroMagnitude,
                "cannot normalise a zero-length vector",
            ));
        }
        if !magnitude.to_f64().is_finite() {
            return Err(VectorError::math_error(
                "Vector3::try_normalised",
                VectorErrorKind::NotFinite,
                &format!("magnitude of {} is {}", self, magnitude),
            ));
        }
        Ok(*self / magnitude)
    }

    /// Returns the distance to `other`, the magnitude of `self - other`.
    #[inline]
    pub fn distance(&self, other: &Self) -> T {
        (*self - *other).magnitude()
    }

    /// Returns the elevation angle `asin(y)` in radians.
    ///
    /// The vector is expected to be unit length. `y` is not clamped, so components
    /// outside `[-1, 1]` give NaN.
    ///
    /// ```
    /// use vec3d_core::Vector3;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// assert_eq!(Vector3::new(0.0, 1.0, 0.0).elevation(), FRAC_PI_2);
    /// assert!(Vector3::new(0.0, 2.0, 0.0).elevation().is_nan());
    /// ```
    pub fn elevation(&self) -> f64 {
        let y = self.y.to_f64();
        if !(-1.0..=1.0).contains(&y) {
            trace!("elevation of a vector with y outside [-1, 1] (y = {})", y);
        }
        math::asin(y)
    }

    /// Returns the azimuth angle in the x-z plane, in radians.
    ///
    /// Computed as `atan(x / z)`, with the quotient taken in `T`. When `z < 0` the
    /// result is always shifted by `-π`, which places every vector with negative `z`
    /// in `(-3π/2, -π/2)` rather than the `(-π, π]` range `atan2` would give. The
    /// vector with `x == 0` and `z == 0` has azimuth `0`.
    ///
    /// For float components, `z == 0` with `x != 0` yields `±π/2` through the
    /// infinite quotient. Integer components panic on any `z == 0`.
    ///
    /// ```
    /// use vec3d_core::Vector3;
    /// use std::f64::consts::{FRAC_PI_4, PI};
    ///
    /// assert!((Vector3::new(1.0, 0.0, 1.0).azimuth() - FRAC_PI_4).abs() < 1e-15);
    /// assert!((Vector3::new(1.0, 0.0, -1.0).azimuth() - (-FRAC_PI_4 - PI)).abs() < 1e-15);
    /// assert_eq!(Vector3::new(0.0, 5.0, 0.0).azimuth(), 0.0);
    /// ```
    pub fn azimuth(&self) -> f64 {
        let mut az = math::atan((self.x / self.z).to_f64());
        if self.z < T::ZERO {
            az -= PI;
        }
        if self.x == T::ZERO && self.z == T::ZERO {
            trace!("azimuth of a vector with no horizontal component");
            az = 0.0;
        }
        az
    }
}

impl<T> From<[T; 3]> for Vector3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<T> From<(T, T, T)> for Vector3<T> {
    fn from((x, y, z): (T, T, T)) -> Self {
        Self::new(x, y, z)
    }
}

impl<T> From<Vector3<T>> for [T; 3] {
    fn from(v: Vector3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

impl<T: fmt::Display> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(
                f,
                "Vector3({:.*}, {:.*}, {:.*})",
                p, self.x, p, self.y, p, self.z
            ),
            None => write!(f, "Vector3({}, {}, {})", self.x, self.y, self.z),
        }
    }
}
