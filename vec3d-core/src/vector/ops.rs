//! Arithmetic and indexing operators for [`Vector3`].
//!
//! Implements `+`, `-`, `*`, `/` (scalar), unary `-`, the compound assignments,
//! and read-only `v[i]`.

use super::Vector3;
use crate::scalar::Scalar;
use core::ops::*;

/// Vector + Vector
impl<T: Scalar> Add for Vector3<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Vector - Vector
impl<T: Scalar> Sub for Vector3<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Vector * scalar
impl<T: Scalar> Mul<T> for Vector3<T> {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

/// Vector / scalar
impl<T: Scalar> Div<T> for Vector3<T> {
    type Output = Self;
    #[inline]
    fn div(self, scalar: T) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

/// -Vector
impl<T: Scalar> Neg for Vector3<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Scalar> AddAssign for Vector3<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.add_mut(&rhs);
    }
}

impl<T: Scalar> SubAssign for Vector3<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.sub_mut(&rhs);
    }
}

impl<T: Scalar> MulAssign<T> for Vector3<T> {
    #[inline]
    fn mul_assign(&mut self, scalar: T) {
        self.scale_mut(scalar);
    }
}

impl<T: Scalar> DivAssign<T> for Vector3<T> {
    #[inline]
    fn div_assign(&mut self, scalar: T) {
        self.div_mut(scalar);
    }
}

/// v[i] read-only indexing; any index past 2 reads as zero.
impl<T: Scalar> Index<usize> for Vector3<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => T::zero_ref(),
        }
    }
}

// scalar * Vector, one impl per concrete scalar (coherence rules out a blanket impl).
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Vector3<$t>> for $t {
                type Output = Vector3<$t>;
                #[inline]
                fn mul(self, vec: Vector3<$t>) -> Vector3<$t> {
                    vec * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(i8, i16, i32, i64, i128, isize, f32, f64);
