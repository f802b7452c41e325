//! Numeric capability required of a vector component type.
//!
//! [`Vector3`](crate::Vector3) is generic over its component type, but not every
//! numeric type can take part in every operation. Element-wise arithmetic only needs
//! `+ - * /` and negation; the magnitude, angle and rotation operations also need a
//! route through `f64` so they can use the `libm` square root and trigonometry.
//!
//! [`Scalar`] bundles both requirements:
//!
//! | Capability | Used by |
//! |------------|---------|
//! | `Add`, `Sub`, `Mul`, `Div`, `Neg` | operators, [`dot`](crate::Vector3::dot), [`cross`](crate::Vector3::cross) |
//! | `PartialOrd`, [`ZERO`](Scalar::ZERO) | sign test in [`azimuth`](crate::Vector3::azimuth) |
//! | [`to_f64`](Scalar::to_f64) / [`from_f64`](Scalar::from_f64) | magnitude, angles, rotations |
//! | [`zero_ref`](Scalar::zero_ref) | out-of-range fallback of `v[i]` |
//!
//! # Conversions
//!
//! `from_f64` has the semantics of an `as` cast. For integer types this truncates
//! toward zero and saturates at the type bounds, and NaN maps to `0`:
//!
//! ```
//! use vec3d_core::Scalar;
//!
//! assert_eq!(<i32 as Scalar>::from_f64(1.9), 1);
//! assert_eq!(<i32 as Scalar>::from_f64(-1.9), -1);
//! assert_eq!(<i8 as Scalar>::from_f64(1.0e6), i8::MAX);
//! assert_eq!(<f32 as Scalar>::from_f64(0.5), 0.5_f32);
//! ```
//!
//! Unsigned integers are not supported: negation is part of the vector contract.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A signed numeric type usable as a [`Vector3`](crate::Vector3) component.
pub trait Scalar:
    'static
    + Copy
    + PartialOrd
    + Default
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;

    /// Multiplicative identity.
    const ONE: Self;

    /// Widens the value to `f64`.
    fn to_f64(self) -> f64;

    /// Narrows an `f64` back to `Self` with `as` cast semantics.
    fn from_f64(value: f64) -> Self;

    /// A zero with `'static` lifetime, handed out by `Index` for out-of-range indices.
    fn zero_ref() -> &'static Self;
}

macro_rules! impl_scalar {
    ($($t:ty => $zero:expr, $one:expr);* $(;)?) => {
        $(
            impl Scalar for $t {
                const ZERO: Self = $zero;
                const ONE: Self = $one;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn zero_ref() -> &'static Self {
                    static ZERO: $t = $zero;
                    &ZERO
                }
            }
        )*
    };
}

impl_scalar! {
    i8 => 0, 1;
    i16 => 0, 1;
    i32 => 0, 1;
    i64 => 0, 1;
    i128 => 0, 1;
    isize => 0, 1;
    f32 => 0.0, 1.0;
    f64 => 0.0, 1.0;
}
