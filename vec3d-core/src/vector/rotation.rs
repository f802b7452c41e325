//! Rotations of a [`Vector3`] about the coordinate axes.
//!
//! Each rotation builds the standard 3x3 matrix for its axis from `cos`/`sin` of the
//! angle (radians) and multiplies the vector **as a row** on the left:
//!
//! ```text
//!                 | m00 m01 m02 |
//! [x  y  z]   *   | m10 m11 m12 |  =  [x*m00 + y*m10 + z*m20,
//!                 | m20 m21 m22 |      x*m01 + y*m11 + z*m21,
//!                                      x*m02 + y*m12 + z*m22]
//! ```
//!
//! With the matrices
//!
//! ```text
//! Rx(a) = | 1    0       0    |   Ry(a) = |  cos a  0  sin a |   Rz(a) = | cos a  -sin a  0 |
//!         | 0  cos a  -sin a  |           |    0    1    0   |           | sin a   cos a  0 |
//!         | 0  sin a   cos a  |           | -sin a  0  cos a |           |   0       0    1 |
//! ```
//!
//! the row-vector product turns a positive angle clockwise when looking from the
//! positive axis toward the origin. A quarter turn about Z takes `[1, 0, 0]` to
//! `[0, -1, 0]`:
//!
//! ```
//! use vec3d_core::Vector3;
//! use std::f64::consts::FRAC_PI_2;
//!
//! let v = Vector3::<f64>::new(1.0, 0.0, 0.0).rotate_z(FRAC_PI_2);
//! assert!(v.x.abs() < 1e-15);
//! assert!((v.y + 1.0).abs() < 1e-15);
//! assert!(v.z.abs() < 1e-15);
//! ```
//!
//! The products are evaluated in `f64` and narrowed back to `T`, so integer vectors
//! truncate toward zero. Angles are not range-checked.

use super::Vector3;
use crate::math;
use crate::scalar::Scalar;

/// Row-major 3x3 matrix, `m[row][col]`.
type Matrix3 = [[f64; 3]; 3];

impl<T: Scalar> Vector3<T> {
    /// Returns the vector rotated by `angle` radians about the X axis.
    ///
    /// ```
    /// use vec3d_core::Vector3;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// // [0, 1, 0] rotates to [0, 0, -1]
    /// let v = Vector3::<f64>::new(0.0, 1.0, 0.0).rotate_x(FRAC_PI_2);
    /// assert!(v.x.abs() < 1e-15);
    /// assert!(v.y.abs() < 1e-15);
    /// assert!((v.z + 1.0).abs() < 1e-15);
    /// ```
    pub fn rotate_x(&self, angle: f64) -> Self {
        let (s, c) = math::sincos(angle);
        self.row_times(&[[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]])
    }

    /// Returns the vector rotated by `angle` radians about the Y axis.
    ///
    /// ```
    /// use vec3d_core::Vector3;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// // [0, 0, 1] rotates to [-1, 0, 0]
    /// let v = Vector3::<f64>::new(0.0, 0.0, 1.0).rotate_y(FRAC_PI_2);
    /// assert!((v.x + 1.0).abs() < 1e-15);
    /// assert!(v.y.abs() < 1e-15);
    /// assert!(v.z.abs() < 1e-15);
    /// ```
    pub fn rotate_y(&self, angle: f64) -> Self {
        let (s, c) = math::sincos(angle);
        self.row_times(&[[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]])
    }

    /// Returns the vector rotated by `angle` radians about the Z axis.
    ///
    /// ```
    /// use vec3d_core::Vector3;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// // [0, 1, 0] rotates to [1, 0, 0]
    /// let v = Vector3::<f64>::new(0.0, 1.0, 0.0).rotate_z(FRAC_PI_2);
    /// assert!((v.x - 1.0).abs() < 1e-15);
    /// assert!(v.y.abs() < 1e-15);
    /// assert!(v.z.abs() < 1e-15);
    /// ```
    pub fn rotate_z(&self, angle: f64) -> Self {
        let (s, c) = math::sincos(angle);
        self.row_times(&[[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    fn row_times(&self, m: &Matrix3) -> Self {
        let (x, y, z) = (self.x.to_f64(), self.y.to_f64(), self.z.to_f64());
        Self::new(
            T::from_f64(x * m[0][0] + y * m[1][0] + z * m[2][0]),
            T::from_f64(x * m[0][1] + y * m[1][1] + z * m[2][1]),
            T::from_f64(x * m[0][2] + y * m[1][2] + z * m[2][2]),
        )
    }
}
