#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::gg_float;
use crate::util::linalg::{Vector2d, VectorLike};
use num_traits::Zero;
use std::iter::Sum;
use std::{
    fmt,
    fmt::Formatter,
    ops::{AddAssign, DivAssign, Mul, MulAssign, Neg, SubAssign},
};

/// A mutable 3D vector using 64-bit floating point coordinates.
///
/// Supports everything [`Vector2d`] does, extended to the z axis, plus the cross product and
/// conversion between orthogonal and isometric tile coordinates. Rotations (`perp`, `rotate`)
/// act about the z axis and leave z untouched.
///
/// A [`Vector2d`] converts into a [`Vector3d`] with `z = 0`.
///
/// # Examples
///
/// ```
/// use gg_vector::core::prelude::*;
///
/// let mut a = Vector3d::new(2.0, 3.0, 4.0);
/// a.cross(Vector3d::new(5.0, 6.0, 7.0));
/// assert_eq!(a.to_string(), "x:-3,y:6,z:-3");
///
/// a.set_v(Vector2d::new(1.0, 2.0));
/// assert_eq!(a.to_string(), "x:1,y:2,z:0");
/// ```
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct Vector3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3d {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Vector3d {
        Vector3d { x, y, z }
    }
    #[must_use]
    pub const fn zero() -> Vector3d {
        Vector3d {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    pub fn set(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }
    pub fn set_zero(&mut self) -> &mut Self {
        self.set(0.0, 0.0, 0.0)
    }
    /// Sets this vector from a 2D or 3D vector. A 2D source sets z to 0.
    pub fn set_v(&mut self, other: impl VectorLike) -> &mut Self {
        self.set(other.x(), other.y(), other.z().unwrap_or(0.0))
    }
    /// Copies another vector into this one. A 2D source sets z to 0.
    pub fn copy(&mut self, other: impl VectorLike) -> &mut Self {
        self.set_v(other)
    }

    /// Checks for exact equality, component by component.
    ///
    /// If `other` has no z component (a [`Vector2d`] or a pair of scalars), z is not tested.
    ///
    /// # Examples
    ///
    /// ```
    /// use gg_vector::core::prelude::*;
    /// let v = Vector3d::new(1.0, 2.0, 3.0);
    /// assert!(v.equals(Vector3d::new(1.0, 2.0, 3.0)));
    /// assert!(v.equals((1.0, 2.0, 3.0)));
    /// assert!(v.equals((1.0, 2.0)));
    /// assert!(!v.equals((1.0, 2.0, 0.0)));
    /// ```
    #[must_use]
    pub fn equals(&self, other: impl VectorLike) -> bool {
        self.x == other.x() && self.y == other.y() && other.z().map_or(true, |z| self.z == z)
    }

    /// Checks whether the vectors differ by less than [`EPSILON`] in length.
    #[must_use]
    pub fn almost_eq(&self, other: Vector3d) -> bool {
        self.distance(other) < EPSILON
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero() && self.z.is_zero()
    }

    pub fn add(&mut self, other: Vector3d) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
        self
    }
    pub fn sub(&mut self, other: Vector3d) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
        self
    }
    pub fn scale(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.x *= x;
        self.y *= y;
        self.z *= z;
        self
    }
    pub fn scale_v(&mut self, other: Vector3d) -> &mut Self {
        self.scale(other.x, other.y, other.z)
    }
    pub fn div(&mut self, n: f64) -> &mut Self {
        self.x /= n;
        self.y /= n;
        self.z /= n;
        self
    }

    pub fn negate_self(&mut self) -> &mut Self {
        self.set(-self.x, -self.y, -self.z)
    }
    #[must_use]
    pub fn negate(&self) -> Vector3d {
        Vector3d::new(-self.x, -self.y, -self.z)
    }
    pub fn abs_self(&mut self) -> &mut Self {
        self.set(self.x.abs(), self.y.abs(), self.z.abs())
    }
    #[must_use]
    pub fn abs(&self) -> Vector3d {
        Vector3d::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    #[must_use]
    pub fn dot(&self, other: Vector3d) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Replaces this vector with the cross product `self × other`.
    ///
    /// The cross product is anti-commutative: `a × b = -(b × a)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gg_vector::core::prelude::*;
    /// let mut x = Vector3d::new(1.0, 0.0, 0.0);
    /// x.cross(Vector3d::new(0.0, 1.0, 0.0));
    /// assert!(x.equals((0.0, 0.0, 1.0)));
    /// ```
    pub fn cross(&mut self, other: Vector3d) -> &mut Self {
        let (x, y, z) = (self.x, self.y, self.z);
        self.set(
            y * other.z - z * other.y,
            z * other.x - x * other.z,
            x * other.y - y * other.x,
        )
    }

    #[must_use]
    pub fn length2(&self) -> f64 {
        self.dot(*self)
    }
    #[must_use]
    pub fn length(&self) -> f64 {
        gg_math::norm(&[self.x, self.y, self.z])
    }

    #[must_use]
    pub fn distance(&self, other: Vector3d) -> f64 {
        gg_math::norm(&[self.x - other.x, self.y - other.y, self.z - other.z])
    }

    /// Scales the vector to unit length. A zero-length vector is left unchanged.
    pub fn normalize(&mut self) -> &mut Self {
        if self.is_zero() {
            trace!("Vector3d: normalize() of zero-length vector");
            self
        } else {
            let len = self.length();
            self.div(len)
        }
    }

    #[must_use]
    pub fn direction(&self, to: Vector3d) -> Vector3d {
        let mut rv = to;
        rv.sub(*self).normalize();
        rv
    }

    /// Linearly interpolates towards `other` in place; exact at `t = 0.0` and `t = 1.0`.
    pub fn lerp(&mut self, other: Vector3d, t: f64) -> &mut Self {
        self.set(
            gg_math::lerp(self.x, other.x, t),
            gg_math::lerp(self.y, other.y, t),
            gg_math::lerp(self.z, other.z, t),
        )
    }

    pub fn min_v(&mut self, other: Vector3d) -> &mut Self {
        self.set(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }
    pub fn max_v(&mut self, other: Vector3d) -> &mut Self {
        self.set(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    pub fn clamp_self(&mut self, min: f64, max: f64) -> &mut Self {
        self.set(
            gg_math::clamp(self.x, min, max),
            gg_math::clamp(self.y, min, max),
            gg_math::clamp(self.z, min, max),
        )
    }
    #[must_use]
    pub fn clamp(&self, min: f64, max: f64) -> Vector3d {
        let mut rv = *self;
        rv.clamp_self(min, max);
        rv
    }

    pub fn floor_self(&mut self) -> &mut Self {
        self.set(self.x.floor(), self.y.floor(), self.z.floor())
    }
    #[must_use]
    pub fn floor(&self) -> Vector3d {
        Vector3d::new(self.x.floor(), self.y.floor(), self.z.floor())
    }
    pub fn ceil_self(&mut self) -> &mut Self {
        self.set(self.x.ceil(), self.y.ceil(), self.z.ceil())
    }
    #[must_use]
    pub fn ceil(&self) -> Vector3d {
        Vector3d::new(self.x.ceil(), self.y.ceil(), self.z.ceil())
    }

    /// Replaces this vector with its projection onto `other`, or zero if `other` has zero length.
    pub fn project(&mut self, other: Vector3d) -> &mut Self {
        let len2 = other.length2();
        if len2.is_zero() {
            crate::warn_every_seconds!(1, "Vector3d: project() onto zero-length vector: {}", self);
            return self.set_zero();
        }
        let ratio = self.dot(other) / len2;
        self.set(other.x * ratio, other.y * ratio, other.z * ratio)
    }
    pub fn project_n(&mut self, unit: Vector3d) -> &mut Self {
        let ratio = self.dot(unit);
        self.set(unit.x * ratio, unit.y * ratio, unit.z * ratio)
    }

    /// Returns the unsigned angle in radians between two vectors, in the range `[0, π]`.
    ///
    /// Computed as `atan2(|a × b|, a · b)`. Returns `0.0` if either vector has zero length.
    ///
    /// # Examples
    ///
    /// ```
    /// use gg_vector::core::prelude::*;
    /// let a = Vector3d::new(6.0, 3.0, 1.0);
    /// let b = Vector3d::new(5.0, 13.0, 1.0);
    /// assert_eq!(gg_math::rad_to_deg(a.angle(b)).round(), 42.0);
    /// ```
    #[must_use]
    pub fn angle(&self, other: Vector3d) -> f64 {
        if self.is_zero() || other.is_zero() {
            crate::warn_every_seconds!(
                1,
                "Vector3d: angle() with zero-length vector: {} vs. {}",
                self,
                other
            );
            return 0.0;
        }
        Self::angle_from_products(*self, other).unwrap_or_else(|| {
            // Rescale so the products can neither overflow nor underflow.
            let (a, b) = (self.scaled_to_unit_max(), other.scaled_to_unit_max());
            let mut cross = a;
            cross.cross(b);
            cross.length().atan2(a.dot(b))
        })
    }
    fn angle_from_products(a: Vector3d, b: Vector3d) -> Option<f64> {
        let mut cross = a;
        cross.cross(b);
        let (sin_part, cos_part) = (cross.length(), a.dot(b));
        (sin_part.is_finite() && cos_part.is_finite() && sin_part.max(cos_part.abs()).is_normal())
            .then(|| sin_part.atan2(cos_part))
    }
    fn scaled_to_unit_max(&self) -> Vector3d {
        let scale = gg_math::max_abs(&[self.x, self.y, self.z]);
        Vector3d::new(self.x / scale, self.y / scale, self.z / scale)
    }

    /// Rotates the vector 90 degrees about the z axis, exactly. Equivalent to
    /// [`rotate(π/2)`](Vector3d::rotate).
    pub fn perp(&mut self) -> &mut Self {
        self.set(-self.y, self.x, self.z)
    }

    /// Rotates the vector about the z axis by the given angle in radians.
    pub fn rotate(&mut self, radians: f64) -> &mut Self {
        let (sin, cos) = radians.sin_cos();
        let (x, y) = (self.x, self.y);
        self.set(x * cos - y * sin, x * sin + y * cos, self.z)
    }
    /// Rotates the vector by the given angle in radians about a z-parallel axis through `pivot`.
    pub fn rotate_around(&mut self, radians: f64, pivot: impl VectorLike) -> &mut Self {
        let pivot = Vector3d::new(pivot.x(), pivot.y(), 0.0);
        self.sub(pivot).rotate(radians).add(pivot)
    }

    /// Converts x and y from orthogonal to isometric coordinates using the engine's default
    /// tile projection. z is unaffected.
    ///
    /// # Examples
    ///
    /// ```
    /// use gg_vector::core::prelude::*;
    /// let mut v = Vector3d::new(32.0, 32.0, 1.0);
    /// assert_eq!(v.to_iso().to_string(), "x:0,y:32,z:1");
    /// assert_eq!(v.to_2d().to_string(), "x:32,y:32,z:1");
    /// ```
    pub fn to_iso(&mut self) -> &mut Self {
        self.to_iso_with(IsoProjection::DEFAULT)
    }
    /// The inverse of [`to_iso`](Vector3d::to_iso), up to rounding.
    ///
    /// The round trip is exact when every intermediate value is representable, e.g. integer or
    /// dyadic coordinates. Other inputs may come back off by an ulp: `(0.1, 0.2)` returns with
    /// `x = 0.10000000000000002`.
    pub fn to_2d(&mut self) -> &mut Self {
        self.to_2d_with(IsoProjection::DEFAULT)
    }
    pub fn to_iso_with(&mut self, iso: IsoProjection) -> &mut Self {
        let (x, y) = (self.x, self.y);
        self.set(x - y, (x + y) * iso.ratio(), self.z)
    }
    /// The inverse of [`to_iso_with`](Vector3d::to_iso_with) up to rounding, as for
    /// [`to_2d`](Vector3d::to_2d); `iso` must be the same projection.
    pub fn to_2d_with(&mut self, iso: IsoProjection) -> &mut Self {
        let (x, y) = (self.x, self.y);
        let half_sum = y / (2.0 * iso.ratio());
        let half_diff = x / 2.0;
        self.set(half_sum + half_diff, half_sum - half_diff, self.z)
    }

    #[must_use]
    pub fn to_vector2d(&self) -> Vector2d {
        Vector2d::from(*self)
    }
}

impl From<Vector2d> for Vector3d {
    fn from(value: Vector2d) -> Self {
        Vector3d {
            x: value.x,
            y: value.y,
            z: 0.0,
        }
    }
}

impl From<[f64; 3]> for Vector3d {
    fn from(value: [f64; 3]) -> Self {
        Vector3d {
            x: value[0],
            y: value[1],
            z: value[2],
        }
    }
}

impl From<Vector3d> for [f64; 3] {
    fn from(value: Vector3d) -> Self {
        [value.x, value.y, value.z]
    }
}

impl fmt::Display for Vector3d {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let x = gg_float::force_positive_zero(self.x);
        let y = gg_float::force_positive_zero(self.y);
        let z = gg_float::force_positive_zero(self.z);
        if let Some(p) = f.precision() {
            write!(f, "x:{0:.1$},y:{2:.1$},z:{3:.1$}", x, p, y, z)
        } else {
            write!(f, "x:{x},y:{y},z:{z}")
        }
    }
}

impl AddAssign<Vector3d> for Vector3d {
    fn add_assign(&mut self, rhs: Vector3d) {
        self.add(rhs);
    }
}

impl SubAssign<Vector3d> for Vector3d {
    fn sub_assign(&mut self, rhs: Vector3d) {
        self.sub(rhs);
    }
}

impl Sum<Vector3d> for Vector3d {
    fn sum<I: Iterator<Item = Vector3d>>(iter: I) -> Self {
        iter.fold(Vector3d::zero(), |mut acc, v| {
            acc += v;
            acc
        })
    }
}

impl Mul<f64> for Vector3d {
    type Output = Vector3d;

    fn mul(self, rhs: f64) -> Self::Output {
        Vector3d::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}
impl Mul<Vector3d> for f64 {
    type Output = Vector3d;

    fn mul(self, rhs: Vector3d) -> Self::Output {
        rhs * self
    }
}

impl MulAssign<f64> for Vector3d {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale(rhs, rhs, rhs);
    }
}

impl DivAssign<f64> for Vector3d {
    fn div_assign(&mut self, rhs: f64) {
        self.div(rhs);
    }
}

impl Neg for Vector3d {
    type Output = Vector3d;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}
