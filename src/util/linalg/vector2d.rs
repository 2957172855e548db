#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::gg_float;
use crate::util::linalg::{Vector3d, VectorLike};
use num_traits::Zero;
use std::iter::Sum;
use std::{
    fmt,
    fmt::Formatter,
    ops::{AddAssign, DivAssign, Mul, MulAssign, Neg, SubAssign},
};

/// A mutable 2D vector using 64-bit floating point coordinates.
///
/// Mutating operations work in place and return `&mut Self`, so they can be chained. Use a copy
/// (the type is [`Copy`]) when value semantics are wanted.
///
/// # Examples
///
/// ```
/// use gg_vector::core::prelude::*;
///
/// let mut v = Vector2d::new(3.0, 4.0);
/// v.add(Vector2d::new(1.0, 1.0)).scale(2.0, 0.5);
/// assert!(v.equals((8.0, 2.5)));
/// assert_eq!(v.to_string(), "x:8,y:2.5");
/// ```
///
/// # Equality
/// [`PartialEq`] and [`equals`](Vector2d::equals) compare exactly, with no tolerance. Use
/// [`almost_eq`](Vector2d::almost_eq) when floating point error is expected.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct Vector2d {
    pub x: f64,
    pub y: f64,
}

impl Vector2d {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Vector2d {
        Vector2d { x, y }
    }
    #[must_use]
    pub const fn zero() -> Vector2d {
        Vector2d { x: 0.0, y: 0.0 }
    }

    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }
    pub fn set_zero(&mut self) -> &mut Self {
        self.set(0.0, 0.0)
    }
    /// Sets both components from any vector-like value; a z component, if present, is ignored.
    pub fn set_v(&mut self, other: impl VectorLike) -> &mut Self {
        self.set(other.x(), other.y())
    }
    /// Copies the components of another 2D or 3D vector into this one, ignoring z.
    pub fn copy(&mut self, other: impl VectorLike) -> &mut Self {
        self.set_v(other)
    }

    /// Checks for exact equality of the x and y components.
    ///
    /// # Examples
    ///
    /// ```
    /// use gg_vector::core::prelude::*;
    /// let v = Vector2d::new(1.0, 2.0);
    /// assert!(v.equals(Vector2d::new(1.0, 2.0)));
    /// assert!(v.equals((1.0, 2.0)));
    /// assert!(v.equals(Vector3d::new(1.0, 2.0, 99.0)));
    /// assert!(!v.equals((1.0, 2.000001)));
    /// ```
    #[must_use]
    pub fn equals(&self, other: impl VectorLike) -> bool {
        self.x == other.x() && self.y == other.y()
    }

    /// Checks whether the vectors differ by less than [`EPSILON`] in length.
    #[must_use]
    pub fn almost_eq(&self, other: Vector2d) -> bool {
        self.distance(other) < EPSILON
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    pub fn add(&mut self, other: Vector2d) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self
    }
    pub fn sub(&mut self, other: Vector2d) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self
    }
    pub fn scale(&mut self, x: f64, y: f64) -> &mut Self {
        self.x *= x;
        self.y *= y;
        self
    }
    /// Multiplies each component by the corresponding component of `other`.
    pub fn scale_v(&mut self, other: Vector2d) -> &mut Self {
        self.scale(other.x, other.y)
    }
    /// Divides both components by `n`. Dividing by zero is the caller's responsibility.
    pub fn div(&mut self, n: f64) -> &mut Self {
        self.x /= n;
        self.y /= n;
        self
    }

    pub fn negate_self(&mut self) -> &mut Self {
        self.set(-self.x, -self.y)
    }
    #[must_use]
    pub fn negate(&self) -> Vector2d {
        Vector2d::new(-self.x, -self.y)
    }
    pub fn abs_self(&mut self) -> &mut Self {
        self.set(self.x.abs(), self.y.abs())
    }
    #[must_use]
    pub fn abs(&self) -> Vector2d {
        Vector2d::new(self.x.abs(), self.y.abs())
    }

    /// Computes the dot product of two vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// use gg_vector::core::prelude::*;
    /// let v1 = Vector2d::new(2.0, 3.0);
    /// let v2 = Vector2d::new(4.0, 5.0);
    /// assert_eq!(v1.dot(v2), 23.0); // 2*4 + 3*5
    /// ```
    #[must_use]
    pub fn dot(&self, other: Vector2d) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Returns the squared length of the vector.
    ///
    /// Use this instead of [`length`](Vector2d::length) when comparing lengths to avoid the
    /// square root.
    #[must_use]
    pub fn length2(&self) -> f64 {
        self.dot(*self)
    }
    #[must_use]
    pub fn length(&self) -> f64 {
        gg_math::norm(&[self.x, self.y])
    }

    /// Computes the Euclidean distance between two points without modifying either.
    #[must_use]
    pub fn distance(&self, other: Vector2d) -> f64 {
        gg_math::norm(&[self.x - other.x, self.y - other.y])
    }

    /// Scales the vector to unit length.
    ///
    /// A zero-length vector is left unchanged.
    pub fn normalize(&mut self) -> &mut Self {
        if self.is_zero() {
            trace!("Vector2d: normalize() of zero-length vector");
            self
        } else {
            let len = self.length();
            self.div(len)
        }
    }

    /// Returns the unit vector pointing from this point towards `to`, or zero if they coincide.
    #[must_use]
    pub fn direction(&self, to: Vector2d) -> Vector2d {
        let mut rv = to;
        rv.sub(*self).normalize();
        rv
    }

    /// Linearly interpolates towards `other` in place.
    ///
    /// `t = 0.0` leaves the vector unchanged and `t = 1.0` yields exactly `other`. `t` is not
    /// clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// use gg_vector::core::prelude::*;
    /// let mut v = Vector2d::new(0.0, 0.0);
    /// v.lerp(Vector2d::new(10.0, 20.0), 0.5);
    /// assert!(v.equals((5.0, 10.0)));
    /// ```
    pub fn lerp(&mut self, other: Vector2d, t: f64) -> &mut Self {
        self.set(
            gg_math::lerp(self.x, other.x, t),
            gg_math::lerp(self.y, other.y, t),
        )
    }

    pub fn min_v(&mut self, other: Vector2d) -> &mut Self {
        self.set(self.x.min(other.x), self.y.min(other.y))
    }
    pub fn max_v(&mut self, other: Vector2d) -> &mut Self {
        self.set(self.x.max(other.x), self.y.max(other.y))
    }

    /// Clamps each component into `[min, max]`. See [`gg_math::clamp`].
    pub fn clamp_self(&mut self, min: f64, max: f64) -> &mut Self {
        self.set(
            gg_math::clamp(self.x, min, max),
            gg_math::clamp(self.y, min, max),
        )
    }
    #[must_use]
    pub fn clamp(&self, min: f64, max: f64) -> Vector2d {
        let mut rv = *self;
        rv.clamp_self(min, max);
        rv
    }

    pub fn floor_self(&mut self) -> &mut Self {
        self.set(self.x.floor(), self.y.floor())
    }
    #[must_use]
    pub fn floor(&self) -> Vector2d {
        Vector2d::new(self.x.floor(), self.y.floor())
    }
    pub fn ceil_self(&mut self) -> &mut Self {
        self.set(self.x.ceil(), self.y.ceil())
    }
    #[must_use]
    pub fn ceil(&self) -> Vector2d {
        Vector2d::new(self.x.ceil(), self.y.ceil())
    }

    /// Replaces this vector with its projection onto `other`.
    ///
    /// Projecting onto a zero-length vector yields the zero vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use gg_vector::core::prelude::*;
    /// let mut v = Vector2d::new(3.0, 4.0);
    /// v.project(Vector2d::new(2.0, 0.0));
    /// assert!(v.equals((3.0, 0.0)));
    /// ```
    pub fn project(&mut self, other: Vector2d) -> &mut Self {
        let len2 = other.length2();
        if len2.is_zero() {
            crate::warn_every_seconds!(1, "Vector2d: project() onto zero-length vector: {}", self);
            return self.set_zero();
        }
        let ratio = self.dot(other) / len2;
        self.set(other.x * ratio, other.y * ratio)
    }
    /// Replaces this vector with its projection onto `unit`, which must already be normalised.
    pub fn project_n(&mut self, unit: Vector2d) -> &mut Self {
        let ratio = self.dot(unit);
        self.set(unit.x * ratio, unit.y * ratio)
    }

    /// Returns the unsigned angle in radians between two vectors, in the range `[0, π]`.
    ///
    /// Computed as `atan2(|a × b|, a · b)`, which stays accurate for nearly parallel vectors and
    /// is exact for a vector against itself or its negation. Returns `0.0` if either vector has
    /// zero length.
    ///
    /// # Examples
    ///
    /// ```
    /// use gg_vector::core::prelude::*;
    /// let right = Vector2d::new(1.0, 0.0);
    /// assert_eq!(right.angle(Vector2d::new(0.0, 5.0)), std::f64::consts::FRAC_PI_2);
    /// assert_eq!(right.angle(Vector2d::new(-2.0, 0.0)), std::f64::consts::PI);
    /// assert_eq!(right.angle(right), 0.0);
    /// ```
    #[must_use]
    pub fn angle(&self, other: Vector2d) -> f64 {
        if self.is_zero() || other.is_zero() {
            crate::warn_every_seconds!(
                1,
                "Vector2d: angle() with zero-length vector: {} vs. {}",
                self,
                other
            );
            return 0.0;
        }
        Self::angle_from_products(*self, other).unwrap_or_else(|| {
            // Rescale so the products can neither overflow nor underflow.
            let (a, b) = (self.scaled_to_unit_max(), other.scaled_to_unit_max());
            let cross = a.x * b.y - a.y * b.x;
            cross.abs().atan2(a.dot(b))
        })
    }
    fn angle_from_products(a: Vector2d, b: Vector2d) -> Option<f64> {
        let cross = (a.x * b.y - a.y * b.x).abs();
        let dot = a.dot(b);
        (cross.is_finite() && dot.is_finite() && cross.max(dot.abs()).is_normal())
            .then(|| cross.atan2(dot))
    }
    fn scaled_to_unit_max(&self) -> Vector2d {
        let scale = gg_math::max_abs(&[self.x, self.y]);
        Vector2d::new(self.x / scale, self.y / scale)
    }

    /// Rotates the vector 90 degrees in place, exactly. Equivalent to
    /// [`rotate(π/2)`](Vector2d::rotate), which is clockwise on screen when y points down.
    ///
    /// # Examples
    ///
    /// ```
    /// use gg_vector::core::prelude::*;
    /// let mut v = Vector2d::new(3.0, 2.0);
    /// v.perp();
    /// assert!(v.equals((-2.0, 3.0)));
    /// ```
    pub fn perp(&mut self) -> &mut Self {
        self.set(-self.y, self.x)
    }

    /// Rotates the vector about the origin by the given angle in radians.
    pub fn rotate(&mut self, radians: f64) -> &mut Self {
        let (sin, cos) = radians.sin_cos();
        let (x, y) = (self.x, self.y);
        self.set(x * cos - y * sin, x * sin + y * cos)
    }
    /// Rotates the vector about `pivot` by the given angle in radians.
    pub fn rotate_around(&mut self, radians: f64, pivot: impl VectorLike) -> &mut Self {
        let pivot = Vector2d::new(pivot.x(), pivot.y());
        self.sub(pivot).rotate(radians).add(pivot)
    }

    #[must_use]
    pub fn to_vector3d(&self) -> Vector3d {
        Vector3d::from(*self)
    }
}

impl From<[f64; 2]> for Vector2d {
    fn from(value: [f64; 2]) -> Self {
        Vector2d {
            x: value[0],
            y: value[1],
        }
    }
}

impl From<Vector2d> for [f64; 2] {
    fn from(value: Vector2d) -> Self {
        [value.x, value.y]
    }
}

impl From<Vector3d> for Vector2d {
    fn from(value: Vector3d) -> Self {
        Vector2d {
            x: value.x,
            y: value.y,
        }
    }
}

impl fmt::Display for Vector2d {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let x = gg_float::force_positive_zero(self.x);
        let y = gg_float::force_positive_zero(self.y);
        if let Some(p) = f.precision() {
            write!(f, "x:{0:.1$},y:{2:.1$}", x, p, y)
        } else {
            write!(f, "x:{x},y:{y}")
        }
    }
}

impl AddAssign<Vector2d> for Vector2d {
    fn add_assign(&mut self, rhs: Vector2d) {
        self.add(rhs);
    }
}

impl SubAssign<Vector2d> for Vector2d {
    fn sub_assign(&mut self, rhs: Vector2d) {
        self.sub(rhs);
    }
}

impl Sum<Vector2d> for Vector2d {
    fn sum<I: Iterator<Item = Vector2d>>(iter: I) -> Self {
        iter.fold(Vector2d::zero(), |mut acc, v| {
            acc += v;
            acc
        })
    }
}

impl Mul<f64> for Vector2d {
    type Output = Vector2d;

    fn mul(self, rhs: f64) -> Self::Output {
        Vector2d::new(self.x * rhs, self.y * rhs)
    }
}
impl Mul<Vector2d> for f64 {
    type Output = Vector2d;

    fn mul(self, rhs: Vector2d) -> Self::Output {
        rhs * self
    }
}

impl MulAssign<f64> for Vector2d {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale(rhs, rhs);
    }
}

impl DivAssign<f64> for Vector2d {
    fn div_assign(&mut self, rhs: f64) {
        self.div(rhs);
    }
}

impl Neg for Vector2d {
    type Output = Vector2d;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    // ==================== Vector2d Basic Operations ====================

    #[test]
    fn vector2d_default_is_zero() {
        let v = Vector2d::default();
        assert_eq!(v, Vector2d::zero());
        assert_eq!(v.to_string(), "x:0,y:0");
        assert!(v.is_zero());
    }

    #[test]
    fn vector2d_set_and_copy() {
        let mut a = Vector2d::default();
        a.set(1.0, 2.0);
        assert_eq!(a.to_string(), "x:1,y:2");

        let mut b = Vector2d::default();
        b.copy(a);
        assert!(b.equals(a));
        assert!(b.equals((a.x, a.y)));

        // Copying from a 3D vector drops z.
        b.copy(Vector3d::new(5.0, 6.0, 7.0));
        assert!(b.equals((5.0, 6.0)));

        b.set_zero();
        assert!(b.is_zero());
    }

    #[test]
    fn vector2d_copy_is_independent() {
        let a = Vector2d::new(1.0, 2.0);
        let mut b = a;
        b.add(Vector2d::new(1.0, 1.0));
        assert!(a.equals((1.0, 2.0)));
        assert!(b.equals((2.0, 3.0)));
        assert!({ a }.equals(a));
    }

    #[test]
    fn vector2d_equals_is_exact() {
        let a = Vector2d::new(0.1 + 0.2, 1.0);
        assert!(!a.equals((0.3, 1.0)));
        assert!(a.almost_eq(Vector2d::new(0.3, 1.0)));
    }

    #[test]
    fn vector2d_add_sub() {
        let mut a = Vector2d::new(1.0, 2.0);
        assert!(a.add(Vector2d::new(-1.0, -2.0)).is_zero());

        let mut a = Vector2d::new(1.0, 2.0);
        assert_eq!(a.sub(Vector2d::new(-1.0, -2.0)).to_string(), "x:2,y:4");
    }

    #[test]
    fn vector2d_self_aliasing() {
        let mut a = Vector2d::new(1.5, -2.0);
        a.add(a);
        assert!(a.equals((3.0, -4.0)));
        a.sub(a);
        assert!(a.is_zero());

        let mut b = Vector2d::new(3.0, 4.0);
        assert_eq!(b.dot(b), 25.0);
        b.scale_v(b);
        assert!(b.equals((9.0, 16.0)));
    }

    #[test]
    fn vector2d_scale_and_div() {
        let mut a = Vector2d::new(1.0, 2.0);
        a.scale_v(Vector2d::new(-1.0, -2.0));
        assert!(a.equals((-1.0, -4.0)));

        a.scale(-1.0, 0.5);
        assert!(a.equals((1.0, -2.0)));

        a.div(2.0);
        assert!(a.equals((0.5, -1.0)));
    }

    #[test]
    fn vector2d_negate_and_abs() {
        let mut a = Vector2d::new(1.0, -2.0);
        assert!(a.negate().equals((-1.0, 2.0)));
        assert!(a.equals((1.0, -2.0)));
        assert!(a.negate_self().equals((-1.0, 2.0)));
        assert!(a.abs().equals((1.0, 2.0)));
        assert!(a.abs_self().equals((1.0, 2.0)));
    }

    #[test]
    fn vector2d_chaining() {
        let mut a = Vector2d::new(1.0, 1.0);
        a.add(Vector2d::new(1.0, 2.0))
            .scale(2.0, 2.0)
            .sub(Vector2d::new(4.0, 6.0))
            .negate_self();
        assert!(a.is_zero());
    }

    #[test]
    fn vector2d_display() {
        assert_eq!(Vector2d::new(1.5, -2.0).to_string(), "x:1.5,y:-2");
        assert_eq!(Vector2d::new(-0.0, 0.0).to_string(), "x:0,y:0");
        let v = Vector2d::new(1.23456, 7.89012);
        assert_eq!(format!("{:.2}", v), "x:1.23,y:7.89");
    }

    #[test]
    fn vector2d_operators() {
        let mut a = Vector2d::new(1.0, 2.0);
        a += Vector2d::new(3.0, 4.0);
        assert_eq!(a, Vector2d::new(4.0, 6.0));
        a -= Vector2d::new(1.0, 1.0);
        assert_eq!(a, Vector2d::new(3.0, 5.0));
        a *= 2.0;
        assert_eq!(a, Vector2d::new(6.0, 10.0));
        a /= 2.0;
        assert_eq!(a, Vector2d::new(3.0, 5.0));
        assert_eq!(a * 2.0, Vector2d::new(6.0, 10.0));
        assert_eq!(2.0 * a, Vector2d::new(6.0, 10.0));
        assert_eq!(-a, Vector2d::new(-3.0, -5.0));

        let sum: Vector2d = vec![
            Vector2d::new(1.0, 2.0),
            Vector2d::new(3.0, -4.0),
            Vector2d::new(5.0, 6.0),
        ]
        .into_iter()
        .sum();
        assert_eq!(sum, Vector2d::new(9.0, 4.0));
    }

    #[test]
    fn vector2d_conversions() {
        let v: Vector2d = [1.0, 2.0].into();
        assert_eq!(v, Vector2d::new(1.0, 2.0));
        let arr: [f64; 2] = v.into();
        assert_eq!(arr, [1.0, 2.0]);
        assert_eq!(Vector2d::from(Vector3d::new(1.0, 2.0, 3.0)), v);
        assert_eq!(v.to_vector3d(), Vector3d::new(1.0, 2.0, 0.0));
    }

    // ==================== Vector2d Geometric Operations ====================

    #[test]
    fn vector2d_length_and_length2() {
        let v = Vector2d::new(3.0, -4.0);
        assert_eq!(v.length2(), 25.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(Vector2d::zero().length(), 0.0);
    }

    #[test]
    fn vector2d_distance_does_not_mutate() {
        let a = Vector2d::new(1.0, 1.0);
        let b = Vector2d::new(4.0, 5.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
        assert!(a.equals((1.0, 1.0)));
        assert!(b.equals((4.0, 5.0)));
    }

    #[test]
    fn vector2d_normalize() {
        let mut v = Vector2d::new(3.0, 4.0);
        v.normalize();
        assert!((v.length() - 1.0).abs() < EPSILON);
        assert!(v.equals((0.6, 0.8)));

        let mut v = Vector2d::new(0.0, -2.0);
        assert!(v.normalize().equals((0.0, -1.0)));

        // Zero length must not produce NaN.
        let mut zero = Vector2d::zero();
        assert!(zero.normalize().is_zero());
    }

    #[test]
    fn vector2d_direction() {
        let from = Vector2d::new(1.0, 1.0);
        assert!(from.direction(Vector2d::new(1.0, 5.0)).equals((0.0, 1.0)));
        assert!(from.direction(from).is_zero());
    }

    #[test]
    fn vector2d_lerp() {
        let a = Vector2d::new(2.0, 4.0);
        let b = Vector2d::new(10.0, 20.0);
        assert!({ a }.lerp(b, 0.0).equals(a));
        assert!({ a }.lerp(b, 1.0).equals(b));
        assert!({ a }.lerp(b, 0.5).equals((6.0, 12.0)));
        assert!({ a }.lerp(a, 0.3).equals(a));
        // No clamping.
        assert!({ a }.lerp(b, 2.0).equals((18.0, 36.0)));
    }

    #[test]
    fn vector2d_min_max_clamp() {
        let a = Vector2d::new(1.0, -2.0);
        let b = Vector2d::new(-1.0, 2.0);
        assert!({ a }.min_v(b).equals((-1.0, -2.0)));
        assert!({ a }.max_v(b).equals((1.0, 2.0)));

        let mut c = Vector2d::new(-2.0, 2.0);
        assert!(c.clamp(-1.0, 1.0).equals((-1.0, 1.0)));
        assert!(c.equals((-2.0, 2.0)));
        c.clamp_self(-1.0, 0.5);
        assert!(c.equals((-1.0, 0.5)));
    }

    #[test]
    fn vector2d_floor_ceil() {
        let mut v = Vector2d::new(-0.1, 0.1);
        assert!(v.floor().equals((-1.0, 0.0)));
        assert!(v.ceil().equals((0.0, 1.0)));
        assert!(v.floor_self().equals((-1.0, 0.0)));

        let mut v = Vector2d::new(-0.9, 0.9);
        assert!(v.ceil_self().equals((0.0, 1.0)));
    }

    #[test]
    fn vector2d_project() {
        let mut v = Vector2d::new(3.0, 4.0);
        v.project(Vector2d::new(0.0, -2.0));
        assert!(v.equals((0.0, 4.0)));

        // A vector along the axis projects onto itself.
        let mut v = Vector2d::new(1.0, 2.0);
        v.project(Vector2d::new(-1.0, -2.0));
        assert!(v.equals((1.0, 2.0)));

        let mut v = Vector2d::new(3.0, 4.0);
        assert!(v.project(Vector2d::zero()).is_zero());

        let mut v = Vector2d::new(3.0, 4.0);
        assert!(v.project_n(Vector2d::new(1.0, 0.0)).equals((3.0, 0.0)));
    }

    #[test]
    fn vector2d_angle() {
        let right = Vector2d::new(1.0, 0.0);
        let down = Vector2d::new(0.0, 1.0);
        let left = Vector2d::new(-1.0, 0.0);
        assert_eq!(right.angle(down), FRAC_PI_2);
        assert_eq!(right.angle(left), PI);
        assert_eq!(right.angle(right), 0.0);
        assert!((right.angle(Vector2d::new(1.0, 1.0)) - FRAC_PI_4).abs() < EPSILON);

        let a = Vector2d::new(1.0, 2.0);
        assert_eq!(a.angle(a), 0.0);
        assert!((a.angle(a.negate()) - PI).abs() < EPSILON);
        assert_eq!(a.angle(Vector2d::new(4.0, -2.0)), FRAC_PI_2);
    }

    #[test]
    fn vector2d_angle_never_nan() {
        let tiny = Vector2d::new(1e-200, 1e-200);
        let huge = Vector2d::new(1e150, 1e150);
        assert!(!tiny.angle(huge).is_nan());
        assert!(!huge.angle(huge).is_nan());
        assert_eq!(Vector2d::zero().angle(huge), 0.0);
        assert_eq!(huge.angle(Vector2d::zero()), 0.0);
    }

    #[test]
    fn vector2d_angle_at_extreme_magnitudes() {
        for scale in [1e170, 1e-170, 1e300, 1e-300] {
            let right = Vector2d::new(scale, 0.0);
            let diagonal = Vector2d::new(scale, scale);
            assert_eq!(right.angle(Vector2d::new(0.0, scale)), FRAC_PI_2);
            assert_eq!(diagonal.angle(Vector2d::new(scale, -scale)), FRAC_PI_2);
            assert!((right.angle(diagonal) - FRAC_PI_4).abs() < EPSILON);
            assert!((diagonal.angle(right) - FRAC_PI_4).abs() < EPSILON);
            assert_eq!(diagonal.angle(diagonal), 0.0);
            assert_eq!(diagonal.angle(diagonal.negate()), PI);
        }
        // Wildly different magnitudes.
        let tiny = Vector2d::new(1e-300, 0.0);
        let huge = Vector2d::new(0.0, 1e300);
        assert_eq!(tiny.angle(huge), FRAC_PI_2);
    }

    #[test]
    fn vector2d_length_at_extreme_magnitudes() {
        assert_eq!(Vector2d::new(1e200, 0.0).length(), 1e200);
        assert_eq!(Vector2d::new(0.0, -1e-200).length(), 1e-200);
        assert!((Vector2d::new(3e200, 4e200).length() / 1e200 - 5.0).abs() < EPSILON);
        assert_eq!(
            Vector2d::new(1e200, 0.0).distance(Vector2d::new(-1e200, 0.0)),
            2e200
        );
        assert_eq!(
            Vector2d::new(1e-200, 0.0).distance(Vector2d::new(0.0, 0.0)),
            1e-200
        );

        let mut big = Vector2d::new(1e200, 0.0);
        assert!(big.normalize().equals((1.0, 0.0)));
        let mut small = Vector2d::new(0.0, -1e-200);
        assert!(small.normalize().equals((0.0, -1.0)));
        let mut diagonal = Vector2d::new(1e-200, 1e-200);
        assert!((diagonal.normalize().length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn vector2d_perp_and_rotate() {
        let a = Vector2d::new(3.0, 2.0);
        let mut b = a;
        b.perp();
        assert_eq!(a.dot(b), 0.0);
        assert!(b.equals((-2.0, 3.0)));

        let mut c = a;
        c.rotate(FRAC_PI_2);
        assert!(b.almost_eq(c));
        assert!((a.angle(b) - a.angle(c)).abs() < EPSILON);

        let mut d = Vector2d::new(1.0, 0.0);
        d.rotate(PI);
        assert!(d.almost_eq(Vector2d::new(-1.0, 0.0)));
    }

    #[test]
    fn vector2d_rotate_around() {
        let mut v = Vector2d::new(2.0, 1.0);
        v.rotate_around(FRAC_PI_2, Vector2d::new(1.0, 1.0));
        assert!(v.almost_eq(Vector2d::new(1.0, 2.0)));

        let mut v = Vector2d::new(2.0, 1.0);
        v.rotate_around(FRAC_PI_2, (0.0, 0.0));
        assert!(v.almost_eq(Vector2d::new(-1.0, 2.0)));
    }
}
