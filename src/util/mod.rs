pub mod assert;
pub mod linalg;
pub mod log;

pub mod gg_float {
    use crate::util::linalg::{Vector2d, Vector3d};
    use num_traits::Zero;

    pub trait GgFloat {
        fn is_finite(&self) -> bool;
    }

    impl GgFloat for f64 {
        fn is_finite(&self) -> bool {
            f64::is_finite(*self)
        }
    }

    impl GgFloat for Vector2d {
        fn is_finite(&self) -> bool {
            self.x.is_finite() && self.y.is_finite()
        }
    }

    impl GgFloat for Vector3d {
        fn is_finite(&self) -> bool {
            self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
        }
    }

    pub fn force_positive_zero(x: f64) -> f64 {
        if x.is_zero() { 0.0 } else { x }
    }
}

/// Scalar helpers shared by the vector types.
pub mod gg_math {
    use crate::core::config::EPSILON;
    use std::f64::consts::PI;

    pub const DEG_TO_RAD: f64 = PI / 180.0;
    pub const RAD_TO_DEG: f64 = 180.0 / PI;

    /// Restricts `value` to the range `[min, max]`.
    ///
    /// Unlike [`f64::clamp`], this never panics: if `min > max`, `min` wins for values below it
    /// and `max` wins otherwise. `NaN` passes through unchanged.
    ///
    /// # Examples
    /// ```
    /// use gg_vector::util::gg_math;
    /// assert_eq!(gg_math::clamp(5.0, 0.0, 1.0), 1.0);
    /// assert_eq!(gg_math::clamp(-5.0, 0.0, 1.0), 0.0);
    /// assert_eq!(gg_math::clamp(0.25, 0.0, 1.0), 0.25);
    /// ```
    #[must_use]
    pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
        if value < min {
            min
        } else if value > max {
            max
        } else {
            value
        }
    }

    #[must_use]
    pub fn deg_to_rad(degrees: f64) -> f64 {
        degrees * DEG_TO_RAD
    }

    #[must_use]
    pub fn rad_to_deg(radians: f64) -> f64 {
        radians * RAD_TO_DEG
    }

    /// Rounds `value` to the given number of decimal places, halfway cases away from zero.
    ///
    /// # Examples
    /// ```
    /// use gg_vector::util::gg_math;
    /// assert_eq!(gg_math::round_to(1.2345, 2), 1.23);
    /// assert_eq!(gg_math::round_to(179.99999, 0), 180.0);
    /// ```
    #[must_use]
    pub fn round_to(value: f64, decimals: i32) -> f64 {
        let scale = 10.0_f64.powi(decimals);
        (value * scale).round() / scale
    }

    /// Checks whether `actual` is within half a unit of the `precision`-th decimal place of
    /// `expected`. Negative precisions compare at tens, hundreds, and so on.
    #[must_use]
    pub fn to_be_close_to(expected: f64, actual: f64, precision: i32) -> bool {
        (expected - actual).abs() < 10.0_f64.powi(-precision) / 2.0
    }

    #[must_use]
    pub fn almost_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    /// A linear interpolation between two values.
    ///
    /// The result is exactly `a` at `t = 0`, exactly `b` at `t = 1`, and exactly `a` at any `t`
    /// when `a == b`. `t` is not clamped.
    ///
    /// # Examples
    /// ```
    /// use gg_vector::util::gg_math;
    /// assert_eq!(gg_math::lerp(0.0, 10.0, 0.0), 0.0);
    /// assert_eq!(gg_math::lerp(0.0, 10.0, 1.0), 10.0);
    /// assert_eq!(gg_math::lerp(0.0, 10.0, 0.5), 5.0);
    /// assert_eq!(gg_math::lerp(0.1, 0.1, 0.3), 0.1);
    /// ```
    #[must_use]
    pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
        // Interpolate from whichever end is nearer so that both endpoints are exact.
        if t < 0.5 {
            a + (b - a) * t
        } else {
            b - (b - a) * (1.0 - t)
        }
    }

    /// The largest absolute value among `components`, or zero if there are none.
    #[must_use]
    pub fn max_abs(components: &[f64]) -> f64 {
        components.iter().fold(0.0, |acc: f64, c| acc.max(c.abs()))
    }

    /// The Euclidean norm of `components`.
    ///
    /// Equal to `sqrt` of the sum of squares whenever that sum is a normal float. Otherwise the
    /// components are first divided by the largest of them, so magnitudes whose squares would
    /// overflow or underflow still give a finite, accurate result.
    ///
    /// # Examples
    /// ```
    /// use gg_vector::util::gg_math;
    /// assert_eq!(gg_math::norm(&[3.0, 4.0]), 5.0);
    /// assert_eq!(gg_math::norm(&[1e200, 0.0, 0.0]), 1e200);
    /// assert_eq!(gg_math::norm(&[0.0, -1e-200]), 1e-200);
    /// ```
    #[must_use]
    pub fn norm(components: &[f64]) -> f64 {
        let sum = components.iter().fold(0.0, |acc, c| acc + c * c);
        if sum.is_normal() || sum.is_nan() {
            return sum.sqrt();
        }
        let scale = max_abs(components);
        if scale == 0.0 || scale.is_infinite() {
            return scale;
        }
        let scaled_sum = components
            .iter()
            .map(|c| c / scale)
            .fold(0.0, |acc, c| acc + c * c);
        scale * scaled_sum.sqrt()
    }
}
