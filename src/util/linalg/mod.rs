mod vector2d;
mod vector3d;

pub use vector2d::Vector2d;
pub use vector3d::Vector3d;

/// Read access to the components of anything that can stand in for a vector argument.
///
/// Implemented by [`Vector2d`], [`Vector3d`], and bare tuples of two or three scalars, so that
/// operations such as [`Vector3d::equals`] and [`Vector3d::set_v`] accept any of them.
/// Two-component values report `None` for [`z`](VectorLike::z); each operation documents how it
/// treats the missing axis.
///
/// # Examples
///
/// ```
/// use gg_vector::core::prelude::*;
/// let v = Vector3d::new(1.0, 2.0, 3.0);
/// assert!(v.equals(Vector3d::new(1.0, 2.0, 3.0)));
/// assert!(v.equals((1.0, 2.0, 3.0)));
/// // z is not tested when only x and y are given.
/// assert!(v.equals((1.0, 2.0)));
/// assert!(v.equals(Vector2d::new(1.0, 2.0)));
/// ```
pub trait VectorLike {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn z(&self) -> Option<f64> {
        None
    }
}

impl VectorLike for Vector2d {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
}

impl VectorLike for Vector3d {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
    fn z(&self) -> Option<f64> {
        Some(self.z)
    }
}

impl VectorLike for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl VectorLike for (f64, f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
    fn z(&self) -> Option<f64> {
        Some(self.2)
    }
}

impl<T: VectorLike> VectorLike for &T {
    fn x(&self) -> f64 {
        (*self).x()
    }
    fn y(&self) -> f64 {
        (*self).y()
    }
    fn z(&self) -> Option<f64> {
        (*self).z()
    }
}
