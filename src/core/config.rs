use anyhow::{bail, Result};

pub const EPSILON: f64 = 1e-10;

/// The axis ratio used to convert between orthogonal and isometric tile coordinates.
///
/// Both halves of the conversion pair ([`Vector3d::to_iso_with`] and [`Vector3d::to_2d_with`])
/// must be given the same projection for the round trip to recover the original coordinates.
///
/// # Examples
///
/// ```
/// use gg_vector::core::prelude::*;
/// let iso = IsoProjection::from_tile_size(64.0, 32.0).unwrap();
/// assert_eq!(iso, IsoProjection::DEFAULT);
/// assert_eq!(iso.ratio(), 0.5);
/// ```
///
/// [`Vector3d::to_iso_with`]: crate::util::linalg::Vector3d::to_iso_with
/// [`Vector3d::to_2d_with`]: crate::util::linalg::Vector3d::to_2d_with
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IsoProjection {
    ratio: f64,
}

impl IsoProjection {
    /// 2:1 tiles, twice as wide as they are tall.
    pub const DEFAULT: IsoProjection = IsoProjection { ratio: 0.5 };

    pub fn from_tile_size(width: f64, height: f64) -> Result<Self> {
        if !width.is_finite() || width <= 0.0 {
            bail!("IsoProjection: invalid tile width: {width}");
        }
        if !height.is_finite() || height <= 0.0 {
            bail!("IsoProjection: invalid tile height: {height}");
        }
        Self::from_ratio(height / width)
    }

    pub fn from_ratio(ratio: f64) -> Result<Self> {
        if !ratio.is_finite() || ratio <= 0.0 {
            bail!("IsoProjection: invalid axis ratio: {ratio}");
        }
        Ok(Self { ratio })
    }

    /// Tile height divided by tile width.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }
}

impl Default for IsoProjection {
    fn default() -> Self {
        Self::DEFAULT
    }
}
