#[allow(unused_imports)]
pub use num_traits;

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, Context, Result};
#[allow(unused_imports)]
pub use tracing::{error, info, trace, warn};

#[allow(unused_imports)]
pub use crate::{
    core::config::*,
    util::{
        gg_float, gg_math,
        linalg::{Vector2d, Vector3d, VectorLike},
    },
};
