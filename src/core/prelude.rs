#[allow(unused_imports)]
pub use itertools::Itertools;
#[allow(unused_imports)]
pub use num_traits;

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, Context, Result};
#[allow(unused_imports)]
pub use tracing::{error, info, warn};

#[allow(unused_imports)]
pub use crate::{
    core::config::*,
    util::{
        assert::*,
        gg_num,
        gg_time::HwTimer,
        linalg,
        linalg::{
            polygon_edges, twice_signed_area, Coor, Geometry, Line2D, Polygon, Scalar, Vec2,
            Vec2D, Vec3,
        },
        term,
    },
};
