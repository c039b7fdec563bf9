//! Icon drawing
//!
//! Geometry is a pure function of the icon size; rendering turns it into an
//! RGBA raster without touching the filesystem.

mod error;
mod geometry;
mod render;

pub use error::IconError;
#[allow(unused_imports)]
pub use geometry::{IconColor, IconGeometry};
#[allow(unused_imports)]
pub use render::{render_icon, RASTER_BACKEND};
