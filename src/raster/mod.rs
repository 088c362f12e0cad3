//! CPU raster surface for the paint-reveal stage.

pub(crate) mod brush;
pub(crate) mod buffer;
pub(crate) mod wash;
