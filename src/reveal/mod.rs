//! Reveal-progress estimation over the paint surface.

pub(crate) mod estimator;
