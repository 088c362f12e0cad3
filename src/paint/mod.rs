//! Pointer/touch driven erase painting.

pub(crate) mod controller;
pub(crate) mod input;
