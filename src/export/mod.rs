//! Image export for the letter keepsake.

pub(crate) mod letter;
