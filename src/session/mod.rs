//! The running greeting: one explicit context per viewer.

pub(crate) mod experience;
