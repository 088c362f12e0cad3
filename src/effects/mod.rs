pub(crate) mod confetti;
