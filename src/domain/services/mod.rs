//! Domain services containing the core similarity computation.

mod similarity;

pub use similarity::*;
