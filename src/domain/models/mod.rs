mod embedding;

pub use embedding::*;
