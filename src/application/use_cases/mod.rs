mod compare_texts;

pub use compare_texts::*;
