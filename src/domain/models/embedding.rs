use serde::{Deserialize, Serialize};

/// Represents a vector embedding for a piece of text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Embedding {
    pub vector: Vec<f32>,
    pub model: String,
}

impl Embedding {
    pub fn new(vector: Vec<f32>, model: String) -> Self {
        Self { vector, model }
    }

    pub fn dimensions(&self) -> usize {
        self.vector.len()
    }
}
