mod mock_embedding;
mod openai_embedding;

pub use mock_embedding::*;
pub use openai_embedding::*;
