use async_trait::async_trait;

use crate::domain::{DomainError, Embedding};

/// Generates vector embeddings from input text.
///
/// The single capability the program depends on: given text, return an
/// embedding or fail. Adapters wrap a remote provider or a deterministic
/// stub behind this trait.
#[async_trait]
pub trait EmbeddingService: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Embedding, DomainError>;

    /// Identifier of the model producing the vectors.
    fn model_name(&self) -> &str;
}
