use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::application::EmbeddingService;
use crate::domain::{cosine_similarity, DomainError};

/// Fetches an embedding for each input text and scores the pair.
pub struct CompareTextsUseCase {
    embedding_service: Arc<dyn EmbeddingService>,
}

impl CompareTextsUseCase {
    pub fn new(embedding_service: Arc<dyn EmbeddingService>) -> Self {
        Self { embedding_service }
    }

    /// Embeds both texts sequentially and returns their cosine similarity.
    ///
    /// A fetch failure for either text aborts the comparison before the
    /// similarity computation runs; the first error encountered is returned.
    pub async fn execute(&self, text1: &str, text2: &str) -> Result<f32, DomainError> {
        info!(
            "Comparing two texts with {}",
            self.embedding_service.model_name()
        );

        let start_time = Instant::now();

        let embedding1 = self.embedding_service.embed(text1).await?;
        let embedding2 = self.embedding_service.embed(text2).await?;

        debug!(
            "Fetched embeddings with {} and {} dimensions",
            embedding1.dimensions(),
            embedding2.dimensions()
        );

        let similarity = cosine_similarity(&embedding1.vector, &embedding2.vector)?;

        let duration = start_time.elapsed();
        info!(
            "Computed similarity {:.4} in {:.2}s",
            similarity,
            duration.as_secs_f64()
        );

        Ok(similarity)
    }
}
