pub mod application;
pub mod connector;
pub mod domain;

pub use application::{CompareTextsUseCase, EmbeddingService};

pub use connector::{MockEmbedding, OpenAiEmbedding};

pub use domain::{cosine_similarity, DomainError, Embedding};
