use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("Degenerate input: embedding has zero magnitude")]
    DegenerateInput,
}

impl DomainError {
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::ProviderError(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn is_provider_error(&self) -> bool {
        matches!(self, Self::ProviderError(_))
    }

    pub fn is_computation_error(&self) -> bool {
        matches!(self, Self::DimensionMismatch { .. } | Self::DegenerateInput)
    }
}
