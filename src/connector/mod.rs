//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Remote embedding generation over HTTP
//! - Deterministic mock embeddings for tests and offline runs

pub mod adapter;

pub use adapter::*;
