//! Remote completion integration
//!
//! This module provides a trait-based seam over the remote completion
//! service: a provider trait, an OpenAI-compatible implementation, and a
//! documenter wrapping the two fixed-instruction operations the pipeline
//! performs.

mod documenter;
mod providers;

pub use documenter::{CompletionError, CompletionProvider, Documenter};
pub use providers::{create_provider, OpenAiProvider};
