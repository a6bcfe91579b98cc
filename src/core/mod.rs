mod bundle;
mod engine;
mod llm;
mod sections;
mod writer;

pub use bundle::{InputBundle, SourceFile};
pub use sections::{normalize_title, SectionExtractor};
pub use writer::ArtifactWriter;
pub use llm::{create_provider, CompletionError, CompletionProvider, Documenter, OpenAiProvider};

// Export the main engine
pub use engine::Engine;
