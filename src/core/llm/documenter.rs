use async_trait::async_trait;
use thiserror::Error;

/// Why a single completion exchange yielded no text.
///
/// Every caller must treat these as expected outcomes: a failed request
/// abandons that one request only and is never retried here.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("The completion server could not be reached: {0}")]
    Connection(String),

    #[error("The completion service rate-limited the request (HTTP 429)")]
    RateLimited,

    #[error("The completion service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Could not decode the completion response: {0}")]
    Decode(String),

    #[error("The completion response contained no choices")]
    EmptyResponse,
}

/// Trait for services that can answer a single-prompt completion request.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send one user-role prompt and return the response text.
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;

    /// Get the provider name (e.g., "OpenAI")
    fn provider_name(&self) -> &str;

    /// Get the model name being used
    fn model_name(&self) -> &str;
}

const DOCUMENTATION_INSTRUCTION: &str = "Your main task is to generate asciidoc documentation based on a query. You need to generate an answer that is valid enough to be automatically recorded in the document whose content you are going to generate. This content is documentation about a specific functionality that you need to describe in as much detail as possible. The documentation should be written follow the latest best practices of writing the documentation. Including description, use cases, etc. Content:\n ";

const DIAGRAM_INSTRUCTION: &str = "Your main task is to describe the plantuml diagram in as accessible and detailed a way as possible, focusing on the content. Be sure to use simple, free keywords to describe the details that are officially provided by plantuml.  The name of the documentation should be based on its content, e.g. @startuml content_example. The values you output should be valid so that they can be written to a file immediately. Content:\n ";

/// The two completion operations the pipeline performs. Both are a fixed
/// instruction prefix wrapped around caller-supplied content.
pub struct Documenter {
    provider: Box<dyn CompletionProvider>,
}

impl Documenter {
    pub fn new(provider: Box<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &dyn CompletionProvider {
        &*self.provider
    }

    /// Request AsciiDoc documentation describing `content`.
    pub async fn generate_documentation(&self, content: &str) -> Result<String, CompletionError> {
        let prompt = format!("{}{}", DOCUMENTATION_INSTRUCTION, content);
        self.provider.complete(&prompt).await
    }

    /// Request a PlantUML diagram description of `content`, suitable for
    /// writing to a file as-is.
    pub async fn generate_diagram_description(
        &self,
        content: &str,
    ) -> Result<String, CompletionError> {
        let prompt = format!("{}{}", DIAGRAM_INSTRUCTION, content);
        self.provider.complete(&prompt).await
    }
}
