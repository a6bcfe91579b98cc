use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::config::Config;
use super::sections::normalize_title;
use super::{
    create_provider, ArtifactWriter, CompletionProvider, Documenter, InputBundle, SectionExtractor,
};

/// Main orchestration engine for docsmith: input collection, documentation
/// generation, section extraction, per-section diagram generation.
pub struct Engine {
    documenter: Documenter,
    extractor: SectionExtractor,
    writer: ArtifactWriter,
}

impl Engine {
    /// Create an engine from configuration, with the default
    /// OpenAI-compatible provider.
    pub fn new(config: Config) -> Result<Self> {
        let provider = create_provider(&config)?;
        Ok(Self::with_provider(&config, provider))
    }

    /// Create an engine around an explicit provider. This is the seam the
    /// tests use to substitute a scripted provider for the network.
    pub fn with_provider(config: &Config, provider: Box<dyn CompletionProvider>) -> Self {
        Self {
            documenter: Documenter::new(provider),
            extractor: SectionExtractor::new(),
            writer: ArtifactWriter::new(config.artifacts_dir.clone()),
        }
    }

    /// Run the full pipeline over `file_paths`, writing the generated
    /// documentation as `{filename}.adoc` plus one `.pu` file per
    /// extracted section whose diagram request succeeds.
    pub async fn run(&self, file_paths: &[PathBuf], filename: &str) -> Result<()> {
        // Any unreadable input aborts the run.
        let bundle = InputBundle::from_paths(file_paths)?;
        if bundle.is_empty() {
            info!("No input files given, nothing to do");
            return Ok(());
        }
        info!("Read {} input file(s)", bundle.len());

        debug!("Artifacts will be written to '{}'", self.writer.root().display());
        debug!(
            "Requesting documentation from {} ({})",
            self.documenter.provider().provider_name(),
            self.documenter.provider().model_name()
        );

        let documentation = match self
            .documenter
            .generate_documentation(&bundle.combined())
            .await
        {
            Ok(text) => text,
            Err(e) => {
                warn!("Documentation request failed: {}", e);
                return Ok(());
            }
        };

        // A failed documentation write does not gate section extraction.
        if let Err(e) = self
            .writer
            .write(&format!("{}.adoc", filename), &documentation)
        {
            warn!("Could not persist documentation: {}", e);
        }

        let sections = self.extractor.extract(&documentation);
        if sections.is_empty() {
            info!("No sections found in the generated documentation");
            return Ok(());
        }
        info!("Extracted {} section(s)", sections.len());

        for (title, body) in &sections {
            match self.documenter.generate_diagram_description(body).await {
                Ok(diagram) => {
                    let file_name = format!("{}.pu", normalize_title(title));
                    if let Err(e) = self.writer.write(&file_name, &diagram) {
                        warn!("Could not persist diagram for '{}': {}", title, e);
                    }
                }
                Err(e) => {
                    warn!("Diagram request for '{}' failed: {}", title, e);
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CompletionError;

    use std::sync::{Arc, Mutex};

    use assert_fs::prelude::*;
    use async_trait::async_trait;
    use predicates::prelude::*;

    /// Scripted stand-in for the network provider: answers by matching on
    /// the incoming prompt and records every prompt it sees.
    struct ScriptedProvider<F> {
        respond: F,
        prompts: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl<F> CompletionProvider for ScriptedProvider<F>
    where
        F: Fn(&str) -> Result<String, CompletionError> + Send + Sync,
    {
        async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            (self.respond)(prompt)
        }

        fn provider_name(&self) -> &str {
            "scripted"
        }

        fn model_name(&self) -> &str {
            "scripted-model"
        }
    }

    fn test_config(artifacts_dir: std::path::PathBuf) -> Config {
        Config {
            model: "test-model".to_string(),
            api_key: "test-key".to_string(),
            base_url: "http://localhost".to_string(),
            artifacts_dir,
        }
    }

    fn write_inputs(temp: &assert_fs::TempDir) -> Vec<PathBuf> {
        let a = temp.child("a.txt");
        a.write_str("alpha").unwrap();
        let b = temp.child("b.txt");
        b.write_str("beta").unwrap();
        vec![a.path().to_path_buf(), b.path().to_path_buf()]
    }

    const DOC: &str = "## Intro\nHello\n## Setup\nSteps";

    #[tokio::test]
    async fn pipeline_writes_documentation_and_diagrams() {
        let temp = assert_fs::TempDir::new().unwrap();
        let inputs = write_inputs(&temp);

        let prompts = Arc::new(Mutex::new(Vec::new()));
        let provider = ScriptedProvider {
            respond: |prompt: &str| -> Result<String, CompletionError> {
                if prompt.contains("Path:") {
                    Ok(DOC.to_string())
                } else {
                    Ok(format!("@startuml generated\n{}\n@enduml", prompt))
                }
            },
            prompts: prompts.clone(),
        };

        let config = test_config(temp.path().join("artifacts"));
        let engine = Engine::with_provider(&config, Box::new(provider));
        engine.run(&inputs, "documentation").await.unwrap();

        temp.child("artifacts/documentation.adoc").assert(DOC);
        temp.child("artifacts/intro.pu")
            .assert(predicate::str::contains("Hello"));
        temp.child("artifacts/setup.pu")
            .assert(predicate::str::contains("Steps"));

        let prompts = prompts.lock().unwrap();
        assert_eq!(prompts.len(), 3);
        assert!(prompts[0].contains("a.txt") && prompts[0].contains("alpha"));
        assert!(prompts.iter().any(|p| p.ends_with("Hello")));
        assert!(prompts.iter().any(|p| p.ends_with("Steps")));
    }

    #[tokio::test]
    async fn failed_documentation_request_writes_nothing() {
        let temp = assert_fs::TempDir::new().unwrap();
        let inputs = write_inputs(&temp);

        let prompts = Arc::new(Mutex::new(Vec::new()));
        let provider = ScriptedProvider {
            respond: |_: &str| -> Result<String, CompletionError> {
                Err(CompletionError::RateLimited)
            },
            prompts: prompts.clone(),
        };

        let config = test_config(temp.path().join("artifacts"));
        let engine = Engine::with_provider(&config, Box::new(provider));
        engine.run(&inputs, "documentation").await.unwrap();

        temp.child("artifacts").assert(predicate::path::missing());
        assert_eq!(prompts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn failed_diagram_request_skips_only_that_section() {
        let temp = assert_fs::TempDir::new().unwrap();
        let inputs = write_inputs(&temp);

        let prompts = Arc::new(Mutex::new(Vec::new()));
        let provider = ScriptedProvider {
            respond: |prompt: &str| -> Result<String, CompletionError> {
                if prompt.contains("Path:") {
                    Ok(DOC.to_string())
                } else if prompt.ends_with("Hello") {
                    Err(CompletionError::Connection("refused".to_string()))
                } else {
                    Ok("@startuml steps\n@enduml".to_string())
                }
            },
            prompts: prompts.clone(),
        };

        let config = test_config(temp.path().join("artifacts"));
        let engine = Engine::with_provider(&config, Box::new(provider));
        engine.run(&inputs, "documentation").await.unwrap();

        temp.child("artifacts/documentation.adoc").assert(DOC);
        temp.child("artifacts/intro.pu")
            .assert(predicate::path::missing());
        temp.child("artifacts/setup.pu")
            .assert(predicate::str::contains("steps"));
    }

    #[tokio::test]
    async fn failed_documentation_write_still_requests_diagrams() {
        let temp = assert_fs::TempDir::new().unwrap();
        let inputs = write_inputs(&temp);

        // A regular file where the artifacts directory should go makes
        // every write fail.
        let blocker = temp.child("blocker");
        blocker.write_str("a plain file").unwrap();

        let prompts = Arc::new(Mutex::new(Vec::new()));
        let provider = ScriptedProvider {
            respond: |prompt: &str| -> Result<String, CompletionError> {
                if prompt.contains("Path:") {
                    Ok(DOC.to_string())
                } else {
                    Ok("@startuml x\n@enduml".to_string())
                }
            },
            prompts: prompts.clone(),
        };

        let config = test_config(blocker.path().join("artifacts"));
        let engine = Engine::with_provider(&config, Box::new(provider));
        engine.run(&inputs, "documentation").await.unwrap();

        // One documentation request plus one diagram request per section,
        // even though nothing could be persisted.
        assert_eq!(prompts.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn sectionless_documentation_produces_no_diagram_requests() {
        let temp = assert_fs::TempDir::new().unwrap();
        let inputs = write_inputs(&temp);

        let prompts = Arc::new(Mutex::new(Vec::new()));
        let provider = ScriptedProvider {
            respond: |_: &str| -> Result<String, CompletionError> {
                Ok("plain text with no headings".to_string())
            },
            prompts: prompts.clone(),
        };

        let config = test_config(temp.path().join("artifacts"));
        let engine = Engine::with_provider(&config, Box::new(provider));
        engine.run(&inputs, "notes").await.unwrap();

        temp.child("artifacts/notes.adoc")
            .assert("plain text with no headings");
        assert_eq!(prompts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unreadable_input_aborts_the_run() {
        let temp = assert_fs::TempDir::new().unwrap();
        let missing = temp.path().join("missing.txt");

        let prompts = Arc::new(Mutex::new(Vec::new()));
        let provider = ScriptedProvider {
            respond: |_: &str| -> Result<String, CompletionError> { Ok(String::new()) },
            prompts: prompts.clone(),
        };

        let config = test_config(temp.path().join("artifacts"));
        let engine = Engine::with_provider(&config, Box::new(provider));

        assert!(engine.run(&[missing], "documentation").await.is_err());
        assert!(prompts.lock().unwrap().is_empty());
    }
}
