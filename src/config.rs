use std::env;
use std::path::PathBuf;

use crate::error::{DocsmithError, Result};

/// Environment variable holding the completion service credential.
const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Environment variable holding the model identifier.
const MODEL_VAR: &str = "OPENAI_MODEL";

/// Optional override for the completion endpoint base URL.
const BASE_URL_VAR: &str = "OPENAI_BASE_URL";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

const DEFAULT_ARTIFACTS_DIR: &str = "./artifacts";

#[derive(Debug, Clone)]
pub struct Config {
    /// Model identifier sent with every completion request
    pub model: String,

    /// API credential for the completion service
    pub api_key: String,

    /// Base URL of the OpenAI-compatible completion endpoint
    pub base_url: String,

    /// Directory that receives generated artifacts
    pub artifacts_dir: PathBuf,
}

impl Config {
    /// Load configuration from a local `.env` file merged with the process
    /// environment. Variables already present in the environment win over
    /// values from the file.
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_env()
    }

    /// Build configuration from the process environment alone.
    pub fn from_env() -> Result<Self> {
        let api_key = require_var(API_KEY_VAR)?;
        let model = require_var(MODEL_VAR)?;
        let base_url = env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            model,
            api_key,
            base_url,
            artifacts_dir: PathBuf::from(DEFAULT_ARTIFACTS_DIR),
        })
    }
}

fn require_var(name: &str) -> Result<String> {
    env::var(name).map_err(|_| DocsmithError::Config(format!("{} is not set", name)))
}
