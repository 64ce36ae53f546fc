use thiserror::Error;

/// Errors that can occur while generating, saving, or relaying recipes
#[derive(Error, Debug)]
pub enum ChefError {
    /// Generation credential is missing or a placeholder
    #[error(
        "Generation API key not found or invalid.\n\
         To fix:\n\
         1. Local run: check your .env / shell for AICHEF__API_KEY=... (no spaces)\n\
         2. Hosted run: add AICHEF__API_KEY under the site's environment variables\n\
         3. After editing the environment, restart the process"
    )]
    MissingApiKey,

    /// The generation service returned text without any well-formed recipe block
    #[error("the service returned a response that doesn't match the expected format")]
    MalformedResponse,

    /// The generation service response had no extractable text content
    #[error("Failed to extract content from generation response")]
    EmptyCompletion,

    /// Network-level failure on a generation, relay, or listing call
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Local store file could not be read or written
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Local store serialization failure on write
    #[error("Store serialization error: {0}")]
    StoreSerialize(#[from] serde_json::Error),

    /// Removal index outside the saved list
    #[error("No saved recipe at index {0}")]
    InvalidIndex(usize),
}
