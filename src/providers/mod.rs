mod gemini;
mod prompt;

pub use gemini::GeminiProvider;
pub use prompt::{generation_prompt, quick_prompt};

use async_trait::async_trait;

use crate::error::ChefError;

/// Seam over the text-generation service.
///
/// One free-text prompt in, one completion out; the marker convention
/// lives in the prompt, not here.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Provider name (e.g. "gemini")
    fn provider_name(&self) -> &str;

    /// Send a prompt and return the raw completion text
    async fn generate(&self, prompt: &str) -> Result<String, ChefError>;
}
