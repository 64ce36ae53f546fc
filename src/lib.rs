pub mod assemble;
pub mod config;
pub mod error;
pub mod extract;
pub mod model;
pub mod pipelines;
pub mod providers;
pub mod relay;
pub mod store;

pub use config::AppConfig;
pub use error::ChefError;
pub use model::{GenerationRequest, Recipe};
pub use providers::{GeminiProvider, TextGenerator};
pub use relay::{RelayOutcome, SheetRelay};
pub use store::{Confirmation, LocalStore, RemoveOutcome, SaveOutcome};

/// Generates up to three candidate recipes from the submitted form state.
///
/// Checks the credential before any network call and makes exactly one
/// generation request; a completion without any well-formed recipe block
/// is a [`ChefError::MalformedResponse`].
pub async fn generate_recipes(
    config: &AppConfig,
    request: &GenerationRequest,
) -> Result<Vec<Recipe>, ChefError> {
    let provider = GeminiProvider::new(config)?;
    pipelines::generate::generate_candidates(&provider, request).await
}

/// Looks up a single recipe by dish name (quick-search mode).
pub async fn quick_recipe(config: &AppConfig, menu_name: &str) -> Result<Recipe, ChefError> {
    let provider = GeminiProvider::new(config)?;
    pipelines::quick::quick_lookup(&provider, menu_name).await
}
