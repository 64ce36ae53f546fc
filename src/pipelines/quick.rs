use crate::assemble::assemble_quick;
use crate::error::ChefError;
use crate::model::Recipe;
use crate::providers::{quick_prompt, TextGenerator};

/// Looks up a single recipe by dish name.
///
/// Unlike the three-candidate flow there is no block convention here, so
/// a markerless completion degrades to per-field fallbacks instead of
/// failing; the raw completion is kept as the instructions either way.
pub async fn quick_lookup(
    generator: &dyn TextGenerator,
    menu_name: &str,
) -> Result<Recipe, ChefError> {
    let prompt = quick_prompt(menu_name);
    let completion = generator.generate(&prompt).await?;
    Ok(assemble_quick(&completion, menu_name))
}
