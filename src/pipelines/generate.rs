use log::info;

use crate::assemble::assemble_generated;
use crate::error::ChefError;
use crate::extract::split_candidate_blocks;
use crate::model::{GenerationRequest, Recipe};
use crate::providers::{generation_prompt, TextGenerator};

/// Runs one three-candidate generation end to end.
///
/// Builds the prompt from the form state, calls the generation service
/// once (no retry), splits the completion into candidate blocks and
/// assembles a record per block. A completion with zero well-formed
/// blocks propagates as [`ChefError::MalformedResponse`]; no partial
/// results are returned.
pub async fn generate_candidates(
    generator: &dyn TextGenerator,
    request: &GenerationRequest,
) -> Result<Vec<Recipe>, ChefError> {
    let prompt = generation_prompt(request);
    let completion = generator.generate(&prompt).await?;

    let blocks = split_candidate_blocks(&completion)?;
    info!(
        "Assembled {} candidate(s) from {} completion",
        blocks.len(),
        generator.provider_name()
    );

    Ok(blocks
        .iter()
        .map(|block| assemble_generated(block, request))
        .collect())
}
