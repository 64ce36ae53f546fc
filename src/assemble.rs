//! Maps extracted completion text plus trusted form context into [`Recipe`]
//! records.
//!
//! Classification metadata (method, media, style, submitter, year,
//! department) always comes from the caller; the AI is only trusted for
//! descriptive free text, and every AI-sourced field has a fallback so a
//! persisted record never ends up with an empty title or ingredient list.

use crate::extract::{
    section, INGREDIENTS_END, INGREDIENTS_START, METHOD_END, METHOD_START, STYLE_END, STYLE_START,
    TITLE_END, TITLE_START,
};
use crate::model::{client_timestamp, GenerationRequest, Recipe, QUICK_METHOD};

/// Title used when a generated block carries no usable title.
pub const DEFAULT_GENERATED_TITLE: &str = "AI Suggested Dish";

/// Style tag used when a quick lookup yields no style.
pub const DEFAULT_QUICK_STYLE: &str = "general";

/// Ingredient placeholder when a quick lookup yields no ingredient list.
pub const DEFAULT_QUICK_INGREDIENTS: &str = "per the menu";

/// Submitter recorded for quick-search results.
pub const QUICK_SUBMITTER: &str = "quick-search";

/// Builds one candidate from a generated block and the submitting form.
pub fn assemble_generated(block: &str, request: &GenerationRequest) -> Recipe {
    let title = section(block, TITLE_START, Some(TITLE_END));
    let ingredients = section(block, INGREDIENTS_START, Some(INGREDIENTS_END));
    let instructions = section(block, METHOD_START, Some(METHOD_END));

    Recipe {
        timestamp: Some(client_timestamp()),
        submitter: request.submitter.clone(),
        year: request.year.clone(),
        department: request.department.clone(),
        title: non_empty_or(title, DEFAULT_GENERATED_TITLE),
        ingredients: non_empty_or(ingredients, &request.ingredients),
        method: request.method.clone(),
        media: request.media.clone(),
        style: request.style.clone(),
        instructions: instructions.to_string(),
        ..Recipe::default()
    }
}

/// Builds a record from a quick-lookup completion.
///
/// The full raw completion becomes the instructions, markers included, so
/// a partially-marked response still shows everything the service wrote.
pub fn assemble_quick(completion: &str, menu_name: &str) -> Recipe {
    let title = section(completion, TITLE_START, Some(TITLE_END));
    let style = section(completion, STYLE_START, Some(STYLE_END));
    let ingredients = section(completion, INGREDIENTS_START, Some(INGREDIENTS_END));

    Recipe {
        timestamp: Some(client_timestamp()),
        submitter: QUICK_SUBMITTER.to_string(),
        year: "-".to_string(),
        department: "-".to_string(),
        title: non_empty_or(title, menu_name),
        ingredients: non_empty_or(ingredients, DEFAULT_QUICK_INGREDIENTS),
        method: QUICK_METHOD.to_string(),
        media: "-".to_string(),
        style: non_empty_or(style, DEFAULT_QUICK_STYLE),
        instructions: completion.to_string(),
        ..Recipe::default()
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
