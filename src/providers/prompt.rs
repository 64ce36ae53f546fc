use crate::model::GenerationRequest;

/// Prompt template asking for three marker-delimited candidate recipes.
///
/// Loaded from `generate_prompt.txt` at compile time; contains
/// `{{INGREDIENTS}}`, `{{METHOD}}`, `{{MEDIA}}` and `{{STYLE}}`
/// placeholders filled from the form state.
const GENERATE_PROMPT: &str = include_str!("generate_prompt.txt");

/// Prompt template asking for a single marker-delimited recipe by name.
const QUICK_PROMPT: &str = include_str!("quick_prompt.txt");

/// Builds the three-candidate generation prompt from the form state.
pub fn generation_prompt(request: &GenerationRequest) -> String {
    GENERATE_PROMPT
        .replace("{{INGREDIENTS}}", &request.ingredients)
        .replace("{{METHOD}}", &request.method)
        .replace("{{MEDIA}}", &request.media)
        .replace("{{STYLE}}", &request.style)
}

/// Builds the quick-lookup prompt for a named dish.
pub fn quick_prompt(menu_name: &str) -> String {
    QUICK_PROMPT.replace("{{MENU}}", menu_name)
}
