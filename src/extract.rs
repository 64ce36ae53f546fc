//! Marker-delimited extraction of recipe fields from completion text.
//!
//! The generation prompt asks for literal `[TITLE]...[/TITLE]`-style
//! markers. The protocol has no escaping or nesting; extraction is
//! deliberately lenient about missing field markers and only hard-fails
//! when a completion contains no well-formed recipe block at all.

use crate::error::ChefError;

pub const BLOCK_START: &str = "[START_RECIPE]";
pub const BLOCK_END: &str = "[END_RECIPE]";

pub const TITLE_START: &str = "[TITLE]";
pub const TITLE_END: &str = "[/TITLE]";
pub const INGREDIENTS_START: &str = "[INGREDIENTS]";
pub const INGREDIENTS_END: &str = "[/INGREDIENTS]";
pub const METHOD_START: &str = "[METHOD]";
pub const METHOD_END: &str = "[/METHOD]";
pub const STYLE_START: &str = "[STYLE]";
pub const STYLE_END: &str = "[/STYLE]";

/// Upper bound on candidate blocks taken from a single completion.
pub const CANDIDATE_CAP: usize = 3;

/// Returns the trimmed text strictly between the first occurrence of
/// `start` and the first subsequent occurrence of `end`.
///
/// Missing start marker yields an empty string; the caller substitutes a
/// default. A requested-but-absent end marker falls back to end-of-text
/// rather than erroring. Single pass, always anchored on the first start
/// occurrence.
pub fn section<'a>(text: &'a str, start: &str, end: Option<&str>) -> &'a str {
    let Some(start_idx) = text.find(start) else {
        return "";
    };
    let rest = &text[start_idx + start.len()..];
    match end.and_then(|e| rest.find(e)) {
        Some(end_idx) => rest[..end_idx].trim(),
        None => rest.trim(),
    }
}

/// Splits a completion into at most [`CANDIDATE_CAP`] candidate blocks.
///
/// Splits on the block-start marker and keeps only segments that contain
/// the block-end marker; a trailing segment cut off mid-recipe is
/// discarded as truncated. Zero well-formed blocks is a hard failure,
/// never an empty success.
pub fn split_candidate_blocks(completion: &str) -> Result<Vec<&str>, ChefError> {
    let blocks: Vec<&str> = completion
        .split(BLOCK_START)
        .filter(|segment| segment.contains(BLOCK_END))
        .take(CANDIDATE_CAP)
        .collect();

    if blocks.is_empty() {
        return Err(ChefError::MalformedResponse);
    }
    Ok(blocks)
}

/// Removes every field-marker token from a completion for display.
pub fn strip_markers(text: &str) -> String {
    const MARKERS: &[&str] = &[
        TITLE_START,
        TITLE_END,
        STYLE_START,
        STYLE_END,
        INGREDIENTS_START,
        INGREDIENTS_END,
        METHOD_START,
        METHOD_END,
    ];

    let mut cleaned = text.to_string();
    for marker in MARKERS {
        cleaned = cleaned.replace(marker, "");
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_between_markers() {
        let text = "[TITLE]Fried Rice[/TITLE] rest";
        assert_eq!(section(text, TITLE_START, Some(TITLE_END)), "Fried Rice");
    }

    #[test]
    fn test_section_trims_whitespace() {
        let text = "[TITLE]\n  Green Curry \n[/TITLE]";
        assert_eq!(section(text, TITLE_START, Some(TITLE_END)), "Green Curry");
    }

    #[test]
    fn test_section_missing_start_is_empty() {
        assert_eq!(section("no markers here", TITLE_START, Some(TITLE_END)), "");
    }

    #[test]
    fn test_section_missing_end_runs_to_end_of_text() {
        let text = "[METHOD]fry everything together";
        assert_eq!(
            section(text, METHOD_START, Some(METHOD_END)),
            "fry everything together"
        );
    }

    #[test]
    fn test_section_no_end_marker_requested() {
        let text = "prefix [METHOD]steam for ten minutes";
        assert_eq!(
            section(text, METHOD_START, None),
            "steam for ten minutes"
        );
    }

    #[test]
    fn test_section_uses_first_start_occurrence() {
        let text = "[TITLE][/TITLE][TITLE]Second[/TITLE]";
        assert_eq!(section(text, TITLE_START, Some(TITLE_END)), "");
    }

    #[test]
    fn test_section_end_searched_after_start() {
        // An end marker before the start marker must not terminate the slice.
        let text = "[/TITLE] noise [TITLE]Real Title[/TITLE]";
        assert_eq!(section(text, TITLE_START, Some(TITLE_END)), "Real Title");
    }

    fn block(title: &str) -> String {
        format!("[START_RECIPE][TITLE]{title}[/TITLE][END_RECIPE]")
    }

    #[test]
    fn test_split_returns_all_blocks_under_cap() {
        let completion = format!("{}{}", block("A"), block("B"));
        let blocks = split_candidate_blocks(&completion).unwrap();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].contains("[TITLE]A[/TITLE]"));
    }

    #[test]
    fn test_split_caps_at_three() {
        let completion = format!("{}{}{}{}", block("A"), block("B"), block("C"), block("D"));
        let blocks = split_candidate_blocks(&completion).unwrap();
        assert_eq!(blocks.len(), CANDIDATE_CAP);
    }

    #[test]
    fn test_split_discards_truncated_trailing_block() {
        let completion = format!("{}[START_RECIPE][TITLE]cut off...", block("A"));
        let blocks = split_candidate_blocks(&completion).unwrap();
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_split_zero_blocks_is_hard_failure() {
        let result = split_candidate_blocks("I'm sorry, I can't produce recipes today.");
        assert!(matches!(result, Err(ChefError::MalformedResponse)));
    }

    #[test]
    fn test_strip_markers() {
        let text = "[TITLE]Soup[/TITLE]\n[INGREDIENTS]water[/INGREDIENTS]";
        assert_eq!(strip_markers(text), "Soup\nwater");
    }
}
