use chrono::Local;
use serde::{Deserialize, Serialize};

/// A recipe record, shared between the local store and the sheet webhook.
///
/// Serialized camelCase to stay wire-compatible with the spreadsheet
/// listing. All fields default so that partial listing rows still
/// deserialize.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Recipe {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub submitter: String,
    pub year: String,
    pub department: String,
    pub title: String,
    pub ingredients: String,
    pub method: String,
    pub media: String,
    pub style: String,
    pub instructions: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Form state driving one three-candidate generation.
///
/// These fields are always trusted from the caller, never parsed out of
/// AI text.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub submitter: String,
    pub year: String,
    pub department: String,
    pub ingredients: String,
    pub method: String,
    pub media: String,
    pub style: String,
}

/// Class years offered by the generation form.
pub const YEARS: &[&str] = &["year-1", "year-2", "year-3", "diploma-1", "diploma-2"];

/// Departments offered by the generation form.
pub const DEPARTMENTS: &[&str] = &[
    "auto-mechanics",
    "machine-shop",
    "welding",
    "electrical",
    "electronics",
    "mechatronics",
    "computer-tech",
    "accounting",
    "marketing",
    "retail-business",
    "logistics",
    "digital-business",
    "hotel",
    "tourism",
    "food-nutrition",
];

/// Cooking techniques offered by the generation form.
pub const METHODS: &[&str] = &["boil", "steam", "fry", "stir-fry", "grill", "bake"];

/// Cooking mediums offered by the generation form.
pub const MEDIAS: &[&str] = &["oil", "butter", "water", "coconut-milk", "none"];

/// Cuisine styles offered by the generation form.
pub const STYLES: &[&str] = &[
    "thai", "japanese", "chinese", "korean", "italian", "french", "indian", "mexican", "american",
];

/// Method tag recorded for quick-search results instead of a technique.
pub const QUICK_METHOD: &str = "Quick";

/// Human-readable client-clock timestamp for new records.
pub fn client_timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
