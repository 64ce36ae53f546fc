//! One-way relay to the spreadsheet-backed webhook, plus the shared
//! listing fetch.

use std::time::Duration;

use log::{debug, warn};
use reqwest::Client;
use serde_json::Value;

use crate::config::AppConfig;
use crate::error::ChefError;
use crate::model::Recipe;

/// Outcome of a relay submission.
///
/// The webhook transport gives no readable acknowledgement, so the only
/// success state is "dispatched" - never "confirmed". Callers must not
/// treat this as durable server-side acceptance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayOutcome {
    Dispatched,
}

pub struct SheetRelay {
    client: Client,
    url: String,
}

impl SheetRelay {
    pub fn new(config: &AppConfig) -> Result<Self, ChefError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(SheetRelay {
            client,
            url: config.script_url.clone(),
        })
    }

    #[doc(hidden)]
    pub fn with_url(url: String) -> Self {
        SheetRelay {
            client: Client::new(),
            url,
        }
    }

    /// Forwards a recipe's scalar fields as form-encoded key/value pairs.
    ///
    /// Fire and forget: the response status and body are deliberately not
    /// inspected; success means the request left without a network-level
    /// failure. No retry, no offline queue.
    pub async fn submit(&self, recipe: &Recipe) -> Result<RelayOutcome, ChefError> {
        let fields = [
            ("submitter", recipe.submitter.as_str()),
            ("year", recipe.year.as_str()),
            ("department", recipe.department.as_str()),
            ("title", recipe.title.as_str()),
            ("ingredients", recipe.ingredients.as_str()),
            ("instructions", recipe.instructions.as_str()),
            ("style", recipe.style.as_str()),
        ];

        self.client.post(&self.url).form(&fields).send().await?;
        debug!("Relayed \"{}\" to {}", recipe.title, self.url);
        Ok(RelayOutcome::Dispatched)
    }

    /// Fetches the shared listing.
    ///
    /// The webhook is expected to return a JSON array of recipe-shaped
    /// objects; any non-array payload is treated as an empty listing and
    /// rows that fail to deserialize are skipped, never an error.
    pub async fn fetch_entries(&self) -> Result<Vec<Recipe>, ChefError> {
        let payload: Value = self.client.get(&self.url).send().await?.json().await?;

        let Some(rows) = payload.as_array() else {
            warn!("Listing endpoint returned a non-array payload; treating as empty");
            return Ok(Vec::new());
        };

        let recipes = rows
            .iter()
            .filter_map(|row| serde_json::from_value::<Recipe>(row.clone()).ok())
            .collect();
        Ok(recipes)
    }
}
