use serde::{Deserialize, Serialize};

use crate::constants::PLACEHOLDER_IMAGE_URL;

/// A character as returned by the API.
///
/// `gender`, `species` and `status` are free-form strings; the API does not
/// guarantee a fixed vocabulary, so no enum is enforced client-side. The UI
/// recognizes a handful of values for color coding and falls back to a
/// neutral treatment for everything else.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub species: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Character {
    /// The avatar URL, substituting the fixed placeholder when the API gave
    /// none (absent, null, or empty string).
    pub fn image_url(&self) -> &str {
        match self.image.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => PLACEHOLDER_IMAGE_URL,
        }
    }
}
