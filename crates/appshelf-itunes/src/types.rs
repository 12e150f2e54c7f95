//! iTunes lookup API response types.
//!
//! The lookup endpoint wraps every response in a
//! `{"resultCount": N, "results": [...]}` envelope. Raw records carry
//! the upstream field names; optional fields fall back to their
//! documented defaults at decode time so a sparse record still yields a
//! complete [`RawApp`].

use serde::{Deserialize, Deserializer};

/// Top-level envelope for lookup responses.
#[derive(Debug, Deserialize)]
pub struct LookupResponse {
    #[serde(rename = "resultCount")]
    pub result_count: i64,
    pub results: Vec<RawApp>,
}

/// A single raw record from the lookup endpoint.
///
/// `track_id`, `track_name`, `artwork_url` and `track_view_url` are
/// required; everything else defaults when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct RawApp {
    #[serde(rename = "trackId", deserialize_with = "id_string_or_number")]
    pub track_id: String,
    #[serde(rename = "trackName")]
    pub track_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "artworkUrl512")]
    pub artwork_url: String,
    #[serde(rename = "trackViewUrl")]
    pub track_view_url: String,
    #[serde(default)]
    pub price: f64,
    #[serde(rename = "formattedPrice", default = "default_formatted_price")]
    pub formatted_price: String,
    #[serde(rename = "primaryGenreName", default = "default_category")]
    pub primary_genre_name: String,
    #[serde(rename = "averageUserRating", default)]
    pub average_user_rating: f64,
    #[serde(rename = "userRatingCount", default)]
    pub user_rating_count: i64,
    #[serde(default = "default_version")]
    pub version: String,
    /// ISO-8601 timestamp string; parsed during normalization.
    #[serde(rename = "releaseDate", default)]
    pub release_date: Option<String>,
    #[serde(rename = "bundleId", default)]
    pub bundle_id: String,
}

fn default_formatted_price() -> String {
    "Free".to_string()
}

fn default_category() -> String {
    "Unknown".to_string()
}

fn default_version() -> String {
    "1.0".to_string()
}

/// The endpoint encodes `trackId` as a JSON number, but some feeds carry
/// it as a string. Both representations must normalize to the same
/// string identifier.
fn id_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(n) => n.to_string(),
        Raw::Text(s) => s,
    })
}
