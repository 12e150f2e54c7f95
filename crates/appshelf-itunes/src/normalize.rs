//! Normalization of raw lookup records into canonical app listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::RawApp;

/// The canonical, defaulted representation of one store listing.
///
/// Constructed exclusively from a decoded lookup record; immutable
/// thereafter and owned by the caller once returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppListing {
    /// Always a string, even when the upstream source encodes the
    /// identifier numerically.
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon_url: String,
    pub store_url: String,
    pub price: f64,
    pub formatted_price: String,
    pub category: String,
    pub average_rating: f64,
    pub rating_count: i64,
    pub version: String,
    pub release_date: DateTime<Utc>,
    pub bundle_id: String,
}

/// Parses an ISO-8601 timestamp (`2025-06-15T07:00:00Z`).
///
/// Returns `None` if the string does not match the expected format.
#[must_use]
pub fn parse_release_date(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|d| d.with_timezone(&Utc))
}

/// Converts a raw lookup record into an [`AppListing`].
///
/// An absent or unparsable `releaseDate` falls back to the acquisition
/// time; every other defaulted field is filled in at decode time (see
/// [`RawApp`]).
#[must_use]
pub fn normalize_app(raw: &RawApp) -> AppListing {
    let release_date = raw
        .release_date
        .as_deref()
        .and_then(parse_release_date)
        .unwrap_or_else(Utc::now);

    AppListing {
        id: raw.track_id.clone(),
        name: raw.track_name.clone(),
        description: raw.description.clone(),
        icon_url: raw.artwork_url.clone(),
        store_url: raw.track_view_url.clone(),
        price: raw.price,
        formatted_price: raw.formatted_price.clone(),
        category: raw.primary_genre_name.clone(),
        average_rating: raw.average_user_rating,
        rating_count: raw.user_rating_count,
        version: raw.version.clone(),
        release_date,
        bundle_id: raw.bundle_id.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_app(release_date: Option<&str>) -> RawApp {
        RawApp {
            track_id: "6747951776".to_string(),
            track_name: "Cartoonify Me".to_string(),
            description: "Turn photos into cartoons.".to_string(),
            artwork_url: "https://example.com/icon512.png".to_string(),
            track_view_url: "https://apps.apple.com/us/app/cartoonify-me/id6747951776"
                .to_string(),
            price: 2.99,
            formatted_price: "$2.99".to_string(),
            primary_genre_name: "Photo & Video".to_string(),
            average_user_rating: 4.5,
            user_rating_count: 128,
            version: "2.1.0".to_string(),
            release_date: release_date.map(str::to_owned),
            bundle_id: "com.example.cartoonify".to_string(),
        }
    }

    #[test]
    fn parse_release_date_valid() {
        let parsed = parse_release_date("2025-06-15T07:00:00Z").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2025-06-15T07:00:00+00:00");
    }

    #[test]
    fn parse_release_date_invalid() {
        assert_eq!(parse_release_date("not-a-date"), None);
        assert_eq!(parse_release_date(""), None);
        assert_eq!(parse_release_date("2025-06-15"), None);
    }

    #[test]
    fn normalize_maps_all_fields() {
        let listing = normalize_app(&raw_app(Some("2025-06-15T07:00:00Z")));
        assert_eq!(listing.id, "6747951776");
        assert_eq!(listing.name, "Cartoonify Me");
        assert_eq!(listing.icon_url, "https://example.com/icon512.png");
        assert_eq!(
            listing.store_url,
            "https://apps.apple.com/us/app/cartoonify-me/id6747951776"
        );
        assert!((listing.price - 2.99).abs() < f64::EPSILON);
        assert_eq!(listing.formatted_price, "$2.99");
        assert_eq!(listing.category, "Photo & Video");
        assert!((listing.average_rating - 4.5).abs() < f64::EPSILON);
        assert_eq!(listing.rating_count, 128);
        assert_eq!(listing.version, "2.1.0");
        assert_eq!(listing.release_date.to_rfc3339(), "2025-06-15T07:00:00+00:00");
        assert_eq!(listing.bundle_id, "com.example.cartoonify");
    }

    #[test]
    fn unparsable_release_date_falls_back_to_acquisition_time() {
        let before = Utc::now();
        let listing = normalize_app(&raw_app(Some("last tuesday")));
        let after = Utc::now();
        assert!(listing.release_date >= before && listing.release_date <= after);
    }

    #[test]
    fn absent_release_date_falls_back_to_acquisition_time() {
        let before = Utc::now();
        let listing = normalize_app(&raw_app(None));
        let after = Utc::now();
        assert!(listing.release_date >= before && listing.release_date <= after);
    }
}
