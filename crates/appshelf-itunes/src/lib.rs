//! Client crate for the iTunes lookup API.
//!
//! Covers the acquisition path end to end: store-URL identifier
//! extraction, remote lookup with typed decoding and a bounded response
//! cache, normalization into canonical [`AppListing`] records, and
//! best-effort batch acquisition with per-call progress reporting.

pub mod batch;
pub mod client;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod types;

pub use batch::{fetch_apps, fetch_apps_from_url, BatchOutcome, Progress, Skipped};
pub use client::ItunesClient;
pub use error::{ExtractError, LookupError};
pub use extract::extract_app_id;
pub use normalize::{normalize_app, AppListing};
pub use types::{LookupResponse, RawApp};
