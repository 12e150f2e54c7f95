//! Best-effort batch acquisition over an ordered manifest.
//!
//! References are resolved strictly sequentially, one request in flight
//! at a time, so progress fractions increase monotonically and per-item
//! log lines appear in input order. A failed reference is recorded and
//! skipped; it never aborts the batch.

use appshelf_core::AppManifest;

use crate::client::ItunesClient;
use crate::error::LookupError;
use crate::normalize::AppListing;

/// Progress through one batch run.
///
/// Owned by the call that produced it: concurrent batch runs each
/// report through their own callback and cannot interfere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub is_loading: bool,
    /// Fraction of references processed so far, in `[0.0, 1.0]`.
    pub fraction_complete: f64,
}

/// A reference that failed to resolve, with the error that caused it.
#[derive(Debug)]
pub struct Skipped {
    pub store_url: String,
    pub error: LookupError,
}

/// The outcome of one batch run: resolved listings in input order plus
/// the references that were skipped.
///
/// `apps.len() + skipped.len()` always equals the number of references
/// in the manifest.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub apps: Vec<AppListing>,
    pub skipped: Vec<Skipped>,
}

/// Resolves every reference in `manifest`, in order.
///
/// Reports `{is_loading: true, fraction_complete: 0.0}` on entry and
/// `(index + 1) / total` after each reference, success or failure. The
/// terminal `{is_loading: false, fraction_complete: 1.0}` report runs on
/// every path out of the loop, including the empty-manifest case and
/// the all-references-failed case. Failed references are logged with
/// the offending URL and recorded in the outcome; they are not retried
/// within a run.
pub async fn fetch_apps(
    client: &ItunesClient,
    manifest: &AppManifest,
    mut on_progress: impl FnMut(Progress),
) -> BatchOutcome {
    on_progress(Progress {
        is_loading: true,
        fraction_complete: 0.0,
    });

    let total = manifest.apps.len();
    let mut outcome = BatchOutcome::default();

    for (index, app_ref) in manifest.apps.iter().enumerate() {
        match client.lookup_by_url(&app_ref.store_url).await {
            Ok(listing) => outcome.apps.push(listing),
            Err(e) => {
                tracing::warn!(
                    url = %app_ref.store_url,
                    error = %e,
                    "app lookup failed — skipping"
                );
                outcome.skipped.push(Skipped {
                    store_url: app_ref.store_url.clone(),
                    error: e,
                });
            }
        }

        #[allow(clippy::cast_precision_loss)]
        let fraction_complete = (index + 1) as f64 / total as f64;
        on_progress(Progress {
            is_loading: true,
            fraction_complete,
        });
    }

    on_progress(Progress {
        is_loading: false,
        fraction_complete: 1.0,
    });

    outcome
}

/// Resolves a manifest document, then runs [`fetch_apps`] over it.
///
/// # Errors
///
/// A manifest resolution failure is a hard failure of the whole call;
/// per-reference lookup failures are still recovered and recorded in
/// the outcome. No progress is reported until the manifest resolves.
pub async fn fetch_apps_from_url(
    client: &ItunesClient,
    manifest_url: &str,
    on_progress: impl FnMut(Progress),
) -> Result<BatchOutcome, LookupError> {
    let manifest = client.fetch_manifest(manifest_url).await?;
    Ok(fetch_apps(client, &manifest, on_progress).await)
}
