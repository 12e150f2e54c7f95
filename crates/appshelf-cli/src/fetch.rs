//! Fetch command handlers for the CLI.
//!
//! Each handler builds a client from the loaded config, runs one batch
//! acquisition, and prints the outcome. Per-item failures show up in
//! the skipped section of the report rather than aborting the run.

use appshelf_core::{AppConfig, AppManifest, AppRef};
use appshelf_itunes::{extract_app_id, fetch_apps, AppListing, BatchOutcome, ItunesClient};

/// Resolve explicit store URLs given on the command line.
pub(crate) async fn run_fetch_urls(
    config: &AppConfig,
    urls: &[String],
    json: bool,
) -> anyhow::Result<()> {
    let client = ItunesClient::from_config(config)?;
    let manifest = AppManifest::from_urls(urls);
    run_batch(&client, &manifest, json).await
}

/// Resolve a hosted manifest document, then every app it references.
///
/// # Errors
///
/// Returns an error if the manifest document cannot be fetched or
/// decoded; per-app lookup failures are reported, not propagated.
pub(crate) async fn run_fetch_manifest(
    config: &AppConfig,
    manifest_url: &str,
    json: bool,
) -> anyhow::Result<()> {
    let client = ItunesClient::from_config(config)?;
    let manifest = client.fetch_manifest(manifest_url).await?;
    run_batch(&client, &manifest, json).await
}

/// Resolve the built-in sample manifest.
pub(crate) async fn run_fetch_sample(config: &AppConfig, json: bool) -> anyhow::Result<()> {
    let client = ItunesClient::from_config(config)?;
    let manifest = AppManifest::sample();
    run_batch(&client, &manifest, json).await
}

async fn run_batch(
    client: &ItunesClient,
    manifest: &AppManifest,
    json: bool,
) -> anyhow::Result<()> {
    let outcome = fetch_apps(client, manifest, |progress| {
        if progress.is_loading {
            tracing::debug!(
                fraction = progress.fraction_complete,
                "batch progress"
            );
        }
    })
    .await;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.apps)?);
    } else {
        print_report(manifest, &outcome);
    }

    Ok(())
}

/// Finds the manifest reference a resolved listing came from, by
/// matching the extracted app id. Needed because the listing's store
/// URL is the canonical one returned by the endpoint, not the input URL.
fn find_reference<'a>(manifest: &'a AppManifest, listing: &AppListing) -> Option<&'a AppRef> {
    manifest
        .apps
        .iter()
        .find(|r| extract_app_id(&r.store_url).is_ok_and(|id| id == listing.id))
}

fn print_report(manifest: &AppManifest, outcome: &BatchOutcome) {
    println!("{}", manifest.title);
    if let Some(subtitle) = &manifest.subtitle {
        println!("{subtitle}");
    }

    for listing in &outcome.apps {
        let reference = find_reference(manifest, listing);
        let name = reference
            .and_then(|r| r.custom_title.as_deref())
            .unwrap_or(&listing.name);
        let description = reference
            .and_then(|r| r.custom_description.as_deref())
            .unwrap_or(&listing.description);
        let marker = if reference.is_some_and(|r| r.featured) {
            "*"
        } else {
            " "
        };

        println!();
        println!(
            "{marker} {name} — {} · {} · v{}",
            listing.category, listing.formatted_price, listing.version
        );
        println!(
            "  {:.1} stars ({} ratings) · {}",
            listing.average_rating, listing.rating_count, listing.store_url
        );
        if let Some(first_line) = description.lines().next() {
            if !first_line.is_empty() {
                println!("  {first_line}");
            }
        }
    }

    if !outcome.skipped.is_empty() {
        println!();
        println!("skipped {} reference(s):", outcome.skipped.len());
        for skipped in &outcome.skipped {
            println!("  {}: {}", skipped.store_url, skipped.error);
        }
    }
}
