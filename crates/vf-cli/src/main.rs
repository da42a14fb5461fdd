//! visitfinder: when was I at this place?
//!
//! Reads a location-history export, resolves the target (coordinates or a
//! geocoded address), and logs every sustained visit within the threshold
//! distance.
//!
//! ```text
//! visitfinder "Location History.json" --lat 36.461755 --long -116.866612 --threshold 50m
//! visitfinder history.json --address "Badwater Basin" --google-api-key $KEY --debug
//! ```

mod args;
mod geocode;
mod report;

#[cfg(test)]
mod tests;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use vf_core::GeoPoint;
use vf_history::{TimeOrder, ensure_chronological, load_points};
use vf_visit::find_visits;

use args::Args;
use report::TracingReporter;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let target = resolve_target(&args)?;
    info!(lat = target.lat, long = target.lon, "using target {target}");

    let config = args.search_config(target)?;
    info!(threshold_km = config.threshold_km, "using distance {:.3}km", config.threshold_km);

    // ── Load ─────────────────────────────────────────────────────────────
    let loaded = load_points(&args.history, args.cache_data)
        .with_context(|| format!("error loading {}", args.history.display()))?;
    let mut points = loaded.points;
    info!(
        pinpoints = points.len(),
        source = ?loaded.source,
        cache_written = loaded.cache_written,
        "loaded pinpoints"
    );

    match ensure_chronological(&mut points) {
        TimeOrder::Ascending => {}
        TimeOrder::Reversed => info!("pinpoints were newest-first; reversed"),
        TimeOrder::Sorted => warn!("pinpoints were out of order; sorted by timestamp"),
    }

    // ── Search ───────────────────────────────────────────────────────────
    let mut reporter = TracingReporter::default();
    let visits = find_visits(&points, &config, &mut reporter).context("error searching for visits")?;

    if visits.is_empty() {
        info!("no visits found");
    }
    info!(
        visits = reporter.visits,
        dropped = reporter.dropped,
        skipped = reporter.skipped,
        "search complete"
    );
    Ok(())
}

/// `RUST_LOG` wins; otherwise `info`, or `debug` with `--debug`.
fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// `--address` (geocoded) if given, else `--lat`/`--long`.
fn resolve_target(args: &Args) -> Result<GeoPoint> {
    let Some(address) = &args.address else {
        return Ok(args.coordinates());
    };
    let Some(key) = &args.google_api_key else {
        bail!("--address requires --google-api-key");
    };
    geocode::geocode(address, key).context("error geocoding address")
}
