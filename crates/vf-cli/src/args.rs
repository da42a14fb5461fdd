//! Command-line arguments and their conversion to a `SearchConfig`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

use vf_core::{GeoPoint, SearchConfig, parse_distance_km};

/// Find when a location-history export was at (or near) a given place.
#[derive(Parser, Debug)]
#[command(name = "visitfinder", version, about)]
pub struct Args {
    /// Path to the location-history JSON export
    pub history: PathBuf,

    /// Latitude of target location
    #[arg(long, default_value_t = 36.461755, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude of target location
    #[arg(long = "long", default_value_t = -116.866612, allow_hyphen_values = true)]
    pub long: f64,

    /// Address to look up instead of specifying --lat/--long (requires --google-api-key)
    #[arg(long)]
    pub address: Option<String>,

    /// API key for the Google Geocoding API, for use with --address
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub google_api_key: Option<String>,

    /// Distance that counts as being at the location, with units (km, m, mi, ft)
    #[arg(long, default_value = "50m")]
    pub threshold: String,

    /// Cache a more easily processed form of the history next to it
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub cache_data: bool,

    /// Consecutive pinpoints needed to count a visit, and to end one
    #[arg(long, default_value_t = SearchConfig::DEFAULT_MIN_RUN_LENGTH)]
    pub min_run_length: usize,

    /// Bounding box is solved for threshold × this factor (≥ 2)
    #[arg(long, default_value_t = SearchConfig::DEFAULT_BOX_MARGIN)]
    pub box_margin: f64,

    /// Show debug logging (per-pinpoint distances, dropped visits)
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// `--lat`/`--long` as a point.
    pub fn coordinates(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.long)
    }

    /// Build and validate the run configuration around `target`.
    pub fn search_config(&self, target: GeoPoint) -> Result<SearchConfig> {
        let threshold_km = parse_distance_km(&self.threshold).context("invalid --threshold")?;
        let config = SearchConfig::new(target, threshold_km)
            .with_min_run_length(self.min_run_length)
            .with_box_margin(self.box_margin);
        config.validate()?;
        Ok(config)
    }
}
