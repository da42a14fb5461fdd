//! Address → coordinates via the Google Geocoding API.

use anyhow::{Context, Result, bail};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::info;

use vf_core::GeoPoint;

const GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub results:       Vec<GeocodeResult>,
    pub status:        String,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub formatted_address: String,
    pub geometry:          Geometry,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Resolve `address` with a blocking request.
pub fn geocode(address: &str, api_key: &str) -> Result<GeoPoint> {
    let response = reqwest::blocking::Client::new()
        .get(GEOCODE_URL)
        .query(&[("key", api_key), ("address", address)])
        .send()
        .context("error fetching Google geocode results")?;

    let status = response.status();
    if status != StatusCode::OK {
        let body = response.text().unwrap_or_default();
        bail!("got code {} from Geocoding API. Response: {body}", status.as_u16());
    }

    let parsed: GeocodeResponse = response
        .json()
        .context("error decoding response from Google Geocoding API")?;
    let (formatted, point) = first_location(parsed, address)?;
    info!(address = %formatted, "resolved to full address");
    Ok(point)
}

/// Pick the first result out of a decoded response.
pub fn first_location(response: GeocodeResponse, address: &str) -> Result<(String, GeoPoint)> {
    if response.status != "OK" {
        bail!(
            "error from Google Geocoding API: {} {}",
            response.status,
            response.error_message.unwrap_or_default()
        );
    }
    let Some(first) = response.results.into_iter().next() else {
        bail!("no results from Google Geocoding API for {address:?}");
    };
    let loc = first.geometry.location;
    Ok((first.formatted_address, GeoPoint::new(loc.lat, loc.lng)))
}
