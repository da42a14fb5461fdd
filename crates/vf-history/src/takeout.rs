//! Location-history JSON decoder.
//!
//! # Format
//!
//! ```json
//! { "locations": [
//!     { "latitudeE7": 364617550, "longitudeE7": -1168666120, "timestampMs": "1500000000123" },
//!     { "latitudeE7": 364617551, "longitudeE7": -1168666121, "timestamp": "2017-07-14T02:40:01.456Z" }
//! ] }
//! ```
//!
//! Coordinates are degrees × 1e7.  Each record carries either
//! `timestampMs` (Unix milliseconds as a string) or `timestamp` (RFC 3339);
//! both are truncated to whole seconds.  Other fields are ignored.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use vf_core::{GeoPoint, TimedPoint};

use crate::{HistoryError, HistoryResult};

// ── JSON records ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LocationHistory {
    #[serde(default)]
    locations: Vec<LocationRecord>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LocationRecord {
    latitude_e7:  i64,
    longitude_e7: i64,
    timestamp_ms: Option<String>,
    timestamp:    Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Decode a location-history JSON file.
pub fn decode_history_file(path: &Path) -> HistoryResult<Vec<TimedPoint>> {
    let file = File::open(path).map_err(|source| HistoryError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    decode_history_reader(BufReader::new(file))
}

/// Like [`decode_history_file`] but accepts any `Read` source.
///
/// Points are returned in file order.  The first record with an unusable
/// timestamp aborts the decode.
pub fn decode_history_reader<R: Read>(reader: R) -> HistoryResult<Vec<TimedPoint>> {
    let history: LocationHistory = serde_json::from_reader(reader)?;
    history
        .locations
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let time = record_time(index, &record)?;
            let pos = GeoPoint::new(
                record.latitude_e7 as f64 / 1e7,
                record.longitude_e7 as f64 / 1e7,
            );
            Ok(TimedPoint::new(pos, time))
        })
        .collect()
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn record_time(index: usize, record: &LocationRecord) -> HistoryResult<DateTime<Utc>> {
    let bad = |value: &str| HistoryError::Timestamp { index, value: value.to_owned() };

    if let Some(ms) = &record.timestamp_ms {
        let secs = ms.trim().parse::<i64>().map_err(|_| bad(ms))? / 1_000;
        return DateTime::from_timestamp(secs, 0).ok_or_else(|| bad(ms));
    }
    if let Some(ts) = &record.timestamp {
        let parsed = DateTime::parse_from_rfc3339(ts.trim()).map_err(|_| bad(ts))?;
        return DateTime::from_timestamp(parsed.timestamp(), 0).ok_or_else(|| bad(ts));
    }
    Err(HistoryError::MissingTimestamp { index })
}
