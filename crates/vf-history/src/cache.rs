//! CSV point cache.
//!
//! # CSV format
//!
//! ```csv
//! latitude,longitude,unix_secs
//! 36.461755,-116.866612,1500000000
//! ```
//!
//! Floats are written in shortest round-trip form, so a cache read returns
//! exactly the points that were written.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use vf_core::TimedPoint;

use crate::{HistoryError, HistoryResult};

#[derive(Serialize, Deserialize)]
struct CacheRow {
    latitude:  f64,
    longitude: f64,
    unix_secs: i64,
}

/// `<history>.dat`, next to the history file.
pub fn cache_path(history: &Path) -> PathBuf {
    let mut name = history.as_os_str().to_owned();
    name.push(".dat");
    PathBuf::from(name)
}

/// Write `points` to a cache file, replacing any existing one.
pub fn write_cache(path: &Path, points: &[TimedPoint]) -> HistoryResult<()> {
    let file = File::create(path).map_err(|source| HistoryError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    write_cache_writer(file, points)
}

/// Like [`write_cache`] but accepts any `Write` sink.
pub fn write_cache_writer<W: Write>(writer: W, points: &[TimedPoint]) -> HistoryResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for p in points {
        csv_writer.serialize(CacheRow {
            latitude:  p.pos.lat,
            longitude: p.pos.lon,
            unix_secs: p.time.timestamp(),
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Read a cache file written by [`write_cache`].
pub fn read_cache(path: &Path) -> HistoryResult<Vec<TimedPoint>> {
    let file = File::open(path).map_err(|source| HistoryError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_cache_reader(file)
}

/// Like [`read_cache`] but accepts any `Read` source.
pub fn read_cache_reader<R: Read>(reader: R) -> HistoryResult<Vec<TimedPoint>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize::<CacheRow>()
        .enumerate()
        .map(|(row, result)| {
            let r = result?;
            TimedPoint::from_unix(r.latitude, r.longitude, r.unix_secs)
                .ok_or(HistoryError::CacheTime { row, unix_secs: r.unix_secs })
        })
        .collect()
}
