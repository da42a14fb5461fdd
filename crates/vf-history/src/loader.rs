//! Cache-aware point loading.

use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use vf_core::TimedPoint;

use crate::cache::{cache_path, read_cache_reader, write_cache};
use crate::takeout::decode_history_file;
use crate::{HistoryError, HistoryResult};

/// Where the points came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointSource {
    Cache,
    History,
}

/// Result of [`load_points`].
#[derive(Debug)]
pub struct LoadedHistory {
    /// Points in stored order (file order for a fresh decode).
    pub points:        Vec<TimedPoint>,
    pub source:        PointSource,
    /// `true` if this call created or refreshed the cache file.
    pub cache_written: bool,
}

/// Load the points of `history`, going through `<history>.dat` when
/// `use_cache` is set.
///
/// A missing cache is not an error: the history is decoded and, if it held
/// any points, the cache is written for next time.  Any other cache failure
/// is returned.
pub fn load_points(history: &Path, use_cache: bool) -> HistoryResult<LoadedHistory> {
    let cache = cache_path(history);

    if use_cache {
        match File::open(&cache) {
            Ok(file) => {
                return Ok(LoadedHistory {
                    points:        read_cache_reader(BufReader::new(file))?,
                    source:        PointSource::Cache,
                    cache_written: false,
                });
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(source) => return Err(HistoryError::Open { path: cache, source }),
        }
    }

    let points = decode_history_file(history)?;
    let cache_written = use_cache && !points.is_empty();
    if cache_written {
        write_cache(&cache, &points)?;
    }

    Ok(LoadedHistory { points, source: PointSource::History, cache_written })
}
