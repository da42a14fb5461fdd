//! `vf-history`: getting `TimedPoint`s off disk.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`takeout`] | `decode_history_file`, `decode_history_reader`                |
//! | [`cache`]   | `cache_path`, `read_cache`, `write_cache` (+ reader/writer forms) |
//! | [`loader`]  | `load_points`, `LoadedHistory`, `PointSource`                 |
//! | [`order`]   | `ensure_chronological`, `TimeOrder`                           |
//! | [`error`]   | `HistoryError`, `HistoryResult<T>`                            |
//!
//! # Cache
//!
//! Decoding a multi-hundred-megabyte location-history export is slow, so the
//! decoded points are written next to it as `<history>.dat` and preferred on
//! later runs.  Delete the `.dat` file to force a re-decode.

pub mod cache;
pub mod error;
pub mod loader;
pub mod order;
pub mod takeout;

#[cfg(test)]
mod tests;

pub use cache::{cache_path, read_cache, read_cache_reader, write_cache, write_cache_writer};
pub use error::{HistoryError, HistoryResult};
pub use loader::{LoadedHistory, PointSource, load_points};
pub use order::{TimeOrder, ensure_chronological};
pub use takeout::{decode_history_file, decode_history_reader};
