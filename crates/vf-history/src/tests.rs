//! Unit tests for vf-history.

#[cfg(test)]
mod helpers {
    use vf_core::TimedPoint;

    pub const HISTORY_JSON: &str = r#"{
        "locations": [
            { "latitudeE7": 364617550, "longitudeE7": -1168666120, "timestampMs": "1500000000123", "accuracy": 12 },
            { "latitudeE7": 364617551, "longitudeE7": -1168666121, "timestamp": "2017-07-14T02:40:01.456Z" },
            { "latitudeE7": -338688000, "longitudeE7": 1512093000, "timestampMs": "1500000065999" }
        ]
    }"#;

    pub fn at(lat: f64, lon: f64, secs: i64) -> TimedPoint {
        TimedPoint::from_unix(lat, lon, secs).unwrap()
    }
}

// ── JSON decoding ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod takeout {
    use std::io::Cursor;

    use vf_core::GeoPoint;

    use super::helpers::HISTORY_JSON;
    use crate::{HistoryError, decode_history_reader};

    #[test]
    fn decodes_records_in_file_order() {
        let points = decode_history_reader(Cursor::new(HISTORY_JSON)).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].pos, GeoPoint::new(36.461755, -116.866612));
        assert_eq!(points[2].pos, GeoPoint::new(-33.8688, 151.2093));
    }

    #[test]
    fn timestamps_truncate_to_seconds() {
        let points = decode_history_reader(Cursor::new(HISTORY_JSON)).unwrap();
        assert_eq!(points[0].time.timestamp(), 1_500_000_000);
        assert_eq!(points[1].time.timestamp(), 1_500_000_001);
        assert_eq!(points[2].time.timestamp(), 1_500_000_065);
    }

    #[test]
    fn bad_timestamp_aborts() {
        let json = r#"{"locations": [
            {"latitudeE7": 0, "longitudeE7": 0, "timestampMs": "1000"},
            {"latitudeE7": 0, "longitudeE7": 0, "timestampMs": "yesterday"}
        ]}"#;
        let err = decode_history_reader(Cursor::new(json)).unwrap_err();
        assert!(matches!(err, HistoryError::Timestamp { index: 1, ref value } if value == "yesterday"));
    }

    #[test]
    fn missing_timestamp_aborts() {
        let json = r#"{"locations": [{"latitudeE7": 0, "longitudeE7": 0}]}"#;
        let err = decode_history_reader(Cursor::new(json)).unwrap_err();
        assert!(matches!(err, HistoryError::MissingTimestamp { index: 0 }));
    }

    #[test]
    fn no_locations_key() {
        assert!(decode_history_reader(Cursor::new("{}")).unwrap().is_empty());
    }

    #[test]
    fn malformed_json() {
        let err = decode_history_reader(Cursor::new("{\"locations\": [")).unwrap_err();
        assert!(matches!(err, HistoryError::Json(_)));
    }
}

// ── Cache ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod cache {
    use std::io::Cursor;
    use std::path::Path;

    use super::helpers::at;
    use crate::{HistoryError, cache_path, read_cache, read_cache_reader, write_cache, write_cache_writer};

    #[test]
    fn path_appends_dat() {
        let p = cache_path(Path::new("/data/Location History.json"));
        assert_eq!(p, Path::new("/data/Location History.json.dat"));
    }

    #[test]
    fn lossless_round_trip() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("points.dat");
        let points = vec![
            at(0.1 + 0.2, 1.0 / 3.0, 0),
            at(-89.999_999_9, 179.999_999_9, 1_500_000_000),
            at(36.461755, -116.866612, -86_400),
        ];
        write_cache(&path, &points).unwrap();
        assert_eq!(read_cache(&path).unwrap(), points);
    }

    #[test]
    fn header_row() {
        let mut buf = Vec::new();
        write_cache_writer(&mut buf, &[at(1.5, 2.5, 3)]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "latitude,longitude,unix_secs\n1.5,2.5,3\n");
    }

    #[test]
    fn out_of_range_time() {
        let csv = format!("latitude,longitude,unix_secs\n0,0,{}\n", i64::MAX);
        let err = read_cache_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, HistoryError::CacheTime { row: 0, .. }));
    }

    #[test]
    fn garbage_row() {
        let csv = "latitude,longitude,unix_secs\nnorth,0,0\n";
        assert!(matches!(read_cache_reader(Cursor::new(csv)), Err(HistoryError::Cache(_))));
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::helpers::HISTORY_JSON;
    use crate::{HistoryError, PointSource, cache_path, load_points};

    #[test]
    fn writes_then_prefers_cache() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let history = dir.path().join("history.json");
        std::fs::write(&history, HISTORY_JSON).unwrap();

        let first = load_points(&history, true).unwrap();
        assert_eq!(first.source, PointSource::History);
        assert!(first.cache_written);
        assert!(cache_path(&history).exists());

        let second = load_points(&history, true).unwrap();
        assert_eq!(second.source, PointSource::Cache);
        assert!(!second.cache_written);
        assert_eq!(second.points, first.points);
    }

    #[test]
    fn cache_disabled() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let history = dir.path().join("history.json");
        std::fs::write(&history, HISTORY_JSON).unwrap();

        let loaded = load_points(&history, false).unwrap();
        assert_eq!(loaded.source, PointSource::History);
        assert!(!loaded.cache_written);
        assert!(!cache_path(&history).exists());
    }

    #[test]
    fn empty_history_writes_no_cache() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let history = dir.path().join("history.json");
        std::fs::write(&history, r#"{"locations": []}"#).unwrap();

        let loaded = load_points(&history, true).unwrap();
        assert!(loaded.points.is_empty());
        assert!(!cache_path(&history).exists());
    }

    #[test]
    fn missing_history() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = load_points(&dir.path().join("nope.json"), true).unwrap_err();
        assert!(matches!(err, HistoryError::Open { .. }));
    }
}

// ── Ordering ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod order {
    use super::helpers::at;
    use crate::{TimeOrder, ensure_chronological};

    fn secs(points: &[vf_core::TimedPoint]) -> Vec<i64> {
        points.iter().map(|p| p.time.timestamp()).collect()
    }

    #[test]
    fn ascending_untouched() {
        let mut points = vec![at(0.0, 0.0, 1), at(0.0, 0.0, 1), at(0.0, 0.0, 5)];
        assert_eq!(ensure_chronological(&mut points), TimeOrder::Ascending);
        assert_eq!(secs(&points), [1, 1, 5]);
    }

    #[test]
    fn newest_first_is_reversed() {
        let mut points = vec![at(3.0, 0.0, 30), at(2.0, 0.0, 20), at(1.0, 0.0, 10)];
        assert_eq!(ensure_chronological(&mut points), TimeOrder::Reversed);
        assert_eq!(secs(&points), [10, 20, 30]);
        assert_eq!(points[0].pos.lat, 1.0);
    }

    #[test]
    fn mixed_is_sorted() {
        let mut points = vec![at(0.0, 0.0, 20), at(0.0, 0.0, 10), at(0.0, 0.0, 30)];
        assert_eq!(ensure_chronological(&mut points), TimeOrder::Sorted);
        assert_eq!(secs(&points), [10, 20, 30]);
    }

    #[test]
    fn empty_and_single() {
        assert_eq!(ensure_chronological(&mut []), TimeOrder::Ascending);
        assert_eq!(ensure_chronological(&mut [at(0.0, 0.0, 1)]), TimeOrder::Ascending);
    }
}
