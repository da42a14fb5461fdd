//! Unit tests for the visitfinder binary.

#[cfg(test)]
mod args {
    use clap::Parser;
    use vf_core::GeoPoint;

    use crate::args::Args;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["visitfinder", "history.json"]).unwrap();
        assert_eq!(args.history.to_str(), Some("history.json"));
        assert_eq!(args.coordinates(), GeoPoint::new(36.461755, -116.866612));
        assert_eq!(args.threshold, "50m");
        assert!(args.cache_data);
        assert!(!args.debug);

        let config = args.search_config(args.coordinates()).unwrap();
        assert_eq!(config.threshold_km, 0.05);
        assert_eq!(config.min_run_length, 10);
        assert_eq!(config.box_margin, 2.0);
    }

    #[test]
    fn negative_coordinates_and_flags() {
        let args = Args::try_parse_from([
            "visitfinder", "h.json",
            "--lat", "-33.9", "--long", "151.2",
            "--threshold", "1km",
            "--cache-data", "false",
            "--min-run-length", "4",
            "--debug",
        ])
        .unwrap();
        assert_eq!(args.coordinates(), GeoPoint::new(-33.9, 151.2));
        assert!(!args.cache_data);
        assert!(args.debug);
        let config = args.search_config(args.coordinates()).unwrap();
        assert_eq!(config.threshold_km, 1.0);
        assert_eq!(config.min_run_length, 4);
    }

    #[test]
    fn bad_threshold_is_fatal() {
        let args = Args::try_parse_from(["visitfinder", "h.json", "--threshold", "50 furlongs"]).unwrap();
        assert!(args.search_config(args.coordinates()).is_err());
    }

    #[test]
    fn box_margin_below_two_is_rejected() {
        let args = Args::try_parse_from(["visitfinder", "h.json", "--box-margin", "1"]).unwrap();
        assert!(args.search_config(args.coordinates()).is_err());

        let args = Args::try_parse_from(["visitfinder", "h.json", "--box-margin", "3"]).unwrap();
        assert_eq!(args.search_config(args.coordinates()).unwrap().box_margin, 3.0);
    }

    #[test]
    fn history_is_required() {
        assert!(Args::try_parse_from(["visitfinder"]).is_err());
    }
}

#[cfg(test)]
mod geocode {
    use vf_core::GeoPoint;

    use crate::geocode::{GeocodeResponse, first_location};

    fn parse(json: &str) -> GeocodeResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn first_result_wins() {
        let resp = parse(
            r#"{"status": "OK", "results": [
                {"formatted_address": "Badwater Basin, CA, USA",
                 "geometry": {"location": {"lat": 36.2297, "lng": -116.7669}}},
                {"formatted_address": "elsewhere",
                 "geometry": {"location": {"lat": 0.0, "lng": 0.0}}}
            ]}"#,
        );
        let (addr, point) = first_location(resp, "badwater").unwrap();
        assert_eq!(addr, "Badwater Basin, CA, USA");
        assert_eq!(point, GeoPoint::new(36.2297, -116.7669));
    }

    #[test]
    fn api_error_status() {
        let resp = parse(r#"{"status": "REQUEST_DENIED", "error_message": "bad key", "results": []}"#);
        let err = first_location(resp, "x").unwrap_err();
        assert!(err.to_string().contains("bad key"));
    }

    #[test]
    fn no_results() {
        let resp = parse(r#"{"status": "OK", "results": []}"#);
        let err = first_location(resp, "nowhere").unwrap_err();
        assert!(err.to_string().contains("no results"));
    }
}

#[cfg(test)]
mod report {
    use chrono::{DateTime, TimeDelta};
    use vf_core::{GeoPoint, SearchConfig, TimedPoint};
    use vf_visit::{VisitRecord, find_visits};

    use crate::report::{TracingReporter, describe, format_duration};

    #[test]
    fn durations() {
        assert_eq!(format_duration(TimeDelta::zero()), "0s");
        assert_eq!(format_duration(TimeDelta::seconds(59)), "59s");
        assert_eq!(format_duration(TimeDelta::seconds(14 * 60)), "14m0s");
        assert_eq!(format_duration(TimeDelta::seconds(3_600)), "1h0m0s");
        assert_eq!(format_duration(TimeDelta::seconds(90_061)), "25h1m1s");
        assert_eq!(format_duration(TimeDelta::seconds(-61)), "-1m1s");
    }

    #[test]
    fn visit_line() {
        let visit = VisitRecord {
            start: DateTime::from_timestamp(1_600_000_000, 0).unwrap(),
            end: DateTime::from_timestamp(1_600_003_900, 0).unwrap(),
            total_inside: 70,
            max_consecutive_inside: 65,
        };
        assert_eq!(
            describe("Visited", &visit),
            "Visited for 1h5m0s starting at 2020-09-13T12:26:40Z (70 pinpoints / 65 max consecutive)"
        );
    }

    #[test]
    fn reporter_tallies() {
        // 12 in, 12 out (but in the box), 4 in; the antipodal tail is never a
        // candidate, so nothing is skipped.
        let mut points = Vec::new();
        let mut push = |lat: f64, lon: f64, n: usize| {
            for _ in 0..n {
                let t = 1_600_000_000 + 60 * points.len() as i64;
                points.push(TimedPoint::from_unix(lat, lon, t).unwrap());
            }
        };
        push(0.0001, 0.0, 12);
        push(0.0003, 0.0, 12);
        push(0.0001, 0.0, 4);
        push(0.5, 179.7, 1);

        let config = SearchConfig::new(GeoPoint::new(0.0, 0.0), 0.02);
        let mut reporter = TracingReporter::default();
        let visits = find_visits(&points, &config, &mut reporter).unwrap();
        assert_eq!(visits.len(), 1);
        assert_eq!(reporter.visits, 1);
        assert_eq!(reporter.dropped, 1);
        assert_eq!(reporter.skipped, 0);
    }
}
