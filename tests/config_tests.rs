// Host-side tests for query-string configuration.

use geiger_core::{ConfigError, GeigerParams};

#[test]
fn defaults() {
    let p = GeigerParams::default();
    assert!(p.ambient_requires_running);
    assert_eq!(p.log_level, log::Level::Info);
    assert_eq!(p.seed, None);
    assert_eq!(p.animate_threshold, 50);
}

fn parse_clean(query: &str) -> GeigerParams {
    let (params, errors) = GeigerParams::from_query(query);
    assert!(errors.is_empty(), "unexpected errors for {query:?}: {errors:?}");
    params
}

#[test]
fn empty_query_gives_defaults() {
    assert_eq!(parse_clean(""), GeigerParams::default());
    assert_eq!(parse_clean("?"), GeigerParams::default());
}

#[test]
fn overrides_apply() {
    let p = parse_clean("?ambient=always&log=debug&seed=42&threshold=10");
    assert!(!p.ambient_requires_running);
    assert_eq!(p.log_level, log::Level::Debug);
    assert_eq!(p.seed, Some(42));
    assert_eq!(p.animate_threshold, 10);

    let p = parse_clean("ambient=gated&log=WARN");
    assert!(p.ambient_requires_running);
    assert_eq!(p.log_level, log::Level::Warn);
}

#[test]
fn unknown_keys_are_ignored() {
    let p = parse_clean("?utm_source=x&&flag&seed=7");
    assert_eq!(p.seed, Some(7));
}

#[test]
fn malformed_values_are_reported() {
    let (p, errors) = GeigerParams::from_query("?ambient=sometimes");
    assert_eq!(p, GeigerParams::default());
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], ConfigError::InvalidValue { key: "ambient", .. }));
    assert_eq!(
        errors[0].to_string(),
        "invalid value \"sometimes\" for `ambient`: expected `gated` or `always`"
    );

    for query in ["seed=-1", "threshold=lots", "log=loud"] {
        assert_eq!(GeigerParams::from_query(query).1.len(), 1, "{query}");
    }
}

#[test]
fn bad_pair_does_not_drop_valid_overrides() {
    let (p, errors) = GeigerParams::from_query("?seed=x&ambient=always&threshold=80");
    assert!(!p.ambient_requires_running);
    assert_eq!(p.animate_threshold, 80);
    assert_eq!(p.seed, None);
    assert_eq!(
        errors,
        vec![ConfigError::InvalidValue {
            key: "seed",
            value: "x".to_string(),
            expected: "an unsigned integer",
        }]
    );
}
