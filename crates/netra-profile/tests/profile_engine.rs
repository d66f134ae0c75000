use netra_core::{Column, ColumnData, Frame, Value};
use netra_profile::{to_flat_json, ColumnStats, Profile, ProfileEngine, ProfileOptions};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Mixed-type frame with nulls, duplicates, and a float column.
fn sample_frame() -> Frame {
    Frame::new(vec![
        Column::new(
            "age",
            ColumnData::Int(vec![Some(25), Some(30), Some(35), None, Some(25)]),
        ),
        Column::new(
            "salary",
            ColumnData::Float(vec![
                Some(50_000.0),
                Some(60_000.0),
                Some(75_000.0),
                Some(50_000.0),
                None,
            ]),
        ),
        Column::new(
            "city",
            ColumnData::Utf8(vec![
                Some("Groningen".to_string()),
                Some("Thrissur".to_string()),
                Some("Delhi".to_string()),
                None,
                Some("Groningen".to_string()),
            ]),
        ),
    ])
    .expect("valid frame")
}

fn sample_profile() -> Profile {
    ProfileEngine::new(ProfileOptions::default())
        .run(&sample_frame())
        .expect("profile run")
}

#[test]
fn global_stats() {
    assert_eq!(sample_profile().row_count, 5);
}

#[test]
fn numeric_stats() {
    let profile = sample_profile();
    let age = profile.column("age").expect("age column");
    assert_eq!(age.null_count, 1);
    assert_eq!(age.n_unique, 3);

    let stats = age.numeric().expect("numeric stats");
    assert_eq!(stats.min, Some(Value::Int(25)));
    assert_eq!(stats.max, Some(Value::Int(35)));

    // Non-null sample [25, 30, 35, 25].
    assert!(close(stats.mean.expect("mean"), 28.75));
    assert!(close(stats.std.expect("std"), (68.75f64 / 3.0).sqrt()));
    assert!(close(stats.p25.expect("p25"), 25.0));
    assert!(close(stats.p50.expect("p50"), 27.5));
    assert!(close(stats.p75.expect("p75"), 31.25));
}

#[test]
fn string_stats() {
    let profile = sample_profile();
    let city = profile.column("city").expect("city column");
    assert_eq!(city.null_count, 1);
    assert_eq!(city.n_unique, 3);

    let stats = city.text().expect("text stats");
    assert_eq!(stats.min.as_deref(), Some("Delhi"));
    assert_eq!(stats.max.as_deref(), Some("Thrissur"));
    assert_eq!(stats.min_length, Some(5));
    assert_eq!(stats.max_length, Some(9));
    // Groningen (9) + Thrissur (8) + Delhi (5) + Groningen (9).
    assert!(close(stats.mean_length.expect("mean length"), 7.75));
}

#[test]
fn top_k_stats() {
    let profile = sample_profile();
    let city = profile.column("city").expect("city column");
    assert!(!city.top_k.is_empty());
    assert_eq!(city.top_k[0].value, Value::Str("Groningen".to_string()));
    assert_eq!(city.top_k[0].count, 2);
}

#[test]
fn histogram_stats() {
    let profile = sample_profile();
    let age = profile.column("age").expect("age column");
    let histogram = age
        .numeric()
        .and_then(|stats| stats.histogram.as_ref())
        .expect("age histogram");

    assert!(!histogram.is_empty());
    assert_eq!(histogram.iter().map(|bin| bin.count).sum::<u64>(), 4);
}

#[test]
fn correlation_stats() {
    let profile = sample_profile();
    let correlations = &profile.correlations;
    assert_eq!(correlations.columns, vec!["age", "salary"]);

    // Self-correlation is pinned to 1.0.
    assert_eq!(correlations.pearson[0][0], Some(1.0));

    // Complete pairs: (25, 50k), (30, 60k), (35, 75k) — nearly linear.
    let r = correlations.pearson[0][1].expect("age/salary pearson");
    assert!(r > 0.99, "expected near-perfect correlation, got {r}");

    // Monotonic on the complete pairs, so Spearman is exactly 1.
    let rho = correlations.spearman[0][1].expect("age/salary spearman");
    assert!(close(rho, 1.0));
}

#[test]
fn metadata() {
    let profile = sample_profile();
    assert!(profile.meta.engine_time >= 0.0);
    assert!(profile.meta.warnings.is_empty());
    assert_eq!(profile.meta.correlation_method, "exact");
    assert_eq!(profile.meta.profile_version, "0.1");
}

#[test]
fn flat_map_contract() {
    let profile = sample_profile();
    let flat = to_flat_json(&profile);

    assert_eq!(flat["table_row_count"], serde_json::json!(5));
    assert_eq!(flat["age_null_count"], serde_json::json!(1));
    assert_eq!(flat["age_min"], serde_json::json!(25));
    assert!(flat["age_mean"].is_number());
    assert!(flat["age_kurtosis"].is_number());
    assert_eq!(flat["city_min"], serde_json::json!("Delhi"));
    assert!(flat.contains_key("age_histogram"));
    assert!(flat.contains_key("city_top_k"));
    assert!(flat.contains_key("correlations"));

    let pearson = &flat["correlations"]["pearson"];
    let age_row = pearson
        .as_array()
        .expect("pearson rows")
        .iter()
        .find(|row| row["column"] == "age")
        .expect("age row");
    assert_eq!(age_row["age"], serde_json::json!(1.0));

    assert_eq!(flat["_meta"]["correlation_method"], "exact");
    assert!(flat["_meta"]["warnings"].as_array().expect("warnings").is_empty());

    // Histogram bins expose the documented struct keys.
    let first_bin = &flat["age_histogram"][0];
    assert!(first_bin.get("breakpoint").is_some());
    assert!(first_bin.get("count").is_some());
}

#[test]
fn empty_frame_profiles_cleanly() {
    let frame = Frame::new(vec![
        Column::new("a", ColumnData::Int(vec![])),
        Column::new("b", ColumnData::Utf8(vec![])),
    ])
    .expect("valid frame");

    let profile = ProfileEngine::new(ProfileOptions::default())
        .run(&frame)
        .expect("profile run");

    assert_eq!(profile.row_count, 0);
    let a = profile.column("a").expect("column a");
    assert_eq!(a.null_count, 0);
    assert!(a.top_k.is_empty());
    assert!(a.numeric().expect("numeric stats").mean.is_none());
    assert!(a
        .numeric()
        .expect("numeric stats")
        .histogram
        .is_none());
}

#[test]
fn all_null_column_keeps_null_scalars() {
    let frame = Frame::new(vec![Column::new(
        "empty",
        ColumnData::Float(vec![None, None, None]),
    )])
    .expect("valid frame");

    let profile = ProfileEngine::new(ProfileOptions::default())
        .run(&frame)
        .expect("profile run");

    let column = profile.column("empty").expect("empty column");
    assert_eq!(column.null_count, 3);
    assert_eq!(column.n_unique, 0);
    let stats = column.numeric().expect("numeric stats");
    assert!(stats.min.is_none());
    assert!(stats.mean.is_none());
    assert!(stats.histogram.is_none());
}

#[test]
fn nan_values_degrade_to_a_warning() {
    let frame = Frame::new(vec![Column::new(
        "reading",
        ColumnData::Float(vec![Some(1.0), Some(f64::NAN), Some(3.0)]),
    )])
    .expect("valid frame");

    let profile = ProfileEngine::new(ProfileOptions::default())
        .run(&frame)
        .expect("profile run");

    assert_eq!(profile.meta.warnings.len(), 1);
    assert!(profile.meta.warnings[0].contains("non-finite"));

    // Stats are computed over the finite values only.
    let stats = profile
        .column("reading")
        .and_then(|c| c.numeric())
        .expect("numeric stats");
    assert!(close(stats.mean.expect("mean"), 2.0));
}

#[test]
fn zero_bins_is_rejected() {
    let options = ProfileOptions { bins: 0, top_k: 10 };
    let result = ProfileEngine::new(options).run(&sample_frame());
    assert!(result.is_err());
}

#[test]
fn boolean_columns_are_categorical() {
    let frame = Frame::new(vec![Column::new(
        "active",
        ColumnData::Bool(vec![Some(true), Some(true), Some(false), None]),
    )])
    .expect("valid frame");

    let profile = ProfileEngine::new(ProfileOptions::default())
        .run(&frame)
        .expect("profile run");

    let column = profile.column("active").expect("active column");
    assert!(matches!(column.stats, ColumnStats::Categorical));
    assert_eq!(column.n_unique, 2);
    assert_eq!(column.top_k[0].value, Value::Bool(true));
    assert_eq!(column.top_k[0].count, 2);

    // No numeric or string keys leak into the flat map for booleans.
    let flat = to_flat_json(&profile);
    assert!(!flat.contains_key("active_mean"));
    assert!(!flat.contains_key("active_min_length"));
    assert!(flat.contains_key("active_top_k"));
}
