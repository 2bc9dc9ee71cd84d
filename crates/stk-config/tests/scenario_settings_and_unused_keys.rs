//! Typed settings + unused-key guard.
//!
//! Validates:
//! 1) Absent keys fall back to defaults.
//! 2) Every consumed key is read into `StreakSettings`.
//! 3) Invalid values fail with the offending pointer in the message.
//! 4) Unused keys are reported in WARN mode and fail in FAIL mode.
//! 5) A config that only uses consumed keys is clean.
//! 6) Empty mappings (`input: {}`) set nothing and are not unused keys.

use stk_config::{
    load_layered_yaml_from_strings, report_unused_keys, OutputFormat, StreakSettings,
    UnusedKeyPolicy,
};
use stk_series::SeriesFormat;

const FULL_YAML: &str = r#"
input:
  format: csv
  column: daily_pnl
  delimiter: ";"
output:
  format: json
logging:
  filter: "stk_cli=debug"
"#;

#[test]
fn empty_config_yields_defaults() {
    let loaded = load_layered_yaml_from_strings(&["{}"]).unwrap();
    let s = StreakSettings::from_config_json(&loaded.config_json).unwrap();

    assert_eq!(s, StreakSettings::default());
    assert_eq!(s.input_format, SeriesFormat::Auto);
    assert_eq!(s.delimiter, ',');
    assert_eq!(s.output, OutputFormat::Text);
    assert_eq!(s.log_filter, "warn");
}

#[test]
fn all_consumed_keys_are_read() {
    let loaded = load_layered_yaml_from_strings(&[FULL_YAML]).unwrap();
    let s = StreakSettings::from_config_json(&loaded.config_json).unwrap();

    assert_eq!(s.input_format, SeriesFormat::Csv);
    assert_eq!(s.column.as_deref(), Some("daily_pnl"));
    assert_eq!(s.delimiter, ';');
    assert_eq!(s.output, OutputFormat::Json);
    assert_eq!(s.log_filter, "stk_cli=debug");

    let opts = s.series_options();
    assert_eq!(opts.format, SeriesFormat::Csv);
    assert_eq!(opts.column.as_deref(), Some("daily_pnl"));
    assert_eq!(opts.delimiter, ';');
}

#[test]
fn invalid_values_name_the_pointer() {
    let cases = [
        ("input:\n  format: parquet\n", "/input/format"),
        ("input:\n  delimiter: \"::\"\n", "/input/delimiter"),
        ("input:\n  delimiter: \"-\"\n", "/input/delimiter"),
        ("input:\n  delimiter: \".\"\n", "/input/delimiter"),
        ("input:\n  delimiter: \"e\"\n", "/input/delimiter"),
        ("logging:\n  filter: \"stk=loud\"\n", "/logging/filter"),
        ("input:\n  column: \"  \"\n", "/input/column"),
        ("output:\n  format: xml\n", "/output/format"),
        ("output:\n  format: 3\n", "/output/format"),
    ];

    for (yaml, ptr) in cases {
        let loaded = load_layered_yaml_from_strings(&[yaml]).unwrap();
        let err = StreakSettings::from_config_json(&loaded.config_json)
            .expect_err("invalid value must be rejected")
            .to_string();
        assert!(err.contains(ptr), "expected '{ptr}' in: {err}");
    }
}

#[test]
fn warn_mode_reports_unused_keys_without_error() {
    let yaml = r#"
input:
  column: pnl
  colunm: typo
chart:
  title: "ignored"
"#;
    let loaded = load_layered_yaml_from_strings(&[yaml]).unwrap();
    let report = report_unused_keys(&loaded.config_json, UnusedKeyPolicy::Warn)
        .expect("warn mode must not error");

    assert!(!report.is_clean());
    assert_eq!(
        report.unused_leaf_pointers,
        vec!["/chart/title".to_string(), "/input/colunm".to_string()],
        "unused pointers are sorted and exclude consumed keys"
    );
}

#[test]
fn fail_mode_errors_on_unused_keys() {
    let yaml = "output:\n  format: text\n  colour: red\n";
    let loaded = load_layered_yaml_from_strings(&[yaml]).unwrap();

    let err = report_unused_keys(&loaded.config_json, UnusedKeyPolicy::Fail).unwrap_err();
    let msg = format!("{err:?}");
    assert!(msg.contains("CONFIG_UNUSED_KEYS"), "got: {msg}");
    assert!(msg.contains("/output/colour"), "got: {msg}");
}

#[test]
fn consumed_only_config_is_clean() {
    let loaded = load_layered_yaml_from_strings(&[FULL_YAML]).unwrap();
    let report = report_unused_keys(&loaded.config_json, UnusedKeyPolicy::Fail).unwrap();

    assert!(report.is_clean());
    assert_eq!(report.consumed_prefixes.len(), 5);
}

#[test]
fn empty_mappings_are_clean_in_fail_mode() {
    let yaml = "input: {}\noutput:\n  format: json\nlogging: {}\n";
    let loaded = load_layered_yaml_from_strings(&[yaml]).unwrap();

    let report = report_unused_keys(&loaded.config_json, UnusedKeyPolicy::Fail)
        .expect("empty mappings are not unused keys");
    assert!(report.is_clean());

    let s = StreakSettings::from_config_json(&loaded.config_json).unwrap();
    assert_eq!(s.output, OutputFormat::Json);
    assert_eq!(s.column, None);
}
