//! End-to-end parses against a realistic option table.

use optset::{
    BoolOption, Error, Float64Option, Int32Option, IntOption, OptionSet, StringOption,
};

fn argv(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|s| s.to_string()).collect()
}

fn fetch_options() -> OptionSet {
    OptionSet::new()
        .with(BoolOption {
            name: "insecure".to_string(),
            short: "k".to_string(),
            description: "skip certificate checks".to_string(),
            ..Default::default()
        })
        .with(StringOption {
            name: "output".to_string(),
            short: "o".to_string(),
            arg_usage: "FILE".to_string(),
            description: "write response to FILE".to_string(),
            ..Default::default()
        })
        .with(IntOption {
            name: "port".to_string(),
            short: "p".to_string(),
            default_value: 443,
            description: "target port".to_string(),
            ..Default::default()
        })
        .with(Int32Option {
            name: "retries".to_string(),
            default_value: 3,
            description: "attempts before giving up".to_string(),
            ..Default::default()
        })
        .with(Float64Option {
            name: "timeout".to_string(),
            arg_usage: "SECONDS".to_string(),
            description: "request timeout".to_string(),
            ..Default::default()
        })
}

#[test]
fn full_invocation() {
    let parsed = fetch_options()
        .parse(&argv(&[
            "https://example.com",
            "-k",
            "-o",
            "-",
            "--timeout",
            "2.5",
            "--retries",
            "5",
        ]))
        .unwrap();

    assert!(parsed.values.flag("insecure"));
    // A lone dash is a legitimate value (conventionally stdout).
    assert_eq!(parsed.values.get_str("output"), Some("-"));
    assert_eq!(parsed.values.get_f64("timeout"), Some(2.5));
    assert_eq!(parsed.values.get_i32("retries"), Some(5));
    assert_eq!(parsed.values.get_i64("port"), Some(443));
    assert_eq!(parsed.rest, vec!["https://example.com"]);
}

#[test]
fn empty_argv_yields_defaults_only() {
    let parsed = fetch_options().parse(&[]).unwrap();
    assert_eq!(parsed.values.len(), 2);
    assert_eq!(parsed.values.get_i64("port"), Some(443));
    assert_eq!(parsed.values.get_i32("retries"), Some(3));
    assert!(parsed.rest.is_empty());
}

#[test]
fn flag_followed_by_flag_needs_no_value() {
    // -k is a bool; -o then has no value and must fail rather than eat -p.
    let err = fetch_options()
        .parse(&argv(&["-k", "-o", "-p", "80"]))
        .unwrap_err();
    match err {
        Error::MissingValue { usage } => assert_eq!(usage, "-o,--output=FILE"),
        other => panic!("expected MissingValue, got: {other:?}"),
    }
}

#[test]
fn repeated_option_last_one_wins() {
    let parsed = fetch_options()
        .parse(&argv(&["-p", "80", "--port", "8443"]))
        .unwrap();
    assert_eq!(parsed.values.get_i64("port"), Some(8443));
}

#[test]
fn table_defined_in_json_parses_identically() {
    let json = r#"[
        {"kind": "bool", "name": "insecure", "short": "k"},
        {"kind": "int", "name": "port", "short": "p", "default-value": 443}
    ]"#;
    let set: OptionSet = serde_json::from_str(json).expect("table should deserialize");

    let parsed = set.parse(&argv(&["-k"])).unwrap();
    assert!(parsed.values.flag("insecure"));
    assert_eq!(parsed.values.get_i64("port"), Some(443));
}

#[test]
fn help_block_reflects_the_table() {
    let help = fetch_options().help();
    assert!(help.contains("-k,--insecure"));
    assert!(help.contains("-o,--output=FILE"));
    assert!(help.contains("-p,--port=number"));
    assert!(help.contains("(default: 443)"));
    assert!(help.contains("--timeout=SECONDS"));
    // No default declared for timeout, so no annotation.
    assert!(!help.contains("request timeout (default"));
}
