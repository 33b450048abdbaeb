use chrono::TimeDelta;
use foundry_options::{Options, Value};

#[test]
fn test_json_document_decodes_into_options() {
    let opts: Options = serde_json::from_str(
        r#"{
            "filename": "LICENSE",
            "retries": 3,
            "ratio": 4.0,
            "timeout": "15m",
            "verbose": true,
            "tags": ["a", "b"],
            "ports": [80, 443],
            "limits": { "max": 10 },
            "nothing": null
        }"#,
    )
    .expect("valid json");

    assert_eq!(opts.string("filename"), "LICENSE");
    assert_eq!(opts.int("retries"), 3);
    assert_eq!(opts.uint("ratio"), 4);
    assert_eq!(opts.duration("timeout"), TimeDelta::minutes(15));
    assert!(opts.bool("verbose"));
    assert_eq!(opts.string_slice("tags"), ["a", "b"]);
    assert_eq!(opts.int_slice("ports"), [80, 443]);
    assert_eq!(opts.options("limits").int("max"), 10);
    assert!(opts.has("nothing"));
    assert_eq!(opts.string_or("nothing", "-"), "-");
}

#[test]
fn test_json_integers_prefer_signed() {
    let opts: Options =
        serde_json::from_str(r#"{"small": 7, "huge": 18446744073709551615}"#).expect("json");
    assert!(matches!(opts.get("small"), Some(Value::Int(7))));
    assert!(matches!(opts.get("huge"), Some(Value::Uint(u64::MAX))));
}

#[test]
fn test_toml_document_decodes_into_options() {
    let opts: Options = toml::from_str(
        r#"
            name = "printer"
            at = "2022-01-02 15:14:00+07:00"
            weights = [0.5, 1.5]

            [nested]
            enabled = "yes"
        "#,
    )
    .expect("valid toml");

    assert_eq!(opts.string("name"), "printer");
    assert_eq!(opts.time("at").to_rfc3339(), "2022-01-02T15:14:00+07:00");
    assert_eq!(opts.float_slice("weights"), [0.5, 1.5]);
    assert!(opts.options("nested").bool_or("enabled", true));
}

#[test]
fn test_bare_string_is_not_a_bag() {
    let result = serde_json::from_str::<Options>(r#""LICENSE""#);
    assert!(result.is_err());
}
