#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use telemetry_core::TimestampFormat;
use telemetry_gateway::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
gateway:
  listen: "0.0.0.0:8000"
  request_timeout: 500 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.gateway.listen, "0.0.0.0:8000");
    assert_eq!(cfg.gateway.request_timeout_ms, 30_000);
    assert_eq!(cfg.ingest.timestamp_format, TimestampFormat::Rfc3339);
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
gateway:
  listen: "127.0.0.1:9000"
  request_timeout_ms: 1500
ingest:
  timestamp_format: any
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.gateway.listen, "127.0.0.1:9000");
    assert_eq!(cfg.gateway.request_timeout().as_millis(), 1500);
    assert_eq!(cfg.ingest.timestamp_format, TimestampFormat::Any);
}

#[test]
fn rejects_unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_CONFIG");
}

#[test]
fn rejects_out_of_range_timeout() {
    let bad = "version: 1\ngateway:\n  request_timeout_ms: 10\n";
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("request_timeout_ms"));
}

#[test]
fn rejects_invalid_listen() {
    let bad = "version: 1\ngateway:\n  listen: \"not-an-addr\"\n";
    assert!(config::load_from_str(bad).is_err());
}

#[test]
fn default_config_is_valid() {
    config::GatewayConfig::default().validate().expect("defaults must validate");
}

fn temp_config_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("telemetry-{}-{name}.yaml", std::process::id()))
}

#[test]
fn loads_existing_file() {
    let path = temp_config_path("load");
    std::fs::write(
        &path,
        "version: 1\ngateway:\n  listen: \"127.0.0.1:7000\"\n  drain_delay_ms: 0\n",
    )
    .unwrap();

    let p = path.to_str().unwrap();
    let from_file = config::load_from_file(p).expect("must load");
    let via_default = config::load_or_default(p).expect("must load");
    std::fs::remove_file(&path).unwrap();

    assert_eq!(from_file.gateway.listen, "127.0.0.1:7000");
    assert_eq!(from_file.gateway.drain_delay_ms, 0);
    assert_eq!(via_default.gateway.listen, "127.0.0.1:7000");
}

#[test]
fn invalid_file_is_not_replaced_by_defaults() {
    let path = temp_config_path("invalid");
    std::fs::write(&path, "version: 7\n").unwrap();

    let err = config::load_or_default(path.to_str().unwrap()).expect_err("must fail");
    std::fs::remove_file(&path).unwrap();

    assert_eq!(err.client_code().as_str(), "BAD_CONFIG");
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let path = temp_config_path("absent");
    let p = path.to_str().unwrap();

    let cfg = config::load_or_default(p).expect("defaults");
    assert_eq!(cfg.gateway.listen, "0.0.0.0:8000");
    assert_eq!(cfg.gateway.drain_delay_ms, 2_000);

    let err = config::load_from_file(p).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "INTERNAL");
}

#[test]
fn rejects_excessive_drain_delay() {
    let bad = "version: 1\ngateway:\n  drain_delay_ms: 600000\n";
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("drain_delay_ms"));
}
