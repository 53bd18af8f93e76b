#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use itemd_server::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:8080"
  max_body_byte: 2048 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    assert_eq!(cfg.server.max_body_bytes, 1024 * 1024);
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
server:
  listen: "127.0.0.1:3000"
  max_body_bytes: 4096
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 3000);
    assert_eq!(cfg.server.max_body_bytes, 4096);
}

#[test]
fn wrong_version_is_rejected() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn bad_listen_is_rejected() {
    let bad = r#"
version: 1
server:
  listen: "localhost"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("server.listen"));
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let path = std::env::temp_dir().join("itemd-config-that-does-not-exist.yaml");
    let cfg = config::load_or_default(&path).expect("defaults");
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
}

#[test]
fn present_but_invalid_file_is_an_error() {
    let path = std::env::temp_dir().join(format!("itemd-bad-{}.yaml", std::process::id()));
    std::fs::write(&path, "version: 1\nbogus: true\n").unwrap();
    let res = config::load_or_default(&path);
    std::fs::remove_file(&path).ok();
    assert!(res.is_err());
}
