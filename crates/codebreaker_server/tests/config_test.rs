//! Tests for loading server configuration from disk.

use codebreaker_server::{CodeSourceKind, ServerConfig};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

#[test]
fn test_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "host = \"0.0.0.0\"\nport = 3000\ncode_source = \"random-org\"\nrandom_org_url = \"http://localhost:9999\"\nrandom_org_timeout_ms = 500"
    )
    .unwrap();

    let config = ServerConfig::from_file(file.path()).unwrap();
    assert_eq!(config.bind_address(), "0.0.0.0:3000");
    assert_eq!(config.code_source(), CodeSourceKind::RandomOrg);
    assert_eq!(config.random_org_url(), "http://localhost:9999");
    assert_eq!(config.random_org_timeout(), Duration::from_millis(500));
}

#[test]
fn test_invalid_toml_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "port = \"not a number\"").unwrap();

    let err = ServerConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ServerConfig::from_file_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.bind_address(), "127.0.0.1:8080");
}

#[test]
fn test_missing_file_is_an_error_when_required() {
    let dir = tempfile::tempdir().unwrap();
    assert!(ServerConfig::from_file(dir.path().join("absent.toml")).is_err());
}
