//! Tests for configuration loading and connection URL assembly

use bizdir::{DatabaseConfig, Driver, Error};

#[test]
fn toml_descriptor_loads_all_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("database.toml");
    std::fs::write(
        &path,
        r#"
driver = "mysql"
host = "db.example.net"
port = 3307
database = "registry"
username = "reader"
password = "s3cret"
charset = "utf8mb4"
"#,
    )
    .unwrap();

    let config = DatabaseConfig::from_toml_file(&path).unwrap();
    assert_eq!(config.driver, Driver::Mysql);
    assert_eq!(config.host.as_deref(), Some("db.example.net"));
    assert_eq!(config.port, Some(3307));
    assert_eq!(config.database.as_deref(), Some("registry"));
    assert_eq!(config.username.as_deref(), Some("reader"));
    assert_eq!(config.password.as_deref(), Some("s3cret"));
    assert_eq!(config.charset.as_deref(), Some("utf8mb4"));
}

#[test]
fn toml_descriptor_with_only_required_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("database.toml");
    std::fs::write(
        &path,
        r#"
driver = "sqlite"
database = "/var/lib/registry/registry.db"
"#,
    )
    .unwrap();

    let config = DatabaseConfig::from_toml_file(&path).unwrap();
    assert_eq!(config.driver, Driver::Sqlite);
    assert_eq!(config.host, None);
    assert_eq!(
        config.connection_url().unwrap(),
        "sqlite:///var/lib/registry/registry.db?mode=rwc"
    );
}

#[test]
fn unknown_driver_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("database.toml");
    std::fs::write(&path, "driver = \"oracle\"\ndatabase = \"registry\"\n").unwrap();

    let err = DatabaseConfig::from_toml_file(&path).unwrap_err();
    assert!(matches!(err, Error::Config(_)), "unexpected: {:?}", err);
}

#[test]
fn missing_file_is_config_error() {
    let err = DatabaseConfig::from_toml_file("/nonexistent/database.toml").unwrap_err();
    match err {
        Error::Config(msg) => assert!(msg.contains("/nonexistent/database.toml")),
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn malformed_toml_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("database.toml");
    std::fs::write(&path, "driver = [broken\n").unwrap();

    let err = DatabaseConfig::from_toml_file(&path).unwrap_err();
    assert!(matches!(err, Error::Config(_)), "unexpected: {:?}", err);
}
