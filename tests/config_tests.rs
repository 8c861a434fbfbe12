//! Configuration loading tests
//!
//! Kept to a single test touching the process environment so parallel tests
//! cannot observe each other's variables.

use golinks::config::StaticConfig;
use tempfile::TempDir;

#[test]
fn test_file_then_env_override() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("golinks.toml");
    std::fs::write(
        &path,
        r#"
[server]
host = "127.0.0.1"
port = 9000

[database]
database_url = "sqlite://from-file.db"

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let path_str = path.to_str().unwrap();

    let from_file = StaticConfig::try_load(path_str).unwrap();
    assert_eq!(from_file.server.host, "127.0.0.1");
    assert_eq!(from_file.server.port, 9000);
    assert_eq!(from_file.database.database_url, "sqlite://from-file.db");
    assert_eq!(from_file.logging.level, "debug");
    assert_eq!(from_file.logging.format, "text");

    unsafe {
        std::env::set_var("GOLINKS__SERVER__PORT", "9191");
    }
    let overridden = StaticConfig::try_load(path_str);
    unsafe {
        std::env::remove_var("GOLINKS__SERVER__PORT");
    }

    let overridden = overridden.unwrap();
    assert_eq!(overridden.server.port, 9191);
    assert_eq!(overridden.server.host, "127.0.0.1");
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let config = StaticConfig::load(path.to_str());
    assert_eq!(config.database.database_url, "golinks.db");
    assert_eq!(config.logging.level, "info");
}
