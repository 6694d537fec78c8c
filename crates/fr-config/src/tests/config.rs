use crate::Config;

use serial_test::serial;

#[test]
fn test_defaults() {
    let config = Config::default();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8000);
    assert_eq!(config.upstream.base_url, "http://127.0.0.1:9000");
    assert!(config.upstream.api_token.is_none());
    assert_eq!(config.upstream.timeout_secs, 30);
    assert_eq!(config.store.trash_actor, "admin");
    assert!(config.logging.file.is_none());
    assert!(config.logging.colored);
}

#[test]
fn test_default_config_validates() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_bind_addr_joins_host_and_port() {
    let mut config = Config::default();
    config.server.host = "0.0.0.0".into();
    config.server.port = 4321;

    assert_eq!(config.bind_addr(), "0.0.0.0:4321");
}

#[test]
#[serial]
fn test_load_reads_toml_from_config_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        r#"
            [server]
            port = 8100

            [upstream]
            base_url = "https://backend.example.com"
            timeout_secs = 10

            [store]
            trash_actor = "ops"
        "#,
    )
    .unwrap();

    // SAFETY: serialized test; no other thread reads the environment.
    unsafe { std::env::set_var("FR_CONFIG_DIR", dir.path()) };
    let config = Config::load().unwrap();
    unsafe { std::env::remove_var("FR_CONFIG_DIR") };

    assert_eq!(config.server.port, 8100);
    assert_eq!(config.upstream.base_url, "https://backend.example.com");
    assert_eq!(config.upstream.timeout_secs, 10);
    assert_eq!(config.store.trash_actor, "ops");
    // Untouched sections keep their defaults.
    assert_eq!(config.server.host, "127.0.0.1");
}

#[test]
#[serial]
fn test_env_overrides_win_over_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        r#"
            [upstream]
            base_url = "http://from-file:9000"
        "#,
    )
    .unwrap();

    unsafe {
        std::env::set_var("FR_CONFIG_DIR", dir.path());
        std::env::set_var("FR_UPSTREAM_BASE_URL", "http://from-env:9000");
        std::env::set_var("FR_UPSTREAM_API_TOKEN", "secret-token");
        std::env::set_var("FR_SERVER_PORT", "8222");
    }
    let config = Config::load().unwrap();
    unsafe {
        std::env::remove_var("FR_CONFIG_DIR");
        std::env::remove_var("FR_UPSTREAM_BASE_URL");
        std::env::remove_var("FR_UPSTREAM_API_TOKEN");
        std::env::remove_var("FR_SERVER_PORT");
    }

    assert_eq!(config.upstream.base_url, "http://from-env:9000");
    assert_eq!(config.upstream.api_token.as_deref(), Some("secret-token"));
    assert_eq!(config.server.port, 8222);
}

#[test]
#[serial]
fn test_load_without_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();

    unsafe { std::env::set_var("FR_CONFIG_DIR", dir.path()) };
    let config = Config::load().unwrap();
    unsafe { std::env::remove_var("FR_CONFIG_DIR") };

    assert_eq!(config.server.port, 8000);
    assert_eq!(config.store.trash_actor, "admin");
}

#[test]
#[serial]
fn test_unparseable_env_value_is_ignored() {
    let dir = tempfile::tempdir().unwrap();

    unsafe {
        std::env::set_var("FR_CONFIG_DIR", dir.path());
        std::env::set_var("FR_SERVER_PORT", "not-a-port");
    }
    let config = Config::load().unwrap();
    unsafe {
        std::env::remove_var("FR_CONFIG_DIR");
        std::env::remove_var("FR_SERVER_PORT");
    }

    assert_eq!(config.server.port, 8000);
}
