use httpcraft::config::{CONFIG_ENV, Config, LISTEN_ENV};
use std::sync::Mutex;

// Tests in this file mutate process-wide environment variables.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn clear_env() {
    unsafe {
        std::env::remove_var(LISTEN_ENV);
        std::env::remove_var(CONFIG_ENV);
    }
}

#[test]
fn test_config_defaults() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let cfg = Config::load_from(["httpcraft"]).unwrap();
    assert_eq!(cfg.listen_addr, "0.0.0.0:4221");
    assert_eq!(cfg.directory, None);
    assert_eq!(cfg.backlog, 5);
    assert_eq!(cfg.read_buffer_size, 65535);
}

#[test]
fn test_config_directory_flag() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let cfg = Config::load_from(["httpcraft", "--directory", "/tmp/files/"]).unwrap();
    assert_eq!(cfg.directory.as_deref(), Some("/tmp/files/"));
}

#[test]
fn test_config_rejects_unknown_flag() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    assert!(Config::load_from(["httpcraft", "--port", "80"]).is_err());
}

#[test]
fn test_config_listen_from_env() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();
    unsafe {
        std::env::set_var(LISTEN_ENV, "127.0.0.1:8000");
    }

    let cfg = Config::load_from(["httpcraft"]).unwrap();
    assert_eq!(cfg.listen_addr, "127.0.0.1:8000");

    clear_env();
}

#[test]
fn test_config_from_yaml_partial() {
    let cfg = Config::from_yaml_str("directory: /srv/data\nmax_connections: 8\n").unwrap();

    assert_eq!(cfg.directory.as_deref(), Some("/srv/data"));
    assert_eq!(cfg.max_connections, 8);
    // Unset keys keep their defaults
    assert_eq!(cfg.listen_addr, "0.0.0.0:4221");
}

#[test]
fn test_config_from_yaml_invalid() {
    assert!(Config::from_yaml_str("backlog: lots").is_err());
    assert!(Config::from_yaml_str("max_connections: 0").is_err());
    assert!(Config::from_yaml_str("read_buffer_size: 0\nlisten_addr: 127.0.0.1:0").is_err());
}

#[test]
fn test_config_file_layers_under_env_and_cli() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let path = std::env::temp_dir().join(format!("httpcraft-config-{}.yaml", std::process::id()));
    std::fs::write(
        &path,
        "listen_addr: 127.0.0.1:9000\ndirectory: /from/file\nbacklog: 16\n",
    )
    .unwrap();

    unsafe {
        std::env::set_var(CONFIG_ENV, &path);
        std::env::set_var(LISTEN_ENV, "127.0.0.1:9001");
    }

    let cfg = Config::load_from(["httpcraft", "--directory", "/from/cli"]).unwrap();
    assert_eq!(cfg.listen_addr, "127.0.0.1:9001");
    assert_eq!(cfg.directory.as_deref(), Some("/from/cli"));
    assert_eq!(cfg.backlog, 16);

    clear_env();
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_config_missing_file_is_an_error() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();
    unsafe {
        std::env::set_var(CONFIG_ENV, "/nonexistent/httpcraft.yaml");
    }

    assert!(Config::load_from(["httpcraft"]).is_err());

    clear_env();
}
