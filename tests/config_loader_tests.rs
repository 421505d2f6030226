use provider_catalog::config::{ConfigError, ConfigLoader};
use std::{
    env, fs,
    path::PathBuf,
    sync::{Mutex, MutexGuard, OnceLock},
};
use tempfile::TempDir;

fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

fn env_guard() -> MutexGuard<'static, ()> {
    env_lock()
        .lock()
        .unwrap_or_else(|poison| poison.into_inner())
}

fn clear_env() {
    unsafe {
        env::remove_var("CATALOG_PROFILE");
        env::remove_var("CATALOG_LOG_LEVEL");
        env::remove_var("CATALOG_LOG_FORMAT");
        env::remove_var("CATALOG_DATABASE_URL");
        env::remove_var("CATALOG_DB_MAX_CONNECTIONS");
        env::remove_var("CATALOG_DB_ACQUIRE_TIMEOUT_MS");
        env::remove_var("CATALOG_AUTO_MIGRATE");
    }
}

fn write_env_file(dir: &TempDir, name: &str, contents: &str) {
    let path = dir.path().join(name);
    fs::write(path, contents).unwrap();
}

#[test]
fn loads_defaults_when_no_env_present() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    let loader = ConfigLoader::with_base_dir(PathBuf::from(temp_dir.path()));
    let cfg = loader.load().expect("config loads with defaults");

    assert_eq!(cfg.profile, "local");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.log_format, "json");
    assert_eq!(cfg.db_max_connections, 10);
    assert_eq!(cfg.db_acquire_timeout_ms, 5000);
    assert!(!cfg.auto_migrate);
    clear_env();
}

#[test]
fn layered_env_files_apply_in_order() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(&temp_dir, ".env", "CATALOG_DATABASE_URL=sqlite://base.db\n");
    write_env_file(
        &temp_dir,
        ".env.test",
        "CATALOG_DATABASE_URL=sqlite://profile.db\nCATALOG_AUTO_MIGRATE=true\n",
    );
    write_env_file(
        &temp_dir,
        ".env.test.local",
        "CATALOG_DATABASE_URL=sqlite://profile-local.db\n",
    );

    // Select profile via .env.local before profile-specific files load.
    write_env_file(
        &temp_dir,
        ".env.local",
        "CATALOG_PROFILE=test\nCATALOG_DATABASE_URL=sqlite://local.db\nCATALOG_LOG_FORMAT=pretty\n",
    );

    let loader = ConfigLoader::with_base_dir(PathBuf::from(temp_dir.path()));
    let cfg = loader.load().expect("config loads with layered env files");

    assert_eq!(cfg.profile, "test");
    assert_eq!(cfg.database_url, "sqlite://profile-local.db");
    assert_eq!(cfg.log_format, "pretty");
    assert!(cfg.auto_migrate);
    clear_env();
}

#[test]
fn os_environment_has_highest_precedence() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(
        &temp_dir,
        ".env",
        "CATALOG_DATABASE_URL=sqlite://file.db\nCATALOG_DB_MAX_CONNECTIONS=3\n",
    );

    unsafe {
        env::set_var("CATALOG_DATABASE_URL", "sqlite::memory:");
    }

    let loader = ConfigLoader::with_base_dir(PathBuf::from(temp_dir.path()));
    let cfg = loader.load().expect("config loads with env override");
    assert_eq!(cfg.database_url, "sqlite::memory:");
    assert_eq!(cfg.db_max_connections, 3);

    clear_env();
}

#[test]
fn invalid_log_format_returns_error() {
    let _guard = env_guard();
    clear_env();

    unsafe {
        env::set_var("CATALOG_LOG_FORMAT", "xml");
    }
    let temp_dir = TempDir::new().unwrap();
    let loader = ConfigLoader::with_base_dir(PathBuf::from(temp_dir.path()));
    let err = loader.load().expect_err("invalid log format should fail");
    assert!(matches!(err, ConfigError::InvalidLogFormat { .. }));

    clear_env();
}

#[test]
fn zero_max_connections_returns_error() {
    let _guard = env_guard();
    clear_env();

    unsafe {
        env::set_var("CATALOG_DB_MAX_CONNECTIONS", "0");
    }
    let temp_dir = TempDir::new().unwrap();
    let loader = ConfigLoader::with_base_dir(PathBuf::from(temp_dir.path()));
    let err = loader.load().expect_err("zero connections should fail");
    assert!(format!("{}", err).contains("max connections"));

    clear_env();
}

#[test]
fn unparseable_auto_migrate_flag_returns_error() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(&temp_dir, ".env", "CATALOG_AUTO_MIGRATE=sometimes\n");

    let loader = ConfigLoader::with_base_dir(PathBuf::from(temp_dir.path()));
    let err = loader.load().expect_err("bad flag should fail");
    assert!(matches!(err, ConfigError::InvalidAutoMigrate { .. }));

    clear_env();
}

#[test]
fn empty_profile_falls_back_to_default_profile_files() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(&temp_dir, ".env.", "CATALOG_DATABASE_URL=sqlite://blank.db\n");
    write_env_file(
        &temp_dir,
        ".env.local.local",
        "CATALOG_DATABASE_URL=sqlite://local-profile.db\n",
    );

    unsafe {
        env::set_var("CATALOG_PROFILE", "");
    }

    let loader = ConfigLoader::with_base_dir(PathBuf::from(temp_dir.path()));
    let cfg = loader.load().expect("config loads with empty profile");
    assert_eq!(cfg.profile, "local");
    assert_eq!(cfg.database_url, "sqlite://local-profile.db");

    clear_env();
}
