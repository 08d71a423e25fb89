use super::load::{default_config_path, default_log_path, resolve_config_path};
use super::schema::*;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_shelf_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("SHELF_CONFIG_PATH", "/tmp/shelf-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        PathBuf::from("/tmp/shelf-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    assert_eq!(
        default_config_path().unwrap(),
        PathBuf::from("/tmp/xdg-config-home")
            .join("shelf")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_config_path().unwrap(),
        PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("shelf")
            .join("config.toml")
    );
}

#[test]
fn default_log_path_uses_xdg_state_home_then_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_STATE_HOME", "/tmp/state");
    assert_eq!(
        default_log_path().unwrap(),
        PathBuf::from("/tmp/state/shelf/shelf.log")
    );

    let _g2 = EnvGuard::remove("XDG_STATE_HOME");
    let _g3 = EnvGuard::set("HOME", "/tmp/home-dir");
    assert_eq!(
        default_log_path().unwrap(),
        PathBuf::from("/tmp/home-dir/.local/state/shelf/shelf.log")
    );
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[ui]
header_title = " books "
header_text = "hello"
show_status = false

[catalog]
path = "/srv/books.json"

[navigation]
exit_on_select = true

[log]
level = "warning"
file = "/tmp/shelf.log"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("SHELF_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("SHELF__UI__HEADER_TEXT");

    let s = Settings::load().unwrap();
    assert_eq!(s.ui.header_title, " books ");
    assert_eq!(s.ui.header_text, "hello");
    assert!(!s.ui.show_status);
    assert_eq!(s.catalog.path, Some(PathBuf::from("/srv/books.json")));
    assert!(s.navigation.exit_on_select);
    assert_eq!(s.log.level, LogLevel::Warn);
    assert_eq!(s.log.file, Some(PathBuf::from("/tmp/shelf.log")));
    assert!(s.validate().is_ok());
}

#[test]
fn settings_missing_file_uses_defaults() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("absent.toml");
    let _g1 = EnvGuard::set("SHELF_CONFIG_PATH", cfg_path.to_str().unwrap());

    let s = Settings::load().unwrap();
    assert_eq!(s.ui.header_title, UiSettings::default().header_title);
    assert!(s.ui.show_status);
    assert_eq!(s.catalog.path, None);
    assert!(!s.navigation.exit_on_select);
    assert_eq!(s.log.level, LogLevel::Info);
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[ui]
header_text = "from file"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("SHELF_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("SHELF__UI__HEADER_TEXT", "from env");

    let s = Settings::load().unwrap();
    assert_eq!(s.ui.header_text, "from env");
}

#[test]
fn validate_rejects_blank_values() {
    let mut s = Settings::default();
    assert!(s.validate().is_ok());

    s.ui.header_title = "   ".into();
    assert!(s.validate().unwrap_err().contains("header_title"));

    let mut s = Settings::default();
    s.catalog.path = Some(PathBuf::new());
    assert!(s.validate().unwrap_err().contains("catalog.path"));

    let mut s = Settings::default();
    s.log.file = Some(PathBuf::new());
    assert!(s.validate().unwrap_err().contains("log.file"));
}

#[test]
fn log_level_maps_to_filter() {
    assert_eq!(LogLevel::Off.to_filter(), log::LevelFilter::Off);
    assert_eq!(LogLevel::default().to_filter(), log::LevelFilter::Info);
    assert_eq!(LogLevel::Trace.to_filter(), log::LevelFilter::Trace);
}
