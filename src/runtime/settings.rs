use crate::config;

/// Load settings, falling back to defaults when the config cannot be used.
///
/// The second value explains a fallback. It is returned rather than logged
/// because the logger itself is configured from these settings.
pub fn load_settings() -> (config::Settings, Option<String>) {
    settle(config::Settings::load())
}

fn settle(
    loaded: Result<config::Settings, ::config::ConfigError>,
) -> (config::Settings, Option<String>) {
    let source = config::resolve_config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "environment".to_string());

    match loaded {
        Ok(s) => match s.validate() {
            Ok(()) => (s, None),
            Err(msg) => (
                config::Settings::default(),
                Some(format!("invalid config in {source}, using defaults: {msg}")),
            ),
        },
        // Config is optional; failures should not prevent the catalog from opening.
        Err(e) => (
            config::Settings::default(),
            Some(format!("failed to load config from {source}, using defaults: {e}")),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn valid_settings_are_kept() {
        let mut s = config::Settings::default();
        s.catalog.path = Some(PathBuf::from("/srv/books.toml"));

        let (settled, fallback) = settle(Ok(s));
        assert_eq!(settled.catalog.path, Some(PathBuf::from("/srv/books.toml")));
        assert!(fallback.is_none());
    }

    #[test]
    fn invalid_settings_fall_back_with_the_reason() {
        let mut s = config::Settings::default();
        s.catalog.path = Some(PathBuf::new());

        let (settled, fallback) = settle(Ok(s));
        assert_eq!(settled.catalog.path, None);
        let reason = fallback.unwrap();
        assert!(reason.starts_with("invalid config in "));
        assert!(reason.contains("catalog.path must not be empty"));
    }

    #[test]
    fn load_errors_fall_back_with_the_reason() {
        let err = ::config::ConfigError::Message("bad toml".into());

        let (settled, fallback) = settle(Err(err));
        assert!(settled.ui.show_status);
        let reason = fallback.unwrap();
        assert!(reason.starts_with("failed to load config from "));
        assert!(reason.contains("bad toml"));
    }
}
