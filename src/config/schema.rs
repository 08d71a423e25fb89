use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/shelf/config.toml` or `~/.config/shelf/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SHELF__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
    pub catalog: CatalogSettings,
    pub navigation: NavigationSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Title of the top header box.
    pub header_title: String,

    /// The text rendered inside the top header box.
    pub header_text: String,

    /// Whether to draw the status line (focused route, last navigation).
    pub show_status: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_title: " shelf ".to_string(),
            header_text: " ~ Your library, one row at a time ~ ".to_string(),
            show_status: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Catalog file to open when none is given on the command line.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NavigationSettings {
    /// End the session on the first navigation and print its route.
    pub exit_on_select: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: LogLevel,
    /// Log file; defaults to `$XDG_STATE_HOME/shelf/shelf.log`.
    pub file: Option<PathBuf>,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    Off,
    Error,
    #[serde(alias = "warning")]
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter(self) -> log::LevelFilter {
        match self {
            Self::Off => log::LevelFilter::Off,
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}
