use std::fs::{self, File};
use std::path::PathBuf;

use simplelog::{Config, WriteLogger};

use crate::config::{self, LogSettings};

/// Route `log` output to a file; the terminal belongs to the UI.
///
/// Logging is best effort: any failure is reported on stderr and the app
/// keeps running without a logger.
pub fn init(settings: &LogSettings) {
    let level = settings.level.to_filter();
    if level == log::LevelFilter::Off {
        return;
    }

    let Some(path) = log_path(settings) else {
        eprintln!("shelf: no log file location, logging disabled");
        return;
    };

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("shelf: cannot create {}: {e}", parent.display());
            return;
        }
    }

    let file = match File::create(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("shelf: cannot open log file {}: {e}", path.display());
            return;
        }
    };

    if let Err(e) = WriteLogger::init(level, Config::default(), file) {
        eprintln!("shelf: failed to initialize logger: {e}");
    }
}

fn log_path(settings: &LogSettings) -> Option<PathBuf> {
    settings.file.clone().or_else(config::default_log_path)
}
