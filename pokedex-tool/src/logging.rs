use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::PkdxError;

const DEFAULT_LEVEL: &str = "warn";

pub enum LogTarget {
    Stderr,
    /// Used while the terminal UI owns the screen.
    File(PathBuf),
}

/// `RUST_LOG` wins over the configured level.
fn build_filter(level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.unwrap_or(DEFAULT_LEVEL)))
}

pub fn init_tracing(level: Option<&str>, target: LogTarget) -> Result<(), PkdxError> {
    let filter = build_filter(level);
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let result = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    result.map_err(|e| PkdxError::Logging(e.to_string()))
}
