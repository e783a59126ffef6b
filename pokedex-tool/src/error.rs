use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PkdxError {
    #[error("Config error in {path}: {source}")]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("Pokedex error: {0}")]
    Pokedex(#[from] pokedex_api::PokedexError),
}
