// File: crates/curve-core/src/error.rs
// Summary: Errors raised while loading or validating curve parameters.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("failed to read config file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse TOML configuration")]
    Toml(#[from] toml::de::Error),
    #[error("invalid curve parameters: {0}")]
    Invalid(String),
}
