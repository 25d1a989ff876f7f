//! Error type for the fallible edges of syncboard.
//!
//! State updates and derivations never fail. Only terminal I/O, config
//! loading and snapshot argument resolution can.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Terminal or file I/O failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Config file could not be read
    #[error("failed to read config {path:?}: {source}")]
    ConfigRead { path: PathBuf, source: io::Error },

    /// Config file is not valid TOML or has unknown keys
    #[error("invalid config {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A button reference matched no configured button
    #[error("no button matches '{0}'")]
    UnknownButton(String),
}

pub type Result<T> = std::result::Result<T, Error>;
