//! Error types for package loading and ABI lookups

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackageError {
    #[error("read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} is neither an ABI package file nor a directory")]
    NotAPackage(PathBuf),

    #[error("export {0} is not a contract ABI")]
    NotAnAbi(String),

    #[error("contract {0} not found in package")]
    MissingContract(String),

    #[error("invalid event {name} in {contract}: {source}")]
    InvalidEvent {
        contract: String,
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid topic hash: {0}")]
    InvalidTopic(String),
}

pub type Result<T, E = PackageError> = std::result::Result<T, E>;
