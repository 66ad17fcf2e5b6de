//! Load contract ABI packages, print their events and compute event topic hashes.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod modules;

pub use domain::abi::{AbiPackage, ContractAbi, EventRegistry, EventSpec};
pub use error::PackageError;
pub use infrastructure::PackageLoader;
