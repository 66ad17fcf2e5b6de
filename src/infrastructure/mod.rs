//! Infrastructure layer - reading ABI packages from the filesystem

pub mod abi;

pub use abi::{LoadStats, PackageLoader};
