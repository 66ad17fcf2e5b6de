//! ABI infrastructure - package discovery and parsing

mod loader;

pub use loader::{LoadStats, PackageLoader};
