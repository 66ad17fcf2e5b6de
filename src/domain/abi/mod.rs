//! ABI domain models
//!
//! Contracts, their events and the package exports they come from,
//! independent of how the package was read from disk.

mod contract;
mod event;
mod package;
mod registry;

pub use contract::ContractAbi;
pub use event::{EventInput, EventSpec};
pub use package::{AbiPackage, ContractLocation};
pub use registry::{EventRegistry, RegisteredEvent};
