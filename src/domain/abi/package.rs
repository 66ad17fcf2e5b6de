//! ABI package - a bundle of named exports, some of which are contract ABIs

use serde_json::{Map, Value};

use super::ContractAbi;
use crate::error::{PackageError, Result};

const ABI_SUFFIX: &str = "Abi";
const CONTRACTS_KEY: &str = "contracts";

/// Where a contract was found inside a package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractLocation {
    /// A top-level export (`<name>` or `<name>Abi`)
    Direct,
    /// Under the `contracts` export
    Contracts,
}

#[derive(Debug, Clone, Default)]
pub struct AbiPackage {
    exports: Map<String, Value>,
}

impl AbiPackage {
    pub fn new(exports: Map<String, Value>) -> Self {
        Self { exports }
    }

    /// Export names in package order
    pub fn export_names(&self) -> Vec<&str> {
        self.exports.keys().map(String::as_str).collect()
    }

    /// The whole package as one JSON object
    pub fn to_value(&self) -> Value {
        Value::Object(self.exports.clone())
    }

    /// Locate a contract ABI by name
    ///
    /// Tried in order: `<name>Abi`, `<name>`, `contracts.<name>`, `contracts.<name>Abi`.
    pub fn locate(&self, name: &str) -> Option<(ContractLocation, &Value)> {
        let suffixed = format!("{name}{ABI_SUFFIX}");

        let direct = [suffixed.as_str(), name]
            .into_iter()
            .filter_map(|key| self.exports.get(key))
            .find(|value| ContractAbi::is_abi(value));
        if let Some(value) = direct {
            return Some((ContractLocation::Direct, value));
        }

        let nested = self.exports.get(CONTRACTS_KEY)?;
        let found = [name, suffixed.as_str()]
            .into_iter()
            .filter_map(|key| nested.get(key))
            .find(|value| ContractAbi::is_abi(value))
            .map(|value| (ContractLocation::Contracts, value));
        found
    }

    /// Whether the package exports something under a contract's name, ABI or not
    ///
    /// An export counts when its value is truthy (not null, false, 0 or "").
    pub fn presence(&self, name: &str) -> Option<ContractLocation> {
        let suffixed = format!("{name}{ABI_SUFFIX}");
        let keys = [name, suffixed.as_str()];

        if keys
            .iter()
            .any(|key| self.exports.get(*key).is_some_and(is_truthy))
        {
            return Some(ContractLocation::Direct);
        }

        let nested = self.exports.get(CONTRACTS_KEY)?;
        keys.iter()
            .any(|key| nested.get(*key).is_some_and(is_truthy))
            .then_some(ContractLocation::Contracts)
    }

    pub fn contract(&self, name: &str) -> Result<ContractAbi> {
        let (_, value) = self
            .locate(name)
            .ok_or_else(|| PackageError::MissingContract(name.to_string()))?;
        ContractAbi::from_value(name, value)
    }

    /// Names of every top-level export that holds an ABI, `Abi` suffix stripped
    pub fn contract_names(&self) -> Vec<String> {
        self.exports
            .iter()
            .filter(|(_, value)| ContractAbi::is_abi(value))
            .map(|(key, _)| key.strip_suffix(ABI_SUFFIX).unwrap_or(key).to_string())
            .collect()
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
