//! ABI extraction - full ABIs, event signatures, topic hashes and Rust constants

use serde_json::Value;

use super::Report;
use crate::domain::abi::ContractAbi;

pub fn render(contracts: &[ContractAbi], include_abi: bool) -> Report {
    let mut report = Report::new();

    if include_abi {
        for (i, contract) in contracts.iter().enumerate() {
            let lead = if i == 0 { "" } else { "\n\n" };
            report.line(format!("{lead}{} ABI:", contract.name()));
            report.json(&Value::Array(contract.raw().to_vec()));
        }
    }

    for contract in contracts {
        report.line(format!("\n{} Event Signatures:", contract.name()));
        for event in contract.events() {
            report.line(format!(
                "{}: {} -> {}",
                event.name(),
                event.signature(),
                event.topic_hex()
            ));
        }
    }

    report.line("\nKeccak256 Event Hashes (for Rust):");
    for (i, contract) in contracts.iter().enumerate() {
        let lead = if i == 0 { "" } else { "\n" };
        report.line(format!("{lead}// {} Events", contract.name()));
        for event in contract.events() {
            report.line(event.rust_const());
        }
    }

    report
}
