//! Single event lookup

use super::Report;
use crate::domain::abi::ContractAbi;

/// Describe one event; a missing event is reported, not treated as an error
pub fn render(contract: &ContractAbi, event_name: &str) -> Report {
    let mut report = Report::new();

    let Some(event) = contract.event(event_name) else {
        report.line(format!("{event_name} event not found"));
        return report;
    };

    report.line(format!("{} Event Structure:", event.name()));
    report.json(event.raw());

    report.line("\nInput Fields:");
    for (index, input) in event.inputs().iter().enumerate() {
        report.line(format!(
            "{index}: {} ({}) - indexed: {}",
            input.name, input.kind, input.indexed
        ));
    }

    report
}
