//! Event analysis - field listings followed by the raw event structures

use super::Report;
use crate::domain::abi::{ContractAbi, EventSpec};

pub fn render(contracts: &[ContractAbi]) -> Report {
    let mut report = Report::new();

    for (i, contract) in contracts.iter().enumerate() {
        let lead = if i == 0 { "" } else { "\n" };
        report.line(format!(
            "{lead}=== {} CONTRACT EVENTS ===\n",
            contract.name().to_uppercase()
        ));

        for event in contract.events() {
            field_listing(&mut report, event);
        }
    }

    report.line("\n=== COMPLETE EVENT STRUCTURES ===\n");

    for contract in contracts {
        report.line(format!("{} Events:", contract.name()));
        for event in contract.events() {
            report.line(format!("{}:", event.name()));
            report.json(event.raw());
            report.line("\n");
        }
    }

    report
}

fn field_listing(report: &mut Report, event: &EventSpec) {
    report.line(format!("EVENT: {}", event.name()));
    report.line("Fields:");
    for (index, input) in event.inputs().iter().enumerate() {
        let indexed = if input.indexed { " (indexed)" } else { "" };
        report.line(format!("  {index}: {} ({}){indexed}", input.name, input.kind));
    }
    report.line("---");
}
