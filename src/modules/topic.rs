//! Reverse lookup from a topic hash to the event that produces it

use super::Report;
use crate::domain::abi::EventRegistry;
use crate::error::Result;

pub fn render(registry: &EventRegistry, topic_hex: &str) -> Result<Report> {
    let mut report = Report::new();

    match registry.lookup_hex(topic_hex)? {
        Some(found) => report.line(format!(
            "{}.{}: {}",
            found.contract,
            found.event.name(),
            found.event.signature()
        )),
        None => report.line(format!("no event matches {}", topic_hex.trim())),
    }

    Ok(report)
}
