//! Package exploration - lists exports and reports where a contract lives

use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use super::Report;
use crate::domain::abi::{AbiPackage, ContractLocation};
use crate::infrastructure::PackageLoader;

/// Load the package and explore it, reporting load failures on stderr instead of propagating them
pub fn run(path: &Path, contract: &str) -> Report {
    run_with(path, contract, &mut io::stderr())
}

pub fn run_with(path: &Path, contract: &str, errors: &mut impl Write) -> Report {
    match PackageLoader::load(path) {
        Ok((package, _)) => render(&package, contract),
        Err(err) => {
            debug!(path = %path.display(), %err, "package load failed");
            if let Err(write_err) = writeln!(errors, "Error loading package: {err}") {
                debug!(%write_err, "could not report load failure");
            }
            Report::new()
        }
    }
}

pub fn render(package: &AbiPackage, contract: &str) -> Report {
    let mut report = Report::new();
    report.line(format!(
        "Available exports: [{}]",
        package.export_names().join(", ")
    ));

    match package.presence(contract) {
        Some(ContractLocation::Direct) => report.line(format!("{contract} found directly")),
        Some(ContractLocation::Contracts) => report.line(format!("{contract} found in contracts")),
        None => {
            report.line("Full routes object:");
            report.json(&package.to_value());
        }
    }

    report
}
