//! End-to-end report generation against a fixture ABI package
//!
//! Covers:
//! 1. Loading a package file and a package directory
//! 2. Contract resolution and event extraction
//! 3. Event, signature, describe and topic reports

use std::fs;
use std::path::{Path, PathBuf};

use eventsig::modules::{describe, events, explore, signatures, topic};
use eventsig::{AbiPackage, ContractAbi, EventRegistry, PackageError, PackageLoader};

const TRANSFER_TOPIC: &str = "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef";

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("routes.json")
}

fn fixture() -> AbiPackage {
    let (package, stats) = PackageLoader::load(fixture_path()).expect("fixture loads");
    assert_eq!(stats.scanned_files, 1);
    assert!(stats.errors.is_empty());
    package
}

fn contracts(package: &AbiPackage) -> Vec<ContractAbi> {
    ["IntentSource", "Inbox"]
        .iter()
        .map(|name| package.contract(name).expect("contract present"))
        .collect()
}

#[test]
fn test_fixture_exports() {
    let package = fixture();
    assert_eq!(
        package.export_names(),
        ["IntentSourceAbi", "InboxAbi", "version", "chains"]
    );
    assert_eq!(package.contract_names(), ["IntentSource", "Inbox"]);
}

#[test]
fn test_intent_source_events() {
    let package = fixture();
    let source = package.contract("IntentSource").unwrap();

    let names: Vec<&str> = source.events().iter().map(|e| e.name()).collect();
    assert_eq!(names, ["IntentCreated", "IntentFunded", "Withdrawal"]);

    let created = source.event("IntentCreated").unwrap();
    assert_eq!(
        created.signature(),
        "IntentCreated(bytes32,bytes32,uint256,uint256,address,(address,uint256)[],address,uint256)"
    );
    assert_eq!(created.const_name(), "INTENT_CREATED_EVENT_SIG");
    assert_eq!(created.topic_hex().len(), 66);
    assert_eq!(created.inputs()[5].kind, "tuple[]");
}

#[test]
fn test_events_report() {
    let package = fixture();
    let report = events::render(&contracts(&package));
    let text = report.as_str();

    assert!(text.starts_with("=== INTENTSOURCE CONTRACT EVENTS ===\n\nEVENT: IntentCreated\nFields:\n"));
    assert!(text.contains("  0: hash (bytes32) (indexed)\n  1: salt (bytes32)\n"));
    assert!(text.contains("  5: routeTokens (tuple[])\n  6: creator (address) (indexed)\n"));
    assert!(text.contains("\n=== INBOX CONTRACT EVENTS ===\n\nEVENT: Fulfillment\n"));
    assert!(text.contains("\n=== COMPLETE EVENT STRUCTURES ===\n\nIntentSource Events:\nIntentCreated:\n{\n  \"type\": \"event\",\n  \"name\": \"IntentCreated\","));
    assert!(text.contains("Inbox Events:\nFulfillment:\n"));
}

#[test]
fn test_signatures_report() {
    let package = fixture();
    let report = signatures::render(&contracts(&package), true);
    let text = report.as_str();

    assert!(text.starts_with("IntentSource ABI:\n[\n  {\n    \"type\": \"constructor\","));
    assert!(text.contains("\n\n\nInbox ABI:\n["));
    assert!(text.contains(
        "\nInbox Event Signatures:\nFulfillment: Fulfillment(bytes32,uint256,address) -> 0x"
    ));
    assert!(text.contains(&format!(
        "Transfer: Transfer(address,address,uint256) -> {TRANSFER_TOPIC}\n"
    )));
    assert!(text.contains(&format!(
        "const TRANSFER_EVENT_SIG: [u8; 32] = hex!(\"{}\");\n",
        &TRANSFER_TOPIC[2..]
    )));
    assert!(text.contains("\nKeccak256 Event Hashes (for Rust):\n// IntentSource Events\nconst INTENT_CREATED_EVENT_SIG"));
    assert!(text.contains("\n\n// Inbox Events\nconst FULFILLMENT_EVENT_SIG"));
}

#[test]
fn test_describe_report() {
    let package = fixture();
    let source = package.contract("IntentSource").unwrap();

    let found = describe::render(&source, "IntentFunded");
    assert!(found
        .as_str()
        .ends_with("Input Fields:\n0: intentHash (bytes32) - indexed: false\n1: funder (address) - indexed: false\n"));

    let missing = describe::render(&source, "Refund");
    assert_eq!(missing.as_str(), "Refund event not found\n");
}

#[test]
fn test_topic_report_across_contracts() {
    let package = fixture();
    let contracts = contracts(&package);
    let registry = EventRegistry::from_contracts(&contracts);
    assert_eq!(registry.len(), 5);

    let report = topic::render(&registry, TRANSFER_TOPIC).unwrap();
    assert_eq!(report.as_str(), "Inbox.Transfer: Transfer(address,address,uint256)\n");

    let created = contracts[0].event("IntentCreated").unwrap().topic_hex();
    let report = topic::render(&registry, &created).unwrap();
    assert!(report.as_str().starts_with("IntentSource.IntentCreated: IntentCreated("));
}

#[test]
fn test_explore_report() {
    let report = explore::run(&fixture_path(), "IntentSource");
    assert_eq!(
        report.as_str(),
        "Available exports: [IntentSourceAbi, InboxAbi, version, chains]\nIntentSource found directly\n"
    );

    let report = explore::run(&fixture_path(), "Prover");
    assert!(report.as_str().contains("Full routes object:\n{\n  \"IntentSourceAbi\": ["));
}

#[test]
fn test_missing_contract() {
    let package = fixture();
    assert!(matches!(
        package.contract("Prover"),
        Err(PackageError::MissingContract(name)) if name == "Prover"
    ));
    assert!(matches!(
        package.contract("version"),
        Err(PackageError::MissingContract(_))
    ));
}

#[test]
fn test_directory_package() {
    let dir = tempfile::tempdir().unwrap();
    let abis = dir.path().join("abis");
    fs::create_dir_all(&abis).unwrap();
    fs::create_dir_all(dir.path().join("node_modules")).unwrap();

    let token = r#"[{
        "type": "event",
        "name": "Transfer",
        "anonymous": false,
        "inputs": [
            { "name": "from", "type": "address", "indexed": true },
            { "name": "to", "type": "address", "indexed": true },
            { "name": "value", "type": "uint256", "indexed": false }
        ]
    }]"#;
    fs::write(abis.join("TokenAbi.json"), token).unwrap();
    fs::write(
        abis.join("Vault.json"),
        format!(r#"{{ "contractName": "Vault", "abi": {token} }}"#),
    )
    .unwrap();
    fs::write(abis.join("broken.json"), "{ not json").unwrap();
    fs::write(abis.join("README.md"), "ignored").unwrap();
    fs::write(dir.path().join("node_modules").join("Dep.json"), "[]").unwrap();

    let (package, stats) = PackageLoader::load(dir.path()).unwrap();
    assert_eq!(stats.scanned_files, 3);
    assert_eq!(stats.errors.len(), 1);
    assert_eq!(package.export_names(), ["TokenAbi", "Vault"]);

    let token = package.contract("Token").unwrap();
    let vault = package.contract("Vault").unwrap();
    assert_eq!(token.events()[0].topic_hex(), TRANSFER_TOPIC);
    assert_eq!(vault.events()[0].topic_hex(), TRANSFER_TOPIC);
}

#[test]
fn test_bare_array_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Inbox.json");
    fs::write(&path, "[]").unwrap();

    let (package, _) = PackageLoader::load(&path).unwrap();
    assert_eq!(package.export_names(), ["InboxAbi"]);
    assert!(package.contract("Inbox").unwrap().is_empty());
}

#[test]
fn test_minimal_event_items() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("routes.json");
    fs::write(
        &path,
        r#"{
            "InboxAbi": [
                { "type": "event", "name": "Fulfillment", "inputs": [
                    { "name": "_hash", "type": "bytes32", "indexed": true },
                    { "name": "_claimant", "type": "address" }
                ] },
                { "type": "event", "name": "Paused" }
            ]
        }"#,
    )
    .unwrap();

    let (package, _) = PackageLoader::load(&path).unwrap();
    let inbox = package.contract("Inbox").unwrap();
    let report = events::render(&[inbox]);

    assert!(report.as_str().contains(
        "EVENT: Fulfillment\nFields:\n  0: _hash (bytes32) (indexed)\n  1: _claimant (address)\n---\n"
    ));
    assert!(report.as_str().contains("EVENT: Paused\nFields:\n---\n"));
    assert!(!report.as_str().contains("\"anonymous\""));
}
