//! Event registry - indexes events by topic0

use std::collections::HashMap;

use alloy_primitives::B256;

use super::{ContractAbi, EventSpec};
use crate::error::{PackageError, Result};

/// An event and the contract that declares it
#[derive(Debug, Clone)]
pub struct RegisteredEvent {
    pub contract: String,
    pub event: EventSpec,
}

/// Registry of events indexed by topic hash
#[derive(Debug, Default, Clone)]
pub struct EventRegistry {
    events: HashMap<B256, RegisteredEvent>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry over several contracts, in the order given
    pub fn from_contracts<'a>(contracts: impl IntoIterator<Item = &'a ContractAbi>) -> Self {
        let mut registry = Self::new();
        for contract in contracts {
            for event in contract.events() {
                registry.insert(contract.name(), event.clone());
            }
        }
        registry
    }

    /// Insert an event
    ///
    /// Note: first event for a given topic wins (no overwrite)
    pub fn insert(&mut self, contract: &str, event: EventSpec) {
        self.events
            .entry(event.topic())
            .or_insert_with(|| RegisteredEvent {
                contract: contract.to_string(),
                event,
            });
    }

    pub fn lookup(&self, topic: B256) -> Option<&RegisteredEvent> {
        self.events.get(&topic)
    }

    /// Look up by topic hex string (e.g., "0xddf252ad...")
    pub fn lookup_hex(&self, topic_hex: &str) -> Result<Option<&RegisteredEvent>> {
        let topic = parse_topic(topic_hex)?;
        Ok(self.lookup(topic))
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

fn parse_topic(input: &str) -> Result<B256> {
    let trimmed = input.trim();
    let normalized = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if normalized.len() != 64 {
        return Err(PackageError::InvalidTopic(input.to_string()));
    }

    let bytes = hex::decode(normalized).map_err(|_| PackageError::InvalidTopic(input.to_string()))?;
    Ok(B256::from_slice(&bytes))
}
