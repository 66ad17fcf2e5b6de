//! A single contract ABI and the events it declares

use alloy_json_abi::Event;
use serde_json::Value;

use super::EventSpec;
use crate::error::{PackageError, Result};

#[derive(Debug, Clone)]
pub struct ContractAbi {
    name: String,
    raw: Vec<Value>,
    events: Vec<EventSpec>,
}

impl ContractAbi {
    /// Build from an ABI value: either a raw item array or an object with an `abi` field
    pub fn from_value(name: impl Into<String>, value: &Value) -> Result<Self> {
        let name = name.into();
        let items = Self::abi_items(value).ok_or_else(|| PackageError::NotAnAbi(name.clone()))?;

        let mut events = Vec::new();
        for item in items {
            if item.get("type").and_then(Value::as_str) != Some("event") {
                continue;
            }
            let event: Event =
                serde_json::from_value(with_event_defaults(item)).map_err(|source| {
                    PackageError::InvalidEvent {
                        contract: name.clone(),
                        name: item
                            .get("name")
                            .and_then(Value::as_str)
                            .unwrap_or_default()
                            .to_string(),
                        source,
                    }
                })?;
            events.push(EventSpec::new(event, item.clone()));
        }

        Ok(Self {
            name,
            raw: items.clone(),
            events,
        })
    }

    /// Whether a JSON value has the shape of an ABI
    pub fn is_abi(value: &Value) -> bool {
        Self::abi_items(value).is_some()
    }

    fn abi_items(value: &Value) -> Option<&Vec<Value>> {
        match value {
            Value::Array(items) => Some(items),
            Value::Object(map) => map.get("abi").and_then(Value::as_array),
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All ABI items in package order, events included
    pub fn raw(&self) -> &[Value] {
        &self.raw
    }

    /// Events in ABI order
    pub fn events(&self) -> &[EventSpec] {
        &self.events
    }

    /// First event with exactly this name
    pub fn event(&self, name: &str) -> Option<&EventSpec> {
        self.events.iter().find(|event| event.name() == name)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Copy of an event item with absent `anonymous`, `inputs` and `indexed` set to their defaults
fn with_event_defaults(item: &Value) -> Value {
    let mut item = item.clone();
    if let Some(map) = item.as_object_mut() {
        map.entry("anonymous").or_insert(Value::Bool(false));
        let inputs = map
            .entry("inputs")
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Some(inputs) = inputs.as_array_mut() {
            for input in inputs.iter_mut().filter_map(Value::as_object_mut) {
                input.entry("indexed").or_insert(Value::Bool(false));
            }
        }
    }
    item
}
