//! Event descriptors and their topic hashes

use alloy_json_abi::Event;
use alloy_primitives::B256;
use serde_json::Value;

/// An event input as declared in the ABI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventInput {
    /// Parameter name (may be empty)
    pub name: String,
    /// Solidity type as written in the ABI (e.g. "uint256", "tuple", "address[]")
    pub kind: String,
    /// Whether the parameter is stored in a log topic
    pub indexed: bool,
}

/// A parsed event together with the JSON item it came from
#[derive(Debug, Clone)]
pub struct EventSpec {
    event: Event,
    inputs: Vec<EventInput>,
    raw: Value,
}

impl EventSpec {
    pub fn new(event: Event, raw: Value) -> Self {
        let inputs = event
            .inputs
            .iter()
            .map(|param| EventInput {
                name: param.name.clone(),
                kind: param.ty.clone(),
                indexed: param.indexed,
            })
            .collect();

        Self { event, inputs, raw }
    }

    pub fn name(&self) -> &str {
        &self.event.name
    }

    pub fn inputs(&self) -> &[EventInput] {
        &self.inputs
    }

    /// The JSON item exactly as supplied by the package
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Canonical signature, e.g. "Transfer(address,address,uint256)"
    ///
    /// Tuple parameters are expanded to their component types.
    pub fn signature(&self) -> String {
        self.event.signature()
    }

    /// keccak256 of the canonical signature
    pub fn topic(&self) -> B256 {
        self.event.selector()
    }

    /// Topic as a 0x-prefixed lowercase hex string
    pub fn topic_hex(&self) -> String {
        format!("0x{}", hex::encode(self.topic()))
    }

    /// Constant name for generated Rust code, e.g. "INTENT_CREATED_EVENT_SIG"
    pub fn const_name(&self) -> String {
        format!("{}_EVENT_SIG", screaming_snake(self.name()))
    }

    /// A `hex!` constant declaration for the topic
    pub fn rust_const(&self) -> String {
        format!(
            "const {}: [u8; 32] = hex!(\"{}\");",
            self.const_name(),
            hex::encode(self.topic())
        )
    }
}

fn screaming_snake(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 8);

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == '_' {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            continue;
        }

        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !out.ends_with('_') {
                out.push('_');
            }
        }

        out.extend(c.to_uppercase());
    }

    out
}
