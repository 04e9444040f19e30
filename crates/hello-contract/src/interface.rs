//! Contract interface description.
//!
//! The interface comes either from a caller-supplied JSON ABI document or
//! from the built-in default below. Call and event encoding is statically
//! typed through the `sol!` definitions; a supplied document is validated
//! against the members those definitions require rather than driving
//! dynamic dispatch.

use crate::ContractError;
use alloy_sol_types::sol;
use serde::Deserialize;
use std::path::Path;

// Solidity definitions for the HelloBase contract.
//
// These match the deployed contract ABI and provide the call/event codecs
// used by the binding and the reader.
sol! {
	/// Returns the stored message.
	function getMessage() external view returns (string);
	/// Returns the stored message length in bytes.
	function getMessageLength() external view returns (uint256);
	/// Returns the contract owner.
	function getOwner() external view returns (address);
	/// Returns whether the given account is the owner.
	function isOwner(address account) external view returns (bool);
	/// Replaces the stored message. Owner-only on-chain.
	function updateMessage(string newMessage) external;

	/// Emitted on every successful message update.
	event MessageUpdated(string newMessage, address indexed updater);
}

/// Built-in interface used when no ABI document is supplied.
///
/// Covers exactly the members of the deployed HelloBase contract.
pub const DEFAULT_ABI: &str = r#"[
	{
		"inputs": [{"internalType": "string", "name": "_message", "type": "string"}],
		"stateMutability": "nonpayable",
		"type": "constructor"
	},
	{
		"anonymous": false,
		"inputs": [
			{"indexed": false, "internalType": "string", "name": "newMessage", "type": "string"},
			{"indexed": true, "internalType": "address", "name": "updater", "type": "address"}
		],
		"name": "MessageUpdated",
		"type": "event"
	},
	{
		"inputs": [],
		"name": "getMessage",
		"outputs": [{"internalType": "string", "name": "", "type": "string"}],
		"stateMutability": "view",
		"type": "function"
	},
	{
		"inputs": [],
		"name": "getMessageLength",
		"outputs": [{"internalType": "uint256", "name": "", "type": "uint256"}],
		"stateMutability": "view",
		"type": "function"
	},
	{
		"inputs": [],
		"name": "getOwner",
		"outputs": [{"internalType": "address", "name": "", "type": "address"}],
		"stateMutability": "view",
		"type": "function"
	},
	{
		"inputs": [{"internalType": "address", "name": "account", "type": "address"}],
		"name": "isOwner",
		"outputs": [{"internalType": "bool", "name": "", "type": "bool"}],
		"stateMutability": "view",
		"type": "function"
	},
	{
		"inputs": [{"internalType": "string", "name": "_newMessage", "type": "string"}],
		"name": "updateMessage",
		"outputs": [],
		"stateMutability": "nonpayable",
		"type": "function"
	}
]"#;

/// Functions every usable interface must describe, with their arity.
const REQUIRED_FUNCTIONS: &[(&str, usize)] = &[
	("getMessage", 0),
	("getMessageLength", 0),
	("getOwner", 0),
	("isOwner", 1),
	("updateMessage", 1),
];

/// Event every usable interface must describe.
const REQUIRED_EVENT: &str = "MessageUpdated";

/// One entry of a JSON ABI document.
#[derive(Debug, Clone, Deserialize)]
pub struct AbiEntry {
	/// Entry kind: "function", "event", "constructor", ...
	#[serde(rename = "type")]
	pub kind: String,
	/// Member name; absent for constructors.
	#[serde(default)]
	pub name: Option<String>,
	/// Input parameters.
	#[serde(default)]
	pub inputs: Vec<AbiParam>,
	/// Output parameters.
	#[serde(default)]
	pub outputs: Vec<AbiParam>,
	/// State mutability for functions.
	#[serde(rename = "stateMutability", default)]
	pub state_mutability: Option<String>,
}

/// One parameter of an ABI entry.
#[derive(Debug, Clone, Deserialize)]
pub struct AbiParam {
	/// Parameter name; may be empty for outputs.
	#[serde(default)]
	pub name: String,
	/// Solidity type.
	#[serde(rename = "type")]
	pub kind: String,
	/// Whether an event parameter is indexed.
	#[serde(default)]
	pub indexed: Option<bool>,
}

/// A parsed and validated interface description.
#[derive(Debug, Clone)]
pub struct Interface {
	entries: Vec<AbiEntry>,
}

impl Interface {
	/// Parses the built-in default interface.
	pub fn builtin() -> Result<Self, ContractError> {
		Self::from_json(DEFAULT_ABI)
	}

	/// Loads and validates an interface description from a JSON ABI file.
	pub fn from_file(path: &Path) -> Result<Self, ContractError> {
		let raw = std::fs::read_to_string(path).map_err(|e| {
			ContractError::InvalidInterface(format!("Failed to read {}: {}", path.display(), e))
		})?;
		Self::from_json(&raw)
	}

	/// Parses and validates an interface description from a JSON string.
	pub fn from_json(raw: &str) -> Result<Self, ContractError> {
		let entries: Vec<AbiEntry> = serde_json::from_str(raw)
			.map_err(|e| ContractError::InvalidInterface(e.to_string()))?;
		let interface = Self { entries };
		interface.verify()?;
		Ok(interface)
	}

	/// The raw entries of the description.
	pub fn entries(&self) -> &[AbiEntry] {
		&self.entries
	}

	/// Checks that every required member is present with the right arity.
	///
	/// The check is behavioral compatibility with the static codecs above,
	/// not a byte-level comparison against deployed code.
	fn verify(&self) -> Result<(), ContractError> {
		for (name, arity) in REQUIRED_FUNCTIONS {
			let found = self.entries.iter().any(|e| {
				e.kind == "function" && e.name.as_deref() == Some(*name) && e.inputs.len() == *arity
			});
			if !found {
				return Err(ContractError::InterfaceMismatch(format!(
					"Missing function {}({} argument{})",
					name,
					arity,
					if *arity == 1 { "" } else { "s" }
				)));
			}
		}

		let has_event = self
			.entries
			.iter()
			.any(|e| e.kind == "event" && e.name.as_deref() == Some(REQUIRED_EVENT));
		if !has_event {
			return Err(ContractError::InterfaceMismatch(format!(
				"Missing event {}",
				REQUIRED_EVENT
			)));
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_builtin_interface_is_valid() {
		let interface = Interface::builtin().unwrap();
		// Constructor + event + 5 functions.
		assert_eq!(interface.entries().len(), 7);
	}

	#[test]
	fn test_missing_function_rejected() {
		// Default interface with updateMessage removed.
		let entries: Vec<serde_json::Value> = serde_json::from_str(DEFAULT_ABI).unwrap();
		let pruned: Vec<_> = entries
			.into_iter()
			.filter(|e| e["name"] != "updateMessage")
			.collect();
		let raw = serde_json::to_string(&pruned).unwrap();

		let err = Interface::from_json(&raw).unwrap_err();
		match err {
			ContractError::InterfaceMismatch(msg) => assert!(msg.contains("updateMessage")),
			other => panic!("expected InterfaceMismatch, got {:?}", other),
		}
	}

	#[test]
	fn test_missing_event_rejected() {
		let entries: Vec<serde_json::Value> = serde_json::from_str(DEFAULT_ABI).unwrap();
		let pruned: Vec<_> = entries
			.into_iter()
			.filter(|e| e["type"] != "event")
			.collect();
		let raw = serde_json::to_string(&pruned).unwrap();

		let err = Interface::from_json(&raw).unwrap_err();
		assert!(matches!(err, ContractError::InterfaceMismatch(_)));
	}

	#[test]
	fn test_malformed_json_rejected() {
		assert!(matches!(
			Interface::from_json("{not json"),
			Err(ContractError::InvalidInterface(_))
		));
	}
}
