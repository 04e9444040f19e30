//! Typed handle to one deployed HelloBase contract.

use crate::interface::{updateMessageCall, Interface};
use crate::ContractError;
use alloy_primitives::{Address, Bytes};
use alloy_sol_types::SolCall;
use std::path::Path;

/// A contract address bound to an interface description.
///
/// Read-only after construction. The binding owns no connection; calls
/// borrow an endpoint for their duration via [`crate::StateReader`] or
/// the delivery layer.
#[derive(Debug, Clone)]
pub struct ContractBinding {
	address: Address,
	interface: Interface,
}

impl ContractBinding {
	/// Binds a contract address to an interface description.
	///
	/// The address is parsed case-insensitively into a 20-byte value.
	/// When `abi_path` is `None`, the built-in default interface is used.
	pub fn new(address: &str, abi_path: Option<&Path>) -> Result<Self, ContractError> {
		let address: Address = address
			.trim()
			.parse()
			.map_err(|e| ContractError::InvalidAddress(format!("{}: {}", address, e)))?;

		let interface = match abi_path {
			Some(path) => Interface::from_file(path)?,
			None => Interface::builtin()?,
		};

		Ok(Self { address, interface })
	}

	/// The bound contract address.
	pub fn address(&self) -> Address {
		self.address
	}

	/// The interface description in effect for this binding.
	pub fn interface(&self) -> &Interface {
		&self.interface
	}

	/// Encodes an `updateMessage` call payload.
	pub fn encode_update(&self, message: &str) -> Bytes {
		updateMessageCall {
			newMessage: message.to_string(),
		}
		.abi_encode()
		.into()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const ADDRESS: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

	#[test]
	fn test_address_parsing_case_insensitive() {
		let lower = ContractBinding::new(&ADDRESS.to_lowercase(), None).unwrap();
		let checksummed = ContractBinding::new(ADDRESS, None).unwrap();
		assert_eq!(lower.address(), checksummed.address());
	}

	#[test]
	fn test_malformed_address_rejected() {
		for bad in ["", "0x1234", "not-an-address", "0xZZbDB2315678afecb367f032d93F642f64180aa3"] {
			assert!(matches!(
				ContractBinding::new(bad, None),
				Err(ContractError::InvalidAddress(_))
			));
		}
	}

	#[test]
	fn test_encode_update_selector() {
		let binding = ContractBinding::new(ADDRESS, None).unwrap();
		let payload = binding.encode_update("hello");
		// 4-byte selector followed by ABI-encoded string argument.
		assert_eq!(&payload[..4], &updateMessageCall::SELECTOR[..]);
		assert!(payload.len() > 4);
	}
}
