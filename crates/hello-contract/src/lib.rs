//! Contract binding and read path for the HelloBase client.
//!
//! This crate associates a contract address and an interface description
//! with a network endpoint, exposing typed read calls and historical
//! event retrieval. Write calls are built here (payload encoding) but
//! driven by the transaction lifecycle in `hello-delivery`.

use thiserror::Error;

pub mod binding;
pub mod interface;
pub mod reader;

pub use binding::ContractBinding;
pub use interface::{Interface, DEFAULT_ABI};
pub use reader::StateReader;

/// Errors that can occur during contract binding and read operations.
#[derive(Debug, Error)]
pub enum ContractError {
	/// Error that occurs when the contract address is not a well-formed 20-byte value.
	#[error("Invalid contract address: {0}")]
	InvalidAddress(String),
	/// Error that occurs when the interface description cannot be read or parsed.
	#[error("Invalid interface description: {0}")]
	InvalidInterface(String),
	/// Error that occurs when a supplied interface lacks a required member.
	#[error("Interface mismatch: {0}")]
	InterfaceMismatch(String),
	/// Error that occurs during network communication.
	#[error("Network error: {0}")]
	Network(String),
	/// Error that occurs when a response cannot be decoded.
	#[error("Decode error: {0}")]
	Decode(String),
}
