//! Transaction delivery types.
//!
//! Defines the hash and receipt types produced by the transaction lifecycle.
//! Hashes are stored as raw bytes; hex rendering happens at the edges.

use crate::utils::with_0x_prefix;

/// Blockchain transaction hash.
///
/// Stores the 32-byte identifier returned by the network on submission.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TransactionHash(pub Vec<u8>);

impl TransactionHash {
	/// Renders the hash as a "0x"-prefixed lowercase hex string.
	pub fn to_hex(&self) -> String {
		with_0x_prefix(&hex::encode(&self.0))
	}
}

impl std::fmt::Display for TransactionHash {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.to_hex())
	}
}

/// Finalized outcome of a submitted transaction.
///
/// Produced exactly once by the network after inclusion; immutable once
/// observed. A `success` of false means the call reverted on-chain.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TransactionReceipt {
	/// The hash of the transaction.
	pub hash: TransactionHash,
	/// The block number where the transaction was included.
	pub block_number: u64,
	/// Whether the transaction executed successfully.
	pub success: bool,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_transaction_hash_hex() {
		let hash = TransactionHash(vec![0xde, 0xad, 0xbe, 0xef]);
		assert_eq!(hash.to_hex(), "0xdeadbeef");
		assert_eq!(hash.to_string(), "0xdeadbeef");
	}
}
