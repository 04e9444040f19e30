//! Contract snapshot types.

/// Best-effort point-in-time view of the contract and the caller's account.
///
/// The individual reads behind this record are issued sequentially without
/// any atomicity guarantee; chain state may advance between the first and
/// last read. Callers should treat the snapshot as best-effort, not as a
/// consistent cut.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContractInfo {
	/// Address of the bound contract, "0x"-prefixed.
	pub contract_address: String,
	/// Address of the loaded account, "0x"-prefixed.
	pub account: String,
	/// Account balance in ETH as a decimal string.
	pub balance_eth: String,
	/// Message currently stored in the contract.
	pub current_message: String,
	/// Length of the current message in bytes.
	pub message_length: u64,
	/// Address of the contract owner, "0x"-prefixed.
	pub owner: String,
	/// Whether the loaded account is the contract owner.
	pub is_owner: bool,
	/// Chain ID of the connected network.
	pub chain_id: u64,
}
