//! Stateless read path against contract and account state.
//!
//! Every call issues one synchronous RPC query and decodes the result;
//! nothing is cached, so each call reflects chain state at call time.
//! Failures propagate as typed errors and are never replaced by default
//! values.

use crate::interface::{
	getMessageCall, getMessageLengthCall, getOwnerCall, isOwnerCall, MessageUpdated,
};
use crate::{ContractBinding, ContractError};
use alloy_primitives::{Address, Log as PrimLog, LogData, U256};
use alloy_provider::Provider;
use alloy_rpc_types::{BlockNumberOrTag, Filter, Log, TransactionRequest};
use alloy_sol_types::{SolCall, SolEvent};
use hello_network::Endpoint;
use hello_types::{format_ether, with_0x_prefix, EventRecord};

/// Read-only view over one contract through one endpoint.
///
/// Borrows the endpoint and binding for the duration of the calls;
/// construct one per batch of reads.
pub struct StateReader<'a> {
	endpoint: &'a Endpoint,
	binding: &'a ContractBinding,
}

impl<'a> StateReader<'a> {
	/// Creates a reader over the given endpoint and binding.
	pub fn new(endpoint: &'a Endpoint, binding: &'a ContractBinding) -> Self {
		Self { endpoint, binding }
	}

	/// Issues one `eth_call` against the bound contract.
	async fn call(&self, call_data: Vec<u8>) -> Result<Vec<u8>, ContractError> {
		let request = TransactionRequest::default()
			.to(self.binding.address())
			.input(call_data.into());

		let output = self
			.endpoint
			.provider()
			.call(&request)
			.await
			.map_err(|e| ContractError::Network(format!("Call failed: {}", e)))?;

		Ok(output.to_vec())
	}

	/// Reads the current message.
	pub async fn message(&self) -> Result<String, ContractError> {
		let output = self.call(getMessageCall {}.abi_encode()).await?;
		let decoded = getMessageCall::abi_decode_returns(&output, true)
			.map_err(|e| ContractError::Decode(format!("getMessage: {}", e)))?;
		Ok(decoded._0)
	}

	/// Reads the current message length in bytes.
	pub async fn message_length(&self) -> Result<u64, ContractError> {
		let output = self.call(getMessageLengthCall {}.abi_encode()).await?;
		let decoded = getMessageLengthCall::abi_decode_returns(&output, true)
			.map_err(|e| ContractError::Decode(format!("getMessageLength: {}", e)))?;
		decoded
			._0
			.try_into()
			.map_err(|_| ContractError::Decode("getMessageLength: length exceeds u64".to_string()))
	}

	/// Reads the contract owner address.
	pub async fn owner(&self) -> Result<Address, ContractError> {
		let output = self.call(getOwnerCall {}.abi_encode()).await?;
		let decoded = getOwnerCall::abi_decode_returns(&output, true)
			.map_err(|e| ContractError::Decode(format!("getOwner: {}", e)))?;
		Ok(decoded._0)
	}

	/// Checks whether the given account is the contract owner.
	pub async fn is_owner(&self, account: Address) -> Result<bool, ContractError> {
		let output = self.call(isOwnerCall { account }.abi_encode()).await?;
		let decoded = isOwnerCall::abi_decode_returns(&output, true)
			.map_err(|e| ContractError::Decode(format!("isOwner: {}", e)))?;
		Ok(decoded._0)
	}

	/// Reads an account balance in wei.
	pub async fn balance(&self, account: Address) -> Result<U256, ContractError> {
		self.endpoint
			.provider()
			.get_balance(account)
			.await
			.map_err(|e| ContractError::Network(format!("Failed to get balance: {}", e)))
	}

	/// Reads an account balance as an ETH decimal string.
	pub async fn balance_eth(&self, account: Address) -> Result<String, ContractError> {
		Ok(format_ether(self.balance(account).await?))
	}

	/// Retrieves all `MessageUpdated` events in the inclusive block range.
	///
	/// `to_block` of `None` means the latest block. Records come back in
	/// the order the network returns them, ascending by block number. An
	/// empty range or an empty history yields an empty vector, never an
	/// error.
	pub async fn events(
		&self,
		from_block: u64,
		to_block: Option<u64>,
	) -> Result<Vec<EventRecord>, ContractError> {
		if let Some(to_block) = to_block {
			if from_block > to_block {
				return Ok(Vec::new());
			}
		}

		let filter = Filter::new()
			.address(vec![self.binding.address()])
			.event_signature(vec![MessageUpdated::SIGNATURE_HASH])
			.from_block(from_block)
			.to_block(to_block.map_or(BlockNumberOrTag::Latest, BlockNumberOrTag::Number));

		let logs = self
			.endpoint
			.provider()
			.get_logs(&filter)
			.await
			.map_err(|e| ContractError::Network(format!("Failed to get logs: {}", e)))?;

		tracing::debug!(count = logs.len(), from_block, "Fetched MessageUpdated logs");

		logs.iter().map(decode_event).collect()
	}
}

/// Decodes one `MessageUpdated` log into an [`EventRecord`].
fn decode_event(log: &Log) -> Result<EventRecord, ContractError> {
	// Convert RPC log to a primitives log for decoding
	let prim_log = PrimLog {
		address: log.address(),
		data: LogData::new_unchecked(log.topics().to_vec(), log.data().data.clone()),
	};

	let event = MessageUpdated::decode_log(&prim_log, true)
		.map_err(|e| ContractError::Decode(format!("Failed to decode MessageUpdated: {}", e)))?;

	Ok(EventRecord {
		block_number: log.block_number.unwrap_or(0),
		message: event.newMessage.clone(),
		updater: event.updater.to_string(),
		transaction_hash: log
			.transaction_hash
			.map(|h| with_0x_prefix(&hex::encode(h.0)))
			.unwrap_or_default(),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::{address, b256};

	fn message_log(message: &str, updater: Address, block_number: u64) -> Log {
		let event = MessageUpdated {
			newMessage: message.to_string(),
			updater,
		};
		Log {
			inner: PrimLog {
				address: address!("5FbDB2315678afecb367f032d93F642f64180aa3"),
				data: event.encode_log_data(),
			},
			block_hash: None,
			block_number: Some(block_number),
			block_timestamp: None,
			transaction_hash: Some(b256!(
				"1111111111111111111111111111111111111111111111111111111111111111"
			)),
			transaction_index: Some(0),
			log_index: Some(0),
			removed: false,
		}
	}

	#[test]
	fn test_decode_event() {
		let updater = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
		let record = decode_event(&message_log("hello", updater, 42)).unwrap();

		assert_eq!(record.block_number, 42);
		assert_eq!(record.message, "hello");
		assert_eq!(record.updater, updater.to_string());
		assert_eq!(
			record.transaction_hash,
			"0x1111111111111111111111111111111111111111111111111111111111111111"
		);
	}

	#[test]
	fn test_decode_preserves_network_order() {
		let updater = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
		let logs = vec![
			message_log("first", updater, 10),
			message_log("second", updater, 11),
			message_log("third", updater, 11),
		];

		let records: Vec<EventRecord> = logs.iter().map(|l| decode_event(l).unwrap()).collect();
		let blocks: Vec<u64> = records.iter().map(|r| r.block_number).collect();
		assert_eq!(blocks, vec![10, 11, 11]);
		assert!(blocks.windows(2).all(|w| w[0] <= w[1]));
	}

	#[test]
	fn test_decode_foreign_event_rejected() {
		// A log whose topics do not match MessageUpdated.
		let log = Log {
			inner: PrimLog {
				address: address!("5FbDB2315678afecb367f032d93F642f64180aa3"),
				data: LogData::new_unchecked(
					vec![b256!(
						"2222222222222222222222222222222222222222222222222222222222222222"
					)],
					Default::default(),
				),
			},
			block_hash: None,
			block_number: Some(1),
			block_timestamp: None,
			transaction_hash: None,
			transaction_index: None,
			log_index: None,
			removed: false,
		};

		assert!(matches!(decode_event(&log), Err(ContractError::Decode(_))));
	}
}
