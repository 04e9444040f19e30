//! Client facade for the HelloBase contract.
//!
//! Composes endpoint resolution, account loading, contract binding, the
//! read path, and the transaction lifecycle into one client. All network
//! calls are issued sequentially; there are no background tasks and no
//! state persisted across process runs.

use alloy_primitives::{Address, U256};
use hello_account::{Account, AccountError};
use hello_contract::{ContractBinding, ContractError, StateReader};
use hello_delivery::{validate_message, DeliveryError, Lifecycle};
use hello_network::{Endpoint, NetworkError};
use hello_types::{format_ether, with_0x_prefix, ContractInfo, EventRecord};
use std::path::Path;
use thiserror::Error;

/// Minimum balance required before an update is attempted, in wei
/// (0.001 ETH).
pub const MIN_UPDATE_BALANCE: U256 = U256::from_limbs([1_000_000_000_000_000, 0, 0, 0]);

/// Errors surfaced by the client facade.
#[derive(Debug, Error)]
pub enum ClientError {
	/// Error from endpoint resolution.
	#[error("Network error: {0}")]
	Network(#[from] NetworkError),
	/// Error from account loading.
	#[error("Account error: {0}")]
	Account(#[from] AccountError),
	/// Error from contract binding or reads.
	#[error("Contract error: {0}")]
	Contract(#[from] ContractError),
	/// Error from the transaction lifecycle.
	#[error("Delivery error: {0}")]
	Delivery(#[from] DeliveryError),
	/// Error that occurs when a non-owner attempts a restricted write.
	/// Checked by the client before building, not enforced on-chain here.
	#[error("Account {account} is not the contract owner")]
	NotAuthorized {
		/// The non-owner account that attempted the write.
		account: String,
	},
	/// Error that occurs when the account balance is below the update floor.
	#[error("Balance {balance} ETH is below the {minimum} ETH minimum")]
	InsufficientBalance {
		/// Current balance in ETH.
		balance: String,
		/// Required minimum in ETH.
		minimum: String,
	},
}

/// A connected HelloBase client.
///
/// Owns the validated endpoint, the loaded account, and the contract
/// binding for the lifetime of the process. Reads and writes borrow
/// these for the duration of each call.
#[derive(Debug)]
pub struct Client {
	endpoint: Endpoint,
	account: Account,
	binding: ContractBinding,
}

impl Client {
	/// Connects the client from the environment.
	///
	/// Resolves the RPC endpoint, loads the signing account, and binds
	/// the contract address with the given interface description (the
	/// built-in default when `abi_path` is `None`).
	pub async fn connect(contract_address: &str, abi_path: Option<&Path>) -> Result<Self, ClientError> {
		let endpoint = Endpoint::from_env().await?;
		let account = Account::from_env()?;
		let binding = ContractBinding::new(contract_address, abi_path)?;

		tracing::debug!(
			contract = %binding.address(),
			account = %account.address(),
			chain_id = endpoint.chain_id(),
			"Client connected"
		);

		Ok(Self {
			endpoint,
			account,
			binding,
		})
	}

	/// The connected endpoint.
	pub fn endpoint(&self) -> &Endpoint {
		&self.endpoint
	}

	/// The loaded account's address.
	pub fn account_address(&self) -> Address {
		self.account.address()
	}

	/// A read-only view over the bound contract.
	pub fn reader(&self) -> StateReader<'_> {
		StateReader::new(&self.endpoint, &self.binding)
	}

	/// Reads the current message.
	pub async fn message(&self) -> Result<String, ClientError> {
		Ok(self.reader().message().await?)
	}

	/// Reads the account balance as an ETH decimal string.
	pub async fn balance_eth(&self) -> Result<String, ClientError> {
		Ok(self.reader().balance_eth(self.account.address()).await?)
	}

	/// Signs an arbitrary text message with the account's key (EIP-191).
	///
	/// Local operation; returns the signature as a hex string.
	pub async fn sign_message(&self, message: &str) -> Result<String, ClientError> {
		let signature = self.account.sign_message(message.as_bytes()).await?;
		Ok(with_0x_prefix(&hex::encode(signature)))
	}

	/// Retrieves `MessageUpdated` events for the inclusive block range.
	pub async fn events(
		&self,
		from_block: u64,
		to_block: Option<u64>,
	) -> Result<Vec<EventRecord>, ClientError> {
		Ok(self.reader().events(from_block, to_block).await?)
	}

	/// Composes a best-effort snapshot of contract and account state.
	///
	/// The reads are issued sequentially (balance, message, length,
	/// owner, is-owner) with no atomicity across them; chain state may
	/// advance between the first and last read. Any failing read aborts
	/// the snapshot; partial records are never fabricated.
	pub async fn info(&self) -> Result<ContractInfo, ClientError> {
		let reader = self.reader();
		let account = self.account.address();

		let balance_eth = reader.balance_eth(account).await?;
		let current_message = reader.message().await?;
		let message_length = reader.message_length().await?;
		let owner = reader.owner().await?;
		let is_owner = reader.is_owner(account).await?;

		Ok(ContractInfo {
			contract_address: self.binding.address().to_string(),
			account: account.to_string(),
			balance_eth,
			current_message,
			message_length,
			owner: owner.to_string(),
			is_owner,
			chain_id: self.endpoint.chain_id(),
		})
	}

	/// Updates the contract message and waits for confirmation.
	///
	/// Preconditions checked before any transaction is built: the
	/// message must be non-empty after trimming (no network calls are
	/// issued otherwise), the account must be the contract owner, and
	/// the balance must cover [`MIN_UPDATE_BALANCE`]. The lifecycle then
	/// runs build, sign, submit, confirm with a fresh nonce and gas
	/// price. Returns the transaction hash as a hex string.
	pub async fn update_message(
		&self,
		message: &str,
		gas_limit: Option<u64>,
	) -> Result<String, ClientError> {
		validate_message(message)?;

		let reader = self.reader();
		let account = self.account.address();

		if !reader.is_owner(account).await? {
			return Err(ClientError::NotAuthorized {
				account: account.to_string(),
			});
		}

		let balance = reader.balance(account).await?;
		if balance < MIN_UPDATE_BALANCE {
			return Err(ClientError::InsufficientBalance {
				balance: format_ether(balance),
				minimum: format_ether(MIN_UPDATE_BALANCE),
			});
		}

		let lifecycle = Lifecycle::new(&self.endpoint, &self.account);
		let input = self.binding.encode_update(message);
		let receipt = lifecycle.send(self.binding.address(), input, gas_limit).await?;

		Ok(receipt.hash.to_hex())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use hello_types::parse_ether;

	#[test]
	fn test_min_update_balance() {
		assert_eq!(MIN_UPDATE_BALANCE, parse_ether("0.001").unwrap());
	}
}
