//! Transaction lifecycle management for the HelloBase client.
//!
//! Turns a state-changing intent into a confirmed on-chain transition
//! through the stages build, sign, submit, confirm. Each stage is a
//! distinct type, so a payload cannot be submitted unsigned or confirmed
//! before submission:
//!
//! ```text
//! Built -> Signed -> Submitted -> { Confirmed, Reverted }
//! ```
//!
//! A failure before submission leaves nothing on-chain; a failure after
//! submission carries the transaction hash for diagnosis. No stage ever
//! retries: the caller decides whether to re-attempt, and a re-attempt
//! restarts from build with a fresh nonce and gas price.
//!
//! Nonce and gas price are re-queried on every build instead of tracked
//! locally. That is correct only for strictly sequential submissions
//! from a single writer; concurrent submissions from the same account
//! need external coordination.

use alloy_consensus::TxEnvelope;
use alloy_eips::eip2718::Encodable2718;
use alloy_network::{EthereumWallet, TransactionBuilder};
use alloy_primitives::{Address, Bytes, FixedBytes};
use alloy_provider::Provider;
use alloy_rpc_types::TransactionRequest;
use hello_account::Account;
use hello_network::Endpoint;
use hello_types::{TransactionHash, TransactionReceipt};
use std::time::Duration;
use thiserror::Error;

/// Gas limit applied when the caller does not supply one.
pub const DEFAULT_GAS_LIMIT: u64 = 100_000;
/// Ceiling on the confirmation wait. On expiry the transaction's fate is
/// unknown to the caller; it may still be included later.
pub const CONFIRMATION_TIMEOUT: Duration = Duration::from_secs(90);
/// Interval between receipt polls while waiting for inclusion.
pub const RECEIPT_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Errors that can occur during the transaction lifecycle.
#[derive(Debug, Error)]
pub enum DeliveryError {
	/// Error that occurs when the caller-supplied payload is invalid.
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),
	/// Error that occurs during network communication.
	#[error("Network error: {0}")]
	Network(String),
	/// Error that occurs when signing fails.
	#[error("Signing failed: {0}")]
	Signing(String),
	/// Error that occurs when the included transaction reverted.
	#[error("Transaction {hash} reverted")]
	Reverted {
		/// Hash of the reverted transaction.
		hash: String,
	},
	/// Error that occurs when no receipt arrives within the bounded wait.
	/// The transaction may still be included after the timeout.
	#[error("Timed out waiting for confirmation of {hash}")]
	ConfirmationTimeout {
		/// Hash of the transaction whose fate is unknown.
		hash: String,
	},
}

/// Validates a message payload before any network interaction.
///
/// An empty or whitespace-only message is rejected here so no gas is
/// spent building or broadcasting a call the contract would refuse.
pub fn validate_message(message: &str) -> Result<(), DeliveryError> {
	if message.trim().is_empty() {
		return Err(DeliveryError::InvalidArgument(
			"Message cannot be empty".to_string(),
		));
	}
	Ok(())
}

/// A composed but unsigned transaction.
#[derive(Debug, Clone)]
pub struct BuiltTransaction {
	request: TransactionRequest,
}

impl BuiltTransaction {
	/// The nonce captured at build time.
	pub fn nonce(&self) -> Option<u64> {
		self.request.nonce
	}

	/// The gas price captured at build time, in wei.
	pub fn gas_price(&self) -> Option<u128> {
		self.request.gas_price
	}
}

/// A signed transaction ready for broadcast.
pub struct SignedTransaction {
	envelope: TxEnvelope,
}

/// Drives one state-changing call through its lifecycle.
///
/// Borrows the endpoint and account for the duration of the call
/// sequence; the key material itself never leaves the account.
pub struct Lifecycle<'a> {
	endpoint: &'a Endpoint,
	account: &'a Account,
}

impl<'a> Lifecycle<'a> {
	/// Creates a lifecycle manager over the given endpoint and account.
	pub fn new(endpoint: &'a Endpoint, account: &'a Account) -> Self {
		Self { endpoint, account }
	}

	/// Builds a transaction for the given call payload.
	///
	/// Queries the current gas price and the sender's next unused nonce
	/// fresh from the network; neither is cached between builds. A stale
	/// nonce would cause a rejection or silent reordering, so freshness
	/// is traded against throughput here.
	pub async fn build(
		&self,
		to: Address,
		input: Bytes,
		gas_limit: Option<u64>,
	) -> Result<BuiltTransaction, DeliveryError> {
		let provider = self.endpoint.provider();
		let from = self.account.address();

		let gas_price = provider
			.get_gas_price()
			.await
			.map_err(|e| DeliveryError::Network(format!("Failed to get gas price: {}", e)))?;
		let nonce = provider
			.get_transaction_count(from)
			.await
			.map_err(|e| DeliveryError::Network(format!("Failed to get nonce: {}", e)))?;

		let request = TransactionRequest::default()
			.with_from(from)
			.with_to(to)
			.with_input(input)
			.with_nonce(nonce)
			.with_gas_limit(gas_limit.unwrap_or(DEFAULT_GAS_LIMIT))
			.with_gas_price(gas_price)
			.with_chain_id(self.endpoint.chain_id());

		tracing::debug!(nonce, gas_price, "Built transaction");
		Ok(BuiltTransaction { request })
	}

	/// Signs a built transaction with the account's key.
	///
	/// Signing is local and side-effect-free; no network interaction
	/// happens here.
	pub async fn sign(&self, built: BuiltTransaction) -> Result<SignedTransaction, DeliveryError> {
		let wallet: EthereumWallet = self.account.wallet();
		let envelope = built
			.request
			.build(&wallet)
			.await
			.map_err(|e| DeliveryError::Signing(e.to_string()))?;
		Ok(SignedTransaction { envelope })
	}

	/// Broadcasts a signed transaction and returns its hash.
	pub async fn submit(&self, signed: SignedTransaction) -> Result<TransactionHash, DeliveryError> {
		let encoded = signed.envelope.encoded_2718();
		let pending = self
			.endpoint
			.provider()
			.send_raw_transaction(&encoded)
			.await
			.map_err(|e| DeliveryError::Network(format!("Failed to send transaction: {}", e)))?;

		let hash = TransactionHash(pending.tx_hash().0.to_vec());
		tracing::info!(tx_hash = %hash, "Submitted transaction");
		Ok(hash)
	}

	/// Blocks until the transaction is included or the bounded wait expires.
	///
	/// Polls for the receipt every [`RECEIPT_POLL_INTERVAL`] up to
	/// [`CONFIRMATION_TIMEOUT`]. A receipt with revert status surfaces as
	/// [`DeliveryError::Reverted`]; timeout surfaces as
	/// [`DeliveryError::ConfirmationTimeout`] with the transaction's fate
	/// left unknown.
	pub async fn confirm(&self, hash: &TransactionHash) -> Result<TransactionReceipt, DeliveryError> {
		let provider = self.endpoint.provider();
		let tx_hash = FixedBytes::<32>::from_slice(&hash.0);
		let start = tokio::time::Instant::now();

		loop {
			if start.elapsed() > CONFIRMATION_TIMEOUT {
				return Err(DeliveryError::ConfirmationTimeout {
					hash: hash.to_hex(),
				});
			}

			match provider.get_transaction_receipt(tx_hash).await {
				Ok(Some(receipt)) => {
					let receipt = TransactionReceipt {
						hash: TransactionHash(receipt.transaction_hash.0.to_vec()),
						block_number: receipt.block_number.unwrap_or(0),
						success: receipt.status(),
					};
					return check_receipt(receipt);
				}
				Ok(None) => {
					// Not yet mined.
					tokio::time::sleep(RECEIPT_POLL_INTERVAL).await;
				}
				Err(e) => {
					return Err(DeliveryError::Network(format!("Failed to get receipt: {}", e)));
				}
			}
		}
	}

	/// Runs the full lifecycle for one call and returns the receipt.
	///
	/// Any failure aborts the sequence at its stage; nothing reaches the
	/// chain before submit, and errors after submit carry the hash.
	pub async fn send(
		&self,
		to: Address,
		input: Bytes,
		gas_limit: Option<u64>,
	) -> Result<TransactionReceipt, DeliveryError> {
		let built = self.build(to, input, gas_limit).await?;
		let signed = self.sign(built).await?;
		let hash = self.submit(signed).await?;
		let receipt = self.confirm(&hash).await?;
		tracing::info!(
			tx_hash = %receipt.hash,
			block_number = receipt.block_number,
			"Transaction confirmed"
		);
		Ok(receipt)
	}
}

/// Maps an observed receipt to the terminal lifecycle state.
fn check_receipt(receipt: TransactionReceipt) -> Result<TransactionReceipt, DeliveryError> {
	if receipt.success {
		Ok(receipt)
	} else {
		Err(DeliveryError::Reverted {
			hash: receipt.hash.to_hex(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_validate_message_rejects_blank() {
		for blank in ["", "   ", "\t", "\n \t"] {
			assert!(matches!(
				validate_message(blank),
				Err(DeliveryError::InvalidArgument(_))
			));
		}
	}

	#[test]
	fn test_validate_message_accepts_content() {
		assert!(validate_message("hello").is_ok());
		assert!(validate_message("  padded  ").is_ok());
	}

	#[test]
	fn test_check_receipt_success() {
		let receipt = TransactionReceipt {
			hash: TransactionHash(vec![0xab; 32]),
			block_number: 7,
			success: true,
		};
		assert_eq!(check_receipt(receipt.clone()).unwrap(), receipt);
	}

	#[test]
	fn test_check_receipt_revert_carries_hash() {
		let receipt = TransactionReceipt {
			hash: TransactionHash(vec![0xab; 32]),
			block_number: 7,
			success: false,
		};
		match check_receipt(receipt).unwrap_err() {
			DeliveryError::Reverted { hash } => {
				assert_eq!(hash, format!("0x{}", "ab".repeat(32)));
			}
			other => panic!("expected Reverted, got {:?}", other),
		}
	}
}
