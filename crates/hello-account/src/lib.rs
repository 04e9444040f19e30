//! Account loading for the HelloBase client.
//!
//! Derives a signing identity from a hex-encoded private key held in the
//! process environment. The key material lives in a [`SecretString`] and
//! is never logged, serialized, or printed; only the derived address is
//! exposed. The account is loaded once and reused for the process
//! lifetime.

use alloy_network::EthereumWallet;
use alloy_primitives::Address;
use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use hello_types::SecretString;
use std::fmt;
use thiserror::Error;

/// Environment variable holding the hex-encoded private key.
pub const PRIVATE_KEY_ENV: &str = "PRIVATE_KEY";

/// Errors that can occur when loading an account.
#[derive(Debug, Error)]
pub enum AccountError {
	/// Error that occurs when no private key is configured.
	#[error("Missing credential: set {PRIVATE_KEY_ENV} in the environment")]
	MissingCredential,
	/// Error that occurs when the key does not parse to a valid curve scalar.
	#[error("Invalid key: {0}")]
	InvalidKey(String),
	/// Error that occurs when a signing operation fails.
	#[error("Signing failed: {0}")]
	SigningFailed(String),
}

/// A signing identity derived from a private key.
///
/// The address is deterministic from the key. The signer is read-only
/// after construction and may be used by any number of sequential calls.
pub struct Account {
	signer: PrivateKeySigner,
}

impl Account {
	/// Loads the account from the `PRIVATE_KEY` environment variable.
	pub fn from_env() -> Result<Self, AccountError> {
		let key = std::env::var(PRIVATE_KEY_ENV)
			.map(SecretString::from)
			.map_err(|_| AccountError::MissingCredential)?;
		Self::from_key(&key)
	}

	/// Derives the account from a hex-encoded private key.
	///
	/// Accepts the key with or without a "0x" prefix.
	pub fn from_key(key: &SecretString) -> Result<Self, AccountError> {
		// The parse error is discarded so no part of the input can leak.
		let signer: PrivateKeySigner = key
			.with_exposed(|k| k.trim().parse())
			.map_err(|_| AccountError::InvalidKey("not a valid secp256k1 private key".to_string()))?;
		Ok(Self { signer })
	}

	/// The address derived from the key.
	pub fn address(&self) -> Address {
		self.signer.address()
	}

	/// A wallet for signing transactions with this account.
	pub fn wallet(&self) -> EthereumWallet {
		EthereumWallet::from(self.signer.clone())
	}

	/// Signs an arbitrary message with the account's key (EIP-191).
	///
	/// Returns the 65-byte r || s || v signature.
	pub async fn sign_message(&self, message: &[u8]) -> Result<Vec<u8>, AccountError> {
		let signature = self
			.signer
			.sign_message(message)
			.await
			.map_err(|e| AccountError::SigningFailed(e.to_string()))?;
		Ok(signature.as_bytes().to_vec())
	}
}

impl fmt::Debug for Account {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Account")
			.field("address", &self.address())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	// Well-known throwaway key (first Anvil development account).
	const DEV_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
	const DEV_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

	#[test]
	fn test_address_derivation() {
		let account = Account::from_key(&SecretString::from(DEV_KEY)).unwrap();
		assert_eq!(account.address().to_string(), DEV_ADDRESS);
	}

	#[test]
	fn test_accepts_0x_prefix() {
		let prefixed = format!("0x{}", DEV_KEY);
		let account = Account::from_key(&SecretString::from(prefixed.as_str())).unwrap();
		assert_eq!(account.address().to_string(), DEV_ADDRESS);
	}

	#[test]
	fn test_invalid_key() {
		let err = Account::from_key(&SecretString::from("not-hex")).unwrap_err();
		assert!(matches!(err, AccountError::InvalidKey(_)));
	}

	#[tokio::test]
	async fn test_sign_message_length() {
		let account = Account::from_key(&SecretString::from(DEV_KEY)).unwrap();
		let signature = account.sign_message(b"hello").await.unwrap();
		assert_eq!(signature.len(), 65);
	}

	#[test]
	fn test_debug_omits_key() {
		let account = Account::from_key(&SecretString::from(DEV_KEY)).unwrap();
		let rendered = format!("{:?}", account);
		assert!(rendered.contains(DEV_ADDRESS));
		assert!(!rendered.contains(DEV_KEY));
	}
}
