//! Network endpoint resolution for the HelloBase client.
//!
//! This module selects the RPC endpoint from the environment, opens an
//! HTTP provider with a bounded request timeout, and verifies that the
//! remote chain identity matches the expected one. Resolution happens
//! once per process run; the resulting [`Endpoint`] is immutable and
//! reused for every subsequent call.

use alloy_provider::{Provider, RootProvider};
use alloy_rpc_client::RpcClient;
use alloy_transport_http::Http;
use reqwest::Url;
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the Base-Sepolia RPC URL.
pub const BASE_SEPOLIA_RPC_ENV: &str = "BASE_SEPOLIA_RPC";
/// Environment variable holding the Base mainnet RPC URL.
pub const BASE_MAINNET_RPC_ENV: &str = "BASE_MAINNET_RPC";
/// Environment variable holding the expected chain ID (optional).
pub const CHAIN_ID_ENV: &str = "CHAIN_ID";

/// Bound on every RPC request issued through the endpoint.
pub const RPC_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors that can occur during endpoint resolution.
#[derive(Debug, Error)]
pub enum NetworkError {
	/// Error that occurs when the RPC URL or chain ID configuration is missing or malformed.
	#[error("Configuration error: {0}")]
	Configuration(String),
	/// Error that occurs when the observed chain ID differs from the expected one.
	#[error("Connected chain id {observed} != expected {expected}")]
	ChainMismatch {
		/// Chain ID the caller configured.
		expected: u64,
		/// Chain ID reported by the endpoint.
		observed: u64,
	},
	/// Error that occurs when the endpoint is unreachable.
	#[error("Connectivity error: {0}")]
	Connectivity(String),
}

/// A validated RPC endpoint carrying its URL, verified chain ID, and
/// the provider used for all network calls.
pub struct Endpoint {
	url: Url,
	chain_id: u64,
	provider: RootProvider<Http<reqwest::Client>>,
}

impl Endpoint {
	/// Resolves the endpoint from the environment and connects to it.
	///
	/// Reads `BASE_SEPOLIA_RPC` or `BASE_MAINNET_RPC` (the first one set
	/// wins) and the optional `CHAIN_ID` override, then performs a single
	/// connection attempt. No retry; failures surface immediately.
	pub async fn from_env() -> Result<Self, NetworkError> {
		let url = rpc_url_from_env()?;
		let expected = expected_chain_id_from_env()?;
		Self::connect(&url, expected).await
	}

	/// Connects to the given RPC URL and asserts chain identity.
	///
	/// When `expected_chain_id` is `None`, the chain ID observed on first
	/// connect is accepted as authoritative.
	pub async fn connect(url: &str, expected_chain_id: Option<u64>) -> Result<Self, NetworkError> {
		let url: Url = url
			.parse()
			.map_err(|e| NetworkError::Configuration(format!("Invalid RPC URL: {}", e)))?;

		let client = reqwest::Client::builder()
			.timeout(RPC_TIMEOUT)
			.build()
			.map_err(|e| NetworkError::Connectivity(format!("Failed to build HTTP client: {}", e)))?;
		let transport = Http::with_client(client, url.clone());
		let provider = RootProvider::new(RpcClient::new(transport, false));

		let observed = provider
			.get_chain_id()
			.await
			.map_err(|e| NetworkError::Connectivity(format!("Failed to reach {}: {}", url, e)))?;
		let chain_id = ensure_chain(expected_chain_id, observed)?;

		tracing::debug!(%url, chain_id, "Connected to RPC endpoint");

		Ok(Self {
			url,
			chain_id,
			provider,
		})
	}

	/// The endpoint URL.
	pub fn url(&self) -> &str {
		self.url.as_str()
	}

	/// The verified chain ID.
	pub fn chain_id(&self) -> u64 {
		self.chain_id
	}

	/// The provider backing all calls against this endpoint.
	pub fn provider(&self) -> &RootProvider<Http<reqwest::Client>> {
		&self.provider
	}

	/// Human-readable name of the connected network.
	pub fn network_name(&self) -> String {
		network_name(self.chain_id)
	}
}

impl std::fmt::Debug for Endpoint {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Endpoint")
			.field("url", &self.url.as_str())
			.field("chain_id", &self.chain_id)
			.finish()
	}
}

/// Reads the RPC URL from the environment.
///
/// `BASE_SEPOLIA_RPC` takes precedence over `BASE_MAINNET_RPC`.
pub fn rpc_url_from_env() -> Result<String, NetworkError> {
	std::env::var(BASE_SEPOLIA_RPC_ENV)
		.or_else(|_| std::env::var(BASE_MAINNET_RPC_ENV))
		.map_err(|_| {
			NetworkError::Configuration(format!(
				"Set {} or {} in the environment",
				BASE_SEPOLIA_RPC_ENV, BASE_MAINNET_RPC_ENV
			))
		})
}

/// Reads the optional expected chain ID from the environment.
pub fn expected_chain_id_from_env() -> Result<Option<u64>, NetworkError> {
	match std::env::var(CHAIN_ID_ENV) {
		Ok(raw) => raw
			.trim()
			.parse::<u64>()
			.map(Some)
			.map_err(|_| NetworkError::Configuration(format!("Invalid {}: {}", CHAIN_ID_ENV, raw))),
		Err(_) => Ok(None),
	}
}

/// Asserts that the observed chain ID matches the expected one.
///
/// Returns the authoritative chain ID: the expected value when it was
/// configured and matches, otherwise the observed value.
pub fn ensure_chain(expected: Option<u64>, observed: u64) -> Result<u64, NetworkError> {
	match expected {
		Some(expected) if expected != observed => {
			Err(NetworkError::ChainMismatch { expected, observed })
		}
		_ => Ok(observed),
	}
}

/// Maps a chain ID to a display name.
pub fn network_name(chain_id: u64) -> String {
	match chain_id {
		84532 => "Base-Sepolia".to_string(),
		8453 => "Base Mainnet".to_string(),
		other => format!("Unknown ({})", other),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_ensure_chain_mismatch() {
		let err = ensure_chain(Some(84532), 1).unwrap_err();
		match err {
			NetworkError::ChainMismatch { expected, observed } => {
				assert_eq!(expected, 84532);
				assert_eq!(observed, 1);
			}
			other => panic!("expected ChainMismatch, got {:?}", other),
		}
	}

	#[test]
	fn test_ensure_chain_match_and_default() {
		assert_eq!(ensure_chain(Some(84532), 84532).unwrap(), 84532);
		// No expectation configured: the observed value is adopted.
		assert_eq!(ensure_chain(None, 8453).unwrap(), 8453);
	}

	#[test]
	fn test_network_name() {
		assert_eq!(network_name(84532), "Base-Sepolia");
		assert_eq!(network_name(8453), "Base Mainnet");
		assert_eq!(network_name(1), "Unknown (1)");
	}
}
