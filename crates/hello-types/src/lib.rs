//! Common types for the HelloBase client.
//!
//! This module defines the core data types shared across the client crates,
//! providing a centralized location for transaction, event, and snapshot
//! structures to ensure consistency across all components.

/// Transaction hash and receipt types for the delivery path.
pub mod delivery;
/// Historical contract event records.
pub mod events;
/// Point-in-time contract snapshot types.
pub mod info;
/// Secure string type for private key material.
pub mod secret_string;
/// Hex formatting and unit conversion utilities.
pub mod utils;

// Re-export all types for convenient access
pub use delivery::*;
pub use events::*;
pub use info::*;
pub use secret_string::SecretString;
pub use utils::{
	format_ether, format_gwei, format_units, parse_ether, parse_units, with_0x_prefix,
	without_0x_prefix, ConversionError, ETH_DECIMALS, GWEI_DECIMALS,
};
