//! Utility functions shared across the client crates.

/// Wei/ETH unit conversion.
pub mod conversion;
/// Hex string prefix handling.
pub mod formatting;

pub use conversion::{
	format_ether, format_gwei, format_units, parse_ether, parse_units, ConversionError,
	ETH_DECIMALS, GWEI_DECIMALS,
};
pub use formatting::{with_0x_prefix, without_0x_prefix};
