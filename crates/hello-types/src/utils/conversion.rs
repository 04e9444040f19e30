//! Wei/ETH unit conversion utilities.
//!
//! The chain accounts in wei; humans read ETH (10^18 wei) or gwei
//! (10^9 wei). Conversion here is pure string/integer arithmetic on
//! `U256`, so no precision is lost for representable amounts.

use alloy_primitives::U256;
use thiserror::Error;

/// Decimal places between wei and ETH.
pub const ETH_DECIMALS: u8 = 18;
/// Decimal places between wei and gwei.
pub const GWEI_DECIMALS: u8 = 9;

/// Errors that can occur when parsing a decimal amount.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
	/// Error that occurs when the input is empty after trimming.
	#[error("Amount is empty")]
	Empty,
	/// Error that occurs when the input contains a non-digit character.
	#[error("Invalid digit in amount: {0}")]
	InvalidDigit(String),
	/// Error that occurs when the fractional part exceeds the unit's precision.
	#[error("Too many decimal places, maximum is {max}")]
	TooManyDecimals {
		/// Maximum number of decimal places for the target unit.
		max: u8,
	},
	/// Error that occurs when the amount does not fit in 256 bits.
	#[error("Amount overflows 256 bits")]
	Overflow,
}

/// Formats a raw amount with the given number of decimal places.
///
/// Trailing zeros in the fractional part are trimmed, so one ETH renders
/// as "1" rather than "1.000000000000000000".
pub fn format_units(amount: U256, decimals: u8) -> String {
	let raw = amount.to_string();
	if decimals == 0 {
		return raw;
	}

	let places = decimals as usize;
	let (integer_part, decimal_part) = if raw.len() <= places {
		("0".to_string(), format!("{:0>width$}", raw, width = places))
	} else {
		let split = raw.len() - places;
		(raw[..split].to_string(), raw[split..].to_string())
	};

	let trimmed = decimal_part.trim_end_matches('0');
	if trimmed.is_empty() {
		integer_part
	} else {
		format!("{}.{}", integer_part, trimmed)
	}
}

/// Parses a decimal string into a raw amount with the given precision.
///
/// Accepts plain integers ("3"), decimals ("1.5"), and a bare fractional
/// part (".5"). Fails if the fractional part is longer than `decimals`.
pub fn parse_units(value: &str, decimals: u8) -> Result<U256, ConversionError> {
	let value = value.trim();
	if value.is_empty() {
		return Err(ConversionError::Empty);
	}

	let (integer_str, fraction_str) = match value.split_once('.') {
		Some((i, f)) => (i, f),
		None => (value, ""),
	};
	if fraction_str.len() > decimals as usize {
		return Err(ConversionError::TooManyDecimals { max: decimals });
	}

	let integer_str = if integer_str.is_empty() {
		"0"
	} else {
		integer_str
	};
	let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
	if !all_digits(integer_str) || !all_digits(fraction_str) {
		return Err(ConversionError::InvalidDigit(value.to_string()));
	}

	let scale = U256::from(10).pow(U256::from(decimals as u64));
	let integer = U256::from_str_radix(integer_str, 10)
		.map_err(|_| ConversionError::InvalidDigit(value.to_string()))?;

	let fraction = if fraction_str.is_empty() {
		U256::ZERO
	} else {
		let padding = U256::from(10).pow(U256::from((decimals as usize - fraction_str.len()) as u64));
		U256::from_str_radix(fraction_str, 10)
			.map_err(|_| ConversionError::InvalidDigit(value.to_string()))?
			.checked_mul(padding)
			.ok_or(ConversionError::Overflow)?
	};

	integer
		.checked_mul(scale)
		.and_then(|v| v.checked_add(fraction))
		.ok_or(ConversionError::Overflow)
}

/// Formats a wei amount as ETH.
pub fn format_ether(wei: U256) -> String {
	format_units(wei, ETH_DECIMALS)
}

/// Parses an ETH amount into wei.
pub fn parse_ether(value: &str) -> Result<U256, ConversionError> {
	parse_units(value, ETH_DECIMALS)
}

/// Formats a wei amount as gwei.
pub fn format_gwei(wei: U256) -> String {
	format_units(wei, GWEI_DECIMALS)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_format_units() {
		assert_eq!(format_units(U256::from(1_000_000_000_000_000_000u64), 18), "1");
		assert_eq!(
			format_units(U256::from(1_500_000_000_000_000_000u64), 18),
			"1.5"
		);
		assert_eq!(format_units(U256::from(100_000_000_000_000_000u64), 18), "0.1");
		assert_eq!(format_units(U256::from(1u64), 18), "0.000000000000000001");
		assert_eq!(format_units(U256::ZERO, 18), "0");
		assert_eq!(format_units(U256::from(1000u64), 0), "1000");
	}

	#[test]
	fn test_parse_units() {
		assert_eq!(
			parse_units("1.5", 18).unwrap(),
			U256::from(1_500_000_000_000_000_000u64)
		);
		assert_eq!(parse_units("0.001", 18).unwrap(), U256::from(1_000_000_000_000_000u64));
		assert_eq!(parse_units(".5", 18).unwrap(), U256::from(500_000_000_000_000_000u64));
		assert_eq!(parse_units("0", 18).unwrap(), U256::ZERO);
	}

	#[test]
	fn test_parse_units_errors() {
		assert_eq!(parse_units("", 18), Err(ConversionError::Empty));
		assert_eq!(parse_units("   ", 18), Err(ConversionError::Empty));
		assert!(matches!(
			parse_units("1.2.3", 18),
			Err(ConversionError::InvalidDigit(_))
		));
		assert!(matches!(
			parse_units("-1", 18),
			Err(ConversionError::InvalidDigit(_))
		));
		assert_eq!(
			parse_units("0.0000000001", 9),
			Err(ConversionError::TooManyDecimals { max: 9 })
		);
	}

	#[test]
	fn test_ether_round_trip() {
		// format(parse(x)) is identity for trimmed decimal inputs within
		// wei precision.
		for value in ["1", "1.5", "0.001", "0.000000000000000001", "123456.789"] {
			let wei = parse_ether(value).unwrap();
			assert_eq!(format_ether(wei), value);
		}
		// parse(format(x)) is identity for any wei amount.
		let wei = U256::from(123_456_789_000_000_001u64);
		assert_eq!(parse_ether(&format_ether(wei)).unwrap(), wei);
	}

	#[test]
	fn test_format_gwei() {
		assert_eq!(format_gwei(U256::from(1_000_000_000u64)), "1");
		assert_eq!(format_gwei(U256::from(1_500_000_000u64)), "1.5");
	}
}
