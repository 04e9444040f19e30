//! Secure string type for private key material.
//!
//! `SecretString` wraps sensitive data so it is zeroed on drop and never
//! rendered by `Debug` or `Display`. The key loaded from the environment
//! lives inside one of these for the whole process lifetime.

use std::fmt;
use zeroize::Zeroizing;

/// A string whose memory is zeroed on drop and whose value is redacted
/// in all formatted output.
#[derive(Clone)]
pub struct SecretString(Zeroizing<String>);

impl SecretString {
	/// Wraps an owned string as a secret.
	pub fn new(s: String) -> Self {
		Self(Zeroizing::new(s))
	}

	/// Exposes the secret to a closure for processing.
	///
	/// The closure scope is the only place the raw value is visible;
	/// the result must not carry the secret back out into logs or state.
	pub fn with_exposed<F, R>(&self, f: F) -> R
	where
		F: FnOnce(&str) -> R,
	{
		f(&self.0)
	}
}

impl fmt::Debug for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "SecretString(***REDACTED***)")
	}
}

impl fmt::Display for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "***REDACTED***")
	}
}

impl From<String> for SecretString {
	fn from(s: String) -> Self {
		Self::new(s)
	}
}

impl From<&str> for SecretString {
	fn from(s: &str) -> Self {
		Self::new(s.to_string())
	}
}

impl PartialEq for SecretString {
	fn eq(&self, other: &Self) -> bool {
		self.0.as_str() == other.0.as_str()
	}
}

impl Eq for SecretString {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_debug_and_display_redact() {
		let secret = SecretString::from("private-key-hex");
		assert_eq!(format!("{:?}", secret), "SecretString(***REDACTED***)");
		assert_eq!(format!("{}", secret), "***REDACTED***");
		assert!(!format!("{:?}", secret).contains("private-key-hex"));
	}

	#[test]
	fn test_with_exposed() {
		let secret = SecretString::from("abcdef");
		let len = secret.with_exposed(|s| {
			assert_eq!(s, "abcdef");
			s.len()
		});
		assert_eq!(len, 6);
	}

	#[test]
	fn test_eq() {
		assert_eq!(SecretString::from("k1"), SecretString::from("k1"));
		assert_ne!(SecretString::from("k1"), SecretString::from("k2"));
	}
}
