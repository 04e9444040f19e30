//! Plain-text rendering of client results.
//!
//! The writer is an explicit dependency of the presentation layer; the
//! commands hand results to an [`Output`] instead of printing through
//! shared global state.

use hello_types::{ContractInfo, EventRecord};
use std::io::{self, Write};

/// Renders client results to a writer.
pub struct Output<W: Write> {
	writer: W,
}

impl<W: Write> Output<W> {
	/// Creates an output over the given writer.
	pub fn new(writer: W) -> Self {
		Self { writer }
	}

	/// Renders a contract snapshot.
	pub fn info(&mut self, info: &ContractInfo, network: &str) -> io::Result<()> {
		writeln!(self.writer, "Contract Information")?;
		writeln!(self.writer, "  Contract Address: {}", info.contract_address)?;
		writeln!(self.writer, "  Account:          {}", info.account)?;
		writeln!(self.writer, "  Balance:          {} ETH", info.balance_eth)?;
		writeln!(self.writer, "  Current Message:  {}", info.current_message)?;
		writeln!(self.writer, "  Message Length:   {} bytes", info.message_length)?;
		writeln!(self.writer, "  Owner:            {}", info.owner)?;
		writeln!(self.writer, "  Is Owner:         {}", if info.is_owner { "yes" } else { "no" })?;
		writeln!(self.writer, "  Chain ID:         {}", info.chain_id)?;
		writeln!(self.writer, "Network: {}", network)
	}

	/// Renders the current message.
	pub fn message(&mut self, message: &str) -> io::Result<()> {
		writeln!(self.writer, "{}", message)
	}

	/// Renders the outcome of a confirmed update.
	pub fn update_result(&mut self, tx_hash: &str, new_message: &str) -> io::Result<()> {
		writeln!(self.writer, "Transaction confirmed: {}", tx_hash)?;
		writeln!(self.writer, "New message: {}", new_message)
	}

	/// Renders a list of historical events.
	pub fn events(&mut self, records: &[EventRecord]) -> io::Result<()> {
		if records.is_empty() {
			return writeln!(self.writer, "No MessageUpdated events found");
		}
		writeln!(self.writer, "{} MessageUpdated event(s)", records.len())?;
		for record in records {
			writeln!(
				self.writer,
				"  block {:>8}  {}  \"{}\"  by {}",
				record.block_number, record.transaction_hash, record.message, record.updater
			)?;
		}
		Ok(())
	}

	/// Renders an account balance.
	pub fn balance(&mut self, account: &str, balance_eth: &str) -> io::Result<()> {
		writeln!(self.writer, "Balance of {}: {} ETH", account, balance_eth)
	}

	/// Renders a message signature.
	pub fn signature(&mut self, account: &str, signature: &str) -> io::Result<()> {
		writeln!(self.writer, "Signer:    {}", account)?;
		writeln!(self.writer, "Signature: {}", signature)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn render<F: FnOnce(&mut Output<&mut Vec<u8>>)>(f: F) -> String {
		let mut buffer = Vec::new();
		let mut output = Output::new(&mut buffer);
		f(&mut output);
		String::from_utf8(buffer).unwrap()
	}

	#[test]
	fn test_info_rendering() {
		let info = ContractInfo {
			contract_address: "0x5FbDB2315678afecb367f032d93F642f64180aa3".to_string(),
			account: "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".to_string(),
			balance_eth: "1.5".to_string(),
			current_message: "Hello Base!".to_string(),
			message_length: 11,
			owner: "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".to_string(),
			is_owner: true,
			chain_id: 84532,
		};
		let rendered = render(|o| o.info(&info, "Base-Sepolia").unwrap());
		assert!(rendered.contains("Hello Base!"));
		assert!(rendered.contains("11 bytes"));
		assert!(rendered.contains("Is Owner:         yes"));
		assert!(rendered.contains("Network: Base-Sepolia"));
	}

	#[test]
	fn test_events_rendering_empty() {
		let rendered = render(|o| o.events(&[]).unwrap());
		assert!(rendered.contains("No MessageUpdated events"));
	}

	#[test]
	fn test_events_rendering() {
		let records = vec![EventRecord {
			block_number: 42,
			message: "hi".to_string(),
			updater: "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".to_string(),
			transaction_hash: "0xabcd".to_string(),
		}];
		let rendered = render(|o| o.events(&records).unwrap());
		assert!(rendered.contains("1 MessageUpdated event(s)"));
		assert!(rendered.contains("\"hi\""));
	}
}
