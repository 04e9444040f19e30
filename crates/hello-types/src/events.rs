//! Historical contract event types.

/// One decoded `MessageUpdated` event.
///
/// Records are fetched on demand for a block range and returned in the
/// order the network reports them, ascending by block number. They are
/// never cached across calls.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EventRecord {
	/// Block number in which the event was emitted.
	pub block_number: u64,
	/// The new message carried by the event.
	pub message: String,
	/// Address that performed the update, "0x"-prefixed.
	pub updater: String,
	/// Hash of the emitting transaction, "0x"-prefixed.
	pub transaction_hash: String,
}
