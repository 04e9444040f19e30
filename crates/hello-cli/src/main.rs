//! Command-line interface for the HelloBase contract client.
//!
//! Provides commands to read contract state, update the message, and
//! view historical events on Base or Base-Sepolia. Configuration comes
//! from the environment: `PRIVATE_KEY`, `BASE_SEPOLIA_RPC` or
//! `BASE_MAINNET_RPC`, and optionally `CHAIN_ID`.

use clap::{Parser, Subcommand};
use hello_core::Client;
use std::path::PathBuf;

mod output;

use output::Output;

/// Command-line arguments for the HelloBase client.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Address of the deployed HelloBase contract
	#[arg(long, env = "HELLO_BASE_CONTRACT_ADDRESS")]
	contract: String,

	/// Path to a contract ABI JSON file (built-in interface when omitted)
	#[arg(long)]
	abi_path: Option<PathBuf>,

	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long, default_value = "warn")]
	log_level: String,

	#[command(subcommand)]
	command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Command {
	/// Show a snapshot of contract and account state
	Info,
	/// Print the current contract message
	Message,
	/// Update the contract message (owner only)
	Update {
		/// The new message to store
		message: String,
		/// Gas limit for the transaction
		#[arg(long)]
		gas_limit: Option<u64>,
	},
	/// List MessageUpdated events for a block range
	Events {
		/// First block of the range (inclusive)
		#[arg(long, default_value_t = 0)]
		from_block: u64,
		/// Last block of the range (inclusive, latest when omitted)
		#[arg(long)]
		to_block: Option<u64>,
	},
	/// Show the account balance
	Balance,
	/// Sign a text message with the account key (local, no transaction)
	Sign {
		/// The message to sign
		message: String,
	},
}

#[tokio::main]
async fn main() {
	let args = Args::parse();

	// Initialize tracing with env filter
	use tracing_subscriber::{fmt, EnvFilter};
	let env_filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(args.log_level.clone()));
	fmt().with_env_filter(env_filter).init();

	if let Err(e) = run(args).await {
		eprintln!("Error: {}", e);
		std::process::exit(1);
	}
}

/// Connects the client and dispatches the requested command.
async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
	let client = Client::connect(&args.contract, args.abi_path.as_deref()).await?;
	let mut output = Output::new(std::io::stdout());

	match args.command {
		Command::Info => {
			let info = client.info().await?;
			let network = client.endpoint().network_name();
			output.info(&info, &network)?;
		}
		Command::Message => {
			let message = client.message().await?;
			output.message(&message)?;
		}
		Command::Update { message, gas_limit } => {
			let tx_hash = client.update_message(&message, gas_limit).await?;
			// Read back after confirmation so the user sees the applied state.
			let current = client.message().await?;
			output.update_result(&tx_hash, &current)?;
		}
		Command::Events {
			from_block,
			to_block,
		} => {
			let records = client.events(from_block, to_block).await?;
			output.events(&records)?;
		}
		Command::Balance => {
			let balance = client.balance_eth().await?;
			output.balance(&client.account_address().to_string(), &balance)?;
		}
		Command::Sign { message } => {
			let signature = client.sign_message(&message).await?;
			output.signature(&client.account_address().to_string(), &signature)?;
		}
	}

	Ok(())
}
