//! Command-line producer for the Courier relay daemon.
//!
//! Encodes one produce message from its arguments and delivers it over the
//! relay's Unix-domain socket, e.g.:
//!
//! ```text
//! courier-send --socket /run/courier/relay.sock \
//!     --topic events --value 'hello world'
//! ```

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use courier_client::{RelayClient, RelayConfig, SocketMode};

/// Send one produce message to a local Courier relay
#[derive(Parser)]
#[command(name = "courier-send")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the relay's listening socket
    #[arg(short, long)]
    socket: PathBuf,

    /// Socket mode: datagram or stream
    #[arg(short, long, default_value = "datagram")]
    mode: SocketMode,

    /// Destination topic
    #[arg(short, long)]
    topic: String,

    /// Message key
    #[arg(short, long, default_value = "")]
    key: String,

    /// Message value
    #[arg(short, long)]
    value: String,

    /// Route via an explicit partition key instead of letting the relay
    /// choose the partition
    #[arg(short, long)]
    partition_key: Option<u32>,

    /// Message timestamp in milliseconds since the Unix epoch; defaults to
    /// the current time
    #[arg(long)]
    timestamp_ms: Option<i64>,
}

fn epoch_ms() -> Result<i64> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is before the Unix epoch")?;
    i64::try_from(now.as_millis()).context("system clock overflows the timestamp field")
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let timestamp_ms = match cli.timestamp_ms {
        Some(t) => t,
        None => epoch_ms()?,
    };

    let client = RelayClient::new(RelayConfig::new(&cli.socket).with_mode(cli.mode));

    match cli.partition_key {
        Some(partition_key) => {
            client
                .send_partition_key(
                    partition_key,
                    cli.topic.as_bytes(),
                    timestamp_ms,
                    cli.key.as_bytes(),
                    cli.value.as_bytes(),
                )
                .await?;
        }
        None => {
            client
                .send_any_partition(
                    cli.topic.as_bytes(),
                    timestamp_ms,
                    cli.key.as_bytes(),
                    cli.value.as_bytes(),
                )
                .await?;
        }
    }

    info!(topic = %cli.topic, mode = %cli.mode, "message sent");
    Ok(())
}
