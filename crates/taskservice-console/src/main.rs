/*
[INPUT]:  CLI arguments and the backend base URL
[OUTPUT]: Running task console with logs captured for the Logs tab
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use std::sync::{Arc, Mutex as StdMutex};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use taskservice_adapter::{DEFAULT_BASE_URL, TaskServiceClient};
use taskservice_console::tui::{
    LOG_BUFFER_CAPACITY, LogBuffer, LogBufferHandle, LogWriterFactory, run_tui,
};

#[derive(Parser, Debug)]
#[command(
    name = "taskservice-console",
    version,
    about = "Terminal console for the parsing task service"
)]
struct Cli {
    /// Base URL of the task service backend
    #[arg(long = "base-url", value_name = "URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // stdout belongs to the alternate screen, so tracing writes into the
    // buffer behind the Logs tab instead
    let log_buffer: LogBufferHandle = Arc::new(StdMutex::new(LogBuffer::new(LOG_BUFFER_CAPACITY)));
    init_tracing(&args.log_level, log_buffer.clone())?;

    info!(base_url = %args.base_url, "starting taskservice-console");

    let client = TaskServiceClient::new(&args.base_url).context("construct backend client")?;

    // an unreachable backend is reported, not fatal; the console still opens
    match client.health().await {
        Ok(health) => info!(status = %health.status, "backend reachable"),
        Err(err) => warn!(error = %err, "backend health check failed"),
    }

    run_tui(client, log_buffer).await
}

fn init_tracing(log_level: &str, buffer: LogBufferHandle) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(LogWriterFactory::new(buffer))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
