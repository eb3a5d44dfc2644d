use anyhow::anyhow;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use storefront_server::{run_server, ServerArgs};

fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing().ok();
    let args = ServerArgs::parse();
    run_server(args).await
}
