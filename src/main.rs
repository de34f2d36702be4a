use std::net::IpAddr;

use clap::Parser;
use string_analysis::server::{ServerConfig, StringServer};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "string-analysis", version, about = "Serve the string analysis API over HTTP")]
struct Cli {
    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = string_analysis::server::config::DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::new(cli.host, cli.port);

    StringServer::new(config).serve().await?;
    Ok(())
}
