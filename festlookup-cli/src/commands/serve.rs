//! HTTP server command
//!
//! Binds the lookup service and blocks until shutdown.

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use clap::Parser;

use festlookup_server::{run_server, DbConfig, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 10000)]
    pub port: u16,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db = DbConfig::from_env();
    tracing::info!(
        host = %db.host,
        port = db.port,
        database = %db.name,
        "Database configuration loaded"
    );

    let config = ServerConfig {
        bind_addr: SocketAddr::new(args.host, args.port),
    };

    run_server(db, config).await.context("Server error")?;

    Ok(())
}
