//! # Vigil DNS
//!
//! A filtering DNS relay: blocklisted domains are answered with NXDOMAIN,
//! everything else is forwarded to the configured upstream resolver.

use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{error, info};
use vigil_dns_application::RelayQueryUseCase;
use vigil_dns_domain::CliOverrides;
use vigil_dns_infrastructure::dns::{RelayHandler, RelayServer, UdpForwarder};

mod bootstrap;

// Startup failures carry a distinct exit code per class so operators and
// init scripts can tell them apart. Status 2 is reserved: clap exits with
// it on argument-parse errors.
const EXIT_CONFIG: i32 = 1;
const EXIT_FILTER: i32 = 3;
const EXIT_BIND: i32 = 4;

#[derive(Parser)]
#[command(name = "vigil-dns")]
#[command(version)]
#[command(about = "Vigil DNS - filtering DNS relay")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Upstream DNS server (hostname or IP, queried on port 53)
    #[arg(short = 's', long)]
    upstream: Option<String>,

    /// UDP port to listen on
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Filter file with blocked domain patterns
    #[arg(short = 'f', long)]
    filter: Option<String>,

    /// Enable verbose diagnostics (same as --log-level debug)
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match (&cli.log_level, cli.verbose) {
        (Some(level), _) => Some(level.clone()),
        (None, true) => Some("debug".to_string()),
        (None, false) => None,
    };

    let cli_overrides = CliOverrides {
        upstream_server: cli.upstream.clone(),
        listen_port: cli.port,
        bind_address: cli.bind.clone(),
        filter_path: cli.filter.clone(),
        log_level,
    };

    let config = match bootstrap::load_config(cli.config.as_deref(), cli_overrides) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("vigil-dns: {e}");
            std::process::exit(EXIT_CONFIG);
        }
    };

    bootstrap::init_logging(&config);

    info!("Starting Vigil DNS v{}", env!("CARGO_PKG_VERSION"));

    let filter = match bootstrap::load_filter(&config) {
        Ok(filter) => filter,
        Err(e) => {
            error!(error = %e, "Filter load failed");
            std::process::exit(EXIT_FILTER);
        }
    };

    let forwarder = Arc::new(UdpForwarder::new(
        config.upstream.server.clone(),
        Duration::from_secs(config.upstream.timeout_secs),
    ));

    let use_case = Arc::new(RelayQueryUseCase::new(filter, forwarder));
    let handler = Arc::new(RelayHandler::new(use_case));

    let bind_addr = format!("{}:{}", config.server.bind_address, config.server.listen_port);
    let socket = match UdpSocket::bind(&bind_addr).await {
        Ok(socket) => socket,
        Err(e) => {
            error!(addr = %bind_addr, error = %e, "Failed to bind UDP socket");
            std::process::exit(EXIT_BIND);
        }
    };

    info!(addr = %bind_addr, upstream = %config.upstream.server, "DNS relay ready");

    RelayServer::new(socket, handler).run().await;
}
