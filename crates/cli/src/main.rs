use beacon_dns_domain::CliOverrides;
use beacon_dns_infrastructure::dns::{DnsServerHandler, ResponsePolicy};
use clap::Parser;
use tracing::info;

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "beacon-dns")]
#[command(version)]
#[command(about = "Beacon DNS - answers every A query with a configured address")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Number of UDP workers sharing the port
    #[arg(long)]
    workers: Option<usize>,

    /// TTL of the fabricated answer, in seconds
    #[arg(long)]
    ttl: Option<u32>,

    /// IPv4 address returned in every answer
    #[arg(long, value_name = "IPV4")]
    answer_address: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        num_workers: cli.workers,
        ttl: cli.ttl,
        answer_address: cli.answer_address,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting Beacon DNS Server v{}", env!("CARGO_PKG_VERSION"));
    info!(
        ttl = config.answer.ttl,
        address = %config.answer.address,
        "Answer policy loaded"
    );

    let handler = DnsServerHandler::new(ResponsePolicy::from(&config.answer));
    let dns_addr = config.server.socket_addr_string();

    server::start_dns_server(dns_addr, handler, config.server.num_workers).await?;

    info!("Server shutdown complete");
    Ok(())
}
