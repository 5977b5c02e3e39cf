use clap::Parser;
use doh_client_application::use_cases::{select_method, ResolveDomainUseCase};
use doh_client_domain::{CliOverrides, Config, DohMethod, DohQuery, RecordType};
use doh_client_infrastructure::dns::DohClient;
use doh_client_infrastructure::http::ReqwestTransport;
use doh_client_infrastructure::system::TokioSystemResolver;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

mod bootstrap;
mod output;

const DEFAULT_DOMAIN: &str = "example.com";

#[derive(Parser)]
#[command(name = "doh-client")]
#[command(version)]
#[command(about = "DNS-over-HTTPS client (RFC 8484 wire format and JSON API)")]
struct Cli {
    /// Domain to resolve
    #[arg(value_name = "DOMAIN")]
    target: Option<String>,

    /// Domain to resolve (takes precedence over the positional argument)
    #[arg(short = 'd', long)]
    domain: Option<String>,

    /// DoH server URL or configured server name
    #[arg(long)]
    server: Option<String>,

    /// Request encoding (get, post, json)
    #[arg(long)]
    method: Option<String>,

    /// Record type (A, AAAA, CNAME, MX, NS, TXT or TYPEn)
    #[arg(short = 't', long = "type", default_value = "A")]
    record_type: RecordType,

    /// Log level (trace, debug, info, warn, error, critical)
    #[arg(long)]
    log_level: Option<String>,

    /// Total request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Connection timeout in seconds
    #[arg(long)]
    connect_timeout: Option<u64>,

    /// Do not fall back to the system resolver
    #[arg(long)]
    no_fallback: bool,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Write the default configuration file and exit
    #[arg(long)]
    init_config: bool,

    /// List configured servers and exit
    #[arg(long)]
    list_servers: bool,
}

fn cli_overrides(cli: &Cli) -> CliOverrides {
    CliOverrides {
        server: cli.server.clone(),
        method: cli.method.as_deref().and_then(|m| m.parse().ok()),
        timeout: cli.timeout,
        connect_timeout: cli.connect_timeout,
        enable_fallback: cli.no_fallback.then_some(false),
        log_level: cli.log_level.clone(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.init_config {
        let path = bootstrap::init_config(cli.config.as_deref())?;
        println!("Configuration written to {}", path);
        return Ok(());
    }

    let mut config = bootstrap::load_config(cli.config.as_deref(), cli_overrides(&cli))?;

    let _log_guard = bootstrap::init_logging(&config.logging)?;

    info!("Starting doh-client v{}", env!("CARGO_PKG_VERSION"));
    if let Some(path) = cli.config.clone().or_else(Config::get_config_path) {
        info!(path = %path, "Using configuration file");
    }

    if let Some(name) = cli
        .method
        .as_deref()
        .filter(|m| m.parse::<DohMethod>().is_err())
    {
        config.client.default_method = select_method(name);
    }
    debug!(config = %output::render_config_summary(&config), "Effective configuration");

    if cli.list_servers {
        print!("{}", output::render_servers(&config.servers_by_priority()));
        return Ok(());
    }

    let domain = match cli.domain.or(cli.target) {
        Some(domain) => domain,
        None => {
            info!(domain = DEFAULT_DOMAIN, "No domain given, using default");
            DEFAULT_DOMAIN.to_string()
        }
    };

    let method = config.client.default_method;
    if let Some(server) = config.selected_server() {
        if !server.supports(method) {
            warn!(
                server = %server.name,
                method = %method,
                "Server does not list this method, trying anyway"
            );
        }
    }

    let server_url = config.resolve_server(&config.client.default_server);
    info!(server = %server_url, method = %method, "Using DoH server");

    let transport = ReqwestTransport::new(
        Duration::from_secs(config.client.connect_timeout),
        Duration::from_secs(config.request_timeout()),
    )?;
    let client = DohClient::new(
        server_url,
        Arc::new(transport),
        Arc::new(TokioSystemResolver::new()),
    );
    let use_case = ResolveDomainUseCase::new(Arc::new(client));

    let query = DohQuery::new(domain, cli.record_type, method)
        .with_fallback(config.client.enable_fallback);
    let records = use_case.execute(&query).await?;

    print!("{}", output::render_records(query.domain.trim(), &records));
    Ok(())
}
