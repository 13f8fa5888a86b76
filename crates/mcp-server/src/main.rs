use anyhow::Result;
use clap::Parser;
use orbit_api::{ApiClient, Config};
use orbit_mcp_server::OrbitMcpServer;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing_subscriber::EnvFilter;

/// MCP server for the Orbit hosting control plane (stdio transport).
#[derive(Parser)]
#[command(name = "orbit-mcp-server", version, about)]
struct Cli {
    /// Account email used to log in. Falls back to ORBIT_EMAIL.
    #[arg(long, env = "ORBIT_EMAIL")]
    email: Option<String>,

    /// Account password. Falls back to ORBIT_PASSWORD.
    #[arg(long, env = "ORBIT_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Base URL of the control-plane API.
    #[arg(long, env = "ORBIT_API_BASE")]
    api_base: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long, env = "ORBIT_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the MCP protocol; logs must go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Flags win over the ORBIT_* environment, which wins over defaults.
    let env_config = Config::from_env();
    let config = Config {
        email: cli.email.or(env_config.email),
        password: cli.password.or(env_config.password),
        api_base: cli.api_base.unwrap_or(env_config.api_base),
        timeout: cli
            .timeout_secs
            .map_or(env_config.timeout, std::time::Duration::from_secs),
    };

    let client = ApiClient::new(config)?;
    tracing::info!("starting Orbit MCP server on stdio");

    let service = OrbitMcpServer::new(client).serve(stdio()).await?;
    service.waiting().await?;
    Ok(())
}
