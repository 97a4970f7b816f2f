use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod rpc;

#[derive(Parser)]
#[command(name = "spyglass", about = "Spyglass CLI - drive a running MCP gateway")]
struct Cli {
    /// Gateway URL
    #[arg(long, env = "SPYGLASS_URL", default_value = "http://localhost:3000")]
    gateway_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the web through the gateway
    Search {
        /// Search query
        query: String,

        /// Maximum number of results
        #[arg(long)]
        max_results: Option<u32>,

        /// Search depth: basic or advanced
        #[arg(long)]
        depth: Option<String>,

        /// Only include results from this domain (repeatable)
        #[arg(long)]
        include_domain: Vec<String>,

        /// Exclude results from this domain (repeatable)
        #[arg(long)]
        exclude_domain: Vec<String>,
    },

    /// Extract page content from one or more URLs
    Extract {
        /// URLs to extract
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Print the current time as the gateway reports it
    Time {
        /// IANA timezone name
        #[arg(long)]
        timezone: Option<String>,

        /// Output format: iso, chinese, us or timestamp
        #[arg(long)]
        format: Option<String>,
    },

    /// List the tools the gateway exposes
    ListTools,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            query,
            max_results,
            depth,
            include_domain,
            exclude_domain,
        } => {
            let mut arguments = serde_json::json!({ "query": query });
            if let Some(n) = max_results {
                arguments["max_results"] = n.into();
            }
            if let Some(d) = depth {
                arguments["search_depth"] = d.into();
            }
            if !include_domain.is_empty() {
                arguments["include_domains"] = include_domain.into();
            }
            if !exclude_domain.is_empty() {
                arguments["exclude_domains"] = exclude_domain.into();
            }

            let result = rpc::call_tool(&cli.gateway_url, "tavily_search", arguments).await?;
            rpc::print_content(&result);
        }
        Commands::Extract { urls } => {
            let arguments = serde_json::json!({ "urls": urls });
            let result = rpc::call_tool(&cli.gateway_url, "tavily_extract", arguments).await?;
            rpc::print_content(&result);
        }
        Commands::Time { timezone, format } => {
            let mut arguments = serde_json::json!({});
            if let Some(tz) = timezone {
                arguments["timezone"] = tz.into();
            }
            if let Some(f) = format {
                arguments["format"] = f.into();
            }

            let result = rpc::call_tool(&cli.gateway_url, "get_current_time", arguments).await?;
            rpc::print_content(&result);
        }
        Commands::ListTools => {
            let result =
                rpc::call(&cli.gateway_url, "tools/list", serde_json::json!({})).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
