//! CLI entry point for jpanda-site

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "jpanda-site")]
#[command(version)]
#[command(about = "Marketing site and Markdown blog server for JPanda Solutions", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the site server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on (overrides config and PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,
    },

    /// List blog posts
    List,

    /// Create a new post
    New {
        /// Title of the new post
        title: String,
    },

    /// Export posts as the JSON fallback snapshot
    Export {
        /// Output file (defaults to data/fallback-posts.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "jpanda_site=debug,info"
    } else {
        "jpanda_site=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());
    let site = jpanda_site::Site::new(&base_dir)?;

    match cli.command {
        Commands::Serve { port, host } => {
            let port = port.unwrap_or(site.config.port);
            let host = host.unwrap_or_else(|| site.config.host.clone());
            tracing::info!("Starting server at http://{}:{}", host, port);
            jpanda_site::server::start(&site, &host, port).await?;
        }

        Commands::List => {
            jpanda_site::commands::list::run(&site)?;
        }

        Commands::New { title } => {
            tracing::info!("Creating new post: {}", title);
            jpanda_site::commands::new::run(&site, &title)?;
        }

        Commands::Export { output } => {
            jpanda_site::commands::export::run(&site, output.as_deref())?;
        }
    }

    Ok(())
}
