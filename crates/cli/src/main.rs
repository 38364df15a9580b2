// Siteline admin CLI
//
// Design Decision: Use clap derive for ergonomic argument parsing.
// Design Decision: Support text/json/yaml output formats for scripting.
// Design Decision: The session file stands in for browser storage: `auth login`
// writes it, the client reads the token from it on every request.

mod commands;
mod output;
mod session;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use siteline_client::{ApiClient, ClientConfig, SessionFile};
use siteline_core::{Environment, Stage};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "siteline")]
#[command(about = "Siteline CLI - Manage events, blogs, careers and contact messages")]
#[command(version)]
pub struct Cli {
    /// Deployment stage (dev or prod); selects the backend origin
    #[arg(long, env = "SITELINE_STAGE")]
    pub stage: Option<String>,

    /// Backend origin, overriding the stage-based selection
    #[arg(long, env = "SITELINE_API_ORIGIN")]
    pub api_origin: Option<String>,

    /// Where the login session is stored
    #[arg(long, env = "SITELINE_SESSION_FILE", default_value = ".siteline/session.json")]
    pub session_file: PathBuf,

    /// Output format
    #[arg(long, short, default_value = "text", value_parser = ["text", "json", "yaml"])]
    pub output: String,

    /// Suppress non-essential output
    #[arg(long, short)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in, log out, show the current user
    Auth {
        #[command(subcommand)]
        command: commands::auth::AuthCommand,
    },

    /// Manage events
    Events {
        #[command(subcommand)]
        command: commands::events::EventsCommand,
    },

    /// Manage blog posts
    Blogs {
        #[command(subcommand)]
        command: commands::blogs::BlogsCommand,
    },

    /// Manage career openings
    Careers {
        #[command(subcommand)]
        command: commands::careers::CareersCommand,
    },

    /// Manage contact-form submissions
    Contacts {
        #[command(subcommand)]
        command: commands::contacts::ContactsCommand,
    },

    /// Show company information
    Company,

    /// List services offered
    Services,

    /// Check backend health
    Health,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn build_client(cli: &Cli) -> Result<ApiClient> {
    let mut config = ClientConfig::from_env().context("Invalid client configuration")?;

    if let Some(stage) = &cli.stage {
        config.stage = stage
            .parse::<Stage>()
            .map_err(|e| anyhow::anyhow!("--stage: {}", e))?;
    }
    if let Some(origin) = &cli.api_origin {
        config.origins = ClientConfig::for_origin(origin.as_str()).origins;
    }

    let env = Environment::server(config.stage);
    let credentials = Arc::new(SessionFile::new(&cli.session_file));
    let client = ApiClient::interactive(&config, &env, credentials)?;
    tracing::debug!(base_url = %client.base_url(), "Client configured");
    Ok(client)
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let client = build_client(&cli)?;
    let output_format = output::OutputFormat::parse(&cli.output);

    match cli.command {
        Commands::Auth { command } => {
            commands::auth::run(command, &client, output_format, cli.quiet, &cli.session_file)
                .await
        }
        Commands::Events { command } => {
            commands::events::run(command, &client, output_format, cli.quiet).await
        }
        Commands::Blogs { command } => {
            commands::blogs::run(command, &client, output_format, cli.quiet).await
        }
        Commands::Careers { command } => {
            commands::careers::run(command, &client, output_format, cli.quiet).await
        }
        Commands::Contacts { command } => {
            commands::contacts::run(command, &client, output_format, cli.quiet).await
        }
        Commands::Company => commands::company::company(&client, output_format).await,
        Commands::Services => commands::company::services(&client, output_format).await,
        Commands::Health => commands::company::health(&client, output_format).await,
    }
}
