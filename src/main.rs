//! CLI entry point for tad, a read-only Tenable.ad API client.
//!
//! Connects with an API key, runs one read endpoint selected by the
//! subcommand and prints the decoded records as pretty JSON on stdout.
//!
//! Exit codes:
//! - 0: success
//! - 1: runtime error (bad configuration, API error, network failure)
//! - 2: argument validation error (clap handles this automatically)

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use tenable_ad::alerts::AlertFilter;
use tenable_ad::auth::ApiKey;
use tenable_ad::client::TadClient;
use tenable_ad::config::ClientConfig;
use tenable_ad::error::Result;
use tenable_ad::query::Page;

#[derive(Parser)]
#[command(name = "tad", version, about, long_about = None)]
struct Cli {
    /// Tenable.ad instance URL, e.g. https://tenable-ad.example.com.
    #[arg(long, env = "TAD_URL")]
    url: String,

    /// API key. Prefer setting via the TAD_API_KEY environment variable to
    /// keep it out of process listings and shell history.
    #[arg(long, env = "TAD_API_KEY", hide_env_values = true)]
    api_key: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the instance version.
    About,
    /// Show the user the API key belongs to.
    Whoami,
    /// Show the installed license.
    License,
    /// List users.
    Users,
    /// List roles.
    Roles,
    /// List security profiles.
    Profiles,
    /// List monitored directories.
    Directories,
    /// List attack types.
    AttackTypes,
    /// Show the account lockout policy.
    LockoutPolicy,
    /// List the alerts of a profile.
    Alerts {
        #[arg(long)]
        profile_id: i64,

        #[arg(long)]
        page: Option<u32>,

        #[arg(long)]
        per_page: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::new(args.url, ApiKey::new(args.api_key));
    match run(&config, &args.command).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Runs one subcommand and returns its pretty-printed JSON output.
async fn run(config: &ClientConfig, command: &Command) -> Result<String> {
    let client = TadClient::new(config)?;
    match command {
        Command::About => pretty(&client.about().details().await?),
        Command::Whoami => pretty(&client.users().info().await?),
        Command::License => pretty(&client.license().details().await?),
        Command::Users => pretty(&client.users().list().await?),
        Command::Roles => pretty(&client.roles().list().await?),
        Command::Profiles => pretty(&client.profiles().list().await?),
        Command::Directories => pretty(&client.directories().list().await?),
        Command::AttackTypes => pretty(&client.attack_types().list().await?),
        Command::LockoutPolicy => pretty(&client.lockout_policy().details().await?),
        Command::Alerts {
            profile_id,
            page,
            per_page,
        } => {
            let filter = AlertFilter {
                page: Page {
                    page: *page,
                    per_page: *per_page,
                },
                ..Default::default()
            };
            pretty(&client.alerts().list(profile_id, &filter).await?)
        }
    }
}

fn pretty<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
