use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};

pub mod display;
pub mod notifications;

use switchbot_api::SwitchBotClient;
use switchbot_events::EventDecoder;

/// SwitchBot SDK Integration Example
///
/// Demonstrates the complete webhook workflow by registering a receiver
/// URL through the management API, verifying the registration, replaying
/// recorded change reports through the event decoder, and cleaning the
/// registration up again.
#[derive(Parser, Debug)]
#[command(name = "integration-example")]
#[command(about = "SwitchBot SDK Integration Example - Complete webhook workflow")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Receiver URL to register; omit to only inspect the account
    #[arg(short, long)]
    pub url: Option<String>,

    /// Device scope for the registration
    #[arg(long, default_value = "ALL")]
    pub device_list: String,

    /// Leave the registration in place instead of deleting it at the end
    #[arg(long)]
    pub keep: bool,

    /// Disable the registration after setup
    #[arg(long)]
    pub disable: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Validate command line arguments
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.url {
            if url.is_empty() {
                return Err(anyhow::anyhow!("Receiver URL must not be empty"));
            }
        }

        if self.device_list.is_empty() {
            return Err(anyhow::anyhow!("Device list must not be empty"));
        }

        match self.log_level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => {
                return Err(anyhow::anyhow!(
                    "Invalid log level '{}'. Valid levels: error, warn, info, debug, trace",
                    self.log_level
                ));
            }
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments and environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub secret: String,
    pub url: Option<String>,
    pub device_list: String,
    pub keep: bool,
    pub disable: bool,
    pub log_level: String,
}

impl Config {
    /// Create configuration from command line arguments and environment variables
    ///
    /// The credentials only come from the environment so they never show
    /// up in shell history or process listings.
    pub fn from_env() -> Result<Self> {
        let args = Args::parse();
        args.validate()?;

        let token = std::env::var("SWITCHBOT_TOKEN")
            .context("SWITCHBOT_TOKEN environment variable is required")?;
        let secret = std::env::var("SWITCHBOT_SECRET")
            .context("SWITCHBOT_SECRET environment variable is required")?;

        Ok(Self {
            token,
            secret,
            url: args.url,
            device_list: args.device_list,
            keep: args.keep,
            disable: args.disable,
            log_level: args.log_level,
        })
    }
}

/// Initialize tracing/logging with the specified log level
fn init_tracing(log_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level.to_lowercase())),
        )
        .init();
}

/// Run the complete integration workflow
///
/// Orchestrates the inspect -> register -> verify -> decode -> cleanup
/// flow with proper error handling at each stage.
fn run_integration_workflow(config: &Config) -> Result<()> {
    let client = SwitchBotClient::new(config.token.clone(), config.secret.clone());
    let webhook = client.webhook();

    // Phase 1: Inspect current registrations
    info!("Phase 1: Querying registered webhook URLs...");
    let existing = webhook
        .query_urls()
        .context("Failed to query registered webhook URLs")?;
    if existing.is_empty() {
        info!("No webhook registered for this account");
    } else {
        for url in &existing {
            info!("Registered: {}", url);
        }
    }

    let Some(url) = &config.url else {
        info!("No receiver URL given; inspection finished");
        return Ok(());
    };

    // Phase 2: Register the receiver URL
    info!("Phase 2: Registering {}...", url);
    webhook
        .setup(url, &config.device_list)
        .context("Failed to register the receiver URL")?;

    // Phase 3: Verify the registration
    info!("Phase 3: Verifying the registration...");
    let details = webhook
        .query_details(vec![url.clone()])
        .context("Failed to fetch the registration details")?;
    for record in &details {
        println!("{}", display::format_subscription(record));
    }

    // Phase 4: Optionally disable delivery
    if config.disable {
        info!("Phase 4: Disabling delivery for {}...", url);
        webhook
            .update(url, false)
            .context("Failed to disable the registration")?;
    }

    // Phase 5: Replay recorded notifications through the decoder
    info!("Phase 5: Decoding recorded change reports...");
    let decoder = EventDecoder::new();
    for body in notifications::RECORDED_BODIES {
        println!("{}", notifications::handle_notification(&decoder, body.as_bytes()));
    }

    // Phase 6: Cleanup
    if config.keep {
        info!("Phase 6: Keeping the registration as requested");
    } else {
        info!("Phase 6: Deleting the registration...");
        if let Err(e) = webhook.delete(url) {
            warn!("Failed to delete the registration: {}", e);
        }
    }

    info!("Integration workflow completed");
    Ok(())
}

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to parse configuration")?;

    init_tracing(&config.log_level);

    info!("Starting SwitchBot SDK Integration Example");

    match run_integration_workflow(&config) {
        Ok(()) => {
            info!("Integration example completed successfully");
        }
        Err(e) => {
            error!("Integration example failed: {:#}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
