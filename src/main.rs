//! # Job Board Admin Entry Point
//!
//! Parses the command line, resolves the API profile and runs one page.

use anyhow::Result;
use jobboard::cmd_args::CommandLineArgs;
use jobboard::config::{get_profile_path, load_profile, LOG_LEVEL_ENV_VAR};
use jobboard::{ApiClient, ApiConfig, Shell};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

const QUIET_TARGETS: &[&str] = &[
    "reqwest",
    "hyper",
    "hyper_util",
    "tokio",
    "tracing",
    "tracing_subscriber",
    "tower",
    "rustls",
    "h2",
];

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing_subscriber()?;

    let cmd_args = CommandLineArgs::parse();
    let config = resolve_config(&cmd_args)?;
    tracing::debug!("API config: {:?}", config);

    let shell = Shell::new(ApiClient::new(config)?, cmd_args.verbose());
    let output = shell.run(cmd_args.page()).await?;

    if output.success {
        println!("{}", output.text);
    } else {
        eprintln!("{}", output.text);
    }
    std::process::exit(output.exit_code());
}

/// Profile first, then the `--base-url` override on top of it
fn resolve_config(cmd_args: &CommandLineArgs) -> Result<ApiConfig> {
    let profile_path = get_profile_path();
    let profile_name = cmd_args.profile();
    tracing::debug!("Loading profile '{}' from '{}'", profile_name, profile_path);

    let profile = match load_profile(&profile_path, profile_name)? {
        Some(config) => config,
        None => {
            tracing::debug!("Profile '{}' not found, using defaults", profile_name);
            ApiConfig::default()
        }
    };

    Ok(match cmd_args.base_url() {
        Some(base_url) => profile
            .default_headers()
            .iter()
            .fold(ApiConfig::new(base_url), |config, (name, value)| {
                config.with_header(name.as_str(), value.as_str())
            }),
        None => profile,
    })
}

fn init_tracing_subscriber() -> Result<()> {
    let mut filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(LOG_LEVEL_ENV_VAR)
        .from_env_lossy();
    for target in QUIET_TARGETS {
        filter = filter.add_directive(format!("{target}=warn").parse::<Directive>()?);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}
