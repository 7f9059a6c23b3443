mod report;

use std::process::ExitCode;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wxreport_core::{AppConfig, Coordinates, DayMatch};
use wxreport_nws::{LocationSource, NwsClient};

#[derive(Debug, Parser)]
#[command(name = "wxreport")]
#[command(about = "Current conditions, today's hourly forecast and active alerts from the NWS")]
struct Cli {
    /// Latitude in decimal degrees; skips IP geolocation (requires --lon)
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Longitude in decimal degrees (requires --lat)
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lon: Option<f64>,

    /// How forecast periods are matched to today
    #[arg(long, value_parser = parse_day_match_arg)]
    day_match: Option<DayMatch>,

    /// Log filter used when RUST_LOG is unset, e.g. "debug"
    #[arg(long)]
    log_level: Option<String>,
}

fn parse_day_match_arg(raw: &str) -> Result<DayMatch, String> {
    wxreport_core::parse_day_match(raw).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = wxreport_core::load_app_config()?;
    apply_overrides(&mut config, &cli)?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = NwsClient::from_config(&config).context("failed to build HTTP client")?;
    let source = config
        .coordinates
        .map_or(LocationSource::Detect, LocationSource::Fixed);
    tracing::debug!(?source, day_match = %config.forecast_day_match, "starting report");

    let report =
        wxreport_nws::build_report(&client, source, Utc::now(), config.forecast_day_match).await?;
    print!("{}", report::render_report(&report));
    Ok(())
}

/// Command-line flags take precedence over environment configuration.
fn apply_overrides(config: &mut AppConfig, cli: &Cli) -> anyhow::Result<()> {
    if let (Some(lat), Some(lon)) = (cli.lat, cli.lon) {
        config.coordinates = Some(Coordinates::new(lat, lon)?);
    }
    if let Some(day_match) = cli.day_match {
        config.forecast_day_match = day_match;
    }
    if let Some(level) = &cli.log_level {
        config.log_level.clone_from(level);
    }
    Ok(())
}
