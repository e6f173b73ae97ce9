use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use yantra_shadows::{
    observe_request, IanaOffsetResolver, Location, ObservationRequest, ObserverConfig,
    OffsetFallback,
};

#[derive(Parser)]
#[command(name = "yantra", about = "Solar position and yantra shadow readings")]
struct Cli {
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,
    /// Calendar date (YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// Local clock time, HH:MM or decimal hours
    #[arg(long)]
    time: Option<String>,
    /// UTC offset in hours (+5.5, -4) or a timezone name (Asia/Kolkata)
    #[arg(long, allow_hyphen_values = true)]
    offset: Option<String>,
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Fail instead of falling back to UTC when the timezone cannot be resolved
    #[arg(long)]
    strict_offset: bool,
    /// Single-line JSON
    #[arg(long)]
    compact: bool,
}

fn load_config(path: Option<&PathBuf>) -> Result<ObserverConfig> {
    let Some(path) = path else {
        return Ok(ObserverConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    ObserverConfig::from_toml_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_ref())?;
    if cli.strict_offset {
        config.offset_fallback = OffsetFallback::Fail;
    }

    let location = Location::new(cli.lat, cli.lon)?;
    info!("observing at {:.4}, {:.4}", location.latitude, location.longitude);

    let request = ObservationRequest {
        location,
        date: &cli.date,
        clock_time: cli.time.as_deref(),
        utc_offset: cli.offset.as_deref(),
    };
    let observation = observe_request(&request, &IanaOffsetResolver, &config)?;

    let json = if cli.compact {
        serde_json::to_string(&observation)?
    } else {
        serde_json::to_string_pretty(&observation)?
    };
    println!("{json}");
    Ok(())
}
