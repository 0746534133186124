use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use hava_core::App;
use hava_ui::{bridge, render, WeatherScreen};
use hava_weather::{device_resolver, mock_weather, LocationProvider};

/// Single-screen weather display
#[derive(Debug, Parser)]
#[command(name = "hava", version, about)]
struct Cli {
    /// Show the screen for this city (relabels only; weather is sample data)
    #[arg(long)]
    city: Option<String>,

    /// Look up the current city from the device location
    #[arg(long)]
    locate: bool,

    /// Config file to use instead of the per-user one
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Relabel the screen with the `--city` value, if one was given.
fn apply_city<P: LocationProvider + 'static>(screen: &mut WeatherScreen<P>, city: Option<String>) {
    if let Some(city) = city {
        screen.set_search_query(city);
        screen.submit_search();
    }
}

fn main() -> Result<()> {
    hava_core::init()?;
    let cli = Cli::parse();

    let mut app = match &cli.config {
        Some(path) => App::from_path(path)?,
        None => App::new()?,
    };

    bridge::init_runtime().context("Failed to start async runtime")?;

    let resolver = Arc::new(
        device_resolver(&app.config().location).context("Failed to set up location lookup")?,
    );
    let weather = mock_weather().context("Failed to load sample weather")?;
    let mut screen = WeatherScreen::new(&app.config().ui, weather, resolver);

    tracing::info!("Hava started");

    apply_city(&mut screen, cli.city);

    if cli.locate && screen.request_location() {
        let budget = screen.locate_budget();
        screen.wait_for_location(budget);
    }

    for notice in screen.take_notices() {
        println!("» {}: {}", notice.title, notice.body);
    }
    println!("{}", render(&screen));

    app.shutdown()?;

    Ok(())
}
