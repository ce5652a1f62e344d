//! Fetch command - find places inside the current field of view.

use std::time::Duration;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use sightline::heading::Quaternion;
use sightline::poi::ReqwestClient;
use sightline::{Compass, CompassConfig, FetchOutcome, Progress};

use crate::error::CliError;
use crate::sensors::{CliLocation, CliOrientation};

/// Arguments for the fetch command.
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Search radius in kilometers (clamped to 0.1-50)
    #[arg(long, default_value_t = 1.0)]
    pub radius_km: f64,

    /// Observer latitude; omit both --lat and --lon to exercise the
    /// fallback origin
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Observer longitude
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Compass heading in degrees (device-orientation backend)
    #[arg(long, conflicts_with = "quaternion")]
    pub heading: Option<f64>,

    /// Absolute-orientation quaternion as x y z w (fused-sensor backend)
    #[arg(long, num_args = 4, value_names = ["X", "Y", "Z", "W"], allow_negative_numbers = true)]
    pub quaternion: Option<Vec<f64>>,

    /// Overpass endpoint URL
    #[arg(long)]
    pub endpoint: Option<String>,
}

/// Run the fetch command.
pub async fn run(args: FetchArgs) -> Result<(), CliError> {
    debug!(radius_km = args.radius_km, "running fetch command");

    let location = match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => CliLocation::fixed(lat, lon),
        _ => CliLocation::unavailable(),
    };

    let quaternion = args.quaternion.as_deref().map(|values| Quaternion {
        x: values[0],
        y: values[1],
        z: values[2],
        w: values[3],
    });
    let orientation = CliOrientation::from_flags(quaternion, args.heading);

    let mut config = CompassConfig::default();
    if let Some(endpoint) = args.endpoint {
        config = config.with_endpoint(endpoint);
    }

    let http_client = ReqwestClient::new().map_err(|e| CliError::Runtime(e.to_string()))?;
    let compass = Compass::with_config(location, orientation, http_client, config);

    let spinner = ProgressBar::new_spinner().with_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .expect("spinner template is valid")
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "),
    );
    spinner.enable_steady_tick(Duration::from_millis(80));

    let outcome = compass
        .fetch_visible_places(args.radius_km, |progress| match progress {
            Progress::Loading => spinner.set_message("Fetching places..."),
            Progress::Succeeded { .. } | Progress::Failed | Progress::Idle => {}
        })
        .await;
    spinner.finish_and_clear();

    let outcome = outcome?;
    print_outcome(&outcome);
    Ok(())
}

fn print_outcome(outcome: &FetchOutcome) {
    if let Some(notice) = &outcome.notice {
        println!("{}", style(notice).yellow());
        println!();
    }

    println!(
        "Heading: {}°   Origin: {}",
        outcome.heading.round(),
        outcome.origin
    );
    println!();

    if outcome.places.is_empty() {
        println!("{}", style("No places in view.").dim());
        return;
    }

    println!(
        "Found {} place(s) in view:",
        style(outcome.places.len()).bold()
    );
    for place in &outcome.places {
        println!(
            "  {}  {}",
            style(&place.name).bold(),
            style(format!("{:.1}°", place.bearing)).cyan()
        );
        println!(
            "      {}  {}",
            place.position,
            style(&place.address).dim()
        );
    }
}
