//! Bearing command - compute the bearing between two points.

use clap::Args;

use sightline::geo::{bearing, GeoPoint};

use crate::error::CliError;

/// Arguments for the bearing command.
#[derive(Debug, Args)]
pub struct BearingArgs {
    /// Origin latitude
    #[arg(allow_negative_numbers = true)]
    pub from_lat: f64,
    /// Origin longitude
    #[arg(allow_negative_numbers = true)]
    pub from_lon: f64,
    /// Target latitude
    #[arg(allow_negative_numbers = true)]
    pub to_lat: f64,
    /// Target longitude
    #[arg(allow_negative_numbers = true)]
    pub to_lon: f64,
}

/// Run the bearing command.
pub fn run(args: BearingArgs) -> Result<(), CliError> {
    let origin = GeoPoint::new(args.from_lat, args.from_lon)
        .map_err(|e| CliError::Config(e.to_string()))?;
    let target =
        GeoPoint::new(args.to_lat, args.to_lon).map_err(|e| CliError::Config(e.to_string()))?;

    let degrees = bearing(origin, target);
    println!("{:.1}° ({})", degrees, compass_point(degrees));
    Ok(())
}

/// Nearest eight-wind compass point for a bearing in [0, 360).
fn compass_point(degrees: f64) -> &'static str {
    const POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
    let index = ((degrees + 22.5) / 45.0) as usize % 8;
    POINTS[index]
}
