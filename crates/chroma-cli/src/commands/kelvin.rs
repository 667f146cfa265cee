//! Temperature to chromaticity command.

use anyhow::{ensure, Result};
use chroma_cct::{analytical_chromaticity, approximate_chromaticity, CorrelatedColorTemperature};
use chroma_cie::Precision;
use chroma_color::{AnyColor, ColorConvert};
use serde_json::json;
use tracing::{debug, warn};

use super::{argb_hex, color_json, print_json};
use crate::{KelvinArgs, Method};

/// Range in which the cubic locus fit is accurate.
const APPROXIMATE_RANGE: std::ops::RangeInclusive<f64> = 1667.0..=25000.0;

/// Prints the blackbody chromaticity at the requested temperature, with its
/// sRGB preview and the CCT recovered from it.
pub fn run(args: KelvinArgs, json: bool) -> Result<()> {
    let temperature = args.temperature;
    ensure!(
        temperature.is_finite() && temperature > 0.0,
        "Temperature must be a positive number of Kelvin, got {temperature}"
    );

    let precision = Precision::from_high_precision(args.fine);
    let xyy = match args.method {
        Method::Approximate => {
            if !APPROXIMATE_RANGE.contains(&temperature) {
                warn!(temperature, "outside 1667-25000 K, the approximation is inaccurate");
            }
            if args.fine {
                debug!("--fine has no effect on the approximate method");
            }
            approximate_chromaticity(temperature)
        }
        Method::Analytical => analytical_chromaticity(temperature, precision),
    };
    let recovered = xyy.cct();
    let preview = xyy.to_srgb().to_argb32();
    debug!(method = ?args.method, ?precision, %xyy, recovered, "locus point");

    if json {
        return print_json(&json!({
            "temperature": temperature,
            "method": format!("{:?}", args.method).to_lowercase(),
            "chromaticity": color_json(&AnyColor::from(xyy)),
            "cct": recovered,
            "argb": argb_hex(preview),
        }));
    }

    println!("{temperature} K  ->  x={:.6}, y={:.6}", xyy.x(), xyy.y());
    println!("  {xyy}");
    println!("  CCT (estimated): {recovered:.1} K");
    println!("  sRGB preview:    {}", argb_hex(preview));
    Ok(())
}
