//! Chromaticity to correlated color temperature.

use anyhow::Result;
use chroma_cct::{CorrelatedColorTemperature, HIGH_RANGE_THRESHOLD};
use chroma_color::XyY;
use serde_json::json;
use tracing::warn;

use super::print_json;
use crate::CctArgs;

/// Prints the estimated CCT of `(x, y)`.
pub fn run(args: CctArgs, json: bool) -> Result<()> {
    let chromaticity = XyY::new(args.x, args.y, 1.0);
    let kelvin = chromaticity.cct();

    // The fit is only meaningful near the Planckian locus
    if !kelvin.is_finite() || kelvin <= 0.0 {
        warn!(x = args.x, y = args.y, kelvin, "chromaticity is far from the blackbody locus");
    } else if kelvin >= HIGH_RANGE_THRESHOLD {
        warn!(kelvin, "estimate is in the high-temperature range; accuracy is reduced");
    }

    if json {
        return print_json(&json!({
            "x": args.x,
            "y": args.y,
            "cct": kelvin,
        }));
    }

    println!("{kelvin:.1} K");
    Ok(())
}
