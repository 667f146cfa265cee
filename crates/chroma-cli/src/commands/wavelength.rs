//! Wavelength to XYZ command.

use anyhow::Result;
use chroma_cct::wavelength_to_xyz;
use chroma_color::{AnyColor, ColorConvert};
use serde_json::json;
use tracing::warn;

use super::{color_json, print_json};
use crate::WavelengthArgs;

pub fn run(args: WavelengthArgs, json: bool) -> Result<()> {
    let nm = args.nanometers;
    if !(380.0..=780.0).contains(&nm) {
        warn!(nm, "outside the 380-780 nm table, response is zero");
    }

    let xyz = wavelength_to_xyz(nm);
    let xyy = xyz.to_xyy();

    if json {
        return print_json(&json!({
            "wavelength": nm,
            "xyz": color_json(&AnyColor::from(xyz)),
            "xyy": color_json(&AnyColor::from(xyy)),
        }));
    }

    println!("{nm} nm");
    println!("  {:.6} {:.6} {:.6}", xyz.x(), xyz.y(), xyz.z());
    println!("  {xyy}");
    Ok(())
}
