//! CLI command implementations

pub mod cct;
pub mod convert;
pub mod kelvin;
pub mod wavelength;

use anyhow::{Context, Result};
use chroma_color::AnyColor;
use serde_json::{json, Map, Value};

/// Components of a color as a JSON object keyed by component name,
/// plus the space name.
pub fn color_json(color: &AnyColor) -> Value {
    let components: Map<String, Value> = color
        .components()
        .into_iter()
        .map(|(name, value)| (name.to_string(), json!(value)))
        .collect();
    json!({
        "space": color.space().name(),
        "components": components,
    })
}

/// Packed color as `0xAARRGGBB` hex text.
pub fn argb_hex(argb: u32) -> String {
    format!("0x{argb:08X}")
}

/// Pretty-prints a JSON document to stdout.
pub fn print_json(value: &Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{text}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_color::Xyz;

    #[test]
    fn test_color_json() {
        let v = color_json(&AnyColor::from(Xyz::new(0.5, 1.0, 0.25)));
        assert_eq!(v["space"], "XYZ");
        assert_eq!(v["components"]["Y"], 1.0);
        assert_eq!(v["components"]["Z"], 0.25);
    }

    #[test]
    fn test_argb_hex() {
        assert_eq!(argb_hex(0xFFFF_0000), "0xFFFF0000");
        assert_eq!(argb_hex(0xFF00_00FF), "0xFF0000FF");
    }
}
