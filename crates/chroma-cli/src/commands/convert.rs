//! Color conversion command.

use anyhow::{Context, Result};
use chroma_color::{parse_components, AnyColor};
use serde_json::json;
use tracing::debug;

use super::{argb_hex, color_json, print_json};
use crate::ConvertArgs;

/// Converts one color from `--from` to `--to` and prints it with its
/// packed ARGB value.
pub fn run(args: ConvertArgs, json: bool) -> Result<()> {
    let components = parse_components(&args.components)
        .with_context(|| format!("Invalid color '{}'", args.components))?;
    let input = AnyColor::from_components(args.from, &components)
        .with_context(|| format!("Cannot build {} color", args.from))?;
    debug!(%input, to = %args.to, "converting");

    let output = input.convert(args.to);
    let argb = output.to_argb32();

    if json {
        return print_json(&json!({
            "input": color_json(&input),
            "output": color_json(&output),
            "argb": argb_hex(argb),
        }));
    }

    println!("{output}");
    println!("  ARGB: {}", argb_hex(argb));
    Ok(())
}
