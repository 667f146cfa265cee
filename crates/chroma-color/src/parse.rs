//! Parsing color components from text.

use chroma_core::{Error, Result};

/// Parses exactly three floats separated by commas and/or whitespace.
///
/// ```rust
/// use chroma_color::parse_components;
///
/// assert_eq!(parse_components("0.5, 0.25 1").unwrap(), [0.5, 0.25, 1.0]);
/// assert!(parse_components("0.5,0.25").is_err());
/// ```
pub fn parse_components(text: &str) -> Result<[f64; 3]> {
    let values = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<f64>().map_err(|_| Error::invalid_component(s)))
        .collect::<Result<Vec<f64>>>()?;

    let len = values.len();
    values
        .try_into()
        .map_err(|_| Error::component_count(3, len))
}
