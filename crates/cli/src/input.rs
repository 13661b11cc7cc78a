//! Parsing of command-line and CSV shape descriptions.

use anyhow::{anyhow, bail, Context, Result};
use geometria::plane::Point;

/// Parse `"x,y"` into a point.
pub fn parse_point(s: &str) -> Result<Point> {
    let (x, y) = s
        .trim()
        .split_once(',')
        .ok_or_else(|| anyhow!("expected `x,y`, got `{s}`"))?;
    let x: f64 = x.trim().parse().with_context(|| format!("bad x in `{s}`"))?;
    let y: f64 = y.trim().parse().with_context(|| format!("bad y in `{s}`"))?;
    Ok(Point::new(x, y))
}

/// Parse a vertex list: `x,y` pairs separated by whitespace or `;`.
pub fn parse_vertices(s: &str) -> Result<Vec<Point>> {
    let vertices = s
        .split(|c: char| c.is_whitespace() || c == ';')
        .filter(|tok| !tok.is_empty())
        .map(parse_point)
        .collect::<Result<Vec<_>>>()?;
    if vertices.is_empty() {
        bail!("no vertices in `{s}`");
    }
    Ok(vertices)
}

/// Lenient boolean for CSV cells; missing means `false`.
pub fn parse_flag(s: Option<&str>) -> Result<bool> {
    match s.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None | Some("") => Ok(false),
        Some("true" | "1" | "yes" | "y") => Ok(true),
        Some("false" | "0" | "no" | "n") => Ok(false),
        Some(other) => bail!("expected a boolean, got `{other}`"),
    }
}
