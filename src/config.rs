//! Global defaults for the CLI.
//!
//! Reads `~/.config/tankfilter/defaults` so bench-wide settings (system
//! impedance, preferred E-series, Q safety factor) apply to every run
//! without repeating flags. Plain `key = value` lines with `#` comments:
//!
//! ```text
//! # ~/.config/tankfilter/defaults
//! impedance = 50
//! series = E24
//! q-safety = 2.0
//! ```
//!
//! Values accept the same unit suffixes as the command line (`75ohm`,
//! `1kohm`).

use std::path::PathBuf;

use crate::eseries::Series;
use crate::units::parse_impedance;

/// Defaults loaded from the config file. All fields optional — CLI flags
/// always win.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Defaults {
    pub impedance_ohms: Option<f64>,
    pub series: Option<Series>,
    pub q_safety: Option<f64>,
}

/// The tankfilter config directory: `~/.config/tankfilter/`.
///
/// Returns `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config").join("tankfilter"))
}

/// Load defaults from `~/.config/tankfilter/defaults`.
///
/// A missing file is not an error (most users won't have one); returns
/// `Err` only when the file exists but doesn't parse.
pub fn load_defaults() -> Result<Option<Defaults>, String> {
    let dir = match config_dir() {
        Some(d) => d,
        None => return Ok(None),
    };

    let path = dir.join("defaults");
    let source = match std::fs::read_to_string(&path) {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(format!("error reading {}: {e}", path.display())),
    };

    let defaults = parse_defaults(&source)
        .map_err(|e| format!("error parsing {}: {e}", path.display()))?;
    if defaults == Defaults::default() {
        return Ok(None);
    }
    Ok(Some(defaults))
}

/// Parse the defaults file body.
pub fn parse_defaults(source: &str) -> Result<Defaults, String> {
    let mut defaults = Defaults::default();

    for (lineno, raw) in source.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| format!("line {}: expected 'key = value'", lineno + 1))?;
        let value = value.trim();

        match key.trim() {
            "impedance" => {
                defaults.impedance_ohms = Some(parse_impedance(value)?);
            }
            "series" => {
                defaults.series = Some(value.parse().map_err(|e| format!("{e}"))?);
            }
            "q-safety" | "q_safety" => {
                let q: f64 = value
                    .parse()
                    .map_err(|_| format!("line {}: invalid q-safety '{value}'", lineno + 1))?;
                defaults.q_safety = Some(q);
            }
            other => {
                return Err(format!(
                    "line {}: unknown key '{other}' (expected impedance, series, q-safety)",
                    lineno + 1
                ));
            }
        }
    }
    Ok(defaults)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
