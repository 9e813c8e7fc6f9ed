//! Unit-suffix parsing and engineering-notation formatting.
//!
//! Parses user-facing strings like `14.2MHz`, `500kHz`, `50`, `1kohm`,
//! `75Ω` into base units (Hz, Ohms), and formats computed values back with
//! the customary RF unit prefixes.

use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::space0,
    combinator::{all_consuming, opt, value},
    number::complete::double,
    sequence::tuple,
    IResult,
};

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Frequency multiplier suffix. `MHz` before `Hz` so the longer tag wins.
fn freq_suffix(input: &str) -> IResult<&str, f64> {
    alt((
        value(1e9, tag_no_case("ghz")),
        value(1e6, tag_no_case("mhz")),
        value(1e3, tag_no_case("khz")),
        value(1.0, tag_no_case("hz")),
    ))(input)
}

fn freq_value(input: &str) -> IResult<&str, f64> {
    let (input, (num, _, mult)) = tuple((double, space0, opt(freq_suffix)))(input)?;
    Ok((input, num * mult.unwrap_or(1.0)))
}

/// Parse a frequency string into Hz.
///
/// Accepts a plain number (Hz) or a `GHz`/`MHz`/`kHz`/`Hz` suffix, case
/// insensitive. Rejects anything non-finite.
pub fn parse_frequency(input: &str) -> Result<f64, String> {
    let trimmed = input.trim();
    match all_consuming(freq_value)(trimmed) {
        Ok((_, v)) if v.is_finite() => Ok(v),
        _ => Err(format!("invalid frequency value: '{input}'")),
    }
}

/// Impedance multiplier suffix. `Mohm`/`kohm` before bare `ohm`.
fn impedance_suffix(input: &str) -> IResult<&str, f64> {
    alt((
        value(1e6, tag_no_case("mohm")),
        value(1e3, tag_no_case("kohm")),
        value(1.0, tag_no_case("ohm")),
    ))(input)
}

fn impedance_value(input: &str) -> IResult<&str, f64> {
    let (input, (num, _, mult)) = tuple((double, space0, opt(impedance_suffix)))(input)?;
    Ok((input, num * mult.unwrap_or(1.0)))
}

/// Parse an impedance string into Ohms.
///
/// Accepts a plain number, an `ohm`/`kohm`/`Mohm` suffix, or a Unicode
/// ohm/omega sign in place of "ohm".
pub fn parse_impedance(input: &str) -> Result<f64, String> {
    // Greek omega (either case) and the U+2126 ohm sign all read as "ohm".
    let normalized = input
        .trim()
        .replace(['\u{03A9}', '\u{03C9}', '\u{2126}'], "ohm");
    let parsed = all_consuming(impedance_value)(normalized.as_str()).ok();
    match parsed {
        Some((_, v)) if v.is_finite() => Ok(v),
        _ => Err(format!("invalid impedance value: '{input}'")),
    }
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Format `value` against a descending `(threshold, suffix)` ladder with a
/// fixed number of decimals. Falls through to the last unit for values
/// smaller than every threshold.
fn format_scaled(value: f64, units: &[(f64, &str)], decimals: usize) -> String {
    for &(threshold, suffix) in units {
        if value.abs() >= threshold {
            return format!("{:.decimals$} {suffix}", value / threshold);
        }
    }
    let (threshold, suffix) = units[units.len() - 1];
    format!("{:.decimals$} {suffix}", value / threshold)
}

/// Frequency with GHz/MHz/kHz/Hz scaling, 4 significant digits.
pub fn format_frequency(freq_hz: f64) -> String {
    let units: [(f64, &str); 4] = [(1e9, "GHz"), (1e6, "MHz"), (1e3, "kHz"), (1.0, "Hz")];
    for &(threshold, suffix) in &units {
        if freq_hz.abs() >= threshold {
            return format!("{} {suffix}", sig4(freq_hz / threshold));
        }
    }
    format!("{} Hz", sig4(freq_hz))
}

/// Capacitance with mF/µF/nF/pF scaling, two decimals.
pub fn format_capacitance(farads: f64) -> String {
    format_scaled(
        farads,
        &[(1e-3, "mF"), (1e-6, "µF"), (1e-9, "nF"), (1e-12, "pF")],
        2,
    )
}

/// Inductance with H/mH/µH/nH scaling, two decimals.
pub fn format_inductance(henries: f64) -> String {
    format_scaled(
        henries,
        &[(1.0, "H"), (1e-3, "mH"), (1e-6, "µH"), (1e-9, "nH")],
        2,
    )
}

/// Four significant digits with trailing zeros trimmed (`14.2`, `7`, `454.7`).
fn sig4(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (3 - magnitude).max(0) as usize;
    let s = format!("{value:.decimals$}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_frequency_suffixes() {
        assert_eq!(parse_frequency("14.2MHz").unwrap(), 14.2e6);
        assert_eq!(parse_frequency("500kHz").unwrap(), 500e3);
        assert_eq!(parse_frequency("1GHz").unwrap(), 1e9);
        assert_eq!(parse_frequency("7000000").unwrap(), 7e6);
        assert_eq!(parse_frequency("455 Hz").unwrap(), 455.0);
    }

    #[test]
    fn parse_frequency_case_insensitive() {
        assert_eq!(parse_frequency("14.2mhz").unwrap(), 14.2e6);
        assert_eq!(parse_frequency("14.2MHZ").unwrap(), 14.2e6);
    }

    #[test]
    fn parse_frequency_rejects_garbage() {
        assert!(parse_frequency("fast").is_err());
        assert!(parse_frequency("14.2MHz extra").is_err());
        assert!(parse_frequency("").is_err());
        assert!(parse_frequency("inf").is_err());
        assert!(parse_frequency("NaNHz").is_err());
    }

    #[test]
    fn parse_impedance_suffixes() {
        assert_eq!(parse_impedance("50").unwrap(), 50.0);
        assert_eq!(parse_impedance("50ohm").unwrap(), 50.0);
        assert_eq!(parse_impedance("1kohm").unwrap(), 1000.0);
        assert_eq!(parse_impedance("1Mohm").unwrap(), 1e6);
        assert_eq!(parse_impedance("50Ω").unwrap(), 50.0);
    }

    #[test]
    fn parse_impedance_rejects_garbage() {
        assert!(parse_impedance("fifty").is_err());
        assert!(parse_impedance("50 ohms").is_err());
    }

    #[test]
    fn format_frequency_scales() {
        assert_eq!(format_frequency(7e6), "7 MHz");
        assert_eq!(format_frequency(14.2e6), "14.2 MHz");
        assert_eq!(format_frequency(500e3), "500 kHz");
        assert_eq!(format_frequency(1.5e9), "1.5 GHz");
        assert_eq!(format_frequency(455.0), "455 Hz");
    }

    #[test]
    fn format_capacitance_scales() {
        assert_eq!(format_capacitance(454.73e-12), "454.73 pF");
        assert_eq!(format_capacitance(22e-9), "22.00 nF");
        assert_eq!(format_capacitance(4.7e-6), "4.70 µF");
        assert_eq!(format_capacitance(0.5e-12), "0.50 pF");
    }

    #[test]
    fn format_inductance_scales() {
        assert_eq!(format_inductance(1.1368e-6), "1.14 µH");
        assert_eq!(format_inductance(100e-9), "100.00 nH");
        assert_eq!(format_inductance(2.2e-3), "2.20 mH");
    }
}
