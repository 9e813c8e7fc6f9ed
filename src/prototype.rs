//! Normalized lowpass-prototype element values ("g-values").
//!
//! A g-value sequence describes a lowpass prototype with 1 rad/s cutoff and
//! unit source/load terminations (g0 = g_{n+1} = 1, implied). Butterworth
//! values come from the closed form; Chebyshev and Bessel come from the
//! standard design tables (Zverev, Matthaei/Young/Jones).

use serde::{Deserialize, Serialize};

use crate::error::SynthesisError;

/// Supported resonator counts.
pub const MIN_ORDER: usize = 2;
pub const MAX_ORDER: usize = 9;

// ---------------------------------------------------------------------------
// Response type
// ---------------------------------------------------------------------------

/// Filter response family.
///
/// Each family selects its own g-value source: Butterworth generates them in
/// closed form, Chebyshev and Bessel look them up in fixed tables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "lowercase")]
pub enum Response {
    /// Maximally-flat passband magnitude.
    Butterworth,
    /// Equiripple passband; sharper skirts. Equal-termination designs
    /// require an odd resonator count.
    Chebyshev {
        /// Passband ripple in dB: 0.1, 0.5, or 1.0.
        ripple_db: f64,
    },
    /// Maximally-flat group delay (linear phase).
    Bessel,
}

impl Response {
    /// Short lowercase name, matching the CLI spelling.
    pub fn name(&self) -> &'static str {
        match self {
            Response::Butterworth => "butterworth",
            Response::Chebyshev { .. } => "chebyshev",
            Response::Bessel => "bessel",
        }
    }

    /// Prototype g-values `[g1 .. gn]` for an `order`-resonator filter.
    pub fn g_values(&self, order: usize) -> Result<Vec<f64>, SynthesisError> {
        match *self {
            Response::Butterworth => butterworth_g_values(order),
            Response::Chebyshev { ripple_db } => chebyshev_g_values(order, ripple_db),
            Response::Bessel => bessel_g_values(order),
        }
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Response::Butterworth => write!(f, "Butterworth"),
            Response::Chebyshev { ripple_db } => write!(f, "Chebyshev ({ripple_db} dB)"),
            Response::Bessel => write!(f, "Bessel"),
        }
    }
}

// ---------------------------------------------------------------------------
// Butterworth (closed form)
// ---------------------------------------------------------------------------

/// Butterworth prototype: `g_i = 2·sin((2i−1)·π/(2n))`.
///
/// Valid for any order in `[2, 9]`; the sequence is symmetric and every
/// element lies in (0, 2].
pub fn butterworth_g_values(order: usize) -> Result<Vec<f64>, SynthesisError> {
    check_order(order)?;
    let n = order as f64;
    Ok((1..=order)
        .map(|i| 2.0 * ((2.0 * i as f64 - 1.0) * std::f64::consts::PI / (2.0 * n)).sin())
        .collect())
}

// ---------------------------------------------------------------------------
// Chebyshev (table lookup)
// ---------------------------------------------------------------------------

// Equal-termination Chebyshev tables, odd orders only. For even orders
// g_{n+1} ≠ 1: the prototype wants a load impedance different from the
// source, which this tool does not support.
// Source: Zverev, "Handbook of Filter Synthesis" (1967).

static CHEBYSHEV_0R1_DB: [&[f64]; 4] = [
    &[1.03159, 1.14740, 1.03159],
    &[1.14684, 1.37121, 1.97503, 1.37121, 1.14684],
    &[1.18120, 1.42280, 2.09669, 1.57339, 2.09669, 1.42280, 1.18120],
    &[
        1.19570, 1.44260, 2.13457, 1.61671, 2.20539, 1.61671, 2.13457, 1.44260, 1.19570,
    ],
];

static CHEBYSHEV_0R5_DB: [&[f64]; 4] = [
    &[1.59633, 1.09668, 1.59633],
    &[1.70582, 1.22961, 2.54088, 1.22961, 1.70582],
    &[1.73734, 1.25822, 2.63834, 1.34431, 2.63834, 1.25822, 1.73734],
    &[
        1.75049, 1.26902, 2.66783, 1.36730, 2.72396, 1.36730, 2.66783, 1.26902, 1.75049,
    ],
];

static CHEBYSHEV_1R0_DB: [&[f64]; 4] = [
    &[2.02367, 0.99408, 2.02367],
    &[2.13496, 1.09108, 3.00101, 1.09108, 2.13496],
    &[2.16664, 1.11148, 3.09373, 1.17349, 3.09373, 1.11148, 2.16664],
    &[
        2.17980, 1.11915, 3.12152, 1.18964, 3.17472, 1.18964, 3.12152, 1.11915, 2.17980,
    ],
];

/// Ripple values the Chebyshev table covers, in dB.
pub const CHEBYSHEV_RIPPLES_DB: [f64; 3] = [0.1, 0.5, 1.0];

/// Chebyshev prototype lookup for `order ∈ {3, 5, 7, 9}` and
/// `ripple_db ∈ {0.1, 0.5, 1.0}`.
pub fn chebyshev_g_values(order: usize, ripple_db: f64) -> Result<Vec<f64>, SynthesisError> {
    let table = if float_key_eq(ripple_db, 0.1) {
        &CHEBYSHEV_0R1_DB
    } else if float_key_eq(ripple_db, 0.5) {
        &CHEBYSHEV_0R5_DB
    } else if float_key_eq(ripple_db, 1.0) {
        &CHEBYSHEV_1R0_DB
    } else {
        return Err(SynthesisError::invalid(format!(
            "ripple {ripple_db} dB not supported for Chebyshev; use 0.1, 0.5, or 1.0"
        )));
    };

    match order {
        3 | 5 | 7 | 9 => Ok(table[(order - 3) / 2].to_vec()),
        _ => Err(SynthesisError::invalid(format!(
            "Chebyshev with equal terminations requires an odd resonator count \
             (3, 5, 7, 9), got {order}; use Butterworth for even counts"
        ))),
    }
}

/// Ripple keys differ by orders of magnitude, so a loose epsilon is enough.
fn float_key_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ---------------------------------------------------------------------------
// Bessel (table lookup)
// ---------------------------------------------------------------------------

// Bessel (Thomson) prototypes for orders 2–9, maximally-flat group delay.
// Source: Zverev, Matthaei/Young/Jones.
static BESSEL_G: [&[f64]; 8] = [
    &[0.5755, 2.1478],
    &[0.3374, 0.9705, 2.2034],
    &[0.2334, 0.6725, 1.0815, 2.2404],
    &[0.1743, 0.5072, 0.8040, 1.1110, 2.2582],
    &[0.1365, 0.4002, 0.6392, 0.8538, 1.1126, 2.2645],
    &[0.1106, 0.3259, 0.5249, 0.7020, 0.8690, 1.1052, 2.2659],
    &[0.0919, 0.2719, 0.4409, 0.5936, 0.7303, 0.8695, 1.0956, 2.2656],
    &[
        0.0780, 0.2313, 0.3770, 0.5108, 0.6306, 0.7407, 0.8639, 1.0863, 2.2649,
    ],
];

/// Bessel prototype lookup for `order ∈ [2, 9]`.
pub fn bessel_g_values(order: usize) -> Result<Vec<f64>, SynthesisError> {
    if !(MIN_ORDER..=MAX_ORDER).contains(&order) {
        return Err(SynthesisError::invalid(format!(
            "Bessel g-values are tabulated for {MIN_ORDER}-{MAX_ORDER} resonators, got {order}"
        )));
    }
    Ok(BESSEL_G[order - 2].to_vec())
}

fn check_order(order: usize) -> Result<(), SynthesisError> {
    if (MIN_ORDER..=MAX_ORDER).contains(&order) {
        Ok(())
    } else {
        Err(SynthesisError::invalid(format!(
            "resonator count must be between {MIN_ORDER} and {MAX_ORDER}, got {order}"
        )))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
