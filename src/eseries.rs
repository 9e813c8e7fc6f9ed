//! E-series (IEC 60063) standard-value matching.
//!
//! Computed component values rarely land on a purchasable part. This module
//! approximates any positive target by the closest standard value in a
//! chosen series — singly, or as a parallel pair when two stocked values
//! combine closer than one. Each match is an independent, pure search over
//! a few decades of the series table.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::MatchError;

/// Default constructability limit for parallel pairs: the larger value may
/// not exceed ten times the smaller.
pub const DEFAULT_RATIO_LIMIT: f64 = 10.0;

// ---------------------------------------------------------------------------
// Series tables
// ---------------------------------------------------------------------------

static E12: [f64; 12] = [1.0, 1.2, 1.5, 1.8, 2.2, 2.7, 3.3, 3.9, 4.7, 5.6, 6.8, 8.2];

static E24: [f64; 24] = [
    1.0, 1.1, 1.2, 1.3, 1.5, 1.6, 1.8, 2.0, 2.2, 2.4, 2.7, 3.0, 3.3, 3.6, 3.9, 4.3, 4.7, 5.1,
    5.6, 6.2, 6.8, 7.5, 8.2, 9.1,
];

static E96: [f64; 96] = [
    1.00, 1.02, 1.05, 1.07, 1.10, 1.13, 1.15, 1.18, 1.21, 1.24, 1.27, 1.30, 1.33, 1.37, 1.40,
    1.43, 1.47, 1.50, 1.54, 1.58, 1.62, 1.65, 1.69, 1.74, 1.78, 1.82, 1.87, 1.91, 1.96, 2.00,
    2.05, 2.10, 2.15, 2.21, 2.26, 2.32, 2.37, 2.43, 2.49, 2.55, 2.61, 2.67, 2.74, 2.80, 2.87,
    2.94, 3.01, 3.09, 3.16, 3.24, 3.32, 3.40, 3.48, 3.57, 3.65, 3.74, 3.83, 3.92, 4.02, 4.12,
    4.22, 4.32, 4.42, 4.53, 4.64, 4.75, 4.87, 4.99, 5.11, 5.23, 5.36, 5.49, 5.62, 5.76, 5.90,
    6.04, 6.19, 6.34, 6.49, 6.65, 6.81, 6.98, 7.15, 7.32, 7.50, 7.68, 7.87, 8.06, 8.25, 8.45,
    8.66, 8.87, 9.09, 9.31, 9.53, 9.76,
];

/// A preferred-number series: 12, 24, or 96 mantissas per decade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Series {
    E12,
    E24,
    E96,
}

impl Series {
    /// Normalized mantissas in `[1.0, 10.0)`.
    pub fn mantissas(&self) -> &'static [f64] {
        match self {
            Series::E12 => &E12,
            Series::E24 => &E24,
            Series::E96 => &E96,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Series::E12 => "E12",
            Series::E24 => "E24",
            Series::E96 => "E96",
        }
    }
}

impl FromStr for Series {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "E12" => Ok(Series::E12),
            "E24" => Ok(Series::E24),
            "E96" => Ok(Series::E96),
            _ => Err(MatchError::UnknownSeries(s.to_string())),
        }
    }
}

impl std::fmt::Display for Series {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Match results
// ---------------------------------------------------------------------------

/// Two standard values in parallel approximating one target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParallelMatch {
    /// The larger branch value (always > target).
    pub v1: f64,
    /// The second branch value.
    pub v2: f64,
    /// Resulting parallel combination `v1·v2/(v1+v2)`.
    pub value: f64,
    /// Percent error of `value` against the target.
    pub error_pct: f64,
}

/// Result of matching one target value against a series.
///
/// Both the single-value and (when one satisfies the ratio limit) the
/// parallel-pair answers are returned; the presentation layer picks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EseriesMatch {
    pub target: f64,
    /// Closest single standard value.
    pub single_value: f64,
    /// Percent error of `single_value`.
    pub single_error_pct: f64,
    /// Best parallel pair, absent when none passes the ratio constraint.
    pub parallel: Option<ParallelMatch>,
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Decade exponent of a positive value: `4700 → 3`.
fn decade_of(value: f64) -> i32 {
    value.log10().floor() as i32
}

fn denormalize(mantissa: f64, decade: i32) -> f64 {
    mantissa * 10f64.powi(decade)
}

fn error_pct(actual: f64, target: f64) -> f64 {
    (actual - target).abs() / target * 100.0
}

fn check_target(target: f64) -> Result<(), MatchError> {
    if target > 0.0 && target.is_finite() {
        Ok(())
    } else {
        Err(MatchError::InvalidTarget(target))
    }
}

/// Closest single standard value and its percent error.
///
/// Scans the whole series in the target's decade, plus the boundary values
/// of both adjacent decades (a target near 9.5 may round up into the next
/// decade's 1.0).
pub fn closest_single(target: f64, series: Series) -> Result<(f64, f64), MatchError> {
    check_target(target)?;
    Ok(closest_single_unchecked(target, series))
}

fn closest_single_unchecked(target: f64, series: Series) -> (f64, f64) {
    let decade = decade_of(target);
    let mantissas = series.mantissas();

    let mut best_value = f64::NAN;
    let mut best_error = f64::INFINITY;

    let first = mantissas[0];
    let last = mantissas[mantissas.len() - 1];
    let candidates = mantissas
        .iter()
        .map(|&m| denormalize(m, decade))
        .chain([denormalize(first, decade + 1), denormalize(last, decade - 1)]);

    for candidate in candidates {
        let err = error_pct(candidate, target);
        if err < best_error {
            best_error = err;
            best_value = candidate;
        }
    }
    (best_value, best_error)
}

/// Best parallel pair `(v1 ∥ v2)` for the target, or `None` when no pair
/// satisfies the ratio limit.
///
/// Enumerates v1 over the series spanning decade−1 through decade+2,
/// keeping only `v1 > target` (a positive real v2 requires it); the exact
/// companion `v2 = v1·target/(v1−target)` is rounded to its own closest
/// single value before scoring.
pub fn parallel_pair(
    target: f64,
    series: Series,
    ratio_limit: f64,
) -> Result<Option<ParallelMatch>, MatchError> {
    check_target(target)?;
    let decade = decade_of(target);
    let mantissas = series.mantissas();

    let mut best: Option<ParallelMatch> = None;
    for d in (decade - 1)..=(decade + 2) {
        for &m in mantissas {
            let v1 = denormalize(m, d);
            if v1 <= target {
                continue;
            }
            let v2_exact = v1 * target / (v1 - target);
            let (v2, _) = closest_single_unchecked(v2_exact, series);
            if v1.max(v2) / v1.min(v2) > ratio_limit {
                continue;
            }
            let value = v1 * v2 / (v1 + v2);
            let err = error_pct(value, target);
            if best.map_or(true, |b| err < b.error_pct) {
                best = Some(ParallelMatch {
                    v1,
                    v2,
                    value,
                    error_pct: err,
                });
            }
        }
    }
    Ok(best)
}

/// Full match: closest single value plus the best parallel pair.
pub fn match_component(
    target: f64,
    series: Series,
    ratio_limit: f64,
) -> Result<EseriesMatch, MatchError> {
    let (single_value, single_error_pct) = closest_single(target, series)?;
    let parallel = parallel_pair(target, series, ratio_limit)?;
    Ok(EseriesMatch {
        target,
        single_value,
        single_error_pct,
        parallel,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
