//! Coupled-resonator bandpass synthesis: g-values → physical components.
//!
//! The pipeline maps a normalized lowpass prototype onto a chain of
//! parallel-LC tanks joined by coupling capacitors:
//!
//! 1. coupling coefficients `k_i = FBW / √(g_i·g_{i+1})` and external Qs
//!    `Qe = g / FBW` (Matthaei eq. 8.11-1 / 8.11-2)
//! 2. base tank `L = Z0/ω0`, `C = 1/(ω0·Z0)` — reactance equal to the
//!    system impedance at resonance
//! 3. coupling capacitors `Cs_i = k_i·C` (narrowband approximation; same
//!    relationship for Top-C and Shunt-C)
//! 4. tank capacitors compensated for the reactance the coupling caps
//!    steal: `Cp_i = C − Cs_left − Cs_right`
//!
//! Everything here is a pure function of its inputs; the only state is the
//! immutable [`FilterDesign`] handed back to the caller.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::SynthesisError;
use crate::prototype::{Response, MAX_ORDER, MIN_ORDER};

/// Physical upper limit for the center frequency (1 THz).
pub const MAX_FREQUENCY_HZ: f64 = 1e12;
/// Practical upper limit for the system impedance (1 MΩ).
pub const MAX_IMPEDANCE_OHMS: f64 = 1e6;
/// Fractional-bandwidth ceiling for the Shunt-C simplification.
pub const SHUNT_C_FBW_LIMIT: f64 = 0.10;
/// Fractional-bandwidth ceiling for the narrowband approximation overall.
pub const GENERAL_FBW_LIMIT: f64 = 0.40;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Inter-resonator coupling topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    /// Series coupling capacitors on the signal line. Usable to roughly
    /// 40% fractional bandwidth.
    Top,
    /// Capacitive bottom coupling between tank feet (Cohn 1957). The
    /// simplified formula is only accurate below ~10% fractional bandwidth.
    Shunt,
}

impl std::fmt::Display for Topology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Topology::Top => write!(f, "Top-C (Series)"),
            Topology::Shunt => write!(f, "Shunt-C (Parallel)"),
        }
    }
}

/// Complete input description of one synthesis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Center frequency in Hz.
    pub f0_hz: f64,
    /// 3 dB bandwidth in Hz.
    pub bandwidth_hz: f64,
    /// System impedance in Ohms.
    pub impedance_ohms: f64,
    /// Number of resonators (LC tanks), 2–9.
    pub resonators: usize,
    /// Response family (and ripple, for Chebyshev).
    pub response: Response,
    /// Coupling topology.
    pub topology: Topology,
    /// Safety multiplier for the minimum component-Q advisory.
    pub q_safety: f64,
}

impl FilterSpec {
    fn validate(&self) -> Result<(), SynthesisError> {
        if self.f0_hz <= 0.0 {
            return Err(SynthesisError::invalid(format!(
                "center frequency must be positive, got {} Hz",
                self.f0_hz
            )));
        }
        if self.f0_hz > MAX_FREQUENCY_HZ {
            return Err(SynthesisError::invalid(format!(
                "center frequency {} Hz exceeds the {:.0} THz limit",
                self.f0_hz,
                MAX_FREQUENCY_HZ / 1e12
            )));
        }
        if self.bandwidth_hz <= 0.0 {
            return Err(SynthesisError::invalid(format!(
                "bandwidth must be positive, got {} Hz",
                self.bandwidth_hz
            )));
        }
        if self.bandwidth_hz >= self.f0_hz {
            return Err(SynthesisError::invalid(
                "bandwidth must be less than the center frequency",
            ));
        }
        if self.impedance_ohms <= 0.0 {
            return Err(SynthesisError::invalid(format!(
                "impedance must be positive, got {} Ohms",
                self.impedance_ohms
            )));
        }
        if self.impedance_ohms > MAX_IMPEDANCE_OHMS {
            return Err(SynthesisError::invalid(format!(
                "impedance {} Ohms exceeds the {:.0} MOhm limit",
                self.impedance_ohms,
                MAX_IMPEDANCE_OHMS / 1e6
            )));
        }
        if !(MIN_ORDER..=MAX_ORDER).contains(&self.resonators) {
            return Err(SynthesisError::invalid(format!(
                "resonator count must be between {MIN_ORDER} and {MAX_ORDER}, got {}",
                self.resonators
            )));
        }
        if self.q_safety <= 0.0 {
            return Err(SynthesisError::invalid(format!(
                "Q safety factor must be positive, got {}",
                self.q_safety
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// Everything a presentation layer needs about one synthesized filter.
///
/// Created once per [`synthesize`] call and never mutated by the engine.
/// `f_low_hz`/`f_high_hz` are display-only: the CLI replaces them with the
/// user's own cutoff frequencies when the design was specified as a
/// lower/upper pair (geometric-mean convention) rather than center +
/// bandwidth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterDesign {
    /// The request that produced this design.
    pub spec: FilterSpec,
    /// Lower passband edge in Hz (display only).
    pub f_low_hz: f64,
    /// Upper passband edge in Hz (display only).
    pub f_high_hz: f64,
    /// Fractional bandwidth BW/f0.
    pub fractional_bw: f64,
    /// Prototype g-values `[g1 .. gn]`.
    pub g_values: Vec<f64>,
    /// Inter-resonator coupling coefficients `[k12 .. k_{n-1,n}]`.
    pub coupling_coefficients: Vec<f64>,
    /// External Q at the input termination.
    pub qe_in: f64,
    /// External Q at the output termination.
    pub qe_out: f64,
    /// Tank inductance in Henries (identical for every resonator).
    pub inductance_h: f64,
    /// Uncompensated resonant capacitance in Farads.
    pub resonant_capacitance_f: f64,
    /// Coupling capacitors in Farads, one per adjacent pair.
    pub coupling_capacitors_f: Vec<f64>,
    /// Compensated tank capacitors in Farads, one per resonator.
    pub tank_capacitors_f: Vec<f64>,
    /// Minimum unloaded component Q advisory.
    pub q_min: f64,
    /// Non-fatal advisories accumulated during synthesis.
    pub warnings: Vec<String>,
}

// ---------------------------------------------------------------------------
// Coupling / Q
// ---------------------------------------------------------------------------

/// Inter-resonator coupling coefficients: `k_i = fbw / √(g_i·g_{i+1})`.
///
/// Returns n−1 coefficients for an n-element prototype. The caller
/// guarantees `fbw > 0`.
pub fn coupling_coefficients(g_values: &[f64], fbw: f64) -> Vec<f64> {
    g_values
        .windows(2)
        .map(|pair| fbw / (pair[0] * pair[1]).sqrt())
        .collect()
}

/// External Q at the input and output terminations.
///
/// `Qe_in = g0·g1/fbw`, `Qe_out = gn·g_{n+1}/fbw` with g0 = g_{n+1} = 1.
pub fn external_q(g_values: &[f64], fbw: f64) -> (f64, f64) {
    let qe_in = g_values[0] / fbw;
    let qe_out = g_values[g_values.len() - 1] / fbw;
    (qe_in, qe_out)
}

// ---------------------------------------------------------------------------
// Resonator
// ---------------------------------------------------------------------------

/// Parallel-LC tank tuned to `f0` with reactance magnitude `z0` at
/// resonance: `L = Z0/ω0`, `C = 1/(ω0·Z0)`.
///
/// Invariant: `1/(2π·√(LC))` reproduces `f0` to within numerical precision.
pub fn resonator_components(f0_hz: f64, z0_ohms: f64) -> (f64, f64) {
    let omega0 = 2.0 * PI * f0_hz;
    (z0_ohms / omega0, 1.0 / (omega0 * z0_ohms))
}

// ---------------------------------------------------------------------------
// Coupling network
// ---------------------------------------------------------------------------

/// Coupling capacitors `Cs_i = k_i·C_resonant`.
///
/// The same relationship serves both topologies under the narrowband
/// approximation. The full Shunt-C formula (Cohn 1957) uses normalized
/// reactances; below 10% fractional bandwidth the simplified form is
/// claimed to agree within 5%.
pub fn coupling_capacitors(k_values: &[f64], c_resonant: f64) -> Vec<f64> {
    k_values.iter().map(|k| k * c_resonant).collect()
}

/// Compensated tank capacitors `Cp_i = C_resonant − Cs_left − Cs_right`.
///
/// Coupling capacitors steal capacitive reactance from the tanks they
/// join; each tank shrinks to hold the resonant frequency at f0. End
/// resonators have only one neighbor and lose only that contribution.
pub fn tank_capacitors(n_resonators: usize, c_resonant: f64, c_coupling: &[f64]) -> Vec<f64> {
    (0..n_resonators)
        .map(|i| {
            let left = if i > 0 { c_coupling[i - 1] } else { 0.0 };
            let right = if i < n_resonators - 1 {
                c_coupling[i]
            } else {
                0.0
            };
            c_resonant - left - right
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Feasibility
// ---------------------------------------------------------------------------

/// Reject designs whose compensated tank capacitance is non-positive.
///
/// The error names every offending resonator (1-based).
pub fn check_realizable(tank_caps: &[f64]) -> Result<(), SynthesisError> {
    let offenders: Vec<usize> = tank_caps
        .iter()
        .enumerate()
        .filter(|(_, &c)| c <= 0.0)
        .map(|(i, _)| i + 1)
        .collect();
    if offenders.is_empty() {
        Ok(())
    } else {
        Err(SynthesisError::PhysicallyUnrealizable(offenders))
    }
}

/// Minimum unloaded component Q advisory: `(f0/BW)·safety_factor`.
///
/// Inductors below this Q cost noticeable insertion loss. Air-core
/// solenoids typically reach 100–300; chip inductors 20–50.
pub fn min_q(f0_hz: f64, bw_hz: f64, safety_factor: f64) -> f64 {
    (f0_hz / bw_hz) * safety_factor
}

// ---------------------------------------------------------------------------
// Assembler
// ---------------------------------------------------------------------------

/// Synthesize a complete coupled-resonator bandpass filter.
///
/// Validates the spec, then runs prototype lookup → coupling/Q →
/// resonator sizing → coupling network → feasibility. The first failing
/// step aborts the call and its error propagates unchanged. Wide-bandwidth
/// conditions are advisories in `warnings`, never failures.
pub fn synthesize(spec: &FilterSpec) -> Result<FilterDesign, SynthesisError> {
    spec.validate()?;

    let fbw = spec.bandwidth_hz / spec.f0_hz;

    let mut warnings = Vec::new();
    if spec.topology == Topology::Shunt && fbw > SHUNT_C_FBW_LIMIT {
        warnings.push(format!(
            "FBW {:.1}% exceeds the {:.0}% limit for Shunt-C coupling; consider Top-C",
            fbw * 100.0,
            SHUNT_C_FBW_LIMIT * 100.0
        ));
    }
    if fbw > GENERAL_FBW_LIMIT {
        warnings.push(format!(
            "FBW {:.1}% exceeds {:.0}%; narrowband approximation degrades, \
             consider a transmission-line design",
            fbw * 100.0,
            GENERAL_FBW_LIMIT * 100.0
        ));
    }

    let g_values = spec.response.g_values(spec.resonators)?;
    let k_values = coupling_coefficients(&g_values, fbw);
    let (qe_in, qe_out) = external_q(&g_values, fbw);
    let (inductance_h, c_resonant) = resonator_components(spec.f0_hz, spec.impedance_ohms);
    let coupling_caps = coupling_capacitors(&k_values, c_resonant);
    let tank_caps = tank_capacitors(spec.resonators, c_resonant, &coupling_caps);
    check_realizable(&tank_caps)?;
    let q_min = min_q(spec.f0_hz, spec.bandwidth_hz, spec.q_safety);

    Ok(FilterDesign {
        f_low_hz: spec.f0_hz - spec.bandwidth_hz / 2.0,
        f_high_hz: spec.f0_hz + spec.bandwidth_hz / 2.0,
        fractional_bw: fbw,
        g_values,
        coupling_coefficients: k_values,
        qe_in,
        qe_out,
        inductance_h,
        resonant_capacitance_f: c_resonant,
        coupling_capacitors_f: coupling_caps,
        tank_capacitors_f: tank_caps,
        q_min,
        warnings,
        spec: spec.clone(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn spec_40m() -> FilterSpec {
        FilterSpec {
            f0_hz: 7_000_000.0,
            bandwidth_hz: 300_000.0,
            impedance_ohms: 50.0,
            resonators: 5,
            response: Response::Butterworth,
            topology: Topology::Top,
            q_safety: 2.0,
        }
    }

    #[test]
    fn resonator_values_for_7mhz_50ohm() {
        let (l, c) = resonator_components(7e6, 50.0);
        assert!((l - 1.1368e-6).abs() < 1e-10, "L = {l}");
        assert!((c - 454.73e-12).abs() < 1e-14, "C = {c}");
    }

    #[test]
    fn resonance_invariant_sub_ppm() {
        for (f0, z0) in [(7e6, 50.0), (14.2e6, 50.0), (455e3, 600.0), (1e9, 75.0)] {
            let (l, c) = resonator_components(f0, z0);
            let back = 1.0 / (2.0 * PI * (l * c).sqrt());
            let error_ppm = (back - f0).abs() / f0 * 1e6;
            assert!(error_ppm < 1.0, "f0 {f0}: error {error_ppm} ppm");
        }
    }

    #[test]
    fn coupling_coefficients_below_one_for_narrowband() {
        for fbw in [0.01, 0.05, 0.1, 0.2, 0.4] {
            for order in [2, 5, 9] {
                let g = Response::Butterworth.g_values(order).unwrap();
                let k = coupling_coefficients(&g, fbw);
                assert_eq!(k.len(), order - 1);
                assert!(
                    k.iter().all(|&ki| ki < 1.0),
                    "fbw {fbw}, order {order}: {k:?}"
                );
            }
        }
    }

    #[test]
    fn external_q_uses_end_elements() {
        let g = vec![0.618, 1.618, 2.0, 1.618, 0.618];
        let (qin, qout) = external_q(&g, 0.05);
        assert!((qin - 0.618 / 0.05).abs() < 1e-9);
        assert!((qout - qin).abs() < 1e-12, "symmetric prototype");
    }

    #[test]
    fn tank_compensation_interior_loses_both_neighbors() {
        let c = 100e-12;
        let cs = vec![4e-12, 6e-12, 8e-12];
        let cp = tank_capacitors(4, c, &cs);
        assert!((cp[0] - (c - 4e-12)).abs() < 1e-18);
        assert!((cp[1] - (c - 4e-12 - 6e-12)).abs() < 1e-18);
        assert!((cp[2] - (c - 6e-12 - 8e-12)).abs() < 1e-18);
        assert!((cp[3] - (c - 8e-12)).abs() < 1e-18);
    }

    #[test]
    fn synthesize_order_5_butterworth() {
        let design = synthesize(&spec_40m()).unwrap();
        assert_eq!(design.g_values.len(), 5);
        assert_eq!(design.coupling_coefficients.len(), 4);
        assert_eq!(design.tank_capacitors_f.len(), 5);
        assert_eq!(design.coupling_capacitors_f.len(), 4);
        assert!(design.warnings.is_empty(), "{:?}", design.warnings);
        assert!((design.inductance_h - 1.1368e-6).abs() < 1e-10);
        assert!((design.q_min - (7e6 / 3e5) * 2.0).abs() < 1e-9);
        // end tanks keep more capacitance than interior ones
        assert!(design.tank_capacitors_f[0] > design.tank_capacitors_f[1]);
    }

    #[test]
    fn synthesize_rejects_bandwidth_at_or_above_f0() {
        let mut spec = spec_40m();
        spec.bandwidth_hz = spec.f0_hz;
        let err = synthesize(&spec).unwrap_err();
        assert!(matches!(err, SynthesisError::InvalidConfiguration(_)));
    }

    #[test]
    fn synthesize_rejects_non_positive_inputs() {
        for mutate in [
            (|s: &mut FilterSpec| s.f0_hz = 0.0) as fn(&mut FilterSpec),
            |s| s.bandwidth_hz = -1.0,
            |s| s.impedance_ohms = 0.0,
            |s| s.q_safety = 0.0,
            |s| s.resonators = 1,
            |s| s.resonators = 10,
        ] {
            let mut spec = spec_40m();
            mutate(&mut spec);
            assert!(
                matches!(
                    synthesize(&spec),
                    Err(SynthesisError::InvalidConfiguration(_))
                ),
                "spec: {spec:?}"
            );
        }
    }

    #[test]
    fn synthesize_rejects_excessive_frequency_and_impedance() {
        let mut spec = spec_40m();
        spec.f0_hz = 2e12;
        spec.bandwidth_hz = 1e10;
        assert!(synthesize(&spec).is_err());

        let mut spec = spec_40m();
        spec.impedance_ohms = 2e6;
        assert!(synthesize(&spec).is_err());
    }

    #[test]
    fn shunt_wide_fbw_warns_but_succeeds() {
        let spec = FilterSpec {
            f0_hz: 10e6,
            bandwidth_hz: 1.5e6, // 15% FBW
            topology: Topology::Shunt,
            ..spec_40m()
        };
        let design = synthesize(&spec).unwrap();
        assert_eq!(design.warnings.len(), 1);
        assert!(design.warnings[0].contains("Shunt-C"), "{:?}", design.warnings);
    }

    #[test]
    fn very_wide_fbw_warns_overall() {
        let spec = FilterSpec {
            f0_hz: 10e6,
            bandwidth_hz: 4.5e6, // 45% FBW
            resonators: 2,
            ..spec_40m()
        };
        let design = synthesize(&spec).unwrap();
        assert!(
            design.warnings.iter().any(|w| w.contains("45.0%")),
            "{:?}",
            design.warnings
        );
    }

    #[test]
    fn unrealizable_design_names_interior_resonators() {
        // Huge fractional bandwidth drives interior tank caps negative
        // before the end ones.
        let spec = FilterSpec {
            f0_hz: 10e6,
            bandwidth_hz: 9e6,
            resonators: 5,
            ..spec_40m()
        };
        match synthesize(&spec) {
            Err(SynthesisError::PhysicallyUnrealizable(idx)) => {
                assert!(!idx.is_empty());
                assert!(idx.contains(&2) && idx.contains(&4), "indices: {idx:?}");
                assert!(idx.iter().all(|&i| (1..=5).contains(&i)));
            }
            other => panic!("expected PhysicallyUnrealizable, got {other:?}"),
        }
    }

    #[test]
    fn chebyshev_even_order_error_propagates_unchanged() {
        let spec = FilterSpec {
            resonators: 4,
            response: Response::Chebyshev { ripple_db: 0.5 },
            ..spec_40m()
        };
        let err = synthesize(&spec).unwrap_err();
        assert_eq!(
            err,
            crate::prototype::chebyshev_g_values(4, 0.5).unwrap_err()
        );
    }

    #[test]
    fn design_carries_its_spec_and_edges() {
        let design = synthesize(&spec_40m()).unwrap();
        assert_eq!(design.spec, spec_40m());
        assert!((design.f_low_hz - 6.85e6).abs() < 1.0);
        assert!((design.f_high_hz - 7.15e6).abs() < 1.0);
        assert!((design.fractional_bw - 300e3 / 7e6).abs() < 1e-12);
    }
}
