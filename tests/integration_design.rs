//! End-to-end synthesis tests: spec in, buildable component set out.
//!
//! Reference values cross-checked against the standard design tables
//! (Zverev, Matthaei/Young/Jones) and a hand-worked 40 m band example.

use tankfilter::{synthesize, FilterSpec, Response, SynthesisError, Topology};

fn spec(response: Response, resonators: usize) -> FilterSpec {
    FilterSpec {
        f0_hz: 7_000_000.0,
        bandwidth_hz: 300_000.0,
        impedance_ohms: 50.0,
        resonators,
        response,
        topology: Topology::Top,
        q_safety: 2.0,
    }
}

// ---------------------------------------------------------------------------
// The 40 m band worked example
// ---------------------------------------------------------------------------

#[test]
fn forty_meter_butterworth_order_5() {
    let design = synthesize(&spec(Response::Butterworth, 5)).unwrap();

    // L = Z0/ω0 ≈ 1.1368 µH, C = 1/(ω0·Z0) ≈ 454.73 pF
    assert!((design.inductance_h - 1.1368e-6).abs() < 1e-10);
    assert!((design.resonant_capacitance_f - 454.73e-12).abs() < 1e-14);

    // resonance check better than 1 ppm
    let f_back = 1.0
        / (2.0
            * std::f64::consts::PI
            * (design.inductance_h * design.resonant_capacitance_f).sqrt());
    assert!((f_back - 7e6).abs() / 7e6 * 1e6 < 1.0);

    // every coupling coefficient sane for a 4.3% design
    assert!(design
        .coupling_coefficients
        .iter()
        .all(|&k| k > 0.0 && k < 1.0));

    // tank caps symmetric front-to-back for a symmetric prototype
    let cp = &design.tank_capacitors_f;
    assert!((cp[0] - cp[4]).abs() < 1e-18);
    assert!((cp[1] - cp[3]).abs() < 1e-18);
}

#[test]
fn interior_compensation_equals_adjacent_coupling_caps() {
    let design = synthesize(&spec(Response::Butterworth, 4)).unwrap();
    let c = design.resonant_capacitance_f;
    let cs = &design.coupling_capacitors_f;
    let cp = &design.tank_capacitors_f;

    for i in 1..3 {
        let compensation = c - cp[i];
        assert!(
            (compensation - (cs[i - 1] + cs[i])).abs() < 1e-20,
            "resonator {}",
            i + 1
        );
    }
    // end resonators lose exactly one neighbor's contribution
    assert!((c - cp[0] - cs[0]).abs() < 1e-20);
    assert!((c - cp[3] - cs[2]).abs() < 1e-20);
}

#[test]
fn external_q_scales_inversely_with_bandwidth() {
    let narrow = synthesize(&spec(Response::Butterworth, 3)).unwrap();
    let wide = synthesize(&FilterSpec {
        bandwidth_hz: 600_000.0,
        ..spec(Response::Butterworth, 3)
    })
    .unwrap();
    assert!((narrow.qe_in / wide.qe_in - 2.0).abs() < 1e-9);
}

// ---------------------------------------------------------------------------
// Response families
// ---------------------------------------------------------------------------

#[test]
fn chebyshev_0r5_order_5_g_values() {
    let design = synthesize(&FilterSpec {
        response: Response::Chebyshev { ripple_db: 0.5 },
        ..spec(Response::Butterworth, 5)
    })
    .unwrap();
    let expected = [1.70582, 1.22961, 2.54088, 1.22961, 1.70582];
    for (g, e) in design.g_values.iter().zip(expected) {
        assert!((g - e).abs() < 1e-5, "got {g}, expected {e}");
    }
}

#[test]
fn chebyshev_even_order_always_fails() {
    for n in [2, 4, 6, 8] {
        for ripple in [0.1, 0.5, 1.0] {
            let result = synthesize(&FilterSpec {
                response: Response::Chebyshev { ripple_db: ripple },
                ..spec(Response::Butterworth, n)
            });
            assert!(
                matches!(result, Err(SynthesisError::InvalidConfiguration(_))),
                "n = {n}, ripple = {ripple}"
            );
        }
    }
}

#[test]
fn bessel_synthesizes_for_all_orders() {
    for n in 2..=9 {
        let design = synthesize(&spec(Response::Bessel, n)).unwrap();
        assert_eq!(design.g_values.len(), n);
        assert_eq!(design.tank_capacitors_f.len(), n);
    }
}

// ---------------------------------------------------------------------------
// Failure and advisory paths
// ---------------------------------------------------------------------------

#[test]
fn unrealizable_bandwidth_names_offenders() {
    let result = synthesize(&FilterSpec {
        f0_hz: 10e6,
        bandwidth_hz: 9e6,
        ..spec(Response::Butterworth, 5)
    });
    match result {
        Err(SynthesisError::PhysicallyUnrealizable(indices)) => {
            assert!(indices.contains(&2), "{indices:?}");
            let msg = SynthesisError::PhysicallyUnrealizable(indices).to_string();
            assert!(msg.contains("Cp2"), "{msg}");
            assert!(msg.contains("reduce bandwidth"), "{msg}");
        }
        other => panic!("expected PhysicallyUnrealizable, got {other:?}"),
    }
}

#[test]
fn shunt_over_ten_percent_warns_without_failing() {
    let design = synthesize(&FilterSpec {
        bandwidth_hz: 1_200_000.0, // 17% of 7 MHz
        topology: Topology::Shunt,
        ..spec(Response::Butterworth, 3)
    })
    .unwrap();
    assert!(!design.warnings.is_empty());
    assert!(design.warnings[0].contains("Top-C"));
}

#[test]
fn invalid_configuration_messages_name_the_parameter() {
    let cases: [(fn(&mut FilterSpec), &str); 4] = [
        (|s| s.f0_hz = -1.0, "frequency"),
        (|s| s.bandwidth_hz = 0.0, "bandwidth"),
        (|s| s.impedance_ohms = -50.0, "impedance"),
        (|s| s.resonators = 12, "resonator"),
    ];
    for (mutate, needle) in cases {
        let mut s = spec(Response::Butterworth, 3);
        mutate(&mut s);
        let err = synthesize(&s).unwrap_err();
        assert!(
            err.to_string().contains(needle),
            "expected '{needle}' in: {err}"
        );
    }
}

// ---------------------------------------------------------------------------
// Engine purity
// ---------------------------------------------------------------------------

#[test]
fn repeated_synthesis_is_deterministic() {
    let s = spec(Response::Chebyshev { ripple_db: 0.1 }, 7);
    let a = synthesize(&s).unwrap();
    let b = synthesize(&s).unwrap();
    assert_eq!(a, b);
}
