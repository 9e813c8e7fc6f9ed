//! Magnitude response of the synthesized bandpass filters.
//!
//! Uses the standard lowpass-to-bandpass mapping: a frequency f maps onto
//! the lowpass prototype axis as `Ω = (f/f0 − f0/f) / FBW`, so the passband
//! edges land at Ω = ±1 and the prototype magnitude formulas apply
//! directly. Good to the same narrowband limits as the synthesis itself.

use crate::prototype::Response;
use crate::synthesis::FilterDesign;

/// Chebyshev polynomial of the first kind, `T_n(x)`.
///
/// Trigonometric form inside [−1, 1], hyperbolic outside.
pub fn chebyshev_polynomial(n: usize, x: f64) -> f64 {
    if x.abs() <= 1.0 {
        (n as f64 * x.acos()).cos()
    } else {
        let t = (n as f64 * x.abs().acosh()).cosh();
        if x < 0.0 && n % 2 == 1 {
            -t
        } else {
            t
        }
    }
}

/// Lowpass-prototype frequency for a bandpass point: `(f/f0 − f0/f)/FBW`.
fn prototype_offset(f_hz: f64, f0_hz: f64, fbw: f64) -> f64 {
    (f_hz / f0_hz - f0_hz / f_hz) / fbw
}

/// Butterworth bandpass magnitude (linear): `1/√(1 + Ω^2n)`.
pub fn magnitude_butterworth(f_hz: f64, f0_hz: f64, fbw: f64, order: usize) -> f64 {
    let omega = prototype_offset(f_hz, f0_hz, fbw);
    1.0 / (1.0 + omega.powi(2 * order as i32)).sqrt()
}

/// Chebyshev bandpass magnitude: `1/√(1 + ε²·T_n(Ω)²)`, `ε² = 10^(r/10)−1`.
pub fn magnitude_chebyshev(
    f_hz: f64,
    f0_hz: f64,
    fbw: f64,
    order: usize,
    ripple_db: f64,
) -> f64 {
    let omega = prototype_offset(f_hz, f0_hz, fbw);
    let eps_sq = 10f64.powf(ripple_db / 10.0) - 1.0;
    let t = chebyshev_polynomial(order, omega);
    1.0 / (1.0 + eps_sq * t * t).sqrt()
}

// 3 dB frequencies of the unit-delay Bessel prototype, orders 2-9.
static BESSEL_3DB: [f64; 8] = [
    1.3617, 1.7557, 2.1139, 2.4274, 2.7034, 2.9517, 3.1796, 3.3917,
];

/// Bessel bandpass magnitude via the reverse Bessel polynomial
/// `θ_n(s) = Σ a_k·s^k`, `a_k = (2n−k)!/(2^(n−k)·k!·(n−k)!)`,
/// rescaled so the passband edges sit at −3 dB.
pub fn magnitude_bessel(f_hz: f64, f0_hz: f64, fbw: f64, order: usize) -> f64 {
    let omega = prototype_offset(f_hz, f0_hz, fbw).abs();
    let w = omega * BESSEL_3DB[order.clamp(2, 9) - 2];

    // |θ_n(jw)|² split into real (even k) and imaginary (odd k) sums.
    let mut re = 0.0;
    let mut im = 0.0;
    for k in 0..=order {
        let a = bessel_coeff(order, k);
        let term = a * w.powi(k as i32);
        match k % 4 {
            0 => re += term,
            1 => im += term,
            2 => re -= term,
            _ => im -= term,
        }
    }
    bessel_coeff(order, 0) / (re * re + im * im).sqrt()
}

fn bessel_coeff(n: usize, k: usize) -> f64 {
    factorial(2 * n - k) / (2f64.powi((n - k) as i32) * factorial(k) * factorial(n - k))
}

/// Exact in f64 up to 18! (largest needed for order 9).
fn factorial(n: usize) -> f64 {
    (1..=n).map(|i| i as f64).product()
}

/// Linear magnitude to dB, floored to avoid log(0).
pub fn magnitude_db(magnitude: f64) -> f64 {
    20.0 * magnitude.max(1e-30).log10()
}

/// Magnitude (linear) of a design's response family at one frequency.
pub fn magnitude_at(design: &FilterDesign, f_hz: f64) -> f64 {
    let f0 = design.spec.f0_hz;
    let fbw = design.fractional_bw;
    let n = design.spec.resonators;
    match design.spec.response {
        Response::Butterworth => magnitude_butterworth(f_hz, f0, fbw, n),
        Response::Chebyshev { ripple_db } => magnitude_chebyshev(f_hz, f0, fbw, n, ripple_db),
        Response::Bessel => magnitude_bessel(f_hz, f0, fbw, n),
    }
}

/// Log-spaced magnitude sweep around the passband: `(f_hz, magnitude_db)`
/// pairs, wide enough to show the skirts on both sides.
pub fn frequency_sweep(design: &FilterDesign, points: usize) -> Vec<(f64, f64)> {
    let f0 = design.spec.f0_hz;
    let ratio = (1.0 + 4.0 * design.fractional_bw).clamp(1.25, 4.0);
    let log_min = (f0 / ratio).log10();
    let log_max = (f0 * ratio).log10();
    let steps = points.max(2) - 1;

    (0..=steps)
        .map(|i| {
            let f = 10f64.powf(log_min + (log_max - log_min) * i as f64 / steps as f64);
            (f, magnitude_db(magnitude_at(design, f)))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesis::{synthesize, FilterSpec, Topology};

    fn design(response: Response, resonators: usize) -> FilterDesign {
        synthesize(&FilterSpec {
            f0_hz: 10e6,
            bandwidth_hz: 500e3,
            impedance_ohms: 50.0,
            resonators,
            response,
            topology: Topology::Top,
            q_safety: 2.0,
        })
        .unwrap()
    }

    #[test]
    fn chebyshev_polynomial_t3() {
        // T3(x) = 4x³ − 3x
        for x in [-1.5, -0.7, 0.0, 0.3, 1.0, 2.4] {
            let exact = 4.0 * x * x * x - 3.0 * x;
            let got = chebyshev_polynomial(3, x);
            assert!((got - exact).abs() < 1e-9, "x = {x}: {got} vs {exact}");
        }
    }

    #[test]
    fn butterworth_unity_at_center() {
        let mag = magnitude_butterworth(10e6, 10e6, 0.05, 5);
        assert!((mag - 1.0).abs() < 1e-12);
    }

    #[test]
    fn butterworth_near_3db_at_band_edges() {
        let f0 = 10e6;
        let bw = 500e3;
        for f in [f0 - bw / 2.0, f0 + bw / 2.0] {
            let db = magnitude_db(magnitude_butterworth(f, f0, bw / f0, 5));
            assert!((-3.5..=-2.0).contains(&db), "edge {f}: {db} dB");
        }
    }

    #[test]
    fn butterworth_skirts_fall_monotonically() {
        let f0 = 10e6;
        let fbw = 0.05;
        let mut last = magnitude_butterworth(f0 * 1.05, f0, fbw, 5);
        for step in 1..20 {
            let f = f0 * (1.05 + step as f64 * 0.01);
            let mag = magnitude_butterworth(f, f0, fbw, 5);
            assert!(mag < last, "not monotonic at {f}");
            last = mag;
        }
    }

    #[test]
    fn chebyshev_ripple_stays_within_bound() {
        let f0 = 10e6;
        let fbw = 0.05;
        let ripple = 0.5;
        let floor_db = -ripple - 1e-6;
        // inside the passband the response never dips below the ripple depth
        for step in 0..=100 {
            let omega = -1.0 + 2.0 * step as f64 / 100.0;
            // invert the mapping: f/f0 = (omega*fbw + sqrt((omega*fbw)^2+4))/2
            let x = omega * fbw;
            let f = f0 * (x + (x * x + 4.0).sqrt()) / 2.0;
            let db = magnitude_db(magnitude_chebyshev(f, f0, fbw, 5, ripple));
            assert!(db >= floor_db, "omega {omega}: {db} dB");
            assert!(db <= 1e-6, "omega {omega}: {db} dB above unity");
        }
    }

    #[test]
    fn bessel_3db_at_band_edge() {
        let f0 = 10e6;
        let fbw: f64 = 0.05;
        for order in 2..=9 {
            // frequency whose prototype offset is exactly +1
            let f = f0 * (fbw + (fbw * fbw + 4.0).sqrt()) / 2.0;
            let mag = magnitude_bessel(f, f0, fbw, order);
            assert!(
                (mag - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-3,
                "order {order}: {mag}"
            );
        }
    }

    #[test]
    fn bessel_unity_at_center() {
        let mag = magnitude_bessel(10e6, 10e6, 0.05, 5);
        assert!((mag - 1.0).abs() < 1e-12, "got {mag}");
    }

    #[test]
    fn sweep_covers_passband_and_skirts() {
        let d = design(Response::Butterworth, 5);
        let sweep = frequency_sweep(&d, 201);
        assert_eq!(sweep.len(), 201);
        assert!(sweep.windows(2).all(|w| w[0].0 < w[1].0), "not ascending");

        let peak = sweep.iter().map(|&(_, db)| db).fold(f64::MIN, f64::max);
        assert!(peak > -0.1, "peak {peak} dB");
        let floor = sweep.first().unwrap().1;
        assert!(floor < -40.0, "skirt only reaches {floor} dB");
    }

    #[test]
    fn sweep_dispatches_all_families() {
        for response in [
            Response::Butterworth,
            Response::Chebyshev { ripple_db: 0.5 },
            Response::Bessel,
        ] {
            let n = if matches!(response, Response::Chebyshev { .. }) {
                5
            } else {
                4
            };
            let d = design(response, n);
            let sweep = frequency_sweep(&d, 101);
            assert!(sweep.iter().all(|&(_, db)| db.is_finite()));
        }
    }
}
