//! Rendering of a [`FilterDesign`] for people and for machines.
//!
//! The table renderer mirrors what a builder wants on the bench: passband
//! summary, warnings, the topology schematic, and box-drawn component
//! tables. JSON and CSV renderers expose the same numbers to scripts.

use serde::Serialize;
use std::fmt::Write;

use crate::diagram;
use crate::error::MatchError;
use crate::eseries::{self, Series};
use crate::synthesis::{FilterDesign, Topology};
use crate::units::{format_capacitance, format_frequency, format_inductance};

fn topology_key(topology: Topology) -> &'static str {
    match topology {
        Topology::Top => "top",
        Topology::Shunt => "shunt",
    }
}

fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn ripple_of(design: &FilterDesign) -> Option<f64> {
    match design.spec.response {
        crate::prototype::Response::Chebyshev { ripple_db } => Some(ripple_db),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// Full human-readable report: header, warnings, Q advisory, topology
/// diagram, component tables, external Qs.
pub fn render_table(design: &FilterDesign, raw: bool) -> String {
    let spec = &design.spec;
    let n = spec.resonators;
    let mut out = String::new();

    let title = format!(
        "{} Coupled Resonator Bandpass Filter",
        title_case(spec.response.name())
    );
    let _ = writeln!(out, "\n{title}");
    let _ = writeln!(out, "{}", "=".repeat(50));
    let _ = writeln!(out, "Center Frequency f₀: {}", format_frequency(spec.f0_hz));
    let _ = writeln!(out, "Lower Cutoff fₗ:     {}", format_frequency(design.f_low_hz));
    let _ = writeln!(out, "Upper Cutoff fₕ:     {}", format_frequency(design.f_high_hz));
    let _ = writeln!(out, "Bandwidth BW:        {}", format_frequency(spec.bandwidth_hz));
    let _ = writeln!(out, "Fractional BW:       {:.2}%", design.fractional_bw * 100.0);
    let _ = writeln!(out, "Impedance Z₀:        {} Ω", spec.impedance_ohms);
    if let Some(ripple) = ripple_of(design) {
        let _ = writeln!(out, "Ripple:              {ripple} dB");
    }
    let _ = writeln!(out, "Resonators:          {n}");
    let _ = writeln!(out, "Coupling:            {}", spec.topology);
    let _ = writeln!(out, "{}", "=".repeat(50));

    if !design.warnings.is_empty() {
        let _ = writeln!(out, "\nWarnings:");
        for w in &design.warnings {
            let _ = writeln!(out, "  ⚠ {w}");
        }
    }

    let _ = writeln!(out, "\nMinimum Component Q: {:.0}", design.q_min);
    let _ = writeln!(out, "  (Q safety factor: {})", spec.q_safety);

    let _ = writeln!(out, "\nTopology:");
    let _ = writeln!(out, "{}", diagram::render(spec.topology, n));

    // Tank capacitors and inductors, side by side.
    let _ = writeln!(out, "\n{:^50}", "Component Values");
    let _ = writeln!(out, "┌{0}┬{0}┐", "─".repeat(24));
    let _ = writeln!(out, "│{:^24}│{:^24}│", "Tank Capacitors", "Inductors");
    let _ = writeln!(out, "├{0}┼{0}┤", "─".repeat(24));
    for i in 0..n {
        let cap = component_value(design.tank_capacitors_f[i], "F", raw, format_capacitance);
        let ind = component_value(design.inductance_h, "H", raw, format_inductance);
        let _ = writeln!(
            out,
            "│ {:<22} │ {:<22} │",
            format!("Cp{}: {cap}", i + 1),
            format!("L{}: {ind}", i + 1)
        );
    }
    let _ = writeln!(out, "└{0}┴{0}┘", "─".repeat(24));

    let _ = writeln!(out, "\n┌{}┐", "─".repeat(24));
    let _ = writeln!(out, "│{:^24}│", "Coupling Capacitors");
    let _ = writeln!(out, "├{}┤", "─".repeat(24));
    for (i, &cs) in design.coupling_capacitors_f.iter().enumerate() {
        let val = component_value(cs, "F", raw, format_capacitance);
        let _ = writeln!(
            out,
            "│ {:<22} │",
            format!("Cs{}{}: {val}", i + 1, i + 2)
        );
    }
    let _ = writeln!(out, "└{}┘", "─".repeat(24));

    let _ = writeln!(out, "\nExternal Q (input):  {:.2}", design.qe_in);
    let _ = writeln!(out, "External Q (output): {:.2}", design.qe_out);
    out
}

fn component_value(value: f64, base_unit: &str, raw: bool, pretty: fn(f64) -> String) -> String {
    if raw {
        format!("{value:.6e} {base_unit}")
    } else {
        pretty(value)
    }
}

// ---------------------------------------------------------------------------
// Quiet
// ---------------------------------------------------------------------------

/// Values only, one component per line.
pub fn render_quiet(design: &FilterDesign, raw: bool) -> String {
    let mut lines = Vec::new();
    for (i, &cp) in design.tank_capacitors_f.iter().enumerate() {
        lines.push(format!(
            "Cp{}: {}",
            i + 1,
            component_value(cp, "F", raw, format_capacitance)
        ));
    }
    for i in 0..design.spec.resonators {
        lines.push(format!(
            "L{}: {}",
            i + 1,
            component_value(design.inductance_h, "H", raw, format_inductance)
        ));
    }
    for (i, &cs) in design.coupling_capacitors_f.iter().enumerate() {
        lines.push(format!(
            "Cs{}{}: {}",
            i + 1,
            i + 2,
            component_value(cs, "F", raw, format_capacitance)
        ));
    }
    lines.join("\n")
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct NamedFarads {
    name: String,
    value_farads: f64,
}

#[derive(Serialize)]
struct NamedHenries {
    name: String,
    value_henries: f64,
}

#[derive(Serialize)]
struct JsonComponents {
    tank_capacitors: Vec<NamedFarads>,
    inductors: Vec<NamedHenries>,
    coupling_capacitors: Vec<NamedFarads>,
}

#[derive(Serialize)]
struct JsonExternalQ {
    input: f64,
    output: f64,
}

#[derive(Serialize)]
struct JsonReport {
    filter_type: String,
    coupling: String,
    center_frequency_hz: f64,
    bandwidth_hz: f64,
    f_low_hz: f64,
    f_high_hz: f64,
    fractional_bw: f64,
    impedance_ohms: f64,
    n_resonators: usize,
    q_min: f64,
    components: JsonComponents,
    external_q: JsonExternalQ,
    #[serde(skip_serializing_if = "Option::is_none")]
    ripple_db: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
}

/// Machine-readable report as pretty-printed JSON.
pub fn render_json(design: &FilterDesign) -> String {
    let spec = &design.spec;
    let report = JsonReport {
        filter_type: spec.response.name().to_string(),
        coupling: topology_key(spec.topology).to_string(),
        center_frequency_hz: spec.f0_hz,
        bandwidth_hz: spec.bandwidth_hz,
        f_low_hz: design.f_low_hz,
        f_high_hz: design.f_high_hz,
        fractional_bw: design.fractional_bw,
        impedance_ohms: spec.impedance_ohms,
        n_resonators: spec.resonators,
        q_min: design.q_min,
        components: JsonComponents {
            tank_capacitors: design
                .tank_capacitors_f
                .iter()
                .enumerate()
                .map(|(i, &v)| NamedFarads {
                    name: format!("Cp{}", i + 1),
                    value_farads: v,
                })
                .collect(),
            inductors: (0..spec.resonators)
                .map(|i| NamedHenries {
                    name: format!("L{}", i + 1),
                    value_henries: design.inductance_h,
                })
                .collect(),
            coupling_capacitors: design
                .coupling_capacitors_f
                .iter()
                .enumerate()
                .map(|(i, &v)| NamedFarads {
                    name: format!("Cs{}{}", i + 1, i + 2),
                    value_farads: v,
                })
                .collect(),
        },
        external_q: JsonExternalQ {
            input: design.qe_in,
            output: design.qe_out,
        },
        ripple_db: ripple_of(design),
        warnings: design.warnings.clone(),
    };
    serde_json::to_string_pretty(&report).expect("design report serializes")
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// `Component,Value,Unit` rows for spreadsheets.
pub fn render_csv(design: &FilterDesign) -> String {
    let mut out = String::from("Component,Value,Unit\n");

    let mut push = |name: String, formatted: String| {
        // "454.73 pF" → value "454.73", unit "pF"
        let (value, unit) = formatted.rsplit_once(' ').unwrap_or((&formatted, ""));
        let _ = writeln!(out, "{name},{value},{unit}");
    };

    for (i, &cp) in design.tank_capacitors_f.iter().enumerate() {
        push(format!("Cp{}", i + 1), format_capacitance(cp));
    }
    for i in 0..design.spec.resonators {
        push(format!("L{}", i + 1), format_inductance(design.inductance_h));
    }
    for (i, &cs) in design.coupling_capacitors_f.iter().enumerate() {
        push(format!("Cs{}{}", i + 1, i + 2), format_capacitance(cs));
    }
    out
}

// ---------------------------------------------------------------------------
// Standard-value annotation
// ---------------------------------------------------------------------------

/// Nearest purchasable (E-series) value for every computed component, with
/// the parallel-pair alternative whenever it lands closer than the single.
pub fn render_standard_values(
    design: &FilterDesign,
    series: Series,
    ratio_limit: f64,
) -> Result<String, MatchError> {
    let mut out = format!("Standard values ({series}):");

    let mut annotate =
        |name: String, value: f64, pretty: fn(f64) -> String| -> Result<(), MatchError> {
            let m = eseries::match_component(value, series, ratio_limit)?;
            let _ = write!(
                out,
                "\n  {name}: {} ({:.2}%)",
                pretty(m.single_value),
                m.single_error_pct
            );
            if let Some(p) = m.parallel {
                if p.error_pct < m.single_error_pct {
                    let _ = write!(
                        out,
                        "\n  {0:1$}  pair {2} ∥ {3} → {4} ({5:.2}%)",
                        "",
                        name.chars().count(),
                        pretty(p.v1),
                        pretty(p.v2),
                        pretty(p.value),
                        p.error_pct
                    );
                }
            }
            Ok(())
        };

    for (i, &cp) in design.tank_capacitors_f.iter().enumerate() {
        annotate(format!("Cp{}", i + 1), cp, format_capacitance)?;
    }
    annotate("L".to_string(), design.inductance_h, format_inductance)?;
    for (i, &cs) in design.coupling_capacitors_f.iter().enumerate() {
        annotate(format!("Cs{}{}", i + 1, i + 2), cs, format_capacitance)?;
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
