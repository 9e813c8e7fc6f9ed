//! Terminal frequency-response plot and sweep-data export.
//!
//! Renders a magnitude sweep as ASCII art (log-frequency axis, dB vertical
//! axis, −3 dB reference line, center-frequency marker) and serializes the
//! same sweep as JSON or CSV for external plotting tools.

use serde::Serialize;

use crate::synthesis::FilterDesign;

/// Map log(frequency) to a column in `0..width`.
fn freq_to_col(f: f64, f_min: f64, f_max: f64, width: usize) -> usize {
    if f_min == f_max {
        return width / 2;
    }
    let span = f_max.log10() - f_min.log10();
    let col = ((f.log10() - f_min.log10()) / span * (width - 1) as f64) as isize;
    col.clamp(0, width as isize - 1) as usize
}

/// Map dB to a row: 0 dB at the top, `db_min` at the bottom.
fn db_to_row(db: f64, db_min: f64, height: usize) -> usize {
    let clamped = db.clamp(db_min, 0.0);
    let row = (-clamped / -db_min * (height - 1) as f64) as isize;
    row.clamp(0, height as isize - 1) as usize
}

/// Short frequency label for the x-axis (`7.00M`, `455.0`).
fn freq_label(f: f64) -> String {
    if f >= 1e9 {
        format!("{:.2}G", f / 1e9)
    } else if f >= 1e6 {
        format!("{:.2}M", f / 1e6)
    } else if f >= 1e3 {
        format!("{:.2}k", f / 1e3)
    } else {
        format!("{f:.1}")
    }
}

/// Render a magnitude sweep as ASCII art.
///
/// The passband is filled with `#` down from 0 dB, a `-` line marks −3 dB,
/// and a `|` column marks the center frequency (`+` where they cross).
pub fn render_ascii_plot(
    sweep: &[(f64, f64)],
    f0: f64,
    bw: f64,
    width: usize,
    height: usize,
    db_min: f64,
    title: &str,
) -> String {
    if sweep.is_empty() {
        return "No data to plot".to_string();
    }

    let f_min = sweep[0].0;
    let f_max = sweep[sweep.len() - 1].0;
    let mut grid = vec![vec![' '; width]; height];

    // Fill from 0 dB down to the response curve.
    for &(f, db) in sweep {
        let col = freq_to_col(f, f_min, f_max, width);
        let row = db_to_row(db, db_min, height);
        for line in grid.iter_mut().take(row + 1) {
            line[col] = '#';
        }
    }

    // −3 dB reference line.
    let row_3db = db_to_row(-3.0, db_min, height);
    for slot in grid[row_3db].iter_mut() {
        if *slot == ' ' {
            *slot = '-';
        }
    }

    // Center-frequency marker.
    let col_f0 = freq_to_col(f0, f_min, f_max, width);
    for line in grid.iter_mut() {
        if line[col_f0] == ' ' || line[col_f0] == '-' {
            line[col_f0] = '|';
        }
    }
    grid[row_3db][col_f0] = '+';

    let mut lines = vec![title.to_string(), "  dB".to_string()];
    for (row, line) in grid.iter().enumerate() {
        let prefix = if row == 0 {
            format!("{:4} |", 0)
        } else if row == height - 1 {
            format!("{:4} |", db_min as i64)
        } else if row == row_3db {
            format!("{:4} |", -3)
        } else {
            "     |".to_string()
        };
        lines.push(format!("{prefix}{}", line.iter().collect::<String>()));
    }
    lines.push(format!("     +{}", "-".repeat(width)));

    let f_low = f0 - bw / 2.0;
    let f_high = f0 + bw / 2.0;
    let x_label = format!(
        "     {:>10}  {:>10}  {:>8}  {:>10}  {:>10}",
        freq_label(f_min),
        freq_label(f_low),
        freq_label(f0),
        freq_label(f_high),
        freq_label(f_max)
    );
    lines.push(x_label.chars().take(6 + width).collect());
    lines.push("     Frequency (Hz)".to_string());

    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct SweepPoint {
    frequency_hz: f64,
    magnitude_db: f64,
}

#[derive(Serialize)]
struct SweepExport {
    filter_type: String,
    f0_hz: f64,
    bandwidth_hz: f64,
    order: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    ripple_db: Option<f64>,
    data: Vec<SweepPoint>,
}

/// Sweep data as pretty-printed JSON.
pub fn export_json(design: &FilterDesign, sweep: &[(f64, f64)]) -> String {
    let export = SweepExport {
        filter_type: design.spec.response.name().to_string(),
        f0_hz: design.spec.f0_hz,
        bandwidth_hz: design.spec.bandwidth_hz,
        order: design.spec.resonators,
        ripple_db: match design.spec.response {
            crate::prototype::Response::Chebyshev { ripple_db } => Some(ripple_db),
            _ => None,
        },
        data: sweep
            .iter()
            .map(|&(f, db)| SweepPoint {
                frequency_hz: f,
                magnitude_db: (db * 100.0).round() / 100.0,
            })
            .collect(),
    };
    serde_json::to_string_pretty(&export).expect("sweep export serializes")
}

/// Sweep data as two-column CSV.
pub fn export_csv(sweep: &[(f64, f64)]) -> String {
    let mut out = String::from("frequency_hz,magnitude_db");
    for &(f, db) in sweep {
        out.push_str(&format!("\n{f},{db:.2}"));
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
