//! `tankfilter match` — one-off standard-value lookup.

use std::process;

use tankfilter::eseries::{match_component, Series};

pub fn run(target: f64, series_name: &str, ratio_limit: f64) {
    let series: Series = series_name.parse().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    let m = match_component(target, series, ratio_limit).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    println!("Target:  {}", m.target);
    println!(
        "Closest {series} value: {} ({:.3}% error)",
        m.single_value, m.single_error_pct
    );
    match m.parallel {
        Some(p) => println!(
            "Best parallel pair: {} ∥ {} → {:.6} ({:.3}% error)",
            p.v1, p.v2, p.value, p.error_pct
        ),
        None => println!("No parallel pair within ratio limit {ratio_limit}"),
    }
}
