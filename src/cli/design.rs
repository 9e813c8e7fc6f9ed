//! `tankfilter design` — the main synthesis command.
//!
//! Resolves the two frequency-input conventions, folds in config-file
//! defaults, runs the synthesis engine, and renders the result in the
//! requested format. Warnings go to stderr so piped output stays clean.

use std::process;

use tankfilter::config;
use tankfilter::eseries::{Series, DEFAULT_RATIO_LIMIT};
use tankfilter::plot::{export_csv, export_json, render_ascii_plot};
use tankfilter::report;
use tankfilter::response::frequency_sweep;
use tankfilter::synthesis::{synthesize, FilterSpec, Topology};
use tankfilter::units::{parse_frequency, parse_impedance};
use tankfilter::Response;

use crate::{CouplingArg, DesignArgs, FormatArg, ResponseArg, SweepFormatArg};

/// f0, bandwidth, display cutoffs, and whether the cutoff-pair input
/// convention (geometric-mean center) was used.
struct Frequencies {
    f0: f64,
    bw: f64,
    f_low: f64,
    f_high: f64,
    from_cutoffs: bool,
}

pub fn run(args: &DesignArgs) {
    let defaults = config::load_defaults()
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            process::exit(1);
        })
        .unwrap_or_default();

    let freqs = resolve_frequencies(args).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    let impedance_ohms = match &args.impedance {
        Some(s) => parse_impedance(s).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            process::exit(1);
        }),
        None => defaults.impedance_ohms.unwrap_or(50.0),
    };

    let response = match args.response {
        ResponseArg::Butterworth => Response::Butterworth,
        ResponseArg::Chebyshev => Response::Chebyshev {
            ripple_db: args.ripple,
        },
        ResponseArg::Bessel => Response::Bessel,
    };
    let topology = match args.coupling {
        CouplingArg::Top => Topology::Top,
        CouplingArg::Shunt => Topology::Shunt,
    };

    let spec = FilterSpec {
        f0_hz: freqs.f0,
        bandwidth_hz: freqs.bw,
        impedance_ohms,
        resonators: args.resonators,
        response,
        topology,
        q_safety: args.q_safety.or(defaults.q_safety).unwrap_or(2.0),
    };

    let mut design = synthesize(&spec).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    // The cutoff-pair input uses the geometric-mean center convention;
    // show the user's own edges rather than the engine's arithmetic ones.
    if freqs.from_cutoffs {
        design.f_low_hz = freqs.f_low;
        design.f_high_hz = freqs.f_high;
    }

    for w in &design.warnings {
        eprintln!("Warning: {w}");
    }

    match args.format {
        FormatArg::Table if args.quiet => println!("{}", report::render_quiet(&design, args.raw)),
        FormatArg::Table => print!("{}", report::render_table(&design, args.raw)),
        FormatArg::Json => println!("{}", report::render_json(&design)),
        FormatArg::Csv => print!("{}", report::render_csv(&design)),
    }

    if let Some(series_arg) = &args.standard {
        let series: Series = match series_arg {
            Some(name) => name.parse().unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                process::exit(1);
            }),
            None => defaults.series.unwrap_or(Series::E24),
        };
        let annotated = report::render_standard_values(&design, series, DEFAULT_RATIO_LIMIT)
            .unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                process::exit(1);
            });
        println!("\n{annotated}");
    }

    if args.plot || args.export_sweep.is_some() {
        let sweep = frequency_sweep(&design, 240);
        match args.export_sweep {
            Some(SweepFormatArg::Json) => println!("{}", export_json(&design, &sweep)),
            Some(SweepFormatArg::Csv) => println!("{}", export_csv(&sweep)),
            None => println!(
                "\n{}",
                render_ascii_plot(
                    &sweep,
                    design.spec.f0_hz,
                    design.spec.bandwidth_hz,
                    60,
                    10,
                    -60.0,
                    "Frequency Response",
                )
            ),
        }
    }
}

/// Validate the two frequency-input methods and produce f0 + bandwidth.
///
/// Center + bandwidth: edges are f0 ± bw/2. Cutoff pair: geometric-mean
/// center `√(fl·fh)` and bw = fh − fl.
fn resolve_frequencies(args: &DesignArgs) -> Result<Frequencies, String> {
    let has_center = args.frequency.is_some() && args.bandwidth.is_some();
    let has_cutoffs = args.f_low.is_some() && args.f_high.is_some();
    let partial_center = args.frequency.is_some() != args.bandwidth.is_some();
    let partial_cutoffs = args.f_low.is_some() != args.f_high.is_some();

    if has_center && has_cutoffs {
        return Err("specify either (-f + -b) or (--fl + --fh), not both".to_string());
    }
    if !has_center && !has_cutoffs {
        if partial_center {
            return Err("both -f and -b are required together".to_string());
        }
        if partial_cutoffs {
            return Err("both --fl and --fh are required together".to_string());
        }
        return Err("specify frequency as (-f + -b) or (--fl + --fh)".to_string());
    }

    if has_center {
        let f0 = parse_frequency(args.frequency.as_deref().unwrap())?;
        let bw = parse_frequency(args.bandwidth.as_deref().unwrap())?;
        Ok(Frequencies {
            f0,
            bw,
            f_low: f0 - bw / 2.0,
            f_high: f0 + bw / 2.0,
            from_cutoffs: false,
        })
    } else {
        let f_low = parse_frequency(args.f_low.as_deref().unwrap())?;
        let f_high = parse_frequency(args.f_high.as_deref().unwrap())?;
        if f_low >= f_high {
            return Err("lower cutoff must be less than upper cutoff".to_string());
        }
        Ok(Frequencies {
            f0: (f_low * f_high).sqrt(),
            bw: f_high - f_low,
            f_low,
            f_high,
            from_cutoffs: true,
        })
    }
}
