mod cli;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "tankfilter",
    about = "Coupled-resonator bandpass filter designer — passband spec → LC component values"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute tank and coupling component values for a bandpass filter.
    Design(DesignArgs),
    /// Match a value to the nearest standard E-series component(s).
    Match {
        /// Target value in base units (Farads, Henries, Ohms).
        target: f64,
        /// Standard series: E12, E24, or E96.
        #[arg(short, long, default_value = "E24")]
        series: String,
        /// Maximum max/min ratio allowed for a parallel pair.
        #[arg(long, default_value_t = tankfilter::DEFAULT_RATIO_LIMIT)]
        ratio_limit: f64,
    },
    /// Explain how the selected response type works.
    Explain {
        /// Response type to explain.
        #[arg(value_enum)]
        response: ResponseArg,
    },
}

#[derive(Args)]
struct DesignArgs {
    /// Response type: butterworth (any n), chebyshev (odd n only), bessel.
    #[arg(short = 't', long = "type", value_enum)]
    response: ResponseArg,

    /// Center frequency (e.g. 14.2MHz); use together with --bandwidth.
    #[arg(short, long)]
    frequency: Option<String>,

    /// 3 dB bandwidth (e.g. 500kHz); use together with --frequency.
    #[arg(short, long)]
    bandwidth: Option<String>,

    /// Lower cutoff frequency (alternative input; use with --fh).
    #[arg(long = "fl")]
    f_low: Option<String>,

    /// Upper cutoff frequency (alternative input; use with --fl).
    #[arg(long = "fh")]
    f_high: Option<String>,

    /// Coupling topology: top (series) or shunt (parallel).
    #[arg(short, long, value_enum)]
    coupling: CouplingArg,

    /// System impedance (default 50 ohms, or the config-file default).
    #[arg(short = 'z', long)]
    impedance: Option<String>,

    /// Number of resonators (LC tanks), 2-9.
    #[arg(short = 'n', long, default_value_t = 2)]
    resonators: usize,

    /// Chebyshev passband ripple: 0.1, 0.5, or 1.0 dB.
    #[arg(short, long, default_value_t = 0.5)]
    ripple: f64,

    /// Q safety factor multiplier (crystal filters: 1.5, LC: 2.0, lossy: 3+).
    #[arg(long)]
    q_safety: Option<f64>,

    /// Print raw values in scientific notation.
    #[arg(long)]
    raw: bool,

    /// Component values only — no header, diagram, or Q advisory.
    #[arg(long)]
    quiet: bool,

    /// Output format.
    #[arg(long, value_enum, default_value = "table")]
    format: FormatArg,

    /// Append nearest standard values (E12, E24, E96); with no series
    /// given, uses the config-file default or E24.
    #[arg(long, num_args = 0..=1)]
    standard: Option<Option<String>>,

    /// Render an ASCII frequency-response plot after the results.
    #[arg(long)]
    plot: bool,

    /// Print the response sweep as data instead of a plot.
    #[arg(long, value_enum)]
    export_sweep: Option<SweepFormatArg>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ResponseArg {
    Butterworth,
    Chebyshev,
    Bessel,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CouplingArg {
    Top,
    Shunt,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Table,
    Json,
    Csv,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SweepFormatArg {
    Json,
    Csv,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Design(args) => cli::design::run(&args),
        Command::Match {
            target,
            series,
            ratio_limit,
        } => cli::matcher::run(target, &series, ratio_limit),
        Command::Explain { response } => cli::explain::run(response),
    }
}
