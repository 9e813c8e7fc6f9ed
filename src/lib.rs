//! TankFilter — coupled-resonator bandpass filter synthesis: passband spec
//! → buildable LC component values.
//!
//! Designs chains of parallel-LC tanks joined by coupling capacitors
//! (Top-C series or Shunt-C parallel coupling) for Butterworth, Chebyshev,
//! and Bessel responses, then rounds the exact values onto purchasable
//! E-series parts.
//!
//! # Modules
//!
//! - [`prototype`] — normalized lowpass g-values (closed form + tables)
//! - [`synthesis`] — coupling coefficients, tank sizing, feasibility, the
//!   [`synthesize`] entry point
//! - [`eseries`] — IEC 60063 standard-value matching (single + parallel pair)
//! - [`response`] — passband magnitude curves and frequency sweeps
//! - [`units`] — `14.2MHz` / `50Ω` parsing and engineering formatting
//! - [`report`] — table / JSON / CSV rendering of a design
//! - [`diagram`] — ASCII topology schematics
//! - [`plot`] — terminal response plot and sweep export
//! - [`config`] — `~/.config/tankfilter/defaults` loading

pub mod config;
pub mod diagram;
pub mod error;
pub mod eseries;
pub mod plot;
pub mod prototype;
pub mod report;
pub mod response;
pub mod synthesis;
pub mod units;

pub use error::{MatchError, SynthesisError};
pub use eseries::{match_component, EseriesMatch, Series, DEFAULT_RATIO_LIMIT};
pub use prototype::Response;
pub use synthesis::{synthesize, FilterDesign, FilterSpec, Topology};
