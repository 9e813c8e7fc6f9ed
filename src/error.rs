//! Error types for filter synthesis and standard-value matching.
//!
//! Both synthesis error kinds are terminal for the call that raised them:
//! nothing inside the engine catches or retries. Advisory conditions (wide
//! fractional bandwidth, marginal designs) are *not* errors — they travel
//! as warning strings inside a successful [`crate::FilterDesign`].

use thiserror::Error;

/// Errors raised by [`crate::synthesize`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SynthesisError {
    /// A parameter is outside the supported domain. The message names the
    /// offending parameter and, where one exists, the corrective action.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// All inputs were individually valid, but the derived design needs a
    /// non-positive tank capacitance — it cannot be built.
    #[error(
        "bandwidth too wide: {} would be non-positive; \
         reduce bandwidth or use fewer resonators",
        cp_phrase(.0)
    )]
    PhysicallyUnrealizable(Vec<usize>),
}

impl SynthesisError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        SynthesisError::InvalidConfiguration(reason.into())
    }
}

/// `[2, 3]` → `"tank capacitors Cp2, Cp3"` (1-based resonator indices).
fn cp_phrase(indices: &[usize]) -> String {
    let names = indices
        .iter()
        .map(|i| format!("Cp{i}"))
        .collect::<Vec<_>>()
        .join(", ");
    if indices.len() == 1 {
        format!("tank capacitor {names}")
    } else {
        format!("tank capacitors {names}")
    }
}

/// Errors raised by [`crate::match_component`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    /// The requested series name is not one of E12, E24, E96.
    #[error("unknown series '{0}'; use E12, E24, or E96")]
    UnknownSeries(String),

    /// Standard-value matching is only defined for positive targets.
    #[error("target value must be positive, got {0}")]
    InvalidTarget(f64),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
