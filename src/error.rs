//! Error types for the predictor core.

use thiserror::Error;

/// Result type used throughout the predictor core.
pub type Result<T> = std::result::Result<T, GagError>;

/// Failures raised by the predictor core.
///
/// Every variant is a contract violation: nothing here is transient, and
/// nothing is retried.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GagError {
    /// The predictor was configured with unusable widths.
    #[error("invalid configuration (history={history_bits}b, counter={counter_bits}b): {reason}")]
    Configuration {
        history_bits: usize,
        counter_bits: usize,
        reason: &'static str,
    },

    /// A register or table received a vector of the wrong width.
    #[error("{what}: expected {expected} bits, found {found}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
}

impl GagError {
    pub(crate) fn check_len(what: &'static str, expected: usize, found: usize)
        -> Result<()>
    {
        if expected == found {
            Ok(())
        } else {
            Err(Self::LengthMismatch { what, expected, found })
        }
    }
}
