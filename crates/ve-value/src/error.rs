//! Error types for ve-value
//!
//! Propagation itself never fails (it follows IEEE-754 semantics); these
//! errors come from the opt-in checked constructors.

use thiserror::Error;

/// ve-value error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A constructor input was NaN or infinite
    #[error("non-finite {field}: {value}")]
    NonFinite {
        /// Which input was rejected (`value`, `stat_error` or `syst_error`)
        field: &'static str,
        /// The offending input, widened to `f64`
        value: f64,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
