//! # ve-value
//!
//! Values that carry a statistical and a systematic uncertainty next to
//! their central value, with first-order (linear) error propagation.
//!
//! Provides:
//! - [`ValueError`]: value + squared statistical error + squared systematic error
//! - Arithmetic operators against other values and bare scalars
//! - Transcendental functions ([`math`]) with hand-encoded derivatives
//! - [`Real`] trait for writing the formulas once over `f32` and `f64`
//!
//! Errors of independent inputs add in quadrature; no correlation is tracked.
//!
//! # Example
//! ```
//! use ve_value::ValueError;
//!
//! let a = ValueError::new(2.0, 0.1, 0.0);
//! let b = ValueError::new(3.0, 0.5, 0.0);
//! let c = a + b;
//! assert_eq!(c.value(), 5.0);
//! assert!((c.stat_error() - 0.26_f64.sqrt()).abs() < 1e-15);
//! assert_eq!(format!("{:.2}", a * 3.0), "[6.00+/-0.30+/-0.00]");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
mod fmt;
pub mod math;
mod ops;
pub mod real;
pub mod value;

pub use error::{Error, Result};
pub use real::Real;
pub use value::{ValueError, ValueErrorF64};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
