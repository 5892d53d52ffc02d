//! # Stepcurve Math
//!
//! Numerical utilities for the Stepcurve forward curve engine.
//!
//! This crate provides:
//!
//! - **Tolerances**: Relative/absolute closeness tests ([`nearly_equal`])
//! - **Solvers**: A damped secant root finder that is itself an
//!   [`Enumerator`](stepcurve_core::Enumerator) over its iterates
//!
//! ## Design Philosophy
//!
//! - **Derivative-Free**: Pricing functions are treated as black boxes
//! - **Bounded**: Every solve has an iteration cap and a typed failure
//! - **Guarded**: Degenerate slopes are caught before dividing by them
//!
//! ## Logging
//!
//! Solver progress is emitted through the [`log`] facade: every step at
//! `trace`, convergence at `debug`, and failures at `warn`. The curve crate
//! logs through `tracing`; an application collecting both with a `tracing`
//! subscriber installs the `tracing-log` bridge (`LogTracer::init()`) so the
//! solver's records reach the same subscriber.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{
        nearly_equal, secant, Secant, SolverConfig, SolverResult, DEFAULT_ABSOLUTE,
        DEFAULT_MAX_ITERATIONS, DEFAULT_RELATIVE,
    };
}

pub use error::{MathError, MathResult};
