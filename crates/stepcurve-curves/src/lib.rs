//! # Stepcurve Curves
//!
//! Piecewise-flat forward curves and their bootstrap for the Stepcurve engine.
//!
//! This crate provides:
//!
//! - **Curve**: [`PwFlat`], a right-continuous step function of forward rates
//!   streamed from knot enumerators, with integration, discounting, spot
//!   rates and present values
//! - **Bootstrap**: [`next_segment`](bootstrap::next_segment) solves for the
//!   flat forward that reprices one new instrument; [`Bootstrapper`] chains it
//!   over a list of instruments
//! - **Repricing**: an audit report of every input instrument against the
//!   bootstrapped curve
//!
//! ## Quick Start
//!
//! ```rust
//! use stepcurve_curves::prelude::*;
//!
//! let times = [1.0, 2.0, 3.0];
//! let forwards = [0.03, 0.04, 0.05];
//! let curve = PwFlat::from_slices(&times, &forwards).unwrap();
//!
//! // f(t) = 0.04 on (1, 2]
//! assert_eq!(curve.value(1.5), (2.0, 0.04));
//!
//! // discount factor to 2Y
//! let df = curve.discount(2.0, 0.0);
//! assert!((df - (-0.07f64).exp()).abs() < 1e-15);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod bootstrap;
pub mod config;
pub mod curve;
pub mod error;
pub mod repricing;
pub mod validation;

/// Prelude module for convenient imports.
///
/// Curve queries are reached through [`PwFlat`] methods; the free functions
/// over raw knot enumerators stay in [`curve`].
pub mod prelude {
    pub use crate::bootstrap::{next_segment, BootstrapOutcome, Bootstrapper, Instrument, Segment};
    pub use crate::config::BootstrapConfig;
    pub use crate::curve::{Knots, PwFlat};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::repricing::{RepricingCheck, RepricingReport};
    pub use crate::validation::validate_knots;
    pub use stepcurve_core::prelude::{
        back, equal, length, paired, CoreError, CoreResult, Enumerator, Iter, Pair, Sequence, View,
    };
}

pub use bootstrap::{Bootstrapper, Instrument};
pub use config::BootstrapConfig;
pub use curve::PwFlat;
pub use error::{CurveError, CurveResult};
