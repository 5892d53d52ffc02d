//! Curve bootstrap.
//!
//! The bootstrap extends a piecewise-flat forward curve one segment at a
//! time. Each instrument contributes one knot at its last cash flow, and the
//! flat forward on the new segment is the one that makes the instrument's
//! present value equal its market price.
//!
//! - [`next_segment`] solves a single step against an existing curve and
//!   leaves both the curve and the cash flows untouched.
//! - [`Bootstrapper`] chains the step over a list of instruments and audits
//!   the result with a [`RepricingReport`](crate::repricing::RepricingReport).
//!
//! # Example
//!
//! ```rust
//! use stepcurve_curves::prelude::*;
//!
//! let t1 = [1.0];
//! let c1 = [1.0];
//! let t2 = [0.5, 1.0, 1.5, 2.0];
//! let c2 = [0.02, 0.02, 0.02, 1.02];
//!
//! let outcome = Bootstrapper::new()
//!     .add_instrument(Instrument::new("1Y zero", &t1, &c1, 0.97))
//!     .add_instrument(Instrument::new("2Y 4%", &t2, &c2, 1.0))
//!     .bootstrap()
//!     .unwrap();
//!
//! let curve = outcome.curve();
//! assert!((curve.discount(1.0, 0.0) - 0.97).abs() < 1e-14);
//! ```

mod sequential;
mod step;

pub use sequential::{BootstrapOutcome, Bootstrapper, Instrument};
pub use step::{next_segment, Segment};
