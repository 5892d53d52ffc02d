//! # Stepcurve Core
//!
//! Lazy, pull-based enumerators for the Stepcurve forward curve engine.
//!
//! This crate provides:
//!
//! - **Enumerator**: The [`Enumerator`] trait (`has_current` / `current` / `advance`)
//! - **Leaves**: Arithmetic progressions ([`Sequence`]) and borrowed buffer views ([`View`])
//! - **Combinators**: `take`, `drop`, `pair`, `when`, `until`, `apply`, `counted`
//! - **Helpers**: `length`, `back`, `equal`, `upto`, `all`, `any`
//!
//! ## Design Philosophy
//!
//! - **Value Semantics**: Enumerators are cheap cursors; cloning duplicates the
//!   cursor, never the underlying storage
//! - **Liveness Over Sentinels**: Exhaustion is tested with `has_current()`
//!   rather than comparison against an end marker
//! - **Idempotent Exhaustion**: Advancing an exhausted enumerator is a no-op
//!
//! ## Example
//!
//! ```rust
//! use stepcurve_core::prelude::*;
//!
//! let times = [1.0, 2.0, 3.0];
//! let rates = [0.01, 0.02, 0.03];
//!
//! let mut knots = pair(View::new(&times), View::new(&rates));
//! assert_eq!(knots.current(), (1.0, 0.01));
//! knots.advance();
//! assert_eq!(knots.current(), (2.0, 0.02));
//! assert_eq!(length(&knots), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::uninlined_format_args)]

pub mod combinators;
pub mod enumerator;
pub mod error;
pub mod sequence;
pub mod view;

/// Prelude module for convenient imports.
///
/// The `drop` combinator is left out so that a glob import keeps `std`'s
/// `drop`; reach it as [`combinators::drop`] or [`Enumerator::skip`].
pub mod prelude {
    pub use crate::combinators::{
        apply, counted, pair, take, until, when, Apply, Counted, Pair, Take, Until, When,
    };
    pub use crate::enumerator::{
        all, any, back, equal, length, length_from, upto, Enumerator, Iter,
    };
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::sequence::{constant, Sequence};
    pub use crate::view::{paired, View};
}

pub use enumerator::Enumerator;
pub use error::{CoreError, CoreResult};
pub use sequence::Sequence;
pub use view::View;
