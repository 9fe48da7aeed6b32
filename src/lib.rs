//! Boolean expression minimizer.
//!
//! Parses a propositional-logic expression over named variables and the
//! operators `!`, `&`, `|`, `^`, `==`, `=>` plus the constants `0`/`1`, and
//! reduces it to an equivalent sum-of-products form with the fewest product
//! terms and, subject to that, the fewest literals, via Quine-McCluskey
//! prime-implicant discovery and a Petrick's-method tiebreaker.

pub mod error;
pub mod qm;

pub use error::ParseError;
pub use qm::{minimize, QmResult};
