// Query module for functional-style collection transformations
// Author: Gabriel Demetrios Lafis

//! Generic query primitives over in-memory record slices.
//!
//! Every operation in this module is a pure function: it takes a slice of
//! records (plus closures extracting keys or fields) and returns a derived
//! value. All operations are total over any input, including the empty
//! slice; aggregates that have no meaningful value for zero records return
//! `Option::None` rather than a misleading default.

mod filter;
mod aggregate;
mod rank;
mod join;

pub use filter::*;
pub use aggregate::*;
pub use rank::*;
pub use join::*;
