// Record module for the four demo domains
// Author: Gabriel Demetrios Lafis

//! The four independent record domains and their query surface.
//!
//! Each submodule defines one immutable record type, a set of domain
//! queries implemented on top of [`crate::query`], and the fixed sample
//! data used by the demo driver. The domains share no structure beyond
//! the query primitives they instantiate.

mod student;
mod product;
mod book;
mod employee;

pub use student::*;
pub use product::*;
pub use book::*;
pub use employee::*;
