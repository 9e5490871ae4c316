//! Style fragments and declarations.
//!
//! - [`StyleFragment`]: ordered declarations produced by resolvers
//! - [`Declaration`]: a single `property: value` pair
//!
//! Fragments render to declaration text with `Display` and parse back with
//! [`StyleFragment::parse`], which is the text form the styling engine
//! consumes.

mod fragment;
mod parse;

pub use fragment::{Declaration, StyleFragment};

pub(crate) use fragment::px;
