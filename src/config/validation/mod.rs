//! Configuration validation
//!
//! - `trait_def`: the `Validate` trait
//! - `validators`: implementations for every configuration section
//! - `tests`: validator test suite

mod trait_def;
mod validators;

pub use trait_def::Validate;
