//! Aggregate roots.

pub mod investigator;

pub use investigator::{Investigator, DEFAULT_AGE};
