//! Character attributes.

pub mod attributes;

pub use attributes::*;
