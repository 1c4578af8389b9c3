//! Item system: types, generation, effects, and sorting.

pub mod effects;
pub mod generation;
pub mod names;
pub mod sorting;
pub mod types;

pub use effects::*;
pub use generation::*;
pub use sorting::*;
pub use types::*;
