//! Quest log: records, objective tracking, and ordering.

pub mod data;
pub mod logic;
pub mod types;

pub use data::{load_quests_json, starter_quests};
pub use logic::*;
pub use types::*;
