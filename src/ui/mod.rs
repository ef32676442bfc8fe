//! Everything the user reads: menu, questions, feedback, and results.

pub mod menu;
pub mod quiz;
pub mod result;
