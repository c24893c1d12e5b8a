//! Solvers for the 2025 event

pub mod day_1;
pub mod day_2;
pub mod day_3;
pub mod day_4;
pub mod day_5;
pub mod day_8;
pub mod day_11;
