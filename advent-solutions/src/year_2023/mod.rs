//! Solvers for the 2023 event

pub mod day_1;
pub mod day_4;
pub mod day_6;
pub mod day_8;
pub mod day_9;
pub mod day_10;
pub mod day_14;
pub mod day_17;
pub mod day_22;
pub mod day_23;
pub mod day_25;
