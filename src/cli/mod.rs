//! Terminal presentation of the analytics core.

pub mod calculators;
pub mod funds;
pub mod input;
pub mod portfolio;
pub mod setup;
pub mod transactions;
pub mod ui;
