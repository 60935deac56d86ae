#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{BalanceSheet, ExpenseEntry, Headcount, Party, SettlementReport, Transfer};
pub use services::SettlementCalculator;
