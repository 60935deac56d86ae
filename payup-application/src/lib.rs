#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod form;
pub mod model;
pub mod normalizer;
pub mod ports;
pub mod settlement_processor;

pub use error::{FormError, SheetError, SinkError};
pub use form::{ExpenseForm, ExpenseSlot, MAX_PARTICIPANTS};
pub use model::{ExpenseSheet, PreparedSheet, RawExpense};
pub use normalizer::{coerce_amount, normalize_expenses, normalize_name};
pub use ports::{ReportSink, SheetReader};
pub use settlement_processor::SettlementProcessor;
