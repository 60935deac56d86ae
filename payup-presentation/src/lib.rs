#![warn(clippy::uninlined_format_args)]

pub mod number_format;
pub mod report_presenter;
pub mod text_table;

pub use number_format::{format_amount, format_share};
pub use report_presenter::ReportPresenter;
pub use text_table::{Alignment, TextTableBuilder};
