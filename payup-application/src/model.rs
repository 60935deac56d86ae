use payup_domain::{ExpenseEntry, Headcount};

/// A contribution as typed by the user, before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawExpense<'a> {
    pub name: &'a str,
    pub amount: &'a str,
}

/// Rows read from some input source, with the declared participant count if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpenseSheet<'a> {
    pub people: Option<u32>,
    pub rows: Vec<RawExpense<'a>>,
}

/// A sheet ready for settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedSheet {
    pub headcount: Headcount,
    pub entries: Vec<ExpenseEntry>,
}
