use crate::model::RawExpense;
use payup_domain::ExpenseEntry;
use payup_i18n as i18n;

/// Read the leading whole number of `text`, or 0.
///
/// Accepts a `₩` or `+` prefix and `,` separators; stops at the first other
/// character, so `"12.5"` is 12 and `"3000원"` is 3000. Empty, negative,
/// non-numeric and overflowing input all yield 0.
pub fn coerce_amount(text: &str) -> u64 {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_prefix('₩').unwrap_or(trimmed).trim_start();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let digits: String = trimmed
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ',')
        .filter(char::is_ascii_digit)
        .collect();

    digits.parse().unwrap_or(0)
}

/// Trimmed name, or the placeholder for slot `index` (0-based) when blank.
pub fn normalize_name(index: usize, name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        i18n::unnamed_participant(index + 1)
    } else {
        trimmed.to_string()
    }
}

pub fn normalize_expenses<'a, I>(rows: I) -> Vec<ExpenseEntry>
where
    I: IntoIterator<Item = RawExpense<'a>>,
{
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| {
            ExpenseEntry::new(normalize_name(index, row.name), coerce_amount(row.amount))
        })
        .collect()
}
