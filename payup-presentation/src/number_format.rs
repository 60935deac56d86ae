use rust_decimal::{Decimal, RoundingStrategy, prelude::FromPrimitive};

const MAX_FRACTION_DIGITS: u32 = 3;

/// Whole amount with `,` every three digits.
pub fn format_amount(amount: u64) -> String {
    group_thousands(&amount.to_string())
}

/// Share rounded to at most three fraction digits, trailing zeros dropped.
pub fn format_share(share: f64) -> String {
    let Some(decimal) = Decimal::from_f64(share) else {
        return format!("{share}");
    };
    let rounded = decimal
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();

    let text = rounded.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    match unsigned.split_once('.') {
        Some((whole, fraction)) => format!("{sign}{}.{fraction}", group_thousands(whole)),
        None => format!("{sign}{}", group_thousands(unsigned)),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
