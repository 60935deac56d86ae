use indexmap::IndexMap;
use std::num::NonZeroU32;

/// One participant slot: who paid and how much, in integer currency units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseEntry {
    pub name: String,
    pub amount: u64,
}

impl ExpenseEntry {
    pub fn new(name: impl Into<String>, amount: u64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// Number of people the total is split across. Never zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Headcount(NonZeroU32);

impl Headcount {
    pub const ONE: Self = Self(NonZeroU32::MIN);

    pub fn new(people: u32) -> Option<Self> {
        NonZeroU32::new(people).map(Self)
    }

    /// Floors the count at one person.
    pub fn clamped(people: u32) -> Self {
        Self::new(people).unwrap_or(Self::ONE)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

/// A creditor or debtor with the magnitude still to be settled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Party<'a> {
    pub name: &'a str,
    pub remaining: f64,
}

/// Net position per distinct name, kept in order of first appearance.
///
/// Positive balances overpaid (creditors), negative ones underpaid (debtors).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BalanceSheet<'a> {
    balances: IndexMap<&'a str, f64>,
}

impl<'a> BalanceSheet<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &'a str, delta: f64) {
        *self.balances.entry(name).or_insert(0.0) += delta;
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.balances.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, f64)> + '_ {
        self.balances.iter().map(|(name, balance)| (*name, *balance))
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    /// Members with a strictly positive balance.
    pub fn creditors(&self) -> Vec<Party<'a>> {
        self.iter()
            .filter(|(_, balance)| *balance > 0.0)
            .map(|(name, balance)| Party {
                name,
                remaining: balance,
            })
            .collect()
    }

    /// Members with a strictly negative balance, stored as magnitudes.
    pub fn debtors(&self) -> Vec<Party<'a>> {
        self.iter()
            .filter(|(_, balance)| *balance < 0.0)
            .map(|(name, balance)| Party {
                name,
                remaining: -balance,
            })
            .collect()
    }

    pub fn positive_total(&self) -> f64 {
        self.iter()
            .map(|(_, balance)| balance)
            .filter(|balance| *balance > 0.0)
            .sum()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Transfer<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub amount: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SettlementReport<'a> {
    pub total_amount: u64,
    pub per_person_share: f64,
    pub balances: BalanceSheet<'a>,
    pub transfers: Vec<Transfer<'a>>,
}

impl SettlementReport<'_> {
    /// Sum of the rounded transfer amounts.
    pub fn transferred_total(&self) -> u64 {
        self.transfers
            .iter()
            .fold(0u64, |acc, transfer| acc.saturating_add(transfer.amount))
    }

    pub fn is_settled(&self) -> bool {
        self.transfers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero(0, 1)]
    #[case::one(1, 1)]
    #[case::many(7, 7)]
    fn headcount_clamps_to_one(#[case] people: u32, #[case] expected: u32) {
        assert_eq!(Headcount::clamped(people).get(), expected);
    }

    #[test]
    fn headcount_rejects_zero() {
        assert_eq!(Headcount::new(0), None);
    }

    #[test]
    fn balance_sheet_keeps_first_appearance_order() {
        let mut sheet = BalanceSheet::new();
        sheet.add("B", -10.0);
        sheet.add("A", 5.0);
        sheet.add("B", 15.0);

        let names: Vec<&str> = sheet.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(sheet.get("B"), Some(5.0));
    }

    #[test]
    fn balance_sheet_partitions_by_strict_sign() {
        let mut sheet = BalanceSheet::new();
        sheet.add("A", 30.0);
        sheet.add("B", 0.0);
        sheet.add("C", -30.0);

        assert_eq!(
            sheet.creditors(),
            vec![Party {
                name: "A",
                remaining: 30.0
            }]
        );
        assert_eq!(
            sheet.debtors(),
            vec![Party {
                name: "C",
                remaining: 30.0
            }]
        );
        assert_eq!(sheet.positive_total(), 30.0);
    }

    #[test]
    fn balance_sheet_has_no_tolerance_for_residues() {
        let mut sheet = BalanceSheet::new();
        sheet.add("A", 1e-12);
        sheet.add("B", -1e-12);

        assert_eq!(
            sheet.creditors(),
            vec![Party {
                name: "A",
                remaining: 1e-12
            }]
        );
        assert_eq!(
            sheet.debtors(),
            vec![Party {
                name: "B",
                remaining: 1e-12
            }]
        );
    }
}
