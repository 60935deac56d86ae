use payup_domain::{ExpenseEntry, Headcount, SettlementCalculator, SettlementReport};
use proptest::prelude::*;
use std::collections::HashMap;

const NAMES: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

fn build_entries(name_indexes: &[usize], amounts: &[u64]) -> Vec<ExpenseEntry> {
    name_indexes
        .iter()
        .zip(amounts)
        .map(|(&idx, &amount)| ExpenseEntry::new(NAMES[idx % NAMES.len()], amount))
        .collect()
}

fn headcount_for(entries: &[ExpenseEntry]) -> Headcount {
    Headcount::clamped(entries.len() as u32)
}

fn net_flows<'a>(report: &SettlementReport<'a>) -> HashMap<&'a str, (f64, usize)> {
    let mut flows: HashMap<&str, (f64, usize)> = HashMap::new();
    for transfer in &report.transfers {
        let from = flows.entry(transfer.from).or_insert((0.0, 0));
        from.0 -= transfer.amount as f64;
        from.1 += 1;
        let to = flows.entry(transfer.to).or_insert((0.0, 0));
        to.0 += transfer.amount as f64;
        to.1 += 1;
    }
    flows
}

proptest! {
    #[test]
    fn transfers_never_pay_oneself(
        name_indexes in prop::collection::vec(0usize..6, 1..=12),
        amounts in prop::collection::vec(0u64..=100_000, 12),
        people in 1u32..=12,
    ) {
        let entries = build_entries(&name_indexes, &amounts);
        let report = SettlementCalculator.calculate(Headcount::clamped(people), &entries);

        for transfer in &report.transfers {
            prop_assert_ne!(transfer.from, transfer.to);
        }
    }

    #[test]
    fn transfer_count_is_bounded_by_parties(
        name_indexes in prop::collection::vec(0usize..6, 1..=12),
        amounts in prop::collection::vec(0u64..=100_000, 12),
        people in 1u32..=12,
    ) {
        let entries = build_entries(&name_indexes, &amounts);
        let report = SettlementCalculator.calculate(Headcount::clamped(people), &entries);

        let debtors = report.balances.debtors().len();
        let creditors = report.balances.creditors().len();
        if debtors == 0 || creditors == 0 {
            prop_assert!(report.transfers.is_empty());
        } else {
            prop_assert!(report.transfers.len() < debtors + creditors);
        }
    }

    #[test]
    fn transferred_total_tracks_positive_balances(
        name_indexes in prop::collection::vec(0usize..6, 1..=12),
        amounts in prop::collection::vec(0u64..=100_000, 12),
    ) {
        let entries = build_entries(&name_indexes, &amounts);
        let report = SettlementCalculator.calculate(headcount_for(&entries), &entries);

        let tolerance = report.transfers.len() as f64 + 1e-6;
        let drift = (report.transferred_total() as f64 - report.balances.positive_total()).abs();
        prop_assert!(drift <= tolerance, "drift {} exceeds {}", drift, tolerance);
    }

    #[test]
    fn transfers_zero_every_balance(
        name_indexes in prop::collection::vec(0usize..6, 1..=12),
        amounts in prop::collection::vec(0u64..=100_000, 12),
    ) {
        let entries = build_entries(&name_indexes, &amounts);
        let report = SettlementCalculator.calculate(headcount_for(&entries), &entries);
        let flows = net_flows(&report);

        for (name, balance) in report.balances.iter() {
            let (received, transfer_count) = flows.get(name).copied().unwrap_or((0.0, 0));
            // A creditor receives its balance, a debtor sends its balance.
            let residual = (balance - received).abs();
            prop_assert!(
                residual <= transfer_count as f64 + 1e-6,
                "{} left with {}",
                name,
                residual
            );
        }
    }

    #[test]
    fn equal_contributions_need_no_transfers(
        member_count in 1usize..=6,
        amount in 0u64..=1_000_000,
    ) {
        let entries: Vec<ExpenseEntry> = NAMES[..member_count]
            .iter()
            .map(|&name| ExpenseEntry::new(name, amount))
            .collect();

        let report = SettlementCalculator.calculate(headcount_for(&entries), &entries);

        prop_assert!(report.transfers.is_empty());
    }

    #[test]
    fn calculation_is_deterministic(
        name_indexes in prop::collection::vec(0usize..6, 1..=12),
        amounts in prop::collection::vec(0u64..=100_000, 12),
        people in 1u32..=12,
    ) {
        let entries = build_entries(&name_indexes, &amounts);
        let headcount = Headcount::clamped(people);

        let first = SettlementCalculator.calculate(headcount, &entries);
        let second = SettlementCalculator.calculate(headcount, &entries);

        prop_assert_eq!(first, second);
    }
}
