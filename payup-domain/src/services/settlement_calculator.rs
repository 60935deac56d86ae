use crate::model::{BalanceSheet, ExpenseEntry, Headcount, SettlementReport, Transfer};

/// Settlement calculation service
pub struct SettlementCalculator;

impl SettlementCalculator {
    /// Split the total evenly across `headcount` and match debtors to creditors
    ///
    /// Entries sharing a name settle as one participant. Creditors and debtors are
    /// matched greedily in order of first appearance; each transfer is rounded to the
    /// nearest unit on its own, so the rounded sum may drift from the exact balances
    /// by at most one unit per transfer.
    ///
    /// # Arguments
    /// * `headcount` - Number of people sharing the total
    /// * `expenses` - Normalized entries (non-empty names)
    ///
    /// # Returns
    /// Total, per-person share, per-name balances and the ordered transfer list
    pub fn calculate<'a>(
        &self,
        headcount: Headcount,
        expenses: &'a [ExpenseEntry],
    ) -> SettlementReport<'a> {
        let (total_amount, per_person_share, balances) = self.balances(headcount, expenses);

        // Classification is by strict sign; a residue like -1e-12 still counts as a debt.
        let mut debtors = balances.debtors();
        let mut creditors = balances.creditors();
        let mut transfers = Vec::with_capacity(debtors.len() + creditors.len());

        let (mut i, mut j) = (0, 0);
        while i < debtors.len() && j < creditors.len() {
            let debtor = &mut debtors[i];
            let creditor = &mut creditors[j];
            let amount = debtor.remaining.min(creditor.remaining);

            transfers.push(Transfer {
                from: debtor.name,
                to: creditor.name,
                amount: amount.round() as u64,
            });

            debtor.remaining -= amount;
            creditor.remaining -= amount;

            if debtor.remaining == 0.0 {
                i += 1;
            }
            if creditor.remaining == 0.0 {
                j += 1;
            }
        }

        tracing::debug!(
            headcount = headcount.get(),
            entry_count = expenses.len(),
            member_count = balances.len(),
            debtor_count = debtors.len(),
            creditor_count = creditors.len(),
            transfer_count = transfers.len(),
            total_amount,
            per_person_share,
            "Settlement calculated"
        );

        SettlementReport {
            total_amount,
            per_person_share,
            balances,
            transfers,
        }
    }

    /// Total, unrounded per-person share and net balance per name
    pub fn balances<'a>(
        &self,
        headcount: Headcount,
        expenses: &'a [ExpenseEntry],
    ) -> (u64, f64, BalanceSheet<'a>) {
        let total_amount = expenses
            .iter()
            .fold(0u64, |acc, entry| acc.saturating_add(entry.amount));
        let per_person_share = total_amount as f64 / f64::from(headcount.get());

        let mut balances = BalanceSheet::new();
        for entry in expenses {
            balances.add(&entry.name, entry.amount as f64 - per_person_share);
        }

        (total_amount, per_person_share, balances)
    }
}
