use crate::{
    error::{SheetError, SinkError},
    model::PreparedSheet,
    normalizer::normalize_expenses,
    ports::{ReportSink, SheetReader},
};
use payup_domain::{ExpenseEntry, Headcount, SettlementCalculator, SettlementReport};

#[derive(Clone, Copy)]
pub struct SettlementProcessor<'a> {
    reader: &'a dyn SheetReader,
    sink: &'a dyn ReportSink,
}

impl<'a> SettlementProcessor<'a> {
    pub fn new(reader: &'a dyn SheetReader, sink: &'a dyn ReportSink) -> Self {
        Self { reader, sink }
    }

    /// Read and normalize a sheet. Without a declared count, every row is a participant.
    pub fn prepare_sheet(&self, content: &str) -> Result<PreparedSheet, SheetError> {
        let sheet = self.reader.read(content)?;
        let people = sheet
            .people
            .unwrap_or_else(|| u32::try_from(sheet.rows.len()).unwrap_or(u32::MAX));
        let headcount = Headcount::clamped(people);
        if sheet.people == Some(0) {
            tracing::warn!("Participant count of 0 clamped to 1");
        }

        let entries = normalize_expenses(sheet.rows);
        tracing::debug!(
            headcount = headcount.get(),
            row_count = entries.len(),
            declared = sheet.people.is_some(),
            "Sheet prepared"
        );

        Ok(PreparedSheet { headcount, entries })
    }

    /// Compute the settlement and hand it to the sink.
    pub fn settle<'b>(
        &self,
        headcount: Headcount,
        entries: &'b [ExpenseEntry],
    ) -> Result<SettlementReport<'b>, SinkError> {
        let report = SettlementCalculator.calculate(headcount, entries);

        let drift = report.transferred_total() as f64 - report.balances.positive_total();
        if drift.abs() >= 1.0 {
            tracing::info!(
                transferred_total = report.transferred_total(),
                positive_total = report.balances.positive_total(),
                transfer_count = report.transfers.len(),
                "Rounded transfers differ from outstanding balances"
            );
        }

        self.sink.deliver(&report)?;
        Ok(report)
    }
}
