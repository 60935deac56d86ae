use crate::{
    error::{SheetError, SinkError},
    model::ExpenseSheet,
};
use payup_domain::SettlementReport;

pub trait SheetReader: Send + Sync {
    fn read<'a>(&self, content: &'a str) -> Result<ExpenseSheet<'a>, SheetError>;
}

/// Receives every computed report: a screen, a clipboard buffer, an export file.
pub trait ReportSink: Send + Sync {
    fn deliver(&self, report: &SettlementReport<'_>) -> Result<(), SinkError>;
}

impl ReportSink for Vec<Box<dyn ReportSink>> {
    fn deliver(&self, report: &SettlementReport<'_>) -> Result<(), SinkError> {
        self.iter().try_for_each(|sink| sink.deliver(report))
    }
}
