use payup_application::{ReportSink, SinkError};
use payup_domain::SettlementReport;
use payup_presentation::ReportPresenter;
use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    sync::Mutex,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    /// Title, totals, balance and transfer tables.
    Full,
    /// Only the lines meant for pasting elsewhere.
    Clipboard,
}

impl ReportFormat {
    fn render(self, report: &SettlementReport<'_>) -> String {
        match self {
            ReportFormat::Full => ReportPresenter::render(report),
            ReportFormat::Clipboard => {
                let mut text = ReportPresenter::clipboard_text(report);
                text.push('\n');
                text
            }
        }
    }
}

/// Writes the rendered report to a terminal or any other writer.
pub struct ConsoleSink<W> {
    out: Mutex<W>,
    format: ReportFormat,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout(format: ReportFormat) -> Self {
        Self::new(io::stdout(), format)
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(out: W, format: ReportFormat) -> Self {
        Self {
            out: Mutex::new(out),
            format,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<W: Write + Send> ReportSink for ConsoleSink<W> {
    fn deliver(&self, report: &SettlementReport<'_>) -> Result<(), SinkError> {
        let rendered = self.format.render(report);
        let mut out = self
            .out
            .lock()
            .map_err(|_| io::Error::other("console writer lock poisoned"))?;
        out.write_all(rendered.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// Saves the clipboard text of each report to a file, replacing its contents.
pub struct ExportSink {
    path: PathBuf,
}

impl ExportSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSink for ExportSink {
    fn deliver(&self, report: &SettlementReport<'_>) -> Result<(), SinkError> {
        let text = ReportFormat::Clipboard.render(report);
        fs::write(&self.path, text).map_err(|source| SinkError::Export {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!(path = %self.path.display(), "Settlement exported");
        Ok(())
    }
}
