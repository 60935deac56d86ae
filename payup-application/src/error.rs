use std::{io, path::PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SheetError {
    #[error("Syntax error at line {line}: {detail}")]
    SyntaxError { line: usize, detail: String },
    #[error("Participant count declared twice at line {line}")]
    DuplicateHeader { line: usize },
    #[error("Participant count must come before the first row (line {line})")]
    HeaderAfterRows { line: usize },
    #[error("Invalid participant count at line {line}")]
    InvalidPeopleCount { line: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("No participant slot {index} (form has {len})")]
    SlotOutOfRange { index: usize, len: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("Failed to write settlement report: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to export settlement report to {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
