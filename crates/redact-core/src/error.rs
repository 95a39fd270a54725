use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("text is {length} characters, the limit is {limit}")]
    TextTooLong { length: usize, limit: usize },

    #[error("unsupported file type: {0} (only csv, pdf, and docx are allowed)")]
    UnsupportedFileType(String),

    #[error("file is {size} bytes, the limit is {limit}")]
    FileTooLarge { size: usize, limit: usize },

    #[error("unknown column '{name}' (available: {available})")]
    UnknownColumn { name: String, available: String },

    #[error("unknown entity '{label}' (detected: {available})")]
    UnknownEntity { label: String, available: String },

    #[error("no file selected")]
    NoFileSelected,

    #[error("enter some text or select a file to redact")]
    NothingToRedact,
}

pub type Result<T> = std::result::Result<T, CoreError>;
