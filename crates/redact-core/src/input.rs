use crate::error::{CoreError, Result};

/// Maximum accepted length for pasted text, in characters.
pub const MAX_TEXT_CHARS: usize = 5000;

/// Maximum accepted upload size: 5 MB.
pub const MAX_FILE_BYTES: usize = 5 * 1024 * 1024;

/// The file formats the redaction service accepts, judged by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Csv,
    Pdf,
    Docx,
}

impl FileKind {
    /// Determine the kind from a file name's extension (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(FileKind::Csv),
            "pdf" => Some(FileKind::Pdf),
            "docx" => Some(FileKind::Docx),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            FileKind::Csv => "text/csv",
            FileKind::Pdf => "application/pdf",
            FileKind::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

/// A validated upload: name, kind, and raw bytes.
#[derive(Debug, Clone)]
pub struct FileInput {
    pub name: String,
    pub kind: FileKind,
    pub data: Vec<u8>,
}

impl FileInput {
    /// Validate type and size; rejected files are never stored.
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Result<Self> {
        let name = name.into();
        let kind =
            FileKind::from_name(&name).ok_or_else(|| CoreError::UnsupportedFileType(name.clone()))?;

        if data.len() > MAX_FILE_BYTES {
            return Err(CoreError::FileTooLarge {
                size: data.len(),
                limit: MAX_FILE_BYTES,
            });
        }

        Ok(Self { name, kind, data })
    }
}

/// What the user is submitting: typed text or an uploaded file.
/// Exactly one variant is active at a time.
#[derive(Debug, Clone)]
pub enum InputPayload {
    Text(String),
    File(FileInput),
}
