//! Redaction workflow state machine
//!
//! Tracks the single active input payload (typed text or an uploaded file),
//! the column/entity sets derived from it, and the user's selection. The
//! machine is pure: the caller performs the actual detection and redaction
//! calls and reports their outcome back via `entities_detected`,
//! `detection_failed`, `submitted`, and `submit_failed`.

use crate::csv;
use crate::error::{CoreError, Result};
use crate::input::{FileInput, FileKind, InputPayload, MAX_TEXT_CHARS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowState {
    /// No input yet.
    #[default]
    Idle,
    /// A PDF/DOCX is selected but entity detection has not succeeded.
    FileSelected,
    /// Entity detection is in flight.
    Detecting,
    /// Input is complete and can be submitted.
    Ready,
    /// A redaction request is in flight.
    Submitting,
    /// The last submit produced a result.
    Done,
    /// The last submit failed; input is kept so the user can retry.
    Failed,
}

/// One outbound redaction request, derived from the current payload.
/// Empty selections have already been widened to the full set.
#[derive(Debug)]
pub enum SubmitRequest<'a> {
    /// `POST /api/redact` with a JSON `{text}` body.
    Text { text: &'a str },
    /// `POST /api/redact/csv` with multipart `file` + `selected_columns`.
    Csv {
        file: &'a FileInput,
        columns: Vec<String>,
    },
    /// `POST /api/pdf` or `/api/docx` (by kind) with multipart `file` +
    /// `selected_entities`.
    Document {
        file: &'a FileInput,
        entities: Vec<String>,
    },
}

#[derive(Debug, Default)]
pub struct Workflow {
    state: WorkflowState,
    payload: Option<InputPayload>,
    columns: Vec<String>,
    selected_columns: Vec<String>,
    entities: Vec<String>,
    selected_entities: Vec<String>,
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub fn payload(&self) -> Option<&InputPayload> {
        self.payload.as_ref()
    }

    pub fn text(&self) -> Option<&str> {
        match &self.payload {
            Some(InputPayload::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn file(&self) -> Option<&FileInput> {
        match &self.payload {
            Some(InputPayload::File(file)) => Some(file),
            _ => None,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn entities(&self) -> &[String] {
        &self.entities
    }

    pub fn selected_columns(&self) -> &[String] {
        &self.selected_columns
    }

    pub fn selected_entities(&self) -> &[String] {
        &self.selected_entities
    }

    /// Replace the payload with typed text. Oversized input is rejected and
    /// the previous payload is left untouched.
    pub fn set_text(&mut self, value: &str) -> Result<()> {
        let length = value.chars().count();
        if length > MAX_TEXT_CHARS {
            return Err(CoreError::TextTooLong {
                length,
                limit: MAX_TEXT_CHARS,
            });
        }

        self.clear_input();
        if !value.trim().is_empty() {
            self.payload = Some(InputPayload::Text(value.to_string()));
            self.state = WorkflowState::Ready;
        }
        Ok(())
    }

    /// Replace the payload with an uploaded file. Any typed text and all
    /// derived state are dropped first, so a rejected file leaves nothing
    /// selected. CSV columns are parsed locally; PDF/DOCX move to
    /// `Detecting` and wait for `entities_detected`.
    pub fn select_file(&mut self, name: &str, data: Vec<u8>) -> Result<()> {
        self.clear_input();

        let file = FileInput::new(name, data)?;
        match file.kind {
            FileKind::Csv => {
                self.columns = csv::header_columns(&file.data);
                self.state = WorkflowState::Ready;
            }
            FileKind::Pdf | FileKind::Docx => {
                self.state = WorkflowState::Detecting;
            }
        }
        self.payload = Some(InputPayload::File(file));
        Ok(())
    }

    /// Drop the payload and everything derived from it.
    pub fn clear_input(&mut self) {
        self.payload = None;
        self.columns.clear();
        self.selected_columns.clear();
        self.entities.clear();
        self.selected_entities.clear();
        self.state = WorkflowState::Idle;
    }

    /// Record a successful detection round. Any previous selection is reset
    /// because the labels belong to the new detection result.
    pub fn entities_detected(&mut self, labels: Vec<String>) {
        self.entities = labels;
        self.selected_entities.clear();
        self.state = WorkflowState::Ready;
    }

    /// Detection failed: keep the file selected so the user can retry
    /// without re-uploading.
    pub fn detection_failed(&mut self) {
        self.entities.clear();
        self.selected_entities.clear();
        self.state = WorkflowState::FileSelected;
    }

    /// Re-enter `Detecting` for the currently selected file.
    pub fn retry_detection(&mut self) -> Result<()> {
        if self.file().is_none() {
            return Err(CoreError::NoFileSelected);
        }
        self.state = WorkflowState::Detecting;
        Ok(())
    }

    /// Toggle one column in or out of the selected subset. The name must be
    /// one of the parsed header columns.
    pub fn toggle_column(&mut self, name: &str) -> Result<()> {
        if !self.columns.iter().any(|c| c == name) {
            return Err(CoreError::UnknownColumn {
                name: name.to_string(),
                available: self.columns.join(", "),
            });
        }
        toggle(&mut self.selected_columns, name);
        Ok(())
    }

    /// Toggle one entity label in or out of the selected subset. The label
    /// must be one of the detected entities.
    pub fn toggle_entity(&mut self, label: &str) -> Result<()> {
        if !self.entities.iter().any(|e| e == label) {
            return Err(CoreError::UnknownEntity {
                label: label.to_string(),
                available: self.entities.join(", "),
            });
        }
        toggle(&mut self.selected_entities, label);
        Ok(())
    }

    /// The columns that will be sent: the selected subset, or every parsed
    /// column when nothing is selected.
    pub fn effective_columns(&self) -> &[String] {
        if self.selected_columns.is_empty() {
            &self.columns
        } else {
            &self.selected_columns
        }
    }

    /// The entity labels that will be sent: the selected subset, or every
    /// detected label when nothing is selected.
    pub fn effective_entities(&self) -> &[String] {
        if self.selected_entities.is_empty() {
            &self.entities
        } else {
            &self.selected_entities
        }
    }

    /// Build the single outbound request for the current payload.
    pub fn submission(&self) -> Result<SubmitRequest<'_>> {
        match &self.payload {
            Some(InputPayload::Text(text)) => Ok(SubmitRequest::Text { text }),
            Some(InputPayload::File(file)) => match file.kind {
                FileKind::Csv => Ok(SubmitRequest::Csv {
                    file,
                    columns: self.effective_columns().to_vec(),
                }),
                FileKind::Pdf | FileKind::Docx => Ok(SubmitRequest::Document {
                    file,
                    entities: self.effective_entities().to_vec(),
                }),
            },
            None => Err(CoreError::NothingToRedact),
        }
    }

    pub fn begin_submit(&mut self) {
        self.state = WorkflowState::Submitting;
    }

    pub fn submitted(&mut self) {
        self.state = WorkflowState::Done;
    }

    pub fn submit_failed(&mut self) {
        self.state = WorkflowState::Failed;
    }
}

/// Add `item` if absent, remove it if present. Insertion order is kept so
/// the request lists items in the order the user picked them.
fn toggle(set: &mut Vec<String>, item: &str) {
    if set.iter().any(|s| s == item) {
        set.retain(|s| s != item);
    } else {
        set.push(item.to_string());
    }
}
