//! Core domain logic for redact
//!
//! This crate contains:
//! - Input payload model and client-side limits
//! - Redaction workflow state machine
//! - Credential form validation
//! - CSV header parsing and output-name derivation
//!
//! Everything here is pure and synchronous; network and filesystem work
//! lives in `redact-client` and the CLI.

pub mod csv;
pub mod error;
pub mod forms;
pub mod input;
pub mod output;
pub mod workflow;

pub use error::{CoreError, Result};
pub use input::{FileInput, FileKind, InputPayload, MAX_FILE_BYTES, MAX_TEXT_CHARS};
pub use workflow::{SubmitRequest, Workflow, WorkflowState};
