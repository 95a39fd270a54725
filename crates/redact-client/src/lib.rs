//! HTTP client for the remote redaction service
//!
//! This crate contains:
//! - `ApiClient`: one call per operation (register, login, detect, redact)
//! - Wire types for the service's JSON bodies
//! - `SessionStore`: the bearer token persisted on disk
//!
//! All redaction and entity detection runs server-side; the client only
//! ships input and collects results. Every call issues exactly one request,
//! with no retry.

pub mod error;
pub mod models;
pub mod session;

pub use error::{ClientError, Result};
pub use models::{DetectResponse, Entity, RedactTextResponse, TokenResponse};
pub use session::{Session, SessionStore};

use std::time::Duration;

use redact_core::{FileInput, FileKind};
use reqwest::multipart::{Form, Part};
use serde_json::json;

use crate::models::ApiErrorBody;

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("redact/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `POST /api/auth/register`. A successful registration returns no
    /// token; the caller logs in afterwards.
    pub async fn register(&self, email: &str, password: &str) -> Result<()> {
        let response = self
            .http
            .post(self.url("/api/auth/register"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        check(response, "signup failed").await?;
        Ok(())
    }

    /// `POST /api/auth/login`; returns the session to persist.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let response = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        let body: TokenResponse = check(response, "login failed").await?.json().await?;
        Ok(Session {
            token: body.access_token,
        })
    }

    /// `POST /api/detect/entities`: upload a PDF/DOCX and get back the
    /// entity-type labels the service found in it.
    pub async fn detect_entities(
        &self,
        session: &Session,
        file: &FileInput,
    ) -> Result<Vec<String>> {
        tracing::debug!(file = %file.name, "detecting entities");

        let form = Form::new().part("file", file_part(file)?);
        let response = self
            .http
            .post(self.url("/api/detect/entities"))
            .bearer_auth(&session.token)
            .multipart(form)
            .send()
            .await?;

        let body: DetectResponse = check(response, "entity detection failed")
            .await?
            .json()
            .await?;
        Ok(body.detected_entities)
    }

    /// `POST /api/redact`: redact plain text, returning the redacted text
    /// and the entities that were replaced.
    pub async fn redact_text(&self, session: &Session, text: &str) -> Result<RedactTextResponse> {
        tracing::debug!(chars = text.chars().count(), "redacting text");

        let response = self
            .http
            .post(self.url("/api/redact"))
            .bearer_auth(&session.token)
            .json(&json!({ "text": text }))
            .send()
            .await?;

        Ok(check(response, "redaction failed").await?.json().await?)
    }

    /// `POST /api/redact/csv`: redact the given columns of a CSV. The
    /// response is the redacted file.
    pub async fn redact_csv(
        &self,
        session: &Session,
        file: &FileInput,
        columns: &[String],
    ) -> Result<Vec<u8>> {
        tracing::debug!(file = %file.name, ?columns, "redacting csv");

        let form = Form::new()
            .part("file", file_part(file)?)
            .text("selected_columns", serde_json::to_string(columns)?);

        let response = self
            .http
            .post(self.url("/api/redact/csv"))
            .bearer_auth(&session.token)
            .multipart(form)
            .send()
            .await?;

        let bytes = check(response, "redaction failed").await?.bytes().await?;
        Ok(bytes.to_vec())
    }

    /// `POST /api/pdf` or `/api/docx`, by file kind: redact the given
    /// entity types in a document. The response is the redacted file.
    pub async fn redact_document(
        &self,
        session: &Session,
        file: &FileInput,
        entities: &[String],
    ) -> Result<Vec<u8>> {
        let path = match file.kind {
            FileKind::Pdf => "/api/pdf",
            FileKind::Docx => "/api/docx",
            FileKind::Csv => {
                return Err(ClientError::InvalidRequest(
                    "csv files are redacted by column, not by entity",
                ))
            }
        };

        tracing::debug!(file = %file.name, ?entities, "redacting document");

        let form = Form::new()
            .part("file", file_part(file)?)
            .text("selected_entities", serde_json::to_string(entities)?);

        let response = self
            .http
            .post(self.url(path))
            .bearer_auth(&session.token)
            .multipart(form)
            .send()
            .await?;

        let bytes = check(response, "redaction failed").await?.bytes().await?;
        Ok(bytes.to_vec())
    }
}

fn file_part(file: &FileInput) -> Result<Part> {
    let part = Part::bytes(file.data.clone())
        .file_name(file.name.clone())
        .mime_str(file.kind.mime_type())?;
    Ok(part)
}

/// Pass 2xx responses through; map anything else to an API error carrying
/// the server's `detail` message when the body has one, or `fallback`.
async fn check(response: reqwest::Response, fallback: &str) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Api {
        status: status.as_u16(),
        detail: error_detail(&body, fallback),
    })
}

fn error_detail(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_detail_prefers_server_message() {
        assert_eq!(
            error_detail(r#"{"detail": "Email already registered"}"#, "signup failed"),
            "Email already registered"
        );
    }

    #[test]
    fn test_error_detail_falls_back_on_junk() {
        assert_eq!(error_detail("<html>502</html>", "redaction failed"), "redaction failed");
        assert_eq!(error_detail("", "redaction failed"), "redaction failed");
        assert_eq!(error_detail("{}", "redaction failed"), "redaction failed");
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8000/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.url("/api/redact"), "http://localhost:8000/api/redact");
    }

    #[test]
    fn test_file_part_builds_for_every_kind() {
        for name in ["claims.csv", "report.pdf", "letter.docx"] {
            let file = FileInput::new(name, vec![1, 2, 3]).unwrap();
            file_part(&file).unwrap();
        }
    }

    #[tokio::test]
    async fn test_document_endpoint_rejects_csv() {
        let client = ApiClient::new("http://localhost:8000", Duration::from_secs(5)).unwrap();
        let session = Session {
            token: "t".to_string(),
        };
        let file = FileInput::new("claims.csv", b"a,b\n".to_vec()).unwrap();

        // The kind check fires before any request is made.
        let err = client.redact_document(&session, &file, &[]).await;
        assert!(matches!(err.unwrap_err(), ClientError::InvalidRequest(_)));
    }
}
