//! Wire types for the redaction service API

use serde::{Deserialize, Serialize};

/// One sensitive span found by the service: type label, character offsets,
/// and confidence score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub entity_type: String,
    pub start: usize,
    pub end: usize,
    pub score: f64,
}

/// Response of `POST /api/redact`.
#[derive(Debug, Clone, Deserialize)]
pub struct RedactTextResponse {
    pub redacted_text: String,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

/// Response of `POST /api/detect/entities`.
#[derive(Debug, Clone, Deserialize)]
pub struct DetectResponse {
    #[serde(default)]
    pub detected_entities: Vec<String>,
}

/// Response of `POST /api/auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Error body shape used by the service on non-2xx responses.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
