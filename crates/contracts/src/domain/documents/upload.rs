use serde::{Deserialize, Serialize};

/// Result of a single file in an upload batch, as reported by the server.
///
/// A present `error` marks the file as failed regardless of `url`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadedFile {
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UploadedFile {
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Response of `POST /upload`.
///
/// Current servers answer with `uploaded`; older ones only send `message`.
/// Both fields default so either shape decodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadDocumentsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub uploaded: Vec<UploadedFile>,
}

impl UploadDocumentsResponse {
    pub fn failed(&self) -> impl Iterator<Item = &UploadedFile> {
        self.uploaded.iter().filter(|f| f.is_failed())
    }
}

/// Итог попытки загрузки, показывается пользователю как есть
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadStatus {
    pub success: bool,
    pub message: String,
}

impl UploadStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
