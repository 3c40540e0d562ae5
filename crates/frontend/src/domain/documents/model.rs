//! Documents - Model (API functions)

use crate::shared::api::{
    ApiController, ApiError, HttpMethod, MultipartForm, RequestBody, RequestOptions, ResponseBody,
};
use crate::shared::files::FileHandle;
use async_trait::async_trait;
use contracts::domain::documents::{UploadDocumentsResponse, UploadStatus};

pub const FILES_FIELD: &str = "files";
pub const DESCRIPTION_FIELD: &str = "description";
pub const DEFAULT_DESCRIPTION: &str = "Description for these files";
pub const UPLOAD_FALLBACK_ERROR: &str = "An error occurred during upload. Please try again.";
const LEGACY_SUCCESS_MESSAGE: &str = "Files uploaded successfully!";

/// Anything that can take a batch of files and report one outcome.
///
/// Implementations never fail: every error is folded into the returned
/// status.
#[async_trait(?Send)]
pub trait DocumentUploader {
    async fn upload_documents(&self, files: &[FileHandle], description: &str) -> UploadStatus;
}

/// API client for document uploads
#[derive(Clone)]
pub struct DocumentsApi {
    api: ApiController,
    upload_endpoint: String,
}

impl DocumentsApi {
    pub fn new(api: ApiController, upload_endpoint: impl Into<String>) -> Self {
        Self {
            api,
            upload_endpoint: upload_endpoint.into(),
        }
    }

    async fn send(
        &self,
        files: &[FileHandle],
        description: &str,
    ) -> Result<UploadDocumentsResponse, ApiError> {
        let form = build_upload_form(files, description);
        let body = self
            .api
            .request(
                HttpMethod::Post,
                &self.upload_endpoint,
                Some(RequestBody::Multipart(form)),
                RequestOptions::new(),
            )
            .await?;

        // Any 2xx counts; a bare or non-JSON body reads as the legacy shape
        match body {
            ResponseBody::Json(_) => body.into_json(),
            ResponseBody::Text(_) => Ok(UploadDocumentsResponse::default()),
        }
    }
}

#[async_trait(?Send)]
impl DocumentUploader for DocumentsApi {
    async fn upload_documents(&self, files: &[FileHandle], description: &str) -> UploadStatus {
        match self.send(files, description).await {
            Ok(response) => {
                let status = reconcile(&response);
                log::info!(
                    "Upload of {} file(s) finished: {}",
                    files.len(),
                    status.message
                );
                status
            }
            Err(e) => {
                log::error!("Upload error: {}", e);
                let message = e.to_string();
                if message.trim().is_empty() {
                    UploadStatus::failure(UPLOAD_FALLBACK_ERROR)
                } else {
                    UploadStatus::failure(message)
                }
            }
        }
    }
}

/// A single `description` part followed by one `files` part per file.
pub fn build_upload_form(files: &[FileHandle], description: &str) -> MultipartForm {
    let description = if description.trim().is_empty() {
        DEFAULT_DESCRIPTION
    } else {
        description
    };

    files.iter().cloned().fold(
        MultipartForm::new().text(DESCRIPTION_FIELD, description),
        |form, file| form.file(FILES_FIELD, file),
    )
}

/// Fold the server's per-file results into a single status.
pub fn reconcile(response: &UploadDocumentsResponse) -> UploadStatus {
    let failures: Vec<String> = response
        .failed()
        .map(|f| format!("{} ({})", f.filename, f.error.as_deref().unwrap_or_default()))
        .collect();

    if !failures.is_empty() {
        return UploadStatus::failure(format!("Failed to upload: {}", failures.join(", ")));
    }

    match response.uploaded.len() {
        // older servers only answer with a message
        0 => UploadStatus::success(
            response
                .message
                .clone()
                .unwrap_or_else(|| LEGACY_SUCCESS_MESSAGE.to_string()),
        ),
        1 => UploadStatus::success("Successfully uploaded 1 file"),
        n => UploadStatus::success(format!("Successfully uploaded {} files", n)),
    }
}
