pub mod upload;

pub use upload::{UploadDocumentsResponse, UploadStatus, UploadedFile};
