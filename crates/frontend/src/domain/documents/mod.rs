//! Document Upload Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: DocumentUploader trait and the multipart upload client
//! - state.rs: UploadSession (pending files, description, status)
//! - view_model.rs: UploadVm with a local RwSignal
//! - view.rs: Main component UploadView, previews and the file list modal

pub mod model;
pub mod state;
mod view;
pub mod view_model;

pub use model::{DocumentUploader, DocumentsApi};
pub use view::UploadView;
pub use view_model::UploadVm;
