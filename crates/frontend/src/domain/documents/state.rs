use crate::shared::files::FileHandle;
use contracts::domain::documents::UploadStatus;

/// How many pending files are shown inline before the "+N more" button.
pub const PREVIEW_LIMIT: usize = 3;

/// Upload panel state
#[derive(Clone, Debug, Default)]
pub struct UploadSession {
    pub files: Vec<FileHandle>,
    pub description: String,
    pub drag_active: bool,
    pub uploading: bool,
    pub status: Option<UploadStatus>,
    pub file_list_open: bool,
}

/// Snapshot handed to the uploader when a submit is accepted.
#[derive(Clone, Debug)]
pub struct UploadBatch {
    pub files: Vec<FileHandle>,
    pub description: String,
}

impl UploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append picked or dropped files. No dedup, no validation.
    pub fn add_files(&mut self, files: impl IntoIterator<Item = FileHandle>) -> usize {
        let before = self.files.len();
        self.files.extend(files);
        self.files.len() - before
    }

    /// Remove one file by position; later files shift down by one.
    pub fn remove_file(&mut self, index: usize) -> Option<FileHandle> {
        if index >= self.files.len() {
            return None;
        }
        let removed = self.files.remove(index);
        if self.files.is_empty() {
            self.file_list_open = false;
        }
        Some(removed)
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn drag_enter(&mut self) {
        self.drag_active = true;
    }

    pub fn drag_leave(&mut self) {
        self.drag_active = false;
    }

    /// Drop ends the drag and takes the dropped files in.
    pub fn drop_files(&mut self, files: impl IntoIterator<Item = FileHandle>) -> usize {
        self.drag_active = false;
        self.add_files(files)
    }

    pub fn open_file_list(&mut self) {
        if !self.files.is_empty() {
            self.file_list_open = true;
        }
    }

    pub fn close_file_list(&mut self) {
        self.file_list_open = false;
    }

    pub fn can_submit(&self) -> bool {
        !self.files.is_empty() && !self.uploading
    }

    /// Accept a submit if there is something to send and nothing in flight.
    ///
    /// Clears the previous status and raises the in-flight flag. Returns
    /// `None` (leaving the state untouched) when the guard rejects it.
    pub fn begin_upload(&mut self) -> Option<UploadBatch> {
        if !self.can_submit() {
            return None;
        }
        self.status = None;
        self.uploading = true;
        Some(UploadBatch {
            files: self.files.clone(),
            description: self.description.clone(),
        })
    }

    /// Store the outcome. Only a success clears the pending files and the
    /// description; the in-flight flag always drops.
    pub fn finish_upload(&mut self, status: UploadStatus) {
        if status.success {
            self.files.clear();
            self.description.clear();
            self.file_list_open = false;
        }
        self.status = Some(status);
        self.uploading = false;
    }

    /// First files shown inline, with their positions in the pending set.
    pub fn preview(&self) -> Vec<(usize, FileHandle)> {
        self.files
            .iter()
            .take(PREVIEW_LIMIT)
            .cloned()
            .enumerate()
            .collect()
    }

    pub fn hidden_count(&self) -> usize {
        self.files.len().saturating_sub(PREVIEW_LIMIT)
    }
}
