//! Documents - View Model

use super::model::DocumentUploader;
use super::state::UploadSession;
use crate::shared::files::FileHandle;
use leptos::prelude::*;

/// Holds browser file handles, so the session lives in local storage.
#[derive(Clone, Copy)]
pub struct UploadVm {
    pub session: RwSignal<UploadSession, LocalStorage>,
}

impl UploadVm {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new_local(UploadSession::new()),
        }
    }

    pub fn add_files(&self, files: Vec<FileHandle>) {
        if files.is_empty() {
            return;
        }
        self.session.update(|s| {
            s.add_files(files);
        });
    }

    pub fn remove_file(&self, index: usize) {
        self.session.update(|s| {
            s.remove_file(index);
        });
    }

    /// Run one upload through `uploader`.
    ///
    /// Returns `false` without touching the network when the pending set is
    /// empty or another upload is still in flight.
    pub async fn submit<U: DocumentUploader + ?Sized>(self, uploader: &U) -> bool {
        let Some(batch) = self.session.try_update(|s| s.begin_upload()).flatten() else {
            log::debug!("Upload submit ignored");
            return false;
        };

        let status = uploader
            .upload_documents(&batch.files, &batch.description)
            .await;
        self.session.update(|s| s.finish_upload(status));
        true
    }
}

impl Default for UploadVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use contracts::domain::documents::UploadStatus;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::poll;
    use std::cell::{Cell, RefCell};

    struct GatedUploader {
        calls: Cell<usize>,
        gate: RefCell<Option<oneshot::Receiver<UploadStatus>>>,
        instant: UploadStatus,
    }

    impl GatedUploader {
        fn instant(status: UploadStatus) -> Self {
            Self {
                calls: Cell::new(0),
                gate: RefCell::new(None),
                instant: status,
            }
        }

        fn gated(rx: oneshot::Receiver<UploadStatus>) -> Self {
            Self {
                calls: Cell::new(0),
                gate: RefCell::new(Some(rx)),
                instant: UploadStatus::success("unused"),
            }
        }
    }

    #[async_trait(?Send)]
    impl DocumentUploader for GatedUploader {
        async fn upload_documents(&self, _files: &[FileHandle], _description: &str) -> UploadStatus {
            self.calls.set(self.calls.get() + 1);
            let gate = self.gate.borrow_mut().take();
            match gate {
                Some(rx) => rx.await.unwrap_or_else(|_| UploadStatus::failure("dropped")),
                None => self.instant.clone(),
            }
        }
    }

    fn file(name: &str) -> FileHandle {
        FileHandle::in_memory(name, "text/plain", b"x".to_vec())
    }

    fn with_owner(test: impl FnOnce()) {
        let owner = Owner::new();
        owner.set();
        test();
    }

    #[test]
    fn test_submit_with_no_files_makes_no_call() {
        with_owner(|| {
            let vm = UploadVm::new();
            let uploader = GatedUploader::instant(UploadStatus::success("ok"));
            assert!(!block_on(vm.submit(&uploader)));
            assert_eq!(uploader.calls.get(), 0);
            assert!(vm.session.with_untracked(|s| s.status.is_none()));
        });
    }

    #[test]
    fn test_successful_submit_resets_pending() {
        with_owner(|| {
            let vm = UploadVm::new();
            vm.add_files(vec![file("a"), file("b")]);
            vm.session.update(|s| s.set_description("reports"));
            let uploader = GatedUploader::instant(UploadStatus::success("Successfully uploaded 2 files"));

            assert!(block_on(vm.submit(&uploader)));

            vm.session.with_untracked(|s| {
                assert!(s.files.is_empty());
                assert!(s.description.is_empty());
                assert!(!s.uploading);
                assert_eq!(
                    s.status,
                    Some(UploadStatus::success("Successfully uploaded 2 files"))
                );
            });
        });
    }

    #[test]
    fn test_failed_submit_keeps_pending() {
        with_owner(|| {
            let vm = UploadVm::new();
            vm.add_files(vec![file("a")]);
            vm.session.update(|s| s.set_description("reports"));
            let uploader = GatedUploader::instant(UploadStatus::failure("Disk full"));

            assert!(block_on(vm.submit(&uploader)));

            vm.session.with_untracked(|s| {
                assert_eq!(s.files.len(), 1);
                assert_eq!(s.description, "reports");
                assert!(!s.uploading);
                assert_eq!(s.status, Some(UploadStatus::failure("Disk full")));
            });
        });
    }

    #[test]
    fn test_second_submit_while_in_flight_is_ignored() {
        with_owner(|| {
            let vm = UploadVm::new();
            vm.add_files(vec![file("a")]);
            let (tx, rx) = oneshot::channel();
            let uploader = GatedUploader::gated(rx);

            block_on(async {
                let mut first = std::pin::pin!(vm.submit(&uploader));
                assert!(poll!(first.as_mut()).is_pending());
                assert!(vm.session.with_untracked(|s| s.uploading));

                assert!(!vm.submit(&uploader).await);
                assert_eq!(uploader.calls.get(), 1);

                tx.send(UploadStatus::success("done")).unwrap();
                assert!(first.await);
            });

            assert_eq!(uploader.calls.get(), 1);
            assert!(vm.session.with_untracked(|s| !s.uploading));
        });
    }

    #[test]
    fn test_remove_file_by_index() {
        with_owner(|| {
            let vm = UploadVm::new();
            vm.add_files(vec![file("a"), file("b"), file("c")]);
            vm.remove_file(1);
            let names: Vec<_> = vm
                .session
                .with_untracked(|s| s.files.iter().map(|f| f.name.clone()).collect());
            assert_eq!(names, vec!["a", "c"]);
        });
    }
}
