//! In-browser file handles.
//!
//! A `FileHandle` owns the metadata the UI needs (name, size, type) and a
//! reference to the bytes. The bytes stay with the browser for picked or
//! dropped files; in-memory handles exist for files built by code.

use std::rc::Rc;

#[derive(Clone, Debug)]
pub enum FileSource {
    Browser(web_sys::File),
    Memory(Rc<[u8]>),
}

#[derive(Clone, Debug)]
pub struct FileHandle {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
    /// Milliseconds since the Unix epoch, as reported by the browser.
    pub last_modified: f64,
    pub source: FileSource,
}

impl FileHandle {
    pub fn from_file(file: web_sys::File) -> Self {
        Self {
            name: file.name(),
            mime_type: file.type_(),
            size: file.size() as u64,
            last_modified: file.last_modified(),
            source: FileSource::Browser(file),
        }
    }

    pub fn in_memory(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Rc<[u8]>>,
    ) -> Self {
        let bytes = bytes.into();
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size: bytes.len() as u64,
            last_modified: 0.0,
            source: FileSource::Memory(bytes),
        }
    }

    /// Collect every file of a picker or drop `FileList`, in list order.
    pub fn from_file_list(list: &web_sys::FileList) -> Vec<Self> {
        (0..list.length())
            .filter_map(|i| list.get(i))
            .map(Self::from_file)
            .collect()
    }

    pub fn display_size(&self) -> String {
        format_size(self.size)
    }
}

/// Human-readable size: bytes below 1 KB, then KB / MB with two decimals.
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes as f64;
    if b < KB {
        format!("{} B", bytes)
    } else if b < MB {
        format!("{:.2} KB", b / KB)
    } else {
        format!("{:.2} MB", b / MB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_handle() {
        let f = FileHandle::in_memory("notes.txt", "text/plain", b"hello".to_vec());
        assert_eq!(f.name, "notes.txt");
        assert_eq!(f.size, 5);
        assert!(matches!(f.source, FileSource::Memory(ref b) if &b[..] == b"hello"));
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.00 MB");
    }
}
