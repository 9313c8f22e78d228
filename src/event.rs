use std::path::PathBuf;

use crate::data::file_store::StoreError;
use crate::model::file_record::{FileId, FileRecord};
use crate::model::view_state::{RequestTicket, Surface};

/// Results posted back to the UI loop by background requests.
#[derive(Debug)]
pub enum AppEvent {
    /// List fetch finished. Carries the sequence number it was issued with.
    FilesLoaded(u64, Result<Vec<FileRecord>, StoreError>),
    /// Content fetch for the preview or modal finished.
    ContentLoaded(Surface, RequestTicket, Result<String, StoreError>),
    /// Delete call finished.
    FileDeleted(FileId, Result<(), StoreError>),
    /// Save-to-disk download finished.
    DownloadSaved(Result<PathBuf, String>),
}
