use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;

use crate::data::file_store::FileStore;
use crate::event::AppEvent;
use crate::model::file_record::{FileId, FileRecord};
use crate::model::view_state::FetchRequest;

/// Run `work` on a background thread, keep the result back until at least
/// `min` has passed, then post the event it builds.
fn spawn_request<F>(min: Duration, tx: mpsc::Sender<AppEvent>, work: F)
where
    F: FnOnce() -> AppEvent + Send + 'static,
{
    thread::spawn(move || {
        let started = Instant::now();
        let event = work();
        hold_for(started, min);
        // Receiver is gone when the app is shutting down.
        let _ = tx.send(event);
    });
}

fn hold_for(started: Instant, min: Duration) {
    let elapsed = started.elapsed();
    if elapsed < min {
        thread::sleep(min - elapsed);
    }
}

pub fn load_files(store: Arc<dyn FileStore>, seq: u64, min: Duration, tx: mpsc::Sender<AppEvent>) {
    spawn_request(min, tx, move || AppEvent::FilesLoaded(seq, store.list()));
}

pub fn load_content(
    store: Arc<dyn FileStore>,
    request: FetchRequest,
    min: Duration,
    tx: mpsc::Sender<AppEvent>,
) {
    spawn_request(min, tx, move || {
        let result = store.fetch_text(&request.ticket.id);
        AppEvent::ContentLoaded(request.surface, request.ticket, result)
    });
}

pub fn delete_file(store: Arc<dyn FileStore>, id: FileId, tx: mpsc::Sender<AppEvent>) {
    spawn_request(Duration::ZERO, tx, move || {
        let result = store.delete(&id);
        AppEvent::FileDeleted(id, result)
    });
}

/// Fetch a file's text and write it into `dir`.
pub fn save_file(
    store: Arc<dyn FileStore>,
    record: FileRecord,
    dir: PathBuf,
    tx: mpsc::Sender<AppEvent>,
) {
    spawn_request(Duration::ZERO, tx, move || {
        let result = store
            .fetch_text(&record.id)
            .map_err(anyhow::Error::from)
            .and_then(|text| write_download(&dir, &record, &text))
            .map_err(|e| format!("{:#}", e));
        AppEvent::DownloadSaved(result)
    });
}

/// Write `text` as `<dir>/<name>`, picking `name (1).ext`, `name (2).ext`...
/// when the file already exists.
pub fn write_download(dir: &Path, record: &FileRecord, text: &str) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let name = record.download_name();
    let mut path = dir.join(&name);
    let (stem, ext) = match name.rsplit_once('.') {
        Some((s, e)) if !s.is_empty() => (s.to_string(), format!(".{}", e)),
        _ => (name.clone(), String::new()),
    };
    let mut n = 1;
    while path.exists() {
        path = dir.join(format!("{} ({}){}", stem, n, ext));
        n += 1;
    }
    std::fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}
