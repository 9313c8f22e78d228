use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use crate::config::{self, Config, DownloadMode, LoadingDelays};
use crate::data::file_store::{FileStore, StoreError};
use crate::data::{loader, opener};
use crate::event::AppEvent;
use crate::model::file_record::{FileId, FileRecord};
use crate::model::view_state::{Applied, FetchRequest, RequestTicket, Surface, ViewState};
use crate::notify::Notifier;
use crate::ui::layout::{self, Regions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Files,
    Details,
}

/// Behaviour knobs taken from the config file and CLI.
#[derive(Debug, Clone)]
pub struct Settings {
    pub delays: LoadingDelays,
    pub stale_guard: bool,
    pub confirm_delete: bool,
    pub download: DownloadMode,
    pub download_dir: PathBuf,
}

impl Settings {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            delays: cfg.loading_delays(),
            stale_guard: cfg.stale_guard(),
            confirm_delete: cfg.confirm_delete(),
            download: cfg.download_mode(),
            download_dir: cfg.download_dir(),
        }
    }
}

pub struct App {
    pub view: ViewState,
    pub pane: Pane,
    pub preview_scroll: usize,
    pub modal_scroll: usize,

    // Overlays
    pub show_help: bool,
    pub delete_target: Option<FileRecord>,

    // Status
    pub last_error: Option<String>,
    pub status_message: Option<String>,
    pub loaded_at: Option<DateTime<Local>>,
    pub tick: usize,

    pub should_quit: bool,
    pub dirty: bool,
    pub event_tx: Option<mpsc::Sender<AppEvent>>,
    pub base_url: String,

    store: Arc<dyn FileStore>,
    notifier: Box<dyn Notifier>,
    settings: Settings,
    last_click: Option<(usize, Instant)>,
}

impl App {
    pub fn new(
        store: Arc<dyn FileStore>,
        notifier: Box<dyn Notifier>,
        settings: Settings,
        base_url: String,
    ) -> Self {
        Self {
            view: ViewState::new(settings.stale_guard),
            pane: Pane::Files,
            preview_scroll: 0,
            modal_scroll: 0,
            show_help: false,
            delete_target: None,
            last_error: None,
            status_message: None,
            loaded_at: None,
            tick: 0,
            should_quit: false,
            dirty: true,
            event_tx: None,
            base_url,
            store,
            notifier,
            settings,
            last_click: None,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Anything still waiting on the network. Drives the spinner.
    pub fn is_busy(&self) -> bool {
        self.view.is_list_loading()
            || self.view.preview().is_loading()
            || self.view.modal().is_loading()
    }

    pub fn on_tick(&mut self) {
        if self.is_busy() {
            self.tick = self.tick.wrapping_add(1);
            self.mark_dirty();
        }
    }

    /// A new user action replaces whatever the status bar said last.
    fn clear_status(&mut self) {
        self.last_error = None;
        self.status_message = None;
    }

    fn sender(&self) -> Option<mpsc::Sender<AppEvent>> {
        self.event_tx.clone()
    }

    // --- List ---

    /// Request the file list. Runs once at startup and again on refresh.
    pub fn load_file_list(&mut self) {
        let seq = self.view.load_file_list();
        if let Some(tx) = self.sender() {
            loader::load_files(self.store.clone(), seq, self.settings.delays.list, tx);
        }
    }

    pub fn refresh(&mut self) {
        if self.view.is_list_loading() {
            return;
        }
        self.clear_status();
        self.load_file_list();
    }

    // --- Navigation ---

    fn select_index(&mut self, index: usize) {
        if self.view.select_index(index) {
            self.preview_scroll = 0;
        }
    }

    pub fn navigate_down(&mut self) {
        match self.pane {
            Pane::Files => {
                let next = self.view.selected_index().map_or(0, |i| i + 1);
                self.select_index(next);
            }
            Pane::Details => self.scroll_preview(1),
        }
    }

    pub fn navigate_up(&mut self) {
        match self.pane {
            Pane::Files => {
                if let Some(i) = self.view.selected_index() {
                    self.select_index(i.saturating_sub(1));
                } else {
                    self.select_index(0);
                }
            }
            Pane::Details => self.scroll_preview(-1),
        }
    }

    pub fn jump_top(&mut self) {
        match self.pane {
            Pane::Files => self.select_index(0),
            Pane::Details => self.preview_scroll = 0,
        }
    }

    pub fn jump_bottom(&mut self) {
        match self.pane {
            Pane::Files => {
                let len = self.view.files().len();
                if len > 0 {
                    self.select_index(len - 1);
                }
            }
            Pane::Details => {
                self.preview_scroll = line_count(self.view.preview().text()).saturating_sub(1)
            }
        }
    }

    pub fn switch_pane(&mut self) {
        self.pane = match self.pane {
            Pane::Files => Pane::Details,
            Pane::Details => Pane::Files,
        };
    }

    pub fn scroll_preview(&mut self, delta: isize) {
        let max = line_count(self.view.preview().text());
        self.preview_scroll = step(self.preview_scroll, delta, max);
    }

    pub fn scroll_modal(&mut self, delta: isize) {
        let max = line_count(self.view.modal().text());
        self.modal_scroll = step(self.modal_scroll, delta, max);
    }

    // --- Preview / modal ---

    pub fn toggle_preview(&mut self) {
        let Some(id) = self.view.selected_id().cloned() else {
            return;
        };
        self.clear_status();
        self.preview_scroll = 0;
        if let Some(request) = self.view.toggle_preview(&id) {
            self.spawn_fetch(request, self.settings.delays.preview);
        }
    }

    pub fn open_modal(&mut self) {
        let Some(record) = self.view.selected().cloned() else {
            return;
        };
        self.clear_status();
        self.modal_scroll = 0;
        let request = self.view.open_modal(&record);
        self.spawn_fetch(request, self.settings.delays.modal);
    }

    pub fn close_modal(&mut self) {
        self.view.close_modal();
    }

    fn spawn_fetch(&self, request: FetchRequest, min: Duration) {
        if let Some(tx) = self.sender() {
            loader::load_content(self.store.clone(), request, min, tx);
        }
    }

    // --- Download ---

    pub fn download(&mut self) {
        let Some(record) = self.view.selected().cloned() else {
            return;
        };
        self.clear_status();
        match self.settings.download {
            DownloadMode::Browser => {
                let url = self.store.content_url(&record.id);
                match opener::open_url(&url) {
                    Ok(()) => {
                        tracing::info!(%url, "opened download");
                        self.status_message = Some(format!("Opened {}", record.filename));
                    }
                    Err(e) => {
                        tracing::warn!(%url, error = %e, "could not open download URL");
                        self.last_error = Some(format!("Download: {}", e));
                    }
                }
            }
            DownloadMode::Save => {
                if let Some(tx) = self.sender() {
                    self.status_message = Some(format!("Saving {}...", record.filename));
                    loader::save_file(
                        self.store.clone(),
                        record,
                        self.settings.download_dir.clone(),
                        tx,
                    );
                }
            }
        }
    }

    // --- Delete ---

    /// Delete the selected file, asking first when confirmation is on.
    pub fn request_delete(&mut self) {
        let Some(record) = self.view.selected().cloned() else {
            return;
        };
        self.clear_status();
        if self.settings.confirm_delete {
            self.delete_target = Some(record);
        } else {
            self.delete_file(record.id);
        }
    }

    pub fn confirm_delete(&mut self) {
        if let Some(record) = self.delete_target.take() {
            self.delete_file(record.id);
        }
    }

    pub fn cancel_delete(&mut self) {
        self.delete_target = None;
    }

    fn delete_file(&mut self, id: FileId) {
        if let Some(tx) = self.sender() {
            loader::delete_file(self.store.clone(), id, tx);
        }
    }

    // --- Mouse ---

    /// Left click at (`col`, `row`) on a screen whose panes are `regions`.
    pub fn click(&mut self, col: u16, row: u16, regions: &Regions, now: Instant) {
        if self.show_help || self.delete_target.is_some() {
            return;
        }
        if self.view.is_modal_open() {
            if !layout::contains(regions.modal, col, row) {
                self.close_modal();
            }
            return;
        }
        if layout::contains(regions.details, col, row) {
            self.pane = Pane::Details;
            return;
        }
        let Some(index) = layout::file_row_at(
            regions.files,
            col,
            row,
            self.view.selected_index().unwrap_or(0),
            self.view.files().len(),
        ) else {
            return;
        };
        self.pane = Pane::Files;

        let double = matches!(
            self.last_click,
            Some((prev, at)) if prev == index
                && now.duration_since(at) <= Duration::from_millis(config::DOUBLE_CLICK_MS)
        );
        if double {
            self.last_click = None;
            self.select_index(index);
            self.open_modal();
        } else {
            self.last_click = Some((index, now));
            self.select_index(index);
        }
    }

    /// Mouse wheel: scroll whatever is under the content focus.
    pub fn wheel(&mut self, delta: isize) {
        if self.view.is_modal_open() {
            self.scroll_modal(delta);
        } else if self.pane == Pane::Details {
            self.scroll_preview(delta);
        } else if delta > 0 {
            self.navigate_down();
        } else {
            self.navigate_up();
        }
    }

    // --- Background results ---

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::FilesLoaded(seq, result) => self.handle_files_loaded(seq, result),
            AppEvent::ContentLoaded(surface, ticket, result) => {
                self.handle_content_loaded(surface, ticket, result)
            }
            AppEvent::FileDeleted(id, result) => self.handle_file_deleted(id, result),
            AppEvent::DownloadSaved(result) => match result {
                Ok(path) => {
                    tracing::info!(path = %path.display(), "download saved");
                    self.last_error = None;
                    self.status_message = Some(format!("Saved {}", path.display()));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "download failed");
                    self.status_message = None;
                    self.last_error = Some(format!("Download: {}", e));
                }
            },
        }
    }

    fn report(&mut self, action: &str, error: &StoreError) {
        self.notifier.failure(action, error);
        self.last_error = Some(format!("{}: {}", action, error));
    }

    fn handle_files_loaded(&mut self, seq: u64, result: Result<Vec<FileRecord>, StoreError>) {
        let failure = result.as_ref().err().cloned();
        let count = result.as_ref().map_or(0, Vec::len);
        match self.view.apply_list(seq, result) {
            Applied::Updated => {
                tracing::info!(count, "file list loaded");
                self.loaded_at = Some(Local::now());
                self.preview_scroll = 0;
            }
            Applied::Failed => {
                if let Some(e) = failure {
                    self.report("List files", &e);
                }
            }
            Applied::Stale => tracing::debug!(seq, "dropped superseded file list"),
        }
    }

    fn handle_content_loaded(
        &mut self,
        surface: Surface,
        ticket: RequestTicket,
        result: Result<String, StoreError>,
    ) {
        let failure = result.as_ref().err().cloned();
        match self.view.apply_content(surface, &ticket, result) {
            Applied::Updated => {}
            Applied::Failed => {
                if let Some(e) = failure {
                    let action = match surface {
                        Surface::Preview => "Preview",
                        Surface::Modal => "View",
                    };
                    self.report(action, &e);
                }
            }
            Applied::Stale => {
                tracing::debug!(seq = ticket.seq, id = %ticket.id, ?surface, "dropped stale content")
            }
        }
    }

    fn handle_file_deleted(&mut self, id: FileId, result: Result<(), StoreError>) {
        let failure = result.as_ref().err().cloned();
        match self.view.apply_delete(&id, result) {
            Applied::Updated => {
                tracing::info!(%id, "file deleted");
                self.preview_scroll = 0;
                self.modal_scroll = 0;
                self.last_error = None;
                self.status_message = Some("File deleted".to_string());
            }
            _ => {
                if let Some(e) = failure {
                    self.report("Delete", &e);
                }
            }
        }
    }
}

fn line_count(text: &str) -> usize {
    text.lines().count()
}

fn step(current: usize, delta: isize, max: usize) -> usize {
    let next = if delta < 0 {
        current.saturating_sub(delta.unsigned_abs())
    } else {
        current.saturating_add(delta as usize)
    };
    next.min(max.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;
    use std::sync::Mutex;

    use ratatui::layout::Rect;

    use super::*;

    /// In-memory store. Fetches for ids listed in `gates` block until the
    /// test releases them, which lets tests reorder responses.
    #[derive(Default)]
    struct FakeStore {
        files: Mutex<Vec<FileRecord>>,
        contents: HashMap<String, String>,
        fail_list: bool,
        reject_delete: bool,
        offline_delete: bool,
        gates: Mutex<HashMap<String, mpsc::Receiver<()>>>,
    }

    impl FileStore for FakeStore {
        fn list(&self) -> Result<Vec<FileRecord>, StoreError> {
            if self.fail_list {
                return Err(StoreError::Transport("connection refused".into()));
            }
            Ok(self.files.lock().unwrap().clone())
        }

        fn fetch_text(&self, id: &FileId) -> Result<String, StoreError> {
            let gate = self.gates.lock().unwrap().remove(id.as_str());
            if let Some(gate) = gate {
                let _ = gate.recv();
            }
            self.contents
                .get(id.as_str())
                .cloned()
                .ok_or(StoreError::Status(404))
        }

        fn delete(&self, id: &FileId) -> Result<(), StoreError> {
            if self.offline_delete {
                return Err(StoreError::Transport("timed out".into()));
            }
            if self.reject_delete {
                return Err(StoreError::Rejected(Some("File not found".into())));
            }
            self.files.lock().unwrap().retain(|f| &f.id != id);
            Ok(())
        }

        fn content_url(&self, id: &FileId) -> String {
            format!("http://store.test/file/{}", id)
        }
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl Notifier for Recorder {
        fn failure(&mut self, action: &str, error: &StoreError) {
            self.0.borrow_mut().push(format!("{}: {}", action, error));
        }
    }

    fn notes_and_todo() -> FakeStore {
        let mut contents = HashMap::new();
        contents.insert("a".to_string(), "meeting at 10".to_string());
        contents.insert("b".to_string(), "buy milk".to_string());
        FakeStore {
            files: Mutex::new(vec![
                FileRecord::new("a", "notes.txt").with_size("1 KB"),
                FileRecord::new("b", "todo.txt"),
            ]),
            contents,
            ..Default::default()
        }
    }

    fn settings(guard: bool, confirm: bool) -> Settings {
        Settings {
            delays: LoadingDelays::ZERO,
            stale_guard: guard,
            confirm_delete: confirm,
            download: DownloadMode::Browser,
            download_dir: std::env::temp_dir(),
        }
    }

    fn app_with(
        store: FakeStore,
        settings: Settings,
    ) -> (App, mpsc::Receiver<AppEvent>, Recorder, Arc<FakeStore>) {
        let store = Arc::new(store);
        let recorder = Recorder::default();
        let mut app = App::new(
            store.clone(),
            Box::new(recorder.clone()),
            settings,
            "http://store.test/file".into(),
        );
        let (tx, rx) = mpsc::channel();
        app.event_tx = Some(tx);
        (app, rx, recorder, store)
    }

    /// Apply the next background result.
    fn pump(app: &mut App, rx: &mpsc::Receiver<AppEvent>) {
        let evt = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("background request never reported back");
        app.handle_event(evt);
    }

    fn started(store: FakeStore) -> (App, mpsc::Receiver<AppEvent>, Recorder, Arc<FakeStore>) {
        let (mut app, rx, rec, store) = app_with(store, settings(true, false));
        app.load_file_list();
        pump(&mut app, &rx);
        (app, rx, rec, store)
    }

    #[test]
    fn startup_lists_files_and_selects_first() {
        let (app, _rx, rec, _) = started(notes_and_todo());
        assert_eq!(app.view.files().len(), 2);
        assert_eq!(app.view.selected_id().map(FileId::as_str), Some("a"));
        assert!(!app.view.is_initial_loading());
        assert!(app.loaded_at.is_some());
        assert!(rec.0.borrow().is_empty());
    }

    #[test]
    fn startup_failure_is_reported_not_fatal() {
        let store = FakeStore {
            fail_list: true,
            ..Default::default()
        };
        let (app, _rx, rec, _) = started(store);
        assert!(app.view.files().is_empty());
        assert!(!app.view.is_initial_loading());
        assert_eq!(
            rec.0.borrow().as_slice(),
            ["List files: request failed: connection refused"]
        );
        assert!(app.last_error.is_some());
    }

    #[test]
    fn end_to_end_select_preview_delete() {
        let (mut app, rx, rec, store) = started(notes_and_todo());

        app.navigate_down();
        assert_eq!(app.view.selected_id().map(FileId::as_str), Some("b"));
        assert!(app.view.preview().is_empty());

        app.toggle_preview();
        assert!(app.view.preview().is_loading());
        pump(&mut app, &rx);
        assert_eq!(app.view.preview().text(), "buy milk");

        app.request_delete();
        pump(&mut app, &rx);
        let ids: Vec<&str> = app.view.files().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["a"]);
        assert_eq!(app.view.selected_id(), None);
        assert!(app.view.preview().is_empty());
        assert_eq!(store.files.lock().unwrap().len(), 1);
        assert!(rec.0.borrow().is_empty());
    }

    #[test]
    fn preview_toggle_hides_without_request() {
        let (mut app, rx, _, _) = started(notes_and_todo());
        app.toggle_preview();
        pump(&mut app, &rx);
        assert_eq!(app.view.preview().text(), "meeting at 10");

        app.toggle_preview();
        assert!(app.view.preview().is_empty());
        assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
    }

    #[test]
    fn later_success_replaces_earlier_error() {
        let mut store = notes_and_todo();
        store.contents.remove("a");
        let (mut app, rx, _, _) = started(store);

        app.toggle_preview();
        pump(&mut app, &rx);
        assert_eq!(
            app.last_error.as_deref(),
            Some("Preview: server responded with HTTP 404")
        );

        app.request_delete();
        assert_eq!(app.last_error, None);
        pump(&mut app, &rx);
        assert_eq!(app.last_error, None);
        assert_eq!(app.status_message.as_deref(), Some("File deleted"));
    }

    #[test]
    fn missing_content_reports_and_modal_stays_empty() {
        let mut store = notes_and_todo();
        store.contents.clear();
        let (mut app, rx, rec, _) = started(store);

        app.open_modal();
        assert!(app.view.is_modal_open());
        pump(&mut app, &rx);
        assert!(app.view.modal().is_empty());
        assert!(!app.view.modal().is_loading());
        assert_eq!(
            rec.0.borrow().as_slice(),
            ["View: server responded with HTTP 404"]
        );
    }

    #[test]
    fn rejected_delete_leaves_state_untouched() {
        let mut store = notes_and_todo();
        store.reject_delete = true;
        let (mut app, rx, rec, _) = started(store);
        app.toggle_preview();
        pump(&mut app, &rx);
        let before = app.view.clone();

        app.request_delete();
        pump(&mut app, &rx);

        assert_eq!(app.view, before);
        assert_eq!(
            rec.0.borrow().as_slice(),
            ["Delete: rejected by server: File not found"]
        );
    }

    #[test]
    fn offline_delete_leaves_state_untouched() {
        let mut store = notes_and_todo();
        store.offline_delete = true;
        let (mut app, rx, rec, _) = started(store);
        let before = app.view.clone();

        app.request_delete();
        pump(&mut app, &rx);

        assert_eq!(app.view, before);
        assert_eq!(rec.0.borrow().len(), 1);
    }

    #[test]
    fn confirmation_gates_delete() {
        let (mut app, rx, _, _) = app_with(notes_and_todo(), settings(true, true));
        app.load_file_list();
        pump(&mut app, &rx);

        app.request_delete();
        assert_eq!(
            app.delete_target.as_ref().map(|r| r.filename.as_str()),
            Some("notes.txt")
        );
        app.cancel_delete();
        assert!(app.delete_target.is_none());
        assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());

        app.request_delete();
        app.confirm_delete();
        pump(&mut app, &rx);
        assert_eq!(app.view.files().len(), 1);
    }

    #[test]
    fn late_preview_for_old_selection_is_dropped() {
        let store = notes_and_todo();
        let (release, gate) = mpsc::channel();
        store.gates.lock().unwrap().insert("a".into(), gate);
        let (mut app, rx, _, _) = started(store);

        app.toggle_preview();
        app.navigate_down();
        release.send(()).unwrap();
        pump(&mut app, &rx);

        assert_eq!(app.view.selected_id().map(FileId::as_str), Some("b"));
        assert!(app.view.preview().is_empty());
    }

    #[test]
    fn unguarded_late_preview_lands_in_buffer() {
        let store = notes_and_todo();
        let (release, gate) = mpsc::channel();
        store.gates.lock().unwrap().insert("a".into(), gate);
        let (mut app, rx, _, _) = app_with(store, settings(false, false));
        app.load_file_list();
        pump(&mut app, &rx);

        app.toggle_preview();
        app.navigate_down();
        release.send(()).unwrap();
        pump(&mut app, &rx);

        assert_eq!(app.view.preview().text(), "meeting at 10");
    }

    #[test]
    fn refresh_picks_up_new_files() {
        let (mut app, rx, _, store) = started(notes_and_todo());
        store
            .files
            .lock()
            .unwrap()
            .insert(0, FileRecord::new("c", "new.txt"));
        app.refresh();
        pump(&mut app, &rx);
        assert_eq!(app.view.files().len(), 3);
        assert_eq!(app.view.selected_id().map(FileId::as_str), Some("a"));
    }

    #[test]
    fn double_click_opens_modal() {
        let (mut app, rx, _, _) = started(notes_and_todo());
        let regions = layout::regions(Rect::new(0, 0, 120, 40));
        let inner = layout::list_inner(regions.files);
        let second_row = inner.y + 1;
        let t0 = Instant::now();

        app.click(inner.x + 1, second_row, &regions, t0);
        assert_eq!(app.view.selected_id().map(FileId::as_str), Some("b"));
        assert!(!app.view.is_modal_open());

        app.click(inner.x + 1, second_row, &regions, t0 + Duration::from_millis(100));
        assert!(app.view.is_modal_open());
        pump(&mut app, &rx);
        assert_eq!(app.view.modal().text(), "buy milk");

        app.click(0, 0, &regions, t0 + Duration::from_secs(2));
        assert!(!app.view.is_modal_open());
    }

    #[test]
    fn slow_second_click_only_selects() {
        let (mut app, _rx, _, _) = started(notes_and_todo());
        let regions = layout::regions(Rect::new(0, 0, 120, 40));
        let inner = layout::list_inner(regions.files);
        let t0 = Instant::now();
        app.click(inner.x + 1, inner.y + 1, &regions, t0);
        app.click(inner.x + 1, inner.y + 1, &regions, t0 + Duration::from_secs(1));
        assert!(!app.view.is_modal_open());
    }

    #[test]
    fn details_pane_scrolls_preview() {
        let mut store = notes_and_todo();
        store
            .contents
            .insert("a".into(), "one\ntwo\nthree".into());
        let (mut app, rx, _, _) = started(store);
        app.toggle_preview();
        pump(&mut app, &rx);

        app.switch_pane();
        app.navigate_down();
        app.navigate_down();
        app.navigate_down();
        assert_eq!(app.preview_scroll, 2);
        app.jump_top();
        assert_eq!(app.preview_scroll, 0);
        assert_eq!(app.view.selected_id().map(FileId::as_str), Some("a"));
    }

    #[test]
    fn save_download_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = settings(true, false);
        s.download = DownloadMode::Save;
        s.download_dir = dir.path().to_path_buf();
        let (mut app, rx, _, _) = app_with(notes_and_todo(), s);
        app.load_file_list();
        pump(&mut app, &rx);

        app.download();
        pump(&mut app, &rx);

        let saved = dir.path().join("notes.txt");
        assert_eq!(std::fs::read_to_string(saved).unwrap(), "meeting at 10");
        assert!(app.status_message.as_deref().unwrap_or("").starts_with("Saved"));
    }

    #[test]
    fn step_clamps_to_content() {
        assert_eq!(step(0, -1, 10), 0);
        assert_eq!(step(8, 5, 10), 9);
        assert_eq!(step(0, 3, 0), 0);
    }
}
