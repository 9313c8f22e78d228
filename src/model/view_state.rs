//! File manager view state and its transitions.
//!
//! Transitions never perform I/O. Operations that need the file store return
//! a [`FetchRequest`] (or a ticket) that the caller executes; the result is
//! fed back through one of the `apply_*` methods.

use crate::model::file_record::{FileId, FileRecord};

/// Which content surface a fetch fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Preview,
    Modal,
}

/// Tag attached to every request so late responses can be recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    pub seq: u64,
    pub id: FileId,
}

/// A content fetch the caller should run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub surface: Surface,
    pub ticket: RequestTicket,
}

/// Fetched text for at most one file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentBuffer {
    text: String,
    loading: bool,
    pending: Option<RequestTicket>,
}

impl ContentBuffer {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// An empty body counts as empty, same as no body.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    fn clear(&mut self) {
        self.text.clear();
        self.loading = false;
        self.pending = None;
    }

    fn begin(&mut self, ticket: RequestTicket) {
        self.text.clear();
        self.loading = true;
        self.pending = Some(ticket);
    }
}

/// What happened to a response handed to an `apply_*` method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// State was updated with the result.
    Updated,
    /// The request failed; state is back at its pre-request value.
    Failed,
    /// A newer request or a selection change superseded this one.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    files: Vec<FileRecord>,
    selected: Option<FileId>,
    preview: ContentBuffer,
    modal: ContentBuffer,
    modal_open: bool,
    modal_target: Option<FileRecord>,
    initial_loading: bool,
    list_pending: Option<u64>,
    stale_guard: bool,
    next_seq: u64,
}

impl ViewState {
    /// Fresh state. The initial list load is considered in progress until
    /// its result is applied.
    pub fn new(stale_guard: bool) -> Self {
        Self {
            files: Vec::new(),
            selected: None,
            preview: ContentBuffer::default(),
            modal: ContentBuffer::default(),
            modal_open: false,
            modal_target: None,
            initial_loading: true,
            list_pending: None,
            stale_guard,
            next_seq: 0,
        }
    }

    // --- Accessors ---

    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    pub fn selected_id(&self) -> Option<&FileId> {
        self.selected.as_ref()
    }

    pub fn selected(&self) -> Option<&FileRecord> {
        let id = self.selected.as_ref()?;
        self.files.iter().find(|f| &f.id == id)
    }

    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected.as_ref()?;
        self.files.iter().position(|f| &f.id == id)
    }

    pub fn preview(&self) -> &ContentBuffer {
        &self.preview
    }

    pub fn modal(&self) -> &ContentBuffer {
        &self.modal
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// Record the modal was last opened for.
    pub fn modal_target(&self) -> Option<&FileRecord> {
        self.modal_target.as_ref()
    }

    pub fn is_initial_loading(&self) -> bool {
        self.initial_loading
    }

    pub fn is_list_loading(&self) -> bool {
        self.list_pending.is_some()
    }

    fn ticket(&mut self, id: &FileId) -> RequestTicket {
        self.next_seq += 1;
        RequestTicket {
            seq: self.next_seq,
            id: id.clone(),
        }
    }

    fn buffer_mut(&mut self, surface: Surface) -> &mut ContentBuffer {
        match surface {
            Surface::Preview => &mut self.preview,
            Surface::Modal => &mut self.modal,
        }
    }

    // --- List ---

    /// Start a list fetch. Returns the sequence number to hand back to
    /// [`ViewState::apply_list`].
    pub fn load_file_list(&mut self) -> u64 {
        self.next_seq += 1;
        self.list_pending = Some(self.next_seq);
        self.next_seq
    }

    /// Apply a list result.
    ///
    /// The first successful load selects the first record. Later loads keep
    /// the current selection when it is still present, otherwise they fall
    /// back to the first record and drop both buffers.
    pub fn apply_list<E>(&mut self, seq: u64, result: Result<Vec<FileRecord>, E>) -> Applied {
        if self.stale_guard && self.list_pending != Some(seq) {
            return Applied::Stale;
        }
        if self.list_pending == Some(seq) {
            self.list_pending = None;
        }
        self.initial_loading = false;

        let files = match result {
            Ok(files) => files,
            Err(_) => return Applied::Failed,
        };

        let still_there = self
            .selected
            .as_ref()
            .is_some_and(|id| files.iter().any(|f| &f.id == id));
        self.files = files;
        if !still_there {
            self.selected = self.files.first().map(|f| f.id.clone());
            self.preview.clear();
            self.modal.clear();
        }
        Applied::Updated
    }

    // --- Selection ---

    /// Select `id` and drop both buffers. In-flight fetches are not
    /// cancelled; their results become stale.
    pub fn select_file(&mut self, id: &FileId) {
        self.selected = Some(id.clone());
        self.preview.clear();
        self.modal.clear();
    }

    /// Select the record at `index`, if any. Returns true when the
    /// selection moved.
    pub fn select_index(&mut self, index: usize) -> bool {
        let Some(id) = self.files.get(index).map(|f| f.id.clone()) else {
            return false;
        };
        if self.selected.as_ref() == Some(&id) {
            return false;
        }
        self.select_file(&id);
        true
    }

    // --- Preview ---

    /// Hide the preview when it shows content, otherwise request content
    /// for `id`.
    pub fn toggle_preview(&mut self, id: &FileId) -> Option<FetchRequest> {
        if !self.preview.is_empty() {
            self.preview.clear();
            return None;
        }
        let ticket = self.ticket(id);
        self.preview.begin(ticket.clone());
        Some(FetchRequest {
            surface: Surface::Preview,
            ticket,
        })
    }

    // --- Modal ---

    /// Open the modal for `record` and request its content.
    pub fn open_modal(&mut self, record: &FileRecord) -> FetchRequest {
        self.modal_open = true;
        self.modal_target = Some(record.clone());
        let ticket = self.ticket(&record.id);
        self.modal.begin(ticket.clone());
        FetchRequest {
            surface: Surface::Modal,
            ticket,
        }
    }

    /// Hide the modal. Its buffer is left as is; the next open resets it.
    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    // --- Content results ---

    /// Apply a content fetch result to its surface.
    ///
    /// With the stale guard on, a result whose ticket is no longer the
    /// surface's pending ticket is dropped. With it off, every result lands
    /// in its buffer.
    pub fn apply_content<E>(
        &mut self,
        surface: Surface,
        ticket: &RequestTicket,
        result: Result<String, E>,
    ) -> Applied {
        let guard = self.stale_guard;
        let buffer = self.buffer_mut(surface);
        let current = buffer.pending.as_ref() == Some(ticket);
        if guard && !current {
            return Applied::Stale;
        }
        if current {
            buffer.loading = false;
            buffer.pending = None;
        }
        match result {
            Ok(text) => {
                buffer.text = text;
                Applied::Updated
            }
            Err(_) => Applied::Failed,
        }
    }

    // --- Delete ---

    /// Apply a delete result for `id`. Only a confirmed delete touches
    /// state.
    pub fn apply_delete<E>(&mut self, id: &FileId, result: Result<(), E>) -> Applied {
        if result.is_err() {
            return Applied::Failed;
        }
        self.files.retain(|f| &f.id != id);
        self.selected = None;
        self.preview.clear();
        self.modal.clear();
        Applied::Updated
    }
}
