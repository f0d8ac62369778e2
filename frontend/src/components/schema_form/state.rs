//! Component state for the schema form.
//!
//! All mutable session data lives here: the table/column descriptors being
//! edited, the text extracted from the last upload, and the latest service
//! response. Nothing is process-wide; a new component instance starts a
//! fresh session.

use web_sys::AbortController;

use common::model::column::ColumnDescriptor;
use common::model::response::ServiceResponse;
use common::model::table::Projection;

/// One cancellable network action (upload, generate or push). Beginning a
/// new request aborts the previous in-flight one, so a stale response can
/// never overwrite newer state.
#[derive(Default)]
pub struct RequestSlot {
    controller: Option<AbortController>,
}

impl RequestSlot {
    /// Aborts any in-flight request and hands out the controller the new
    /// request must carry. `None` only if the browser refuses to create a
    /// controller, in which case the action is skipped.
    pub fn begin(&mut self) -> Option<AbortController> {
        if let Some(active) = self.controller.take() {
            active.abort();
        }
        let controller = AbortController::new().ok()?;
        self.controller = Some(controller.clone());
        Some(controller)
    }

    pub fn finish(&mut self) {
        self.controller = None;
    }
}

/// What the response area currently shows.
pub enum ResponseOutcome {
    /// Nothing generated yet.
    Empty,
    /// A single text message (validation failure, transport or parse error).
    Notice(String),
    /// The rendered tables: relation data first, then the primary data.
    Tables(Projection),
}

pub struct SchemaFormComponent {
    pub table_name: String,
    /// Ordered list of column descriptors. Order is display order only.
    pub columns: Vec<ColumnDescriptor>,
    next_column_id: usize,

    /// Text extracted from the last successful upload; overwritten by each
    /// new upload and mirrored into the visible input field.
    pub extracted_text: String,
    /// Status line under the file input ("Uploading...", failures).
    pub upload_status: Option<String>,

    /// Latest envelope from the generation endpoint, kept until the insert
    /// action consumes it or the next submit replaces it.
    pub service_response: Option<ServiceResponse>,
    pub outcome: ResponseOutcome,

    pub uploading: bool,
    pub generating: bool,
    pub pushing: bool,

    pub upload_request: RequestSlot,
    pub generate_request: RequestSlot,
    pub push_request: RequestSlot,
}

impl SchemaFormComponent {
    /// Starts with one empty column row, matching what the editor shows on
    /// first render.
    pub fn new() -> Self {
        let mut component = Self {
            table_name: String::new(),
            columns: Vec::new(),
            next_column_id: 1,
            extracted_text: String::new(),
            upload_status: None,
            service_response: None,
            outcome: ResponseOutcome::Empty,
            uploading: false,
            generating: false,
            pushing: false,
            upload_request: RequestSlot::default(),
            generate_request: RequestSlot::default(),
            push_request: RequestSlot::default(),
        };
        component.add_column();
        component
    }

    pub fn add_column(&mut self) {
        let id = self.next_column_id;
        self.next_column_id += 1;
        self.columns.push(ColumnDescriptor::new(id));
    }

    pub fn remove_column(&mut self, id: usize) {
        self.columns.retain(|descriptor| descriptor.id != id);
    }

    pub fn column_mut(&mut self, id: usize) -> Option<&mut ColumnDescriptor> {
        self.columns.iter_mut().find(|descriptor| descriptor.id == id)
    }
}
