use common::model::response::ServiceResponse;

#[derive(Clone)]
pub enum Msg {
    SetTableName(String),
    AddColumn,
    RemoveColumn(usize),
    SetColumnName(usize, String),
    SetColumnKind(usize, String),
    SetReferenceTable(usize, String),
    SetOnColumnName(usize, String),
    /// `None` when the file dialog was dismissed without a selection.
    FileSelected(Option<web_sys::File>),
    /// `Ok` carries the extracted text; `Err` carries the finished status line.
    UploadFinished(Result<String, String>),
    Submit,
    GenerateFinished(Result<ServiceResponse, String>),
    PushData,
    /// `Ok` carries the service's JSON result body; `Err` the alert message.
    PushFinished(Result<String, String>),
}
