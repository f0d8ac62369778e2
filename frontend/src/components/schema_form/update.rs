//! Update function for the schema form, Elm-style: it receives the current
//! state, the component `Context`, and a `Msg`, mutates the state and returns
//! whether the view should re-render.
//!
//! All three network actions (upload, generate, push) run through
//! `wasm_bindgen_futures::spawn_local` and report back as messages. Each
//! action owns a `RequestSlot`; starting it again aborts the stale in-flight
//! request, and an aborted future never sends its result message.

use gloo_console::error;
use gloo_net::http::Request;
use serde_json::Value;
use wasm_bindgen_futures::spawn_local;
use web_sys::{AbortSignal, File, FormData};
use yew::prelude::*;

use common::model::column::ColumnKind;
use common::model::form::GenerateRequest;
use common::model::response::{push_payload, PayloadError, ServiceResponse};
use common::model::table::project;

use super::helpers::alert;
use super::messages::Msg;
use super::state::{ResponseOutcome, SchemaFormComponent};

/// Development origin of the extraction/generation service; overridable via
/// the `api_base` prop.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8089";

pub fn update(
    component: &mut SchemaFormComponent,
    ctx: &Context<SchemaFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetTableName(name) => {
            component.table_name = name;
            true
        }
        Msg::AddColumn => {
            component.add_column();
            true
        }
        Msg::RemoveColumn(id) => {
            component.remove_column(id);
            true
        }
        Msg::SetColumnName(id, name) => {
            if let Some(descriptor) = component.column_mut(id) {
                descriptor.name = name;
            }
            true
        }
        Msg::SetColumnKind(id, label) => {
            if let Some(descriptor) = component.column_mut(id) {
                descriptor.kind = ColumnKind::from_label(&label);
            }
            true
        }
        Msg::SetReferenceTable(id, value) => {
            if let Some(descriptor) = component.column_mut(id) {
                descriptor.reference_table = value;
            }
            true
        }
        Msg::SetOnColumnName(id, value) => {
            if let Some(descriptor) = component.column_mut(id) {
                descriptor.on_column_name = value;
            }
            true
        }

        Msg::FileSelected(None) => {
            component.upload_status = Some("Please select a file to upload.".to_string());
            true
        }
        Msg::FileSelected(Some(file)) => {
            let Some(controller) = component.upload_request.begin() else {
                return false;
            };
            component.uploading = true;
            component.upload_status = Some("Uploading...".to_string());

            let base = api_base(ctx);
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = upload_and_extract(&base, &file, &controller.signal()).await;
                // A newer upload superseded this one; drop the stale result.
                if controller.signal().aborted() {
                    return;
                }
                link.send_message(Msg::UploadFinished(result));
            });
            true
        }
        Msg::UploadFinished(result) => {
            component.uploading = false;
            component.upload_request.finish();
            match result {
                Ok(text) => {
                    component.extracted_text = text;
                    component.upload_status = None;
                }
                Err(message) => {
                    error!(message.as_str());
                    component.upload_status = Some(message);
                }
            }
            true
        }

        Msg::Submit => {
            let request = match GenerateRequest::build(
                &component.table_name,
                &component.columns,
                &component.extracted_text,
            ) {
                Ok(request) => request,
                Err(form_error) => {
                    component.outcome = ResponseOutcome::Notice(form_error.to_string());
                    return true;
                }
            };
            let Some(controller) = component.generate_request.begin() else {
                return false;
            };
            component.generating = true;

            let base = api_base(ctx);
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = generate(&base, &request, &controller.signal()).await;
                if controller.signal().aborted() {
                    return;
                }
                link.send_message(Msg::GenerateFinished(result));
            });
            true
        }
        Msg::GenerateFinished(result) => {
            component.generating = false;
            component.generate_request.finish();
            match result {
                Ok(response) => {
                    component.outcome = match project(&response) {
                        Ok(tables) => ResponseOutcome::Tables(tables),
                        Err(payload_error) => {
                            ResponseOutcome::Notice(payload_error.to_string())
                        }
                    };
                    // Kept even when rendering degraded; the insert action
                    // re-validates the payload itself.
                    component.service_response = Some(response);
                }
                Err(message) => {
                    error!(message.as_str());
                    component.outcome = ResponseOutcome::Notice(message);
                }
            }
            true
        }

        Msg::PushData => {
            let Some(response) = component.service_response.clone() else {
                alert("No data to insert. Please generate a response first.");
                return false;
            };
            let payload = match push_payload(&response) {
                Ok(payload) => payload,
                Err(PayloadError::NoData) => {
                    alert("No data available in the payload to determine columns.");
                    return false;
                }
                Err(PayloadError::Malformed) => {
                    alert("An error occurred while inserting data.");
                    return false;
                }
            };
            let Some(controller) = component.push_request.begin() else {
                return false;
            };
            component.pushing = true;

            let base = api_base(ctx);
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = push(&base, &payload, &controller.signal()).await;
                if controller.signal().aborted() {
                    return;
                }
                link.send_message(Msg::PushFinished(result));
            });
            true
        }
        Msg::PushFinished(result) => {
            component.pushing = false;
            component.push_request.finish();
            match result {
                Ok(body) => {
                    alert(&format!("Data inserted successfully: {body}"));
                }
                Err(message) => {
                    error!(message.as_str());
                    alert(&message);
                }
            }
            true
        }
    }
}

fn api_base(ctx: &Context<SchemaFormComponent>) -> String {
    ctx.props()
        .api_base
        .clone()
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

/// Multipart POST of the chosen file; a 2xx body is the extracted text.
async fn upload_and_extract(
    base: &str,
    file: &File,
    signal: &AbortSignal,
) -> Result<String, String> {
    let form = FormData::new().map_err(|_| "An error occurred: could not build the upload form".to_string())?;
    form.append_with_blob("file", file)
        .map_err(|_| "An error occurred: could not attach the file".to_string())?;

    let response = Request::post(&format!("{base}/upload-and-extract-text/"))
        .abort_signal(Some(signal))
        .body(form)
        .map_err(|err| format!("An error occurred: {err}"))?
        .send()
        .await
        .map_err(|err| format!("An error occurred: {err}"))?;

    let text = response
        .text()
        .await
        .map_err(|err| format!("An error occurred: {err}"))?;
    if response.ok() {
        Ok(text)
    } else {
        Err(format!("Upload failed: {text}"))
    }
}

async fn generate(
    base: &str,
    request: &GenerateRequest,
    signal: &AbortSignal,
) -> Result<ServiceResponse, String> {
    let response = Request::post(&format!("{base}/generate-response"))
        .abort_signal(Some(signal))
        .json(request)
        .map_err(|err| format!("Error: {err}"))?
        .send()
        .await
        .map_err(|err| format!("Error: {err}"))?;

    if !response.ok() {
        return Err(format!(
            "Error: API request failed with status: {}",
            response.status()
        ));
    }
    response
        .json::<ServiceResponse>()
        .await
        .map_err(|err| format!("Error: {err}"))
}

async fn push(base: &str, payload: &Value, signal: &AbortSignal) -> Result<String, String> {
    let response = Request::post(&format!("{base}/push-data/"))
        .abort_signal(Some(signal))
        .json(payload)
        .map_err(|err| format!("An error occurred while inserting data: {err}"))?
        .send()
        .await
        .map_err(|err| format!("An error occurred while inserting data: {err}"))?;

    let body = response
        .text()
        .await
        .map_err(|err| format!("An error occurred while inserting data: {err}"))?;
    if response.ok() {
        Ok(body)
    } else {
        Err(format!(
            "Failed to insert data. Status: {}, Message: {}",
            response.status(),
            body
        ))
    }
}
