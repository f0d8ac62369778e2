//! View rendering for the schema form component.
//!
//! Layout, top to bottom: the table-name input, the dynamic column list
//! (selecting the Relation type reveals the two extra target inputs), the
//! file upload with its status line, the extracted-text mirror, the action
//! buttons, and the response area (relation table first, then the primary
//! data table).

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::column::{ColumnDescriptor, ColumnKind, COLUMN_KINDS};
use common::model::table::TableView;

use super::messages::Msg;
use super::state::{ResponseOutcome, SchemaFormComponent};

pub fn view(component: &SchemaFormComponent, ctx: &Context<SchemaFormComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="schema-form-root">
            { build_schema_section(component, link) }
            { build_upload_section(component, link) }
            { build_action_bar(component, link) }
            { build_response_section(component, link) }
        </div>
    }
}

fn build_schema_section(component: &SchemaFormComponent, link: &Scope<SchemaFormComponent>) -> Html {
    html! {
        <div class="schema-section">
            <label for="table-name">{"Table Name"}</label>
            <input
                id="table-name"
                type="text"
                value={component.table_name.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SetTableName(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />

            <label>{"Columns"}</label>
            <div id="columns-list">
                { for component.columns.iter().map(|descriptor| build_column_row(descriptor, link)) }
            </div>
            <button type="button" onclick={link.callback(|_| Msg::AddColumn)}>
                {"Add Column"}
            </button>
        </div>
    }
}

fn build_column_row(descriptor: &ColumnDescriptor, link: &Scope<SchemaFormComponent>) -> Html {
    let id = descriptor.id;
    let selected_label = descriptor
        .kind
        .map(|kind| kind.label().to_string())
        .unwrap_or_default();

    html! {
        <div class="column" key={id.to_string()}>
            <input
                type="text"
                class="column-name-input"
                placeholder="Column Name"
                value={descriptor.name.clone()}
                oninput={link.callback(move |e: InputEvent| {
                    Msg::SetColumnName(id, e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            <select
                class="column-type-select"
                value={selected_label.clone()}
                onchange={link.callback(move |e: Event| {
                    Msg::SetColumnKind(id, e.target_unchecked_into::<HtmlSelectElement>().value())
                })}
            >
                <option value="" selected={descriptor.kind.is_none()}>{"Type"}</option>
                {
                    for COLUMN_KINDS.iter().map(|kind| html! {
                        <option
                            value={kind.label()}
                            selected={descriptor.kind == Some(*kind)}
                        >
                            { kind.label() }
                        </option>
                    })
                }
            </select>
            {
                // The two relation sub-fields only exist while the Relation
                // type is selected.
                if descriptor.kind == Some(ColumnKind::Relation) {
                    html! {
                        <div class="relation-inputs">
                            <input
                                type="text"
                                class="reference-table-input"
                                placeholder="Reference Table Name"
                                value={descriptor.reference_table.clone()}
                                oninput={link.callback(move |e: InputEvent| {
                                    Msg::SetReferenceTable(id, e.target_unchecked_into::<HtmlInputElement>().value())
                                })}
                            />
                            <input
                                type="text"
                                class="on-column-name-input"
                                placeholder="On Column Name"
                                value={descriptor.on_column_name.clone()}
                                oninput={link.callback(move |e: InputEvent| {
                                    Msg::SetOnColumnName(id, e.target_unchecked_into::<HtmlInputElement>().value())
                                })}
                            />
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <button
                type="button"
                class="remove-column-btn"
                title="Remove column"
                onclick={link.callback(move |_| Msg::RemoveColumn(id))}
            >
                {"✕"}
            </button>
        </div>
    }
}

fn build_upload_section(component: &SchemaFormComponent, link: &Scope<SchemaFormComponent>) -> Html {
    html! {
        <div class="upload-section">
            <label for="file-input">{"Upload File"}</label>
            <input
                id="file-input"
                type="file"
                onchange={link.callback(|e: Event| {
                    Msg::FileSelected(
                        e.target_unchecked_into::<HtmlInputElement>()
                            .files()
                            .and_then(|files| files.get(0)),
                    )
                })}
            />
            {
                if let Some(status) = &component.upload_status {
                    html! { <p id="status">{ status }</p> }
                } else {
                    html! {}
                }
            }
            {
                if component.uploading {
                    loader()
                } else {
                    html! {}
                }
            }
            {
                if !component.extracted_text.is_empty() {
                    html! {
                        <textarea
                            id="input-text"
                            readonly={true}
                            rows={12}
                            value={component.extracted_text.clone()}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn build_action_bar(component: &SchemaFormComponent, link: &Scope<SchemaFormComponent>) -> Html {
    html! {
        <div class="action-bar">
            <button
                type="button"
                id="submit-btn"
                disabled={component.generating}
                onclick={link.callback(|_| Msg::Submit)}
            >
                {"Submit"}
            </button>
            <button
                type="button"
                id="insert-data-btn"
                disabled={component.service_response.is_none() || component.pushing}
                onclick={link.callback(|_| Msg::PushData)}
            >
                {"Insert Data"}
            </button>
            {
                if component.generating || component.pushing {
                    loader()
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn build_response_section(component: &SchemaFormComponent, _link: &Scope<SchemaFormComponent>) -> Html {
    html! {
        <div id="response-output">
            {
                match &component.outcome {
                    ResponseOutcome::Empty => html! {},
                    ResponseOutcome::Notice(message) => html! { <p>{ message }</p> },
                    ResponseOutcome::Tables(projection) => html! {
                        <>
                            {
                                if let Some(relation) = &projection.relation {
                                    render_table("Relation Data", relation)
                                } else {
                                    html! {}
                                }
                            }
                            { render_table("AI Agent Response", &projection.data) }
                        </>
                    },
                }
            }
        </div>
    }
}

fn render_table(title: &str, table: &TableView) -> Html {
    html! {
        <>
            <h3>{ title }</h3>
            <table class="response-table">
                <thead>
                    <tr>
                        { for table.headers.iter().map(|header| html! { <th>{ header }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    {
                        for table.rows.iter().map(|row| html! {
                            <tr>
                                { for row.iter().map(|cell| html! { <td>{ cell }</td> }) }
                            </tr>
                        })
                    }
                </tbody>
            </table>
        </>
    }
}

fn loader() -> Html {
    html! {
        <div class="loader" role="status">{"Loading..."}</div>
    }
}
