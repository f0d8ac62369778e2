//! Schema form: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering, and helpers.
//!
//! The form lets the user describe a target table (name plus typed columns,
//! optionally with foreign-key relation targets), attach the text extracted
//! from an uploaded document, send the bundle to the generation service, and
//! push the generated rows into the datastore.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::SchemaFormProps;
pub use state::SchemaFormComponent;

impl Component for SchemaFormComponent {
    type Message = Msg;
    type Properties = SchemaFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SchemaFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
