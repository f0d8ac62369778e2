use yew::prelude::*;

/// Properties for the `SchemaFormComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct SchemaFormProps {
    /// Origin of the extraction/generation service. Defaults to the
    /// development service when not set.
    #[prop_or_default]
    pub api_base: Option<String>,
}
