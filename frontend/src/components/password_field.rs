use leptos::*;

use crate::components::error::FieldError;
use crate::components::input::BoundInput;
use crate::form::use_form;
use crate::utils::{class_names, col_span_class, LABEL_CLASS};

/// Labeled password input bound to the surrounding form.
///
/// `columns` is the grid span out of 12 and defaults to full width. Values
/// and handlers come from the form provided with
/// [`provide_form`](crate::form::provide_form); errors recorded for `name`
/// are shown below the input.
#[component]
pub fn PasswordField(
    #[prop(into)] name: String,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] columns: Option<u8>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] autocomplete: Option<String>,
) -> impl IntoView {
    let container_class = class_names([Some(col_span_class(columns)), class]);
    let form = use_form();
    let binding = form.bind(name.clone());
    let label = label.filter(|label| !label.is_empty()).map(|label| {
        let target = name.clone();
        view! { <label for=target class=LABEL_CLASS>{label}</label> }
    });

    view! {
        <div class=container_class>
            {label}
            <BoundInput
                binding=binding
                type_="password"
                placeholder=placeholder
                autocomplete=autocomplete
            />
            <div>
                <FieldError name=name form=form />
            </div>
        </div>
    }
}
