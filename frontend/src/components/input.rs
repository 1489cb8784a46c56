use leptos::*;

use crate::form::FieldBinding;
use crate::utils::INPUT_CLASS;

/// An `<input>` whose value and handlers come from a [`FieldBinding`].
///
/// The value is written as a DOM property, so it never shows up as an
/// attribute in rendered markup.
#[component]
pub fn BoundInput(
    binding: FieldBinding,
    #[prop(default = "text")] type_: &'static str,
    #[prop(optional_no_strip)] placeholder: Option<String>,
    #[prop(optional_no_strip)] autocomplete: Option<String>,
) -> impl IntoView {
    let FieldBinding {
        name,
        value,
        on_change,
        on_focus,
        on_blur,
    } = binding;

    view! {
        <input
            id=name.clone()
            name=name
            type=type_
            autocomplete=autocomplete
            placeholder=placeholder
            class=INPUT_CLASS
            prop:value=move || value.get()
            on:input=move |ev| on_change.call(event_target_value(&ev))
            on:focus=move |_: web_sys::FocusEvent| on_focus.call(())
            on:blur=move |_: web_sys::FocusEvent| on_blur.call(())
        />
    }
}
