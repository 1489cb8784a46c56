use leptos::*;

use crate::form::{use_form, FormState};
use crate::utils::ERROR_CLASS;

/// Shows the validation error recorded for `name`, or nothing.
///
/// Reads from `form` when given, otherwise from the form in context.
#[component]
pub fn FieldError(
    #[prop(into)] name: String,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] form: Option<FormState>,
) -> impl IntoView {
    let form = form.unwrap_or_else(use_form);
    let class = class.unwrap_or_else(|| ERROR_CLASS.to_string());

    move || {
        form.error(&name).map(|message| {
            view! { <p class=class.clone()>{message}</p> }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::provide_form;

    // Static classes render as `class=" a b"` on the server.
    fn has_class(html: &str, token: &str) -> bool {
        html.split("class=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .any(|classes| classes.split_whitespace().any(|c| c == token))
    }

    #[test]
    fn renders_nothing_without_an_error() {
        let html = leptos::ssr::render_to_string(|| {
            provide_form(FormState::new());
            view! { <FieldError name="password" /> }
        });

        assert!(!html.contains("<p"));
    }

    #[test]
    fn renders_the_error_for_its_own_field_only() {
        let html = leptos::ssr::render_to_string(|| {
            let form = FormState::new();
            form.set_error("password", Some("Too short".to_string()));
            form.set_error("confirm", Some("Does not match".to_string()));
            provide_form(form);
            view! { <FieldError name="password" class="error" /> }
        });

        assert!(has_class(&html, "error"));
        assert!(html.contains("Too short"));
        assert!(!html.contains("Does not match"));
    }

    #[test]
    fn reads_an_explicit_form_without_context() {
        let html = leptos::ssr::render_to_string(|| {
            let form = FormState::new();
            form.set_error("password", Some("Too short".to_string()));
            view! { <FieldError name="password" form=form /> }
        });

        assert!(html.contains("Too short"));
    }
}
