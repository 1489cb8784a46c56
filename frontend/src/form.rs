//! Form state shared by bound fields.
//!
//! A [`FormState`] owns the current value and status of every named field.
//! Components never write to it directly; they receive a [`FieldBinding`]
//! whose callbacks route updates back into the form.

use std::collections::HashMap;

use leptos::logging::debug_warn;
use leptos::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldState {
    pub value: String,
    pub initial: String,
    pub touched: bool,
    pub dirty: bool,
    pub active: bool,
    pub error: Option<String>,
}

impl FieldState {
    fn with_initial(value: String) -> Self {
        Self {
            initial: value.clone(),
            value,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FormState {
    fields: RwSignal<HashMap<String, FieldState>>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            fields: create_rw_signal(HashMap::new()),
        }
    }

    /// Creates a form whose fields start pristine at the given values.
    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let fields = values
            .into_iter()
            .map(|(k, v)| (k.into(), FieldState::with_initial(v.into())))
            .collect();
        Self {
            fields: create_rw_signal(fields),
        }
    }

    pub fn field(&self, name: &str) -> FieldState {
        self.fields
            .with(|fields| fields.get(name).cloned().unwrap_or_default())
    }

    pub fn value(&self, name: &str) -> String {
        self.fields
            .with(|fields| fields.get(name).map(|f| f.value.clone()).unwrap_or_default())
    }

    pub fn error(&self, name: &str) -> Option<String> {
        self.fields
            .with(|fields| fields.get(name).and_then(|f| f.error.clone()))
    }

    pub fn change(&self, name: &str, value: String) {
        self.update_field(name, |field| {
            field.dirty = value != field.initial;
            field.value = value;
        });
    }

    pub fn focus(&self, name: &str) {
        self.update_field(name, |field| field.active = true);
    }

    pub fn blur(&self, name: &str) {
        self.update_field(name, |field| {
            field.active = false;
            field.touched = true;
        });
    }

    /// Records the outcome of the caller's validation for `name`.
    pub fn set_error(&self, name: &str, error: Option<String>) {
        self.update_field(name, |field| field.error = error);
    }

    pub fn values(&self) -> HashMap<String, String> {
        self.fields.with_untracked(|fields| {
            fields
                .iter()
                .map(|(name, field)| (name.clone(), field.value.clone()))
                .collect()
        })
    }

    pub fn snapshot(&self) -> HashMap<String, FieldState> {
        self.fields.get_untracked()
    }

    pub fn bind(&self, name: impl Into<String>) -> FieldBinding {
        let form = *self;
        let name = name.into();

        let value = {
            let name = name.clone();
            Signal::derive(move || form.value(&name))
        };
        let on_change = {
            let name = name.clone();
            Callback::new(move |value: String| form.change(&name, value))
        };
        let on_focus = {
            let name = name.clone();
            Callback::new(move |_: ()| form.focus(&name))
        };
        let on_blur = {
            let name = name.clone();
            Callback::new(move |_: ()| form.blur(&name))
        };

        FieldBinding {
            name,
            value,
            on_change,
            on_focus,
            on_blur,
        }
    }

    fn update_field(&self, name: &str, f: impl FnOnce(&mut FieldState)) {
        self.fields.update(|fields| {
            f(fields.entry(name.to_string()).or_default());
        });
    }
}

/// Value and handlers for one named field.
#[derive(Clone)]
pub struct FieldBinding {
    pub name: String,
    pub value: Signal<String>,
    pub on_change: Callback<String>,
    pub on_focus: Callback<()>,
    pub on_blur: Callback<()>,
}

pub fn provide_form(form: FormState) {
    provide_context(form);
}

pub fn use_form() -> FormState {
    use_context::<FormState>().unwrap_or_else(|| {
        debug_warn!("no FormState in context; field state will not be shared");
        FormState::new()
    })
}

pub fn use_field(name: impl Into<String>) -> FieldBinding {
    use_form().bind(name)
}
