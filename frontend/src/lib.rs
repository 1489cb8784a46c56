pub mod components;
pub mod form;
pub mod utils;

pub use components::error::FieldError;
pub use components::input::BoundInput;
pub use components::password_field::PasswordField;
pub use form::{provide_form, use_field, use_form, FieldBinding, FieldState, FormState};
