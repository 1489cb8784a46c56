pub mod error;
pub mod input;
pub mod password_field;
