//! Client-side login/signup form.
//!
//! There is no account backend: a submission with both fields filled in is
//! accepted as-is. Only emptiness is checked.

pub mod form;

pub use form::{AuthForm, AuthMode, AuthOutcome, Field};
