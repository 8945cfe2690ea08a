//! Terminal front end for SkyCast.
//!
//! Keyboard events become [`action::Action`]s, the [`reducer`] applies them
//! to [`state::AppState`] and returns [`effect::Effect`]s, and the runtime
//! turns effects into background tasks whose results come back as actions.

pub mod action;
pub mod components;
pub mod effect;
pub mod error_mapping;
pub mod input;
pub mod reducer;
pub mod runtime;
pub mod services;
pub mod state;
pub mod theme;

pub use runtime::{run, RunOptions};
