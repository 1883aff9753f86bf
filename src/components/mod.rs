//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render section internals while reading/writing shared state
//! from Leptos context providers.

pub mod history_card;
pub mod poll_builder;
