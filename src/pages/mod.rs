//! Section-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns one top-level section and its orchestration (navigation,
//! submission gate, history triggers) and delegates rendering details to
//! `components`. All three stay mounted; the section router toggles their
//! visibility so in-progress form state survives navigation.

pub mod compose;
pub mod history;
pub mod thank_you;
