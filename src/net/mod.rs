//! History-source contract and record types.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the record schema the UI renders; `source` defines the
//! asynchronous collaborator that produces it. There is no real transport —
//! the shipped source simulates one with timers and fixed data.

pub mod source;
pub mod types;
