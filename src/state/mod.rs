//! Application state modules.
//!
//! DESIGN
//! ======
//! State lives in plain structs mutated through named operations, provided
//! to the view layer as `RwSignal` contexts. Keeping transitions on the
//! structs (rather than in event-handler closures) makes every gate and
//! invariant testable without a browser.

pub mod history;
pub mod poll;
pub mod ui;
