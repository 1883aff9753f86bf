//! History-panel state: the fetched post list and its loading lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filled by the async history-source calls triggered from the history and
//! compose pages. A request in flight blocks further triggers; completions
//! fully replace the list.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::net::types::HistoryItem;

/// State behind the history section.
#[derive(Clone, Debug, Default)]
pub struct HistoryState {
    /// Records from the last completed fetch, in source order.
    pub items: Vec<HistoryItem>,
    /// True while a fetch or clear request is in flight.
    pub loading: bool,
    /// Message from the last failed request, shown in place of the list.
    pub error: Option<String>,
}

impl HistoryState {
    /// Start a request. Returns `false` (and changes nothing) when another
    /// request is already pending; triggers are rejected while one is in
    /// flight rather than racing completions.
    pub fn begin_loading(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    /// Complete a request, replacing the list with `items`.
    pub fn finish_loading(&mut self, items: Vec<HistoryItem>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Fail a request, keeping whatever list was shown before it started.
    pub fn fail_loading(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Header line above the list, recomputed from the current count.
    pub fn header_label(&self) -> String {
        format!("История ваших последних {} постов", self.items.len())
    }
}
