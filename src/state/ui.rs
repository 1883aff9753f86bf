//! Section visibility and cross-component focus requests.
//!
//! DESIGN
//! ======
//! The page is a single document with three mutually exclusive sections;
//! encoding the visible one as an enum makes "exactly one section visible"
//! hold by construction instead of by discipline.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// The three top-level sections of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    /// The confession compose form (initial section).
    #[default]
    Compose,
    /// Post-submission thank-you screen.
    ThankYou,
    /// Past-posts history list.
    History,
}

/// UI chrome state: which section is visible, plus focus-request counters.
///
/// The `*_focus_seq` counters follow the bump-a-sequence idiom: submission
/// validation bumps one, and an effect inside the poll builder focuses the
/// matching input whenever its counter changes.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub section: Section,
    pub poll_topic_focus_seq: u64,
    pub poll_answer_focus_seq: u64,
}

impl UiState {
    /// Replace the visible section. Always allowed; fully replaces the
    /// previous section.
    pub fn show_section(&mut self, section: Section) {
        self.section = section;
    }

    /// Request focus on the poll topic input.
    pub fn focus_poll_topic(&mut self) {
        self.poll_topic_focus_seq += 1;
    }

    /// Request focus on the poll answer input.
    pub fn focus_poll_answer(&mut self) {
        self.poll_answer_focus_seq += 1;
    }
}
