//! Root application component with section routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::net::source::HistorySourceHandle;
use crate::pages::{compose::ComposePage, history::HistoryPage, thank_you::ThankYouPage};
use crate::state::{history::HistoryState, poll::PollDraft, ui::UiState};
use crate::util::browser;

/// Root application component.
///
/// Provides all shared state contexts plus the history source, and keeps
/// the viewport at the top whenever the visible section changes. Exactly
/// one of the three sections is visible at a time; all stay mounted so
/// in-progress drafts survive navigation.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let history = RwSignal::new(HistoryState::default());
    let poll = RwSignal::new(PollDraft::default());

    provide_context(ui);
    provide_context(history);
    provide_context(poll);
    provide_context(HistorySourceHandle::simulated());

    Effect::new(move || {
        let _section = ui.get().section;
        browser::scroll_to_top();
    });

    view! {
        <Title text="Confessions"/>

        <main class="app">
            <ComposePage/>
            <ThankYouPage/>
            <HistoryPage/>
        </main>
    }
}
