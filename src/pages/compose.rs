//! Compose section: the confession form and its submission gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the confession text and the submit flow: text validation, then the
//! poll gate, then navigation to the thank-you section. The icon row hosts
//! the attachment inputs, the poll toggle, and a shortcut into history.

#[cfg(test)]
#[path = "compose_test.rs"]
mod compose_test;

use leptos::prelude::*;

use crate::components::poll_builder::PollBuilder;
use crate::net::source::HistorySourceHandle;
use crate::pages::history::trigger_history_load;
use crate::state::history::HistoryState;
use crate::state::poll::{PollDraft, PollValidationError};
use crate::state::ui::{Section, UiState};
use crate::util::browser;

/// Reject empty or whitespace-only confession text.
fn validate_confession_input(text: &str) -> Result<(), &'static str> {
    if text.trim().is_empty() {
        Err("Пожалуйста, напишите Confession!")
    } else {
        Ok(())
    }
}

/// Compose section: textarea, icon row, inline poll builder, submit.
#[component]
pub fn ComposePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let poll = expect_context::<RwSignal<PollDraft>>();
    let history = expect_context::<RwSignal<HistoryState>>();
    let source = expect_context::<HistorySourceHandle>();

    let text = RwSignal::new(String::new());

    let on_submit = move |_| {
        if let Err(message) = validate_confession_input(&text.get()) {
            browser::alert(message);
            return;
        }
        // The poll gate runs before any navigation happens.
        if let Err(error) = poll.get().validate() {
            browser::alert(&error.to_string());
            match error {
                PollValidationError::EmptyTopic => ui.update(UiState::focus_poll_topic),
                PollValidationError::TooFewAnswers => ui.update(UiState::focus_poll_answer),
            }
            return;
        }
        text.set(String::new());
        poll.update(PollDraft::reset);
        ui.update(|u| u.show_section(Section::ThankYou));
    };

    // Two entry points into history: the icon and the footer link.
    let source_icon = source.clone();
    let open_history_icon = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ui.update(|u| u.show_section(Section::History));
        trigger_history_load(history, &source_icon);
    };
    let open_history_link = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ui.update(|u| u.show_section(Section::History));
        trigger_history_load(history, &source);
    };

    // No upload path exists; selecting a file only acknowledges the choice.
    let on_attachment = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            if input.files().is_some_and(|files| files.length() > 0) {
                browser::alert("File(s) selected!");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &ev;
        }
    };

    view! {
        <section
            id="confess-section"
            class="confess-section main-content"
            style:display=move || if ui.get().section == Section::Compose { "flex" } else { "none" }
        >
            <h1 class="confess-title">"Confessions"</h1>
            <textarea
                class="confession-input"
                placeholder="Напишите свой Confession..."
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            ></textarea>
            <div class="icon-row">
                <label class="icon attach-photo" title="Прикрепить фото">
                    "📷"
                    <input type="file" accept="image/*" on:change=on_attachment/>
                </label>
                <label class="icon attach-file" title="Прикрепить файл">
                    "📎"
                    <input type="file" on:change=on_attachment/>
                </label>
                <button
                    class="icon poll-toggle-icon"
                    type="button"
                    title="Добавить опрос"
                    on:click=move |ev| {
                        ev.prevent_default();
                        poll.update(PollDraft::toggle);
                    }
                >
                    "📊"
                </button>
                <button
                    class="icon track-posts"
                    type="button"
                    title="Мои посты"
                    on:click=open_history_icon
                >
                    "🕓"
                </button>
            </div>
            <PollBuilder/>
            <button class="submit-btn" on:click=on_submit>
                "Отправить"
            </button>
            <a href="#" id="history-btn" class="history-link" on:click=open_history_link>
                "История постов"
            </a>
        </section>
    }
}
