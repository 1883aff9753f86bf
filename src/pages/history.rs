//! History section: past posts with their moderation status.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list is requested from the injected history source when the section
//! is opened and on explicit clear. Requests are fire-and-forget; a trigger
//! while one is pending is dropped, and failures render inline.

use leptos::prelude::*;

use crate::components::history_card::HistoryCard;
use crate::net::source::HistorySourceHandle;
use crate::state::history::HistoryState;
use crate::state::ui::{Section, UiState};

/// Kick off an async history fetch. Dropped if a request is pending.
pub(crate) fn trigger_history_load(history: RwSignal<HistoryState>, source: &HistorySourceHandle) {
    let mut started = false;
    history.update(|h| started = h.begin_loading());
    if !started {
        return;
    }
    #[cfg(feature = "csr")]
    {
        let source = source.clone();
        leptos::task::spawn_local(async move {
            match source.0.fetch_history().await {
                Ok(items) => history.update(|h| h.finish_loading(items)),
                Err(message) => {
                    leptos::logging::warn!("history fetch failed: {message}");
                    history.update(|h| h.fail_loading(message));
                }
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = source;
    }
}

/// Kick off an async history clear. Dropped if a request is pending.
pub(crate) fn trigger_history_clear(history: RwSignal<HistoryState>, source: &HistorySourceHandle) {
    let mut started = false;
    history.update(|h| started = h.begin_loading());
    if !started {
        return;
    }
    #[cfg(feature = "csr")]
    {
        let source = source.clone();
        leptos::task::spawn_local(async move {
            match source.0.clear_history().await {
                Ok(()) => history.update(|h| h.finish_loading(Vec::new())),
                Err(message) => {
                    leptos::logging::warn!("history clear failed: {message}");
                    history.update(|h| h.fail_loading(message));
                }
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = source;
    }
}

/// History section: header with post count, the card list, back and clear.
#[component]
pub fn HistoryPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let history = expect_context::<RwSignal<HistoryState>>();
    let source = expect_context::<HistorySourceHandle>();

    let on_back = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ui.update(|u| u.show_section(Section::Compose));
    };

    let on_clear = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        trigger_history_clear(history, &source);
    };

    view! {
        <section
            id="history-section"
            class="history-section"
            style:display=move || if ui.get().section == Section::History { "flex" } else { "none" }
        >
            <div class="history-header">{move || history.get().header_label()}</div>
            <div id="history-list" class="history-list">
                {move || {
                    let state = history.get();
                    if state.loading {
                        view! { <div class="history-loading">"Загрузка истории..."</div> }
                            .into_any()
                    } else if let Some(message) = state.error {
                        view! { <div class="history-error">{message}</div> }.into_any()
                    } else if state.items.is_empty() {
                        view! { <div class="history-empty">"История ваших постов пуста"</div> }
                            .into_any()
                    } else {
                        state
                            .items
                            .into_iter()
                            .map(|item| view! { <HistoryCard item=item/> })
                            .collect::<Vec<_>>()
                            .into_any()
                    }
                }}
            </div>
            <div class="history-actions">
                <a href="#" id="history-back-btn" class="history-back" on:click=on_back>
                    "Назад"
                </a>
                <button id="history-clear-btn" class="history-clear" on:click=on_clear>
                    "Очистить историю"
                </button>
            </div>
        </section>
    }
}
