//! Inline poll builder attached to the compose form.
//!
//! Renders the topic input, the accepted answer list, and the answer input
//! with its add button. All transitions go through [`PollDraft`] methods;
//! this component is wiring only.

use leptos::prelude::*;

use crate::state::poll::PollDraft;
use crate::state::ui::UiState;

/// The poll sub-form. Hidden while the draft is inactive.
#[component]
pub fn PollBuilder() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let poll = expect_context::<RwSignal<PollDraft>>();

    let topic_ref = NodeRef::<leptos::html::Input>::new();
    let answer_ref = NodeRef::<leptos::html::Input>::new();

    // Focus requests arrive as sequence bumps from the submission gate.
    Effect::new(move || {
        if ui.get().poll_topic_focus_seq == 0 {
            return;
        }
        #[cfg(feature = "csr")]
        {
            if let Some(el) = topic_ref.get() {
                let _ = el.focus();
            }
        }
    });

    Effect::new(move || {
        if ui.get().poll_answer_focus_seq == 0 {
            return;
        }
        #[cfg(feature = "csr")]
        {
            if let Some(el) = answer_ref.get() {
                let _ = el.focus();
            }
        }
    });

    let do_add = move || {
        poll.update(|p| {
            let _ = p.add_answer();
        });
    };

    view! {
        <div
            id="poll-section"
            class="poll-section"
            style:display=move || if poll.get().active { "block" } else { "none" }
        >
            <input
                class="poll-topic"
                type="text"
                placeholder="Тема опроса"
                node_ref=topic_ref
                prop:value=move || poll.get().topic
                on:input=move |ev| poll.update(|p| p.set_topic(event_target_value(&ev)))
            />
            <div id="poll-answers-list" class="poll-answers-list">
                {move || {
                    poll.get()
                        .answers
                        .into_iter()
                        .enumerate()
                        .map(|(index, answer)| {
                            view! {
                                <div class="poll-answer-item">
                                    <span class="poll-answer-text">{answer}</span>
                                    <button
                                        class="poll-answer-delete"
                                        type="button"
                                        title="Удалить"
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            poll.update(|p| p.remove_answer(index));
                                        }
                                    >
                                        "✖"
                                    </button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <div class="poll-answer-row">
                <input
                    class="poll-answer-input"
                    class:input-error=move || poll.get().input_error
                    type="text"
                    placeholder="Вариант ответа"
                    node_ref=answer_ref
                    prop:value=move || poll.get().input
                    on:input=move |ev| poll.update(|p| p.set_input(event_target_value(&ev)))
                    on:focus=move |_| poll.update(PollDraft::focus_input)
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            do_add();
                        }
                    }
                />
                <button
                    class="poll-add-btn"
                    type="button"
                    disabled=move || !poll.get().can_add()
                    on:click=move |ev| {
                        ev.prevent_default();
                        do_add();
                    }
                >
                    "Добавить"
                </button>
            </div>
            <div class="poll-actions">
                <button
                    class="poll-close-answers-btn"
                    type="button"
                    on:click=move |ev| {
                        ev.prevent_default();
                        poll.update(PollDraft::clear_answers);
                    }
                >
                    "Очистить ответы"
                </button>
                <button
                    class="poll-remove-btn"
                    type="button"
                    on:click=move |ev| {
                        ev.prevent_default();
                        poll.update(PollDraft::remove);
                    }
                >
                    "Убрать опрос"
                </button>
            </div>
        </div>
    }
}
