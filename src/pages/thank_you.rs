//! Thank-you section shown after a successful submission.

use leptos::prelude::*;

use crate::state::ui::{Section, UiState};

#[component]
pub fn ThankYouPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_back = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ui.update(|u| u.show_section(Section::Compose));
    };

    view! {
        <section
            id="thank-section"
            class="thank-section"
            style:display=move || if ui.get().section == Section::ThankYou { "flex" } else { "none" }
        >
            <h1 class="thank-title">"Спасибо!"</h1>
            <p class="thank-text">"Ваш Confession отправлен на модерацию."</p>
            <a href="#" id="back-btn" class="thank-back" on:click=on_back>
                "Вернуться"
            </a>
        </section>
    }
}
