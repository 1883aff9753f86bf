//! One rendered history record.
//!
//! DESIGN
//! ======
//! The card body is assembled by a pure string renderer and injected via
//! `inner_html`, which keeps the markup — and the escaping of every piece
//! of user-supplied text — testable without a DOM. `card_html` is the only
//! place user text meets markup.

#[cfg(test)]
#[path = "history_card_test.rs"]
mod history_card_test;

use leptos::prelude::*;

use crate::net::types::{HistoryItem, ModerationStatus};
use crate::util::datetime::format_datetime;
use crate::util::text::escape_html;

/// Card for a single past post.
#[component]
pub fn HistoryCard(item: HistoryItem) -> impl IntoView {
    let html = card_html(&item);
    view! { <div class="history-card rich" inner_html=html></div> }
}

/// Render the card interior. All user-supplied text is escaped here.
pub(crate) fn card_html(item: &HistoryItem) -> String {
    let date = format_datetime(&item.created_at.with_timezone(&chrono::Local));
    let status = match item.moderation_status {
        ModerationStatus::Pending => {
            r#"<span class="status moderation">Ожидает модерации</span>"#.to_owned()
        }
        ModerationStatus::Blocked => format!(
            r#"<span class="status blocked">Заблокировано: {}</span>"#,
            escape_html(item.block_reason.as_deref().unwrap_or_default())
        ),
    };
    format!(
        r#"<div class="card-top-row"><span class="conf-logo">Confessions</span><span class="card-date">{date}</span></div><div class="card-text">{text}</div><div class="card-status-row">{status}<span class="card-datelabel">{date}</span></div>"#,
        date = date,
        text = escape_html(&item.text),
        status = status,
    )
}
