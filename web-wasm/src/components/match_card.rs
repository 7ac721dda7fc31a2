//! マッチ候補カードコンポーネント

use jagedo_match_common::{MatchAction, MatchEntry};
use leptos::prelude::*;

#[component]
pub fn MatchCard(entry: MatchEntry) -> impl IntoView {
    let buttons = MatchAction::ALL
        .into_iter()
        .map(|action| {
            let title = entry.title(action);
            let message = entry.acknowledgment(action);
            view! {
                <button
                    class=action.class()
                    title=title
                    on:click=move |_| gloo::dialogs::alert(&message)
                >
                    {action.label()}
                </button>
            }
        })
        .collect_view();

    let profession = entry
        .profession
        .clone()
        .map(|p| view! { <span class="profession">{format!(" ({})", p)}</span> });

    view! {
        <div class="match-card">
            <strong>{entry.name.clone()}</strong>
            " — "
            <em>{entry.county.clone()}</em>
            {profession}
            <br />
            {entry.detail_line()}
            <br />
            <div class="btn-group">{buttons}</div>
        </div>
    }
}
