//! 検索結果コンポーネント
//!
//! サマリー行と結果エリア（一覧・該当なし・エラー）

use jagedo_match_common::{ResultsBody, SearchView};
use leptos::prelude::*;
use super::match_card::MatchCard;

#[component]
pub fn SearchResults(results: ReadSignal<Option<SearchView>>) -> impl IntoView {
    let summary = move || results.get().map(|v| v.summary).unwrap_or_default();

    let body = move || match results.get().map(|v| v.body) {
        None => ().into_any(),
        Some(ResultsBody::Empty { placeholder }) => {
            view! { <p class="empty-state">{placeholder}</p> }.into_any()
        }
        Some(ResultsBody::Error { message }) => {
            view! { <p class="empty-state">{message}</p> }.into_any()
        }
        Some(ResultsBody::Matches { heading, entries }) => {
            view! {
                <div class="search-item">
                    <h3>{heading}</h3>
                    {entries
                        .into_iter()
                        .map(|entry| view! { <MatchCard entry=entry /> })
                        .collect_view()}
                </div>
            }
            .into_any()
        }
    };

    view! {
        <section class="results">
            <p id="summaryText" class="summary">{summary}</p>
            <div id="searchResults">{body}</div>
        </section>
    }
}
