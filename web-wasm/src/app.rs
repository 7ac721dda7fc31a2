//! メインアプリケーションコンポーネント

use jagedo_match_common::{load_counties, run_query, CountyList, InputEvent, QueryState, SearchView};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::Event;

use crate::api::backend::FetchBackend;
use crate::components::{
    header::Header,
    search_form::SearchForm,
    search_results::SearchResults,
};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let backend = FetchBackend::same_origin();

    // 入力とサジェスト
    let (counties, set_counties) = signal(CountyList::default());
    let (job_type, set_job_type) = signal(String::new());
    let (location, set_location) = signal(String::new());

    // 最新の表示（後から届いたレスポンスで上書き）
    let (results, set_results) = signal(None::<SearchView>);

    // 直近の検索条件
    let query_state = StoredValue::new(QueryState::new());

    // 郡リストはページ読み込み時に1回だけ取得
    {
        let backend = backend.clone();
        spawn_local(async move {
            let load = load_counties(&backend).await;
            if let Some(e) = &load.error {
                gloo::console::error!("Error fetching counties:", e.to_string());
            }
            set_counties.set(load.counties);
        });
    }

    // 職種変更・地域入力・送信
    let on_event = move |event: InputEvent, ev: Event| {
        if event.prevents_default() {
            ev.prevent_default();
        }

        let mut next = None;
        query_state.update_value(|state| {
            next = state.apply(&job_type.get_untracked(), &location.get_untracked());
        });
        let Some(query) = next else {
            return;
        };

        let backend = backend.clone();
        spawn_local(async move {
            let view = run_query(&backend, &query).await;
            if let Some(message) = view.error_message() {
                gloo::console::error!("Error fetching matches:", message.to_string());
            }
            set_results.set(Some(view));
        });
    };

    view! {
        <div class="container">
            <Header />

            <SearchForm
                counties=counties
                job_type=job_type
                set_job_type=set_job_type
                location=location
                set_location=set_location
                on_event=on_event
            />

            <SearchResults results=results />
        </div>
    }
}
