//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"JaGedo Match Making"</h1>
            <p class="text-muted">"Find available professionals by job type and county"</p>
        </header>
    }
}
