//! 検索コントローラ
//!
//! 通信は `SearchBackend` の実装（ブラウザの fetch / ネイティブの reqwest）に任せ、
//! フォールバックと表示モデルへの変換をここで行う。

use crate::error::{Error, Result};
use crate::query::QueryState;
use crate::render::{render_error, render_matches, SearchView};
use crate::types::{CountyList, Match, Query};

/// `/counties` と `/match` を叩く通信層
///
/// 非2xxは `Error::Status`、ボディの解析失敗は `Error::Json` を返すこと
#[allow(async_fn_in_trait)]
pub trait SearchBackend {
    async fn fetch_counties(&self) -> Result<CountyList>;
    async fn fetch_matches(&self, query: &Query) -> Result<Vec<Match>>;
}

/// 郡リストの読み込み結果
///
/// 失敗時は `counties` がフォールバックになり、`error` に原因が入る（ログ出力は呼び出し側）
#[derive(Debug)]
pub struct CountyLoad {
    pub counties: CountyList,
    pub error: Option<Error>,
}

/// 郡リストを取得。失敗時は "Nairobi" のみ
pub async fn load_counties<B: SearchBackend>(backend: &B) -> CountyLoad {
    match backend.fetch_counties().await {
        Ok(counties) => CountyLoad { counties, error: None },
        Err(e) => CountyLoad {
            counties: CountyList::fallback(),
            error: Some(e),
        },
    }
}

/// マッチを取得して表示モデルにする。失敗もエラー表示として返す
pub async fn run_query<B: SearchBackend>(backend: &B, query: &Query) -> SearchView {
    match backend.fetch_matches(query).await {
        Ok(matches) => render_matches(&matches, query),
        Err(e) => render_error(&e, query),
    }
}

/// 入力状態と通信層をまとめたコントローラ
#[derive(Debug)]
pub struct SearchController<B> {
    backend: B,
    state: QueryState,
}

impl<B: SearchBackend> SearchController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: QueryState::new(),
        }
    }

    pub async fn initialize(&self) -> CountyLoad {
        load_counties(&self.backend).await
    }

    /// 職種変更・地域入力・送信のいずれでも同じ処理。空欄なら通信せず None
    pub async fn handle(&mut self, job_type: &str, location: &str) -> Option<SearchView> {
        let query = self.state.apply(job_type, location)?;
        Some(run_query(&self.backend, &query).await)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
