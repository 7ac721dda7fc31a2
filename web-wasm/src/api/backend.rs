//! ブラウザの fetch による `/counties` `/match` 呼び出し

use jagedo_match_common::{CountyList, Endpoints, Error, Match, Query, Result, SearchBackend};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// fetch APIを使うバックエンド
#[derive(Debug, Clone, Default)]
pub struct FetchBackend {
    endpoints: Endpoints,
}

impl FetchBackend {
    /// ページと同一オリジンのエンドポイントを使う
    pub fn same_origin() -> Self {
        Self {
            endpoints: Endpoints::same_origin(),
        }
    }
}

impl SearchBackend for FetchBackend {
    async fn fetch_counties(&self) -> Result<CountyList> {
        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::SameOrigin);

        let request = Request::new_with_str_and_init(&self.endpoints.counties_url(), &opts)
            .map_err(js_error)?;
        let json = send(&request).await?;

        serde_wasm_bindgen::from_value(json).map_err(|e| Error::Parse(e.to_string()))
    }

    async fn fetch_matches(&self, query: &Query) -> Result<Vec<Match>> {
        let body = serde_json::to_string(query)?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::SameOrigin);
        opts.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(&self.endpoints.match_url(), &opts)
            .map_err(js_error)?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;

        let json = send(&request).await?;

        serde_wasm_bindgen::from_value(json).map_err(|e| Error::Parse(e.to_string()))
    }
}

/// リクエストを送り、2xxならJSONボディを返す
async fn send(request: &Request) -> Result<JsValue> {
    let window = web_sys::window().ok_or_else(|| Error::Network("window is not available".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(Error::Status(resp.status()));
    }

    JsFuture::from(resp.json().map_err(js_error)?)
        .await
        .map_err(js_error)
}

/// JSの例外を通信エラーに変換（Errorならmessageを使う）
fn js_error(value: JsValue) -> Error {
    let message = match value.dyn_ref::<js_sys::Error>() {
        Some(e) => String::from(e.message()),
        None => value.as_string().unwrap_or_else(|| format!("{:?}", value)),
    };
    Error::Network(message)
}
