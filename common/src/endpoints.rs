//! バックエンドのエンドポイント

use crate::error::{Error, Result};

pub const COUNTIES_PATH: &str = "/counties";
pub const MATCH_PATH: &str = "/match";

/// エンドポイントの基底URL
///
/// ブラウザでは空文字（同一オリジンの相対パス）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn same_origin() -> Self {
        Self::default()
    }

    pub fn with_base(base: &str) -> Result<Self> {
        let base = base.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(Error::Config("base URL is empty".into()));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(Error::Config(format!("base URL must start with http:// or https://: {}", base)));
        }
        Ok(Self { base: base.to_string() })
    }

    pub fn counties_url(&self) -> String {
        format!("{}{}", self.base, COUNTIES_PATH)
    }

    pub fn match_url(&self) -> String {
        format!("{}{}", self.base, MATCH_PATH)
    }
}
