//! 検索の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Query: 職種と地域の検索条件
//! - Match: バックエンドが返すマッチ候補
//! - CountyList: 地域サジェスト用の郡リスト

use serde::{Deserialize, Deserializer, Serialize};

/// 検索条件（`/match` のリクエストボディ）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    pub job_type: String,
    pub location: String,
}

impl Query {
    /// 入力値から検索条件を組み立てる
    ///
    /// locationはtrimされる。どちらかが空なら None
    pub fn from_inputs(job_type: &str, location: &str) -> Option<Self> {
        let location = location.trim();
        if job_type.is_empty() || location.is_empty() {
            return None;
        }
        Some(Self {
            job_type: job_type.to_string(),
            location: location.to_string(),
        })
    }
}

/// マッチ候補
///
/// 欠けているフィールドは既定値で補う（未知のフィールドは無視）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub county: String,

    #[serde(default)]
    pub rating: Option<f64>,

    #[serde(default, deserialize_with = "null_as_false")]
    pub available: bool,

    #[serde(default)]
    pub match_score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
}

/// null は false として扱う
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// 郡名リスト（返却順を保持、重複排除はしない）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountyList(pub Vec<String>);

/// 郡リスト取得失敗時のサジェスト
pub const DEFAULT_COUNTY: &str = "Nairobi";

impl CountyList {
    pub fn fallback() -> Self {
        Self(vec![DEFAULT_COUNTY.to_string()])
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// 職種の選択肢 (value, label)
pub const JOB_TYPES: &[(&str, &str)] = &[
    ("plumbing", "Plumbing"),
    ("electrical", "Electrical"),
    ("carpentry", "Carpentry"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_from_inputs_trims_location() {
        let query = Query::from_inputs("Plumber", "  Nairobi ").unwrap();
        assert_eq!(query.job_type, "Plumber");
        assert_eq!(query.location, "Nairobi");
    }

    #[test]
    fn test_query_from_inputs_blank() {
        assert!(Query::from_inputs("", "Nairobi").is_none());
        assert!(Query::from_inputs("Plumber", "").is_none());
        assert!(Query::from_inputs("Plumber", "   ").is_none());
    }

    #[test]
    fn test_query_serialize_camel_case() {
        let query = Query::from_inputs("plumbing", "Mombasa").unwrap();
        let json = serde_json::to_string(&query).unwrap();
        assert_eq!(json, r#"{"jobType":"plumbing","location":"Mombasa"}"#);
    }

    #[test]
    fn test_match_deserialize_full() {
        let json = r#"{
            "name": "Jane Wanjiku",
            "county": "Nairobi",
            "rating": 4.5,
            "available": true,
            "match_score": 0.92,
            "profession": "Plumber"
        }"#;
        let m: Match = serde_json::from_str(json).unwrap();
        assert_eq!(m.name, "Jane Wanjiku");
        assert_eq!(m.rating, Some(4.5));
        assert_eq!(m.match_score, Some(0.92));
        assert!(m.available);
        assert_eq!(m.profession.as_deref(), Some("Plumber"));
    }

    #[test]
    fn test_match_deserialize_null_rating_and_missing_optionals() {
        let json = r#"{"name": "Otieno", "county": "Kisumu", "rating": null, "match_score": 0.4}"#;
        let m: Match = serde_json::from_str(json).unwrap();
        assert_eq!(m.rating, None);
        assert!(!m.available);
        assert_eq!(m.profession, None);
    }

    #[test]
    fn test_match_available_null_is_false() {
        let json = r#"{"name": "Otieno", "county": "Kisumu", "available": null, "match_score": 0.4}"#;
        let m: Match = serde_json::from_str(json).unwrap();
        assert!(!m.available);
    }

    #[test]
    fn test_match_backend_shape_without_county_and_score() {
        // /match が返す実際の形（id, skills, distance 付き、county と match_score なし）
        let json = r#"[
            {"id": 1, "name": "A", "skills": ["plumbing"], "rating": 4.5, "distance": 1.2, "available": true},
            {"id": 3, "name": "B", "skills": ["plumbing"], "rating": 3.0, "distance": 4.8, "available": null}
        ]"#;
        let matches: Vec<Match> = serde_json::from_str(json).unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].name, "A");
        assert_eq!(matches[0].county, "");
        assert_eq!(matches[0].match_score, None);
        assert_eq!(matches[0].rating, Some(4.5));
        assert!(matches[0].available);
        assert!(!matches[1].available);
    }

    #[test]
    fn test_match_malformed_is_error() {
        assert!(serde_json::from_str::<Vec<Match>>(r#"{"unexpected": true}"#).is_err());
        assert!(serde_json::from_str::<Match>(r#"{"name": 42}"#).is_err());
    }

    #[test]
    fn test_county_list_keeps_order_and_duplicates() {
        let list: CountyList = serde_json::from_str(r#"["Nairobi","Mombasa","Nairobi"]"#).unwrap();
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["Nairobi", "Mombasa", "Nairobi"]);
    }

    #[test]
    fn test_county_list_fallback() {
        assert_eq!(CountyList::fallback().0, vec!["Nairobi".to_string()]);
    }
}
