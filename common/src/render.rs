//! 検索結果の表示モデル
//!
//! Leptosコンポーネントと端末出力の両方がこのモデルを描画する。

use crate::error::Error;
use crate::types::{Match, Query};

pub const EMPTY_PLACEHOLDER: &str = "No data available.";
pub const NOT_AVAILABLE: &str = "N/A";

/// 1回の検索結果の表示内容
#[derive(Debug, Clone, PartialEq)]
pub struct SearchView {
    pub summary: String,
    pub body: ResultsBody,
}

impl SearchView {
    /// 取得失敗の表示ならそのメッセージ
    pub fn error_message(&self) -> Option<&str> {
        match &self.body {
            ResultsBody::Error { message } => Some(message),
            _ => None,
        }
    }
}

/// 結果エリアの中身
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsBody {
    Empty { placeholder: String },
    Matches { heading: String, entries: Vec<MatchEntry> },
    Error { message: String },
}

/// マッチ1件分の表示
#[derive(Debug, Clone, PartialEq)]
pub struct MatchEntry {
    pub name: String,
    pub county: String,
    pub rating: String,
    pub availability: &'static str,
    pub match_score: String,
    pub profession: Option<String>,
    pub job_type: String,
}

/// マッチ候補に対する操作（現状は確認メッセージのみ）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    ManualMatch,
    FlagForReview,
}

impl MatchAction {
    pub const ALL: [MatchAction; 2] = [MatchAction::ManualMatch, MatchAction::FlagForReview];

    pub fn label(self) -> &'static str {
        match self {
            MatchAction::ManualMatch => "Manual Match",
            MatchAction::FlagForReview => "Flag for Review",
        }
    }

    /// ボタンのCSSクラス
    pub fn class(self) -> &'static str {
        match self {
            MatchAction::ManualMatch => "",
            MatchAction::FlagForReview => "flag",
        }
    }
}

impl MatchEntry {
    pub fn from_match(m: &Match, job_type: &str) -> Self {
        Self {
            name: m.name.clone(),
            county: if m.county.is_empty() {
                NOT_AVAILABLE.to_string()
            } else {
                m.county.clone()
            },
            rating: rating_label(m.rating),
            availability: if m.available { "Yes" } else { "No" },
            match_score: m
                .match_score
                .map(format_number)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            profession: m.profession.clone(),
            job_type: job_type.to_string(),
        }
    }

    /// 詳細行 `Rating: 4.5 | Availability: Yes | Match Score: 0.92`
    pub fn detail_line(&self) -> String {
        format!(
            "Rating: {} | Availability: {} | Match Score: {}",
            self.rating, self.availability, self.match_score
        )
    }

    pub fn title(&self, action: MatchAction) -> String {
        match action {
            MatchAction::ManualMatch => format!("Manually assign {} to this search", self.name),
            MatchAction::FlagForReview => "Flag this match for review".to_string(),
        }
    }

    pub fn acknowledgment(&self, action: MatchAction) -> String {
        match action {
            MatchAction::ManualMatch => {
                format!("Manual match triggered for {} on \"{}\"", self.name, self.job_type)
            }
            MatchAction::FlagForReview => {
                format!("Flagged match of {} on \"{}\" for review", self.name, self.job_type)
            }
        }
    }
}

/// 受信したマッチを表示モデルに変換（順序は受信順のまま）
pub fn render_matches(matches: &[Match], query: &Query) -> SearchView {
    let Query { job_type, location } = query;

    if matches.is_empty() {
        return SearchView {
            summary: format!("No professionals found for \"{}\" in \"{}\".", job_type, location),
            body: ResultsBody::Empty {
                placeholder: EMPTY_PLACEHOLDER.to_string(),
            },
        };
    }

    SearchView {
        summary: format!(
            "Showing {} professionals for \"{}\" in \"{}\".",
            matches.len(),
            job_type,
            location
        ),
        body: ResultsBody::Matches {
            heading: format!("Search: \"{}\" in \"{}\"", job_type, location),
            entries: matches
                .iter()
                .map(|m| MatchEntry::from_match(m, job_type))
                .collect(),
        },
    }
}

/// 取得失敗時の表示
pub fn render_error(error: &Error, query: &Query) -> SearchView {
    SearchView {
        summary: format!(
            "Failed to fetch matches for \"{}\" in \"{}\".",
            query.job_type, query.location
        ),
        body: ResultsBody::Error {
            message: format!("Error: {}", error),
        },
    }
}

/// 評価の表示。null・0・NaN は N/A
pub fn rating_label(rating: Option<f64>) -> String {
    match rating {
        Some(r) if r != 0.0 && !r.is_nan() => format_number(r),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// ブラウザと同じ見た目で数値を文字列化する（4.0 → "4", 1e21 → "1e+21"）
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.abs() >= 1e21 || value.abs() < 1e-6 {
        let exp = format!("{:e}", value);
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        };
    }
    if value.fract() == 0.0 {
        return format!("{:.0}", value);
    }
    format!("{}", value)
}
