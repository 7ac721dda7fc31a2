//! 入力イベントと検索条件の同期

use crate::types::Query;

/// 検索を再計算するきっかけとなる入力イベント
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// 職種セレクトの change
    JobTypeChanged,
    /// 地域テキストの input
    LocationInput,
    /// フォーム送信（呼び出し側で既定の遷移を抑止する）
    Submit,
}

impl InputEvent {
    /// ブラウザ既定の動作（フォーム送信による遷移）を抑止するか
    pub fn prevents_default(self) -> bool {
        matches!(self, InputEvent::Submit)
    }
}

/// 直近に入力された職種と地域
///
/// 空欄でイベントが来た場合も値は更新されるが、検索は発行しない。
/// 以前の結果表示はそのまま残す。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    job_type: String,
    location: String,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 入力値を取り込み、検索すべき条件があれば返す
    pub fn apply(&mut self, job_type: &str, location: &str) -> Option<Query> {
        self.job_type = job_type.to_string();
        self.location = location.trim().to_string();
        self.current()
    }

    /// 現在の値で検索可能なら Query
    pub fn current(&self) -> Option<Query> {
        Query::from_inputs(&self.job_type, &self.location)
    }

    pub fn job_type(&self) -> &str {
        &self.job_type
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_with_both_fields() {
        let mut state = QueryState::new();
        let query = state.apply("plumbing", " Nairobi ").unwrap();
        assert_eq!(query.job_type, "plumbing");
        assert_eq!(query.location, "Nairobi");
        assert_eq!(state.location(), "Nairobi");
    }

    #[test]
    fn test_apply_blank_job_type_yields_nothing() {
        let mut state = QueryState::new();
        assert!(state.apply("", "Nairobi").is_none());
    }

    #[test]
    fn test_apply_blank_location_yields_nothing() {
        let mut state = QueryState::new();
        assert!(state.apply("plumbing", "   ").is_none());
    }

    #[test]
    fn test_blank_input_overwrites_previous_values() {
        let mut state = QueryState::new();
        state.apply("plumbing", "Nairobi");
        assert!(state.current().is_some());

        state.apply("plumbing", "");
        assert!(state.current().is_none());
        assert_eq!(state.job_type(), "plumbing");
    }

    #[test]
    fn test_only_submit_prevents_default() {
        assert!(InputEvent::Submit.prevents_default());
        assert!(!InputEvent::JobTypeChanged.prevents_default());
        assert!(!InputEvent::LocationInput.prevents_default());
    }

    #[test]
    fn test_every_keystroke_produces_query() {
        let mut state = QueryState::new();
        let queries: Vec<_> = ["N", "Na", "Nai"]
            .iter()
            .filter_map(|loc| state.apply("electrical", loc))
            .collect();
        assert_eq!(queries.len(), 3);
        assert_eq!(queries[2].location, "Nai");
    }
}
