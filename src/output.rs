//! 端末向けの表示

use jagedo_match_common::{CountyList, MatchAction, ResultsBody, SearchView};
use std::fmt::Write;

/// 郡リストを1行1件で
pub fn format_counties(counties: &CountyList) -> String {
    let mut out = String::new();
    for county in counties.iter() {
        out.push_str(county);
        out.push('\n');
    }
    out
}

/// 検索結果（サマリー + 結果エリア）
pub fn format_view(view: &SearchView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.summary);
    let _ = writeln!(out);

    match &view.body {
        ResultsBody::Empty { placeholder } => {
            let _ = writeln!(out, "{}", placeholder);
        }
        ResultsBody::Error { message } => {
            let _ = writeln!(out, "{}", message);
        }
        ResultsBody::Matches { heading, entries } => {
            let _ = writeln!(out, "{}", heading);
            let actions = MatchAction::ALL
                .iter()
                .map(|a| format!("[{}]", a.label()))
                .collect::<Vec<_>>()
                .join(" ");
            for (i, entry) in entries.iter().enumerate() {
                let _ = write!(out, "{}. {} — {}", i + 1, entry.name, entry.county);
                if let Some(profession) = &entry.profession {
                    let _ = write!(out, " ({})", profession);
                }
                let _ = writeln!(out);
                let _ = writeln!(out, "   {}", entry.detail_line());
                let _ = writeln!(out, "   {}", actions);
            }
        }
    }
    out
}
