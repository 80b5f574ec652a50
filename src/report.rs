use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::matching::MatchResult;

const BANNER_WIDTH: usize = 70;

/// Display metadata for one job, supplied by the caller (the engine never
/// computes or validates these).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobDisplay {
    pub title: String,
    pub company: String,
    pub location: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub display: JobDisplay,
    pub result: MatchResult,
}

/// Render an ordered result set as a plain-text report. Pure function of
/// its input; rank numbering follows the given order.
pub fn format_report(rows: &[ReportRow]) -> String {
    let mut out = String::new();
    let banner = "=".repeat(BANNER_WIDTH);

    writeln!(out, "{banner}").unwrap();
    writeln!(out, "JOB MATCHING REPORT").unwrap();
    writeln!(out, "{banner}").unwrap();
    writeln!(out).unwrap();

    for (rank, row) in rows.iter().enumerate() {
        let display = &row.display;
        let result = &row.result;

        writeln!(out, "{}. {} at {}", rank + 1, display.title, display.company).unwrap();
        writeln!(out, "   Match Score: {:.2}%", result.overall_score).unwrap();
        writeln!(out, "   Location: {}", display.location).unwrap();
        writeln!(out, "   URL: {}", display.url).unwrap();

        if !result.matched_skills.is_empty() {
            writeln!(out, "   Matched Skills: {}", result.matched_skills.join(", ")).unwrap();
        }

        writeln!(out, "   Score Breakdown:").unwrap();
        for (name, value) in labelled_signals(result) {
            writeln!(out, "     - {}: {:.1}%", name, value * 100.0).unwrap();
        }

        writeln!(out).unwrap();
    }

    out
}

fn labelled_signals(result: &MatchResult) -> [(&'static str, f64); 4] {
    [
        ("Lexical", result.scores.lexical),
        ("Statistical", result.scores.statistical),
        ("Semantic", result.scores.semantic),
        ("Skills", result.scores.skills),
    ]
}
