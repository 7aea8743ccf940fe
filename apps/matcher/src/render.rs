//! Terminal presentation of a `ReportView`.

use std::fmt::Write;

use crate::report::{ReportView, ScoreBadge};

/// Plain-text report, one section per block.
pub fn render_text(view: &ReportView<'_>) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "{}", badge_line(&view.overall));
    let _ = writeln!(out, "{}", view.headline);
    let _ = writeln!(out);

    for badge in &view.breakdown {
        let _ = writeln!(out, "  {}", badge_line(badge));
    }

    write_list(&mut out, "Matched Keywords", view.matched_keywords);
    write_list(&mut out, "Missing Keywords", view.missing_keywords);
    write_list(&mut out, "Matched Hard Skills", view.matched_hard_skills);
    write_list(&mut out, "Missing Hard Skills", view.missing_hard_skills);

    if !view.recommendations.is_empty() {
        let _ = writeln!(out, "\nRecommendations:");
        for (i, rec) in view.recommendations.iter().enumerate() {
            let _ = writeln!(out, "  {}. {rec}", i + 1);
        }
    }

    out
}

pub fn render_json(view: &ReportView<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(view)
}

fn badge_line(badge: &ScoreBadge) -> String {
    format!("{}: {}% ({})", badge.label, badge.score, badge.band.label())
}

fn write_list(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{title}:");
    let _ = writeln!(out, "  {}", items.join(", "));
}
