//! Result Renderer: maps a `MatchReport` onto score bands and display lists.
//!
//! Everything here is a pure function of the report. Truncation borrows a
//! prefix of the report's lists and never copies or mutates them.

use serde::{Deserialize, Serialize};

/// Keyword and skill lists show at most this many entries.
pub const MAX_DISPLAYED_KEYWORDS: usize = 15;

const GOOD_THRESHOLD: i64 = 80;
const MODERATE_THRESHOLD: i64 = 60;

// ────────────────────────────────────────────────────────────────────────────
// Wire model
// ────────────────────────────────────────────────────────────────────────────

/// Body of a successful `/api/analyze` response.
///
/// Scores are nominally 0–100 but are not clamped; out-of-range values are shown as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub overall_score: i64,
    pub keyword_score: i64,
    pub hard_skills_score: i64,
    pub coverage_score: i64,
    pub missing_keywords: Vec<String>,
    pub matched_keywords: Vec<String>,
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub matched_hard_skills: Vec<String>,
    #[serde(default)]
    pub missing_hard_skills: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Bands
// ────────────────────────────────────────────────────────────────────────────

/// Qualitative tier of a 0–100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Good,
    Moderate,
    Poor,
}

/// Semantic color attached to a band. The presentation layer picks the actual shade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BandColor {
    Green,
    Amber,
    Red,
}

impl ScoreBand {
    pub fn for_score(score: i64) -> Self {
        if score >= GOOD_THRESHOLD {
            ScoreBand::Good
        } else if score >= MODERATE_THRESHOLD {
            ScoreBand::Moderate
        } else {
            ScoreBand::Poor
        }
    }

    pub fn color(self) -> BandColor {
        match self {
            ScoreBand::Good => BandColor::Green,
            ScoreBand::Moderate => BandColor::Amber,
            ScoreBand::Poor => BandColor::Red,
        }
    }

    /// Headline used for the overall score.
    pub fn headline(self) -> &'static str {
        match self {
            ScoreBand::Good => "Excellent match!",
            ScoreBand::Moderate => "Good match with room for improvement",
            ScoreBand::Poor => "Needs significant optimization",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Good => "good",
            ScoreBand::Moderate => "moderate",
            ScoreBand::Poor => "poor",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// View
// ────────────────────────────────────────────────────────────────────────────

/// A percentage badge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBadge {
    pub label: &'static str,
    pub score: i64,
    pub band: ScoreBand,
    pub color: BandColor,
}

impl ScoreBadge {
    pub fn new(label: &'static str, score: i64) -> Self {
        let band = ScoreBand::for_score(score);
        Self {
            label,
            score,
            band,
            color: band.color(),
        }
    }
}

/// Everything the presentation layer needs to show a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportView<'a> {
    pub headline: &'static str,
    pub overall: ScoreBadge,
    pub breakdown: [ScoreBadge; 3],
    pub missing_keywords: &'a [String],
    pub matched_keywords: &'a [String],
    pub missing_hard_skills: &'a [String],
    pub matched_hard_skills: &'a [String],
    pub recommendations: &'a [String],
}

impl<'a> ReportView<'a> {
    pub fn new(report: &'a MatchReport) -> Self {
        let overall = ScoreBadge::new("Overall Match", report.overall_score);

        Self {
            headline: overall.band.headline(),
            overall,
            breakdown: [
                ScoreBadge::new("Keyword Match", report.keyword_score),
                ScoreBadge::new("Hard Skills", report.hard_skills_score),
                ScoreBadge::new("Content Coverage", report.coverage_score),
            ],
            missing_keywords: displayed(&report.missing_keywords),
            matched_keywords: displayed(&report.matched_keywords),
            missing_hard_skills: displayed(&report.missing_hard_skills),
            matched_hard_skills: displayed(&report.matched_hard_skills),
            recommendations: &report.recommendations,
        }
    }
}

/// The first `MAX_DISPLAYED_KEYWORDS` entries, in received order.
pub fn displayed(items: &[String]) -> &[String] {
    &items[..items.len().min(MAX_DISPLAYED_KEYWORDS)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sample_report() -> MatchReport {
        serde_json::from_value(json!({
            "overall_score": 85,
            "keyword_score": 70,
            "hard_skills_score": 90,
            "coverage_score": 60,
            "missing_keywords": ["Docker", "Kubernetes"],
            "matched_keywords": ["Python"],
            "recommendations": ["Add more metrics"]
        }))
        .unwrap()
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(ScoreBand::for_score(100), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(80), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(79), ScoreBand::Moderate);
        assert_eq!(ScoreBand::for_score(60), ScoreBand::Moderate);
        assert_eq!(ScoreBand::for_score(59), ScoreBand::Poor);
        assert_eq!(ScoreBand::for_score(0), ScoreBand::Poor);
    }

    #[test]
    fn test_out_of_range_scores_are_shown_as_is() {
        let badge = ScoreBadge::new("Overall Match", 140);
        assert_eq!(badge.score, 140);
        assert_eq!(badge.band, ScoreBand::Good);

        let badge = ScoreBadge::new("Overall Match", -5);
        assert_eq!(badge.score, -5);
        assert_eq!(badge.band, ScoreBand::Poor);
    }

    #[test]
    fn test_band_colors_are_distinct() {
        assert_eq!(ScoreBand::Good.color(), BandColor::Green);
        assert_eq!(ScoreBand::Moderate.color(), BandColor::Amber);
        assert_eq!(ScoreBand::Poor.color(), BandColor::Red);
    }

    #[test]
    fn test_sample_report_view() {
        let report = sample_report();
        let view = ReportView::new(&report);

        assert_eq!(view.overall.band, ScoreBand::Good);
        assert_eq!(view.headline, "Excellent match!");
        assert_eq!(view.breakdown[0].band, ScoreBand::Moderate); // keyword 70
        assert_eq!(view.breakdown[1].band, ScoreBand::Good); // hard skills 90
        assert_eq!(view.breakdown[2].band, ScoreBand::Moderate); // coverage 60
        assert_eq!(view.missing_keywords, strings(&["Docker", "Kubernetes"]).as_slice());
        assert_eq!(view.matched_keywords, strings(&["Python"]).as_slice());
        assert_eq!(view.recommendations, strings(&["Add more metrics"]).as_slice());
    }

    #[test]
    fn test_headline_follows_overall_band() {
        let mut report = sample_report();
        report.overall_score = 65;
        assert_eq!(
            ReportView::new(&report).headline,
            "Good match with room for improvement"
        );
        report.overall_score = 12;
        assert_eq!(
            ReportView::new(&report).headline,
            "Needs significant optimization"
        );
    }

    #[test]
    fn test_keyword_lists_truncate_to_first_15() {
        let mut report = sample_report();
        report.missing_keywords = (0..20).map(|i| format!("kw{i}")).collect();

        let view = ReportView::new(&report);
        assert_eq!(view.missing_keywords.len(), 15);
        assert_eq!(view.missing_keywords[0], "kw0");
        assert_eq!(view.missing_keywords[14], "kw14");

        // Underlying report is untouched
        assert_eq!(report.missing_keywords.len(), 20);
    }

    #[test]
    fn test_recommendations_are_never_truncated() {
        let mut report = sample_report();
        report.recommendations = (0..25).map(|i| format!("rec {i}")).collect();

        let view = ReportView::new(&report);
        assert_eq!(view.recommendations.len(), 25);
        assert_eq!(view.recommendations[24], "rec 24");
    }

    #[test]
    fn test_hard_skill_lists_default_to_empty() {
        let report = sample_report();
        assert!(report.matched_hard_skills.is_empty());
        assert!(report.missing_hard_skills.is_empty());
    }

    #[test]
    fn test_hard_skill_lists_are_parsed_when_present() {
        let report: MatchReport = serde_json::from_value(json!({
            "overall_score": 40,
            "keyword_score": 30,
            "hard_skills_score": 50,
            "coverage_score": 45,
            "missing_keywords": [],
            "matched_keywords": [],
            "matched_hard_skills": ["python"],
            "missing_hard_skills": ["docker", "aws"],
            "recommendations": []
        }))
        .unwrap();

        let view = ReportView::new(&report);
        assert_eq!(view.missing_hard_skills, strings(&["docker", "aws"]).as_slice());
        assert_eq!(view.matched_hard_skills, strings(&["python"]).as_slice());
    }

    #[test]
    fn test_missing_field_is_a_parse_error() {
        let result = serde_json::from_value::<MatchReport>(json!({
            "overall_score": 85,
            "keyword_score": 70,
            "missing_keywords": [],
            "matched_keywords": [],
            "recommendations": []
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_view_serializes_bands_in_snake_case() {
        let report = sample_report();
        let value = serde_json::to_value(ReportView::new(&report)).unwrap();
        assert_eq!(value["overall"]["band"], "good");
        assert_eq!(value["overall"]["color"], "green");
        assert_eq!(value["breakdown"][0]["band"], "moderate");
        assert_eq!(value["headline"], "Excellent match!");
    }
}
