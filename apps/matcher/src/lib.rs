//! Resume vs. job description matching client.
//!
//! An `AnalysisSession` collects a resume and a job description, submits them to
//! the analysis service once per attempt, and holds the resulting `MatchReport`
//! for `ReportView` to band and trim for display.

pub mod config;
pub mod controller;
pub mod errors;
pub mod input;
pub mod render;
pub mod report;
pub mod service;
