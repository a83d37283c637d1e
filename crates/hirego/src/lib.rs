//! Assessment mapping and scoring engine for HireGo.
//!
//! Turns a candidate's completed assessment results into a per-skill proficiency profile for a
//! job-role template, then derives an overall fit score, gaps, strengths, and recommendations.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
