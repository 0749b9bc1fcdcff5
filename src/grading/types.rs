//! Data types for the ranked roster report.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One position-ranked row of the report.
#[derive(Debug, Clone, Serialize)]
pub struct RankEntry {
    pub position: usize,
    pub id: String,
    pub name: String,
    pub total: f64,
    pub percentage: f64,
    pub grade: String,
}

/// Complete ranked snapshot of a roster, serialized for export.
#[derive(Debug, Serialize)]
pub struct RosterReport {
    pub generated_at: DateTime<Utc>,
    pub subjects: Vec<String>,
    pub students: Vec<RankEntry>,
}
