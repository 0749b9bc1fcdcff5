use chrono::Utc;

use crate::grading::types::{RankEntry, RosterReport};
use crate::roster::Roster;

/// Projects a roster into a position-ranked [`RosterReport`].
///
/// Rows are ordered by total descending; equal totals fall back to
/// roll no ascending so the ranking is deterministic. Positions are
/// assigned 1-based after the sort.
pub fn build_report(roster: &Roster) -> RosterReport {
    let mut entries: Vec<RankEntry> = roster
        .students()
        .map(|s| RankEntry {
            position: 0,
            id: s.id.clone(),
            name: s.name.clone(),
            total: s.total(),
            percentage: s.percentage(),
            grade: s.grade().to_string(),
        })
        .collect();

    entries.sort_by(|a, b| b.total.total_cmp(&a.total).then_with(|| a.id.cmp(&b.id)));

    for (i, entry) in entries.iter_mut().enumerate() {
        entry.position = i + 1;
    }

    RosterReport {
        generated_at: Utc::now(),
        subjects: roster.subjects().to_vec(),
        students: entries,
    }
}
