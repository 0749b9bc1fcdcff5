//! Output formatting and export for roster reports.
//!
//! Supports pretty-printing, a plain-text ranked table, and JSON/CSV
//! file export.

use std::fmt::Write as _;
use std::fs::File;

use csv::WriterBuilder;
use tracing::{debug, info};

use crate::error::Result;
use crate::grading::types::RosterReport;

/// Logs a roster report using Rust's debug pretty-print format.
pub fn print_pretty(report: &RosterReport) {
    debug!("{:#?}", report);
}

/// Renders the ranked roster as a plain-text table.
///
/// Totals are shown to one decimal, percentages to two decimals with a
/// `%` suffix.
pub fn format_table(report: &RosterReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>8}  {:<10}  {:<20}  {:>8}  {:>11}  {:<5}",
        "Position", "Roll No", "Name", "Total", "Percentage", "Grade"
    );
    for row in &report.students {
        let _ = writeln!(
            out,
            "{:>8}  {:<10}  {:<20}  {:>8.1}  {:>10.2}%  {:<5}",
            row.position, row.id, row.name, row.total, row.percentage, row.grade
        );
    }
    out
}

/// Writes a report as pretty-printed JSON to `path`.
pub fn write_report_json(path: &str, report: &RosterReport) -> Result<()> {
    let body = serde_json::to_vec_pretty(report)?;
    std::fs::write(path, body)?;

    info!(path, "Report written as JSON");
    Ok(())
}

/// Writes the ranked rows as a CSV file to `path`.
///
/// The file gets a header row and one data row per student, in rank
/// order.
pub fn write_report_csv(path: &str, report: &RosterReport) -> Result<()> {
    debug!(path, rows = report.students.len(), "Writing report CSV");

    let file = File::create(path)?;
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(file);

    for row in &report.students {
        writer.serialize(row)?;
    }
    writer.flush()?;

    info!(path, "Report written as CSV");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::report::build_report;
    use crate::roster::Roster;
    use std::env;
    use std::fs;
    use std::path::Path;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    fn sample_report() -> RosterReport {
        let mut roster =
            Roster::new(vec!["Math".to_string(), "Sci".to_string()]).unwrap();
        roster.add_student("1", "Alice", vec![95.0, 85.0]).unwrap();
        roster.add_student("2", "Bob", vec![55.0, 45.0]).unwrap();
        build_report(&roster)
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(&sample_report());
    }

    #[test]
    fn test_format_table_has_header_and_rank_order() {
        let table = format_table(&sample_report());
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Position"));
        assert!(lines[0].contains("Grade"));
        assert!(lines[1].contains("Alice"));
        assert!(lines[1].contains("180.0"));
        assert!(lines[1].contains("90.00%"));
        assert!(lines[1].contains("A1"));
        assert!(lines[2].contains("Bob"));
        assert!(lines[2].contains("50.00%"));
    }

    #[test]
    fn test_write_report_csv_creates_file_with_rows() {
        let path = temp_path("marks_rater_test_report.csv");
        let _ = fs::remove_file(&path); // clean up any prior run

        write_report_csv(&path, &sample_report()).unwrap();

        assert!(Path::new(&path).exists());
        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();

        // 1 header + 2 data rows
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("position"));
        assert!(lines[1].contains("Alice"));
        assert!(lines[2].contains("Bob"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_report_json_round_trip() {
        let path = temp_path("marks_rater_test_report.json");
        let _ = fs::remove_file(&path);

        write_report_json(&path, &sample_report()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert_eq!(value["subjects"][0], "Math");
        assert_eq!(value["students"][0]["position"], 1);
        assert_eq!(value["students"][0]["name"], "Alice");
        assert_eq!(value["students"][0]["grade"], "A1");

        fs::remove_file(&path).unwrap();
    }
}
