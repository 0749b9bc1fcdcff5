//! Interactive roster session: the terminal front end.
//!
//! Replays the add / update / display flow of a marks-entry form as a
//! menu loop on stdin. Core errors are recoverable: they are shown to
//! the user verbatim and the menu re-prompts; only a failed roster
//! construction from `--subjects` is fatal.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use marks_rater::grading::report::build_report;
use marks_rater::output;
use marks_rater::roster::Roster;
use tracing::{debug, info};

pub struct SessionOptions {
    pub subjects: Option<String>,
    pub count: usize,
    pub export_csv: Option<String>,
    pub export_json: Option<String>,
}

pub fn run(opts: SessionOptions) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(opts, &mut stdin.lock(), &mut stdout.lock())
}

fn run_session(
    opts: SessionOptions,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let mut roster = match &opts.subjects {
        Some(list) => Roster::new(parse_subject_list(list))?,
        None => loop {
            let names = prompt_subjects(input, out, opts.count)?;
            match Roster::new(names) {
                Ok(roster) => break roster,
                Err(e) => writeln!(out, "Error: {e}")?,
            }
        },
    };

    info!(subjects = roster.subject_count(), "Session started");

    loop {
        writeln!(out)?;
        writeln!(out, "1) Add student")?;
        writeln!(out, "2) Update marks")?;
        writeln!(out, "3) Show roster")?;
        writeln!(out, "4) Export report")?;
        writeln!(out, "5) Quit")?;

        let Some(choice) = prompt(input, out, "> ")? else {
            break;
        };

        match choice.trim() {
            "1" => add_student(&mut roster, input, out)?,
            "2" => update_marks(&mut roster, input, out)?,
            "3" => show_roster(&roster, out)?,
            "4" => export_report(&roster, input, out)?,
            "5" | "q" | "quit" => break,
            other => writeln!(out, "Unknown choice: {other}")?,
        }
    }

    // Exit-time exports requested up front
    let report = build_report(&roster);
    if let Some(path) = &opts.export_csv {
        output::write_report_csv(path, &report)?;
    }
    if let Some(path) = &opts.export_json {
        output::write_report_json(path, &report)?;
    }

    info!(students = roster.len(), "Session ended");
    Ok(())
}

fn parse_subject_list(list: &str) -> Vec<String> {
    list.split(',').map(|s| s.trim().to_string()).collect()
}

fn prompt_subjects(
    input: &mut impl BufRead,
    out: &mut impl Write,
    count: usize,
) -> Result<Vec<String>> {
    writeln!(out, "Enter {count} subject names:")?;

    let mut subjects = Vec::with_capacity(count);
    for i in 1..=count {
        let Some(name) = prompt(input, out, &format!("Subject {i}: "))? else {
            anyhow::bail!("input ended before all subject names were entered");
        };
        subjects.push(name.trim().to_string());
    }

    Ok(subjects)
}

fn add_student(roster: &mut Roster, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    let Some(id) = prompt(input, out, "Roll no: ")? else {
        return Ok(());
    };
    let Some(name) = prompt(input, out, "Name: ")? else {
        return Ok(());
    };

    let Some(marks) = collect_marks(roster, input, out, None)? else {
        return Ok(());
    };

    match roster.add_student(id.trim(), name.trim(), marks) {
        Ok(()) => {
            info!(id = %id.trim(), "Student added");
            writeln!(out, "Student {} added.", name.trim())?;
        }
        Err(e) => writeln!(out, "Error: {e}")?,
    }

    Ok(())
}

fn update_marks(roster: &mut Roster, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    let Some(id) = prompt(input, out, "Roll no: ")? else {
        return Ok(());
    };
    let id = id.trim().to_string();

    let Some(record) = roster.get(&id) else {
        writeln!(out, "No student with roll no: {id}")?;
        return Ok(());
    };
    let name = record.name.clone();
    let current = record.marks.clone();

    let Some(marks) = collect_marks(roster, input, out, Some(&current))? else {
        return Ok(());
    };

    match roster.update_marks(&id, marks) {
        Ok(()) => {
            info!(id = %id, "Marks updated");
            writeln!(out, "Marks updated for {name}.")?;
        }
        Err(e) => writeln!(out, "Error: {e}")?,
    }

    Ok(())
}

/// Prompts for one mark per subject and returns the full vector, or
/// `None` if input ended or a value failed to parse.
///
/// When `current` marks are given (the update flow), each prompt shows
/// the existing value and blank input keeps it; the vector is still
/// validated and replaced whole by the caller.
fn collect_marks(
    roster: &Roster,
    input: &mut impl BufRead,
    out: &mut impl Write,
    current: Option<&[f64]>,
) -> Result<Option<Vec<f64>>> {
    let mut marks = Vec::with_capacity(roster.subject_count());

    for (i, subject) in roster.subjects().iter().enumerate() {
        let label = match current {
            Some(existing) => format!("{subject} [{}]: ", existing[i]),
            None => format!("{subject}: "),
        };

        let Some(raw) = prompt(input, out, &label)? else {
            return Ok(None);
        };
        let raw = raw.trim();

        if raw.is_empty() {
            if let Some(existing) = current {
                marks.push(existing[i]);
                continue;
            }
        }

        match raw.parse::<f64>() {
            Ok(value) => marks.push(value),
            Err(_) => {
                writeln!(out, "Marks must be numbers between 0 and 100.")?;
                return Ok(None);
            }
        }
    }

    Ok(Some(marks))
}

fn show_roster(roster: &Roster, out: &mut impl Write) -> Result<()> {
    if roster.is_empty() {
        writeln!(out, "No students yet.")?;
        return Ok(());
    }

    let report = build_report(roster);
    output::print_pretty(&report);
    write!(out, "{}", output::format_table(&report))?;

    Ok(())
}

fn export_report(roster: &Roster, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    let report = build_report(roster);

    let Some(csv_path) = prompt(input, out, "CSV path (blank to skip): ")? else {
        return Ok(());
    };
    let csv_path = csv_path.trim();
    if !csv_path.is_empty() {
        match output::write_report_csv(csv_path, &report) {
            Ok(()) => writeln!(out, "Report written to {csv_path}.")?,
            Err(e) => writeln!(out, "Error: {e}")?,
        }
    }

    let Some(json_path) = prompt(input, out, "JSON path (blank to skip): ")? else {
        return Ok(());
    };
    let json_path = json_path.trim();
    if !json_path.is_empty() {
        match output::write_report_json(json_path, &report) {
            Ok(()) => writeln!(out, "Report written to {json_path}.")?,
            Err(e) => writeln!(out, "Error: {e}")?,
        }
    }

    Ok(())
}

/// Writes `label`, flushes, and reads one line. Returns `None` on EOF.
fn prompt(
    input: &mut impl BufRead,
    out: &mut impl Write,
    label: &str,
) -> Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        debug!("stdin closed");
        return Ok(None);
    }

    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn opts(subjects: &str) -> SessionOptions {
        SessionOptions {
            subjects: Some(subjects.to_string()),
            count: 6,
            export_csv: None,
            export_json: None,
        }
    }

    fn run_script(options: SessionOptions, script: &str) -> String {
        let mut input = Cursor::new(script.to_string());
        let mut out = Vec::new();
        run_session(options, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_add_and_show_flow() {
        let script = "1\n1\nAlice\n95\n85\n3\n5\n";
        let output = run_script(opts("Math,Sci"), script);

        assert!(output.contains("Student Alice added."));
        assert!(output.contains("Alice"));
        assert!(output.contains("180.0"));
        assert!(output.contains("90.00%"));
        assert!(output.contains("A1"));
    }

    #[test]
    fn test_duplicate_roll_no_is_reported_and_loop_continues() {
        let script = "1\n1\nAlice\n95\n85\n1\n1\nBob\n10\n20\n5\n";
        let output = run_script(opts("Math,Sci"), script);

        assert!(output.contains("Error: Duplicate roll no: 1"));
    }

    #[test]
    fn test_update_with_blank_keeps_current_value() {
        // Update leaves Math at 95, sets Sci to 55
        let script = "1\n1\nAlice\n95\n85\n2\n1\n\n55\n3\n5\n";
        let output = run_script(opts("Math,Sci"), script);

        assert!(output.contains("Marks updated for Alice."));
        assert!(output.contains("150.0"));
        assert!(output.contains("75.00%"));
    }

    #[test]
    fn test_unknown_roll_no_on_update() {
        let script = "2\n404\n5\n";
        let output = run_script(opts("Math,Sci"), script);

        assert!(output.contains("No student with roll no: 404"));
    }

    #[test]
    fn test_out_of_range_mark_is_rejected_verbatim() {
        let script = "1\n1\nAlice\n95\n101\n5\n";
        let output = run_script(opts("Math,Sci"), script);

        assert!(output.contains("Error: Validation error"));
        assert!(output.contains("between 0 and 100"));
    }

    #[test]
    fn test_eof_ends_session() {
        let output = run_script(opts("Math,Sci"), "");
        assert!(output.contains("1) Add student"));
    }
}
