//! Student records and the in-memory roster store.
//!
//! A roster is bound to a fixed subject list at construction; every
//! record it holds carries one mark per subject. Writes validate
//! fail-closed: an invalid id, name, or marks vector rejects the whole
//! call and leaves the store untouched.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::error::{Result, RosterError};
use crate::grading::{grade, policy};

/// Upper bound of a single subject mark.
pub const MAX_MARK: f64 = 100.0;

/// One student: roll no, display name, and one mark per subject.
#[derive(Debug, Clone, Serialize)]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub marks: Vec<f64>,
}

impl StudentRecord {
    /// Sum of all marks.
    pub fn total(&self) -> f64 {
        policy::total(&self.marks)
    }

    /// Total expressed as a percentage of the maximum possible score.
    pub fn percentage(&self) -> f64 {
        policy::percentage(&self.marks)
    }

    /// Letter grade derived from the percentage.
    pub fn grade(&self) -> &'static str {
        grade::grade(self.percentage())
    }
}

/// In-memory mapping from roll no to [`StudentRecord`], bound to one
/// subject list. Iteration order is unspecified; ranked ordering is
/// the report builder's job.
#[derive(Debug)]
pub struct Roster {
    subjects: Vec<String>,
    students: HashMap<String, StudentRecord>,
}

impl Roster {
    /// Creates an empty roster bound to `subjects`.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Configuration`] if the list is empty or
    /// any subject name is blank.
    pub fn new(subjects: Vec<String>) -> Result<Self> {
        if subjects.is_empty() {
            return Err(RosterError::Configuration {
                message: "subject list must not be empty".to_string(),
            });
        }
        if let Some(pos) = subjects.iter().position(|s| s.trim().is_empty()) {
            return Err(RosterError::Configuration {
                message: format!("subject name {} is blank", pos + 1),
            });
        }

        Ok(Roster {
            subjects,
            students: HashMap::new(),
        })
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Inserts a new student with a full marks vector.
    ///
    /// # Errors
    ///
    /// [`RosterError::Validation`] for a blank id or name, a marks
    /// vector of the wrong length, or any mark outside [0, 100];
    /// [`RosterError::DuplicateKey`] if the roll no already exists.
    /// The store is unchanged on any error.
    pub fn add_student(&mut self, id: &str, name: &str, marks: Vec<f64>) -> Result<()> {
        if id.trim().is_empty() {
            return Err(RosterError::Validation {
                message: "roll no must not be blank".to_string(),
            });
        }
        if name.trim().is_empty() {
            return Err(RosterError::Validation {
                message: "name must not be blank".to_string(),
            });
        }
        self.validate_marks(&marks)?;
        if self.students.contains_key(id) {
            return Err(RosterError::DuplicateKey { id: id.to_string() });
        }

        debug!(id, name, "Adding student");
        self.students.insert(
            id.to_string(),
            StudentRecord {
                id: id.to_string(),
                name: name.to_string(),
                marks,
            },
        );

        Ok(())
    }

    /// Replaces an existing student's entire marks vector. Roll no and
    /// name are unchanged; there is no per-subject partial update.
    ///
    /// # Errors
    ///
    /// [`RosterError::NotFound`] for an unknown roll no,
    /// [`RosterError::Validation`] under the same marks rules as
    /// [`Roster::add_student`]. The store is unchanged on any error.
    pub fn update_marks(&mut self, id: &str, marks: Vec<f64>) -> Result<()> {
        if !self.students.contains_key(id) {
            return Err(RosterError::NotFound { id: id.to_string() });
        }
        self.validate_marks(&marks)?;

        let record = self
            .students
            .get_mut(id)
            .ok_or_else(|| RosterError::NotFound { id: id.to_string() })?;

        debug!(id, "Replacing marks");
        record.marks = marks;

        Ok(())
    }

    /// Read-only lookup by roll no.
    pub fn get(&self, id: &str) -> Option<&StudentRecord> {
        self.students.get(id)
    }

    /// All records, in unspecified order.
    pub fn students(&self) -> impl Iterator<Item = &StudentRecord> {
        self.students.values()
    }

    fn validate_marks(&self, marks: &[f64]) -> Result<()> {
        if marks.len() != self.subjects.len() {
            return Err(RosterError::Validation {
                message: format!(
                    "expected {} marks, got {}",
                    self.subjects.len(),
                    marks.len()
                ),
            });
        }
        for (subject, mark) in self.subjects.iter().zip(marks) {
            // NaN fails the range check too
            if !(0.0..=MAX_MARK).contains(mark) {
                return Err(RosterError::Validation {
                    message: format!("mark for {subject} must be between 0 and 100, got {mark}"),
                });
            }
        }
        Ok(())
    }
}
