//! Grading arithmetic and the ranked roster projection.
//!
//! This module computes totals and percentages from marks vectors,
//! assigns letter grades, and builds the position-ordered report the
//! presentation layer renders and exports.

pub mod grade;
pub mod policy;
pub mod report;
pub mod types;
