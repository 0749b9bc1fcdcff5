pub mod error;
pub mod grading;
pub mod output;
pub mod roster;

pub use error::{Result, RosterError};
pub use roster::{Roster, StudentRecord};
