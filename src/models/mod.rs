pub mod day_sheet;
pub mod day_status;
pub mod employee;
pub mod hour_entry;
pub mod project;
pub mod session;
pub mod task;

/// Identifier types used by the remote API.
pub type ProjectId = i64;
pub type TaskId = i64;
pub type UserId = i64;

/// Number of work hours composing one day sheet.
pub const HOURS_PER_DAY: usize = 8;
