//! Status and date-range filtering of day lists.

use crate::models::day_sheet::DaySheet;
use crate::models::day_status::DayStatus;
use crate::utils::date::DateRange;
use std::fmt;

/// Review tabs of the manager's employee page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ViewMode {
    /// Days posted by the employee and not yet decided
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl ViewMode {
    pub fn status(&self) -> DayStatus {
        match self {
            ViewMode::Pending => DayStatus::Posted,
            ViewMode::Accepted => DayStatus::Accepted,
            ViewMode::Rejected => DayStatus::Rejected,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Pending => "pending",
            ViewMode::Accepted => "accepted",
            ViewMode::Rejected => "rejected",
        }
    }

    pub fn empty_message(&self) -> String {
        format!("No {} days found in the specified range.", self.as_str())
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Days with `status` whose date falls inside `range`.
pub fn by_status<'a>(days: &'a [DaySheet], status: DayStatus, range: &DateRange) -> Vec<&'a DaySheet> {
    days.iter()
        .filter(|d| d.status == status && range.contains(d.day))
        .collect()
}

pub fn by_mode<'a>(days: &'a [DaySheet], mode: ViewMode, range: &DateRange) -> Vec<&'a DaySheet> {
    by_status(days, mode.status(), range)
}
