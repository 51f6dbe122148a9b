use super::day_status::DayStatus;
use super::{ProjectId, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One hour of a day record, as returned by `GET /api/Sheet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourRecord {
    pub hour: usize,
    #[serde(default)]
    pub project_id: Option<ProjectId>,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub task_id: Option<TaskId>,
    #[serde(default)]
    pub task_name: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

/// One employee's day: hourly entries plus approval status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySheet {
    pub day: NaiveDate,
    pub status: DayStatus,
    #[serde(default)]
    pub hours: Vec<HourRecord>,
}

impl DaySheet {
    pub fn hour(&self, hour: usize) -> Option<&HourRecord> {
        self.hours.iter().find(|h| h.hour == hour)
    }

    pub fn logged_hours(&self) -> usize {
        self.hours.len()
    }
}
