// src/export/model.rs

use crate::models::day_sheet::DaySheet;
use serde::Serialize;

/// Flat row for export: one line per logged hour.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DayExport {
    pub day: String,
    pub status: String,
    pub hour: usize,
    pub project: String,
    pub task: String,
    pub details: String,
}

/// Flatten day records, ordered by day then hour. Days without hours still
/// produce one row so their status is not lost.
pub fn days_to_rows(days: &[DaySheet]) -> Vec<DayExport> {
    let mut sorted: Vec<&DaySheet> = days.iter().collect();
    sorted.sort_by_key(|d| d.day);

    let mut rows = Vec::new();
    for d in sorted {
        let day = d.day.format("%Y-%m-%d").to_string();
        if d.hours.is_empty() {
            rows.push(DayExport {
                day,
                status: d.status.to_string(),
                hour: 0,
                project: String::new(),
                task: String::new(),
                details: String::new(),
            });
            continue;
        }

        let mut hours: Vec<_> = d.hours.iter().collect();
        hours.sort_by_key(|h| h.hour);
        for h in hours {
            rows.push(DayExport {
                day: day.clone(),
                status: d.status.to_string(),
                hour: h.hour,
                project: h.project_name.clone().unwrap_or_default(),
                task: h.task_name.clone().unwrap_or_default(),
                details: h.details.clone().unwrap_or_default(),
            });
        }
    }
    rows
}
