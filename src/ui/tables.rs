//! Table renderings of day lists and of the day-entry form.

use crate::models::HOURS_PER_DAY;
use crate::models::day_sheet::DaySheet;
use crate::models::hour_entry::HourEntry;
use crate::models::project::Project;
use crate::utils::colors::{RESET, colorize_optional, colorize_status, foreground};
use crate::utils::formatting::{hours_label, truncate};
use crate::utils::table::{Column, Table};

/// One row per day; with `details` each logged hour follows its day.
pub fn days_table(days: &[&DaySheet], details: bool, separator: &str) -> String {
    let mut table = Table::new(vec![
        Column::new("Day", 12),
        Column::new("Status", 10),
        Column::new("Hours", 6),
        Column::new("Project", 20),
        Column::new("Task", 20),
        Column::new("Details", 30),
    ]);

    let fg = foreground();
    for day in days {
        table.add_row(vec![
            format!("{fg}{}{RESET}", day.day.format("%Y-%m-%d")),
            colorize_status(day.status),
            hours_label(day.logged_hours()),
            String::new(),
            String::new(),
            String::new(),
        ]);

        if details {
            let mut hours: Vec<_> = day.hours.iter().collect();
            hours.sort_by_key(|h| h.hour);
            for h in hours {
                table.add_row(vec![
                    String::new(),
                    String::new(),
                    format!("#{}", h.hour),
                    truncate(h.project_name.as_deref().unwrap_or("--"), 20),
                    truncate(h.task_name.as_deref().unwrap_or("--"), 20),
                    colorize_optional(&truncate(h.details.as_deref().unwrap_or(""), 30)),
                ]);
            }
        }
    }

    table.render(separator)
}

/// The 8 rows of the day-entry form.
pub fn form_table(entries: &[HourEntry], projects: &[Project], separator: &str) -> String {
    let mut table = Table::new(vec![
        Column::new("Hour", 5),
        Column::new("Project", 24),
        Column::new("Task", 24),
        Column::new("Details", 30),
    ]);

    for entry in entries.iter().take(HOURS_PER_DAY) {
        let project = entry
            .project
            .map(|id| {
                projects
                    .iter()
                    .find(|p| p.id == id)
                    .map(|p| format!("{} ({})", p.name, id))
                    .unwrap_or_else(|| id.to_string())
            })
            .unwrap_or_else(|| "--".to_string());
        let task = match (entry.task, entry.task_name()) {
            (Some(id), Some(name)) => format!("{name} ({id})"),
            (Some(id), None) => id.to_string(),
            _ => "--".to_string(),
        };

        table.add_row(vec![
            entry.hour.to_string(),
            colorize_optional(&truncate(&project, 24)),
            colorize_optional(&truncate(&task, 24)),
            colorize_optional(&truncate(&entry.details, 30)),
        ]);
    }

    table.render(separator)
}
