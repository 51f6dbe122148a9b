//! Day-entry editor: the 8 hourly rows of one calendar day.

use crate::api::{SheetEntry, TimesheetApi};
use crate::core::routes::View;
use crate::core::task_cache::TaskCache;
use crate::errors::{AppError, AppResult};
use crate::models::day_sheet::DaySheet;
use crate::models::day_status::DayStatus;
use crate::models::hour_entry::HourEntry;
use crate::models::session::Session;
use crate::models::task::Task;
use crate::models::{HOURS_PER_DAY, ProjectId, TaskId};
use crate::ui::messages::Notification;
use crate::utils::date::DateRange;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Details sent for hours left without a description.
pub const EMPTY_DETAILS: &str = "N/A";

pub struct DayEditor<'a> {
    api: &'a dyn TimesheetApi,
    session: &'a Session,
    date: NaiveDate,
    entries: [HourEntry; HOURS_PER_DAY],
    cache: TaskCache,
    /// Status of the day record this editor was opened on, if any.
    existing: Option<DayStatus>,
    notifications: Vec<Notification>,
}

fn blank_entries() -> [HourEntry; HOURS_PER_DAY] {
    std::array::from_fn(|i| HourEntry::empty(i + 1))
}

impl<'a> DayEditor<'a> {
    /// Empty editor for `date`; nothing is fetched.
    pub fn new(api: &'a dyn TimesheetApi, session: &'a Session, date: NaiveDate) -> Self {
        Self {
            api,
            session,
            date,
            entries: blank_entries(),
            cache: TaskCache::new(),
            existing: None,
            notifications: Vec::new(),
        }
    }

    /// Editor for `date`, pre-filled from the server's record of that day.
    ///
    /// Submitted and accepted days are read-only and refused. Every project
    /// used by the record gets its task list loaded through the cache so
    /// the rows can be re-edited right away.
    pub fn open(
        api: &'a dyn TimesheetApi,
        session: &'a Session,
        date: NaiveDate,
    ) -> AppResult<Self> {
        let mut editor = Self::new(api, session, date);
        let days = api.sheet(session, &DateRange::single(date))?;

        if let Some(day) = days.into_iter().find(|d| d.day == date) {
            if !day.status.is_editable() {
                return Err(AppError::DayLocked(date, day.status));
            }
            editor.prefill(&day);
        }

        Ok(editor)
    }

    fn prefill(&mut self, day: &DaySheet) {
        self.existing = Some(day.status);
        let mut unresolved = Vec::new();

        for record in &day.hours {
            let Some(entry) = record
                .hour
                .checked_sub(1)
                .and_then(|i| self.entries.get_mut(i))
            else {
                tracing::warn!(hour = record.hour, day = %day.day, "ignoring out-of-range hour");
                continue;
            };
            let named = record.project_name.is_some() || record.task_name.is_some();
            if named && (record.project_id.is_none() || record.task_id.is_none()) {
                tracing::warn!(
                    hour = record.hour,
                    day = %day.day,
                    project = record.project_name.as_deref().unwrap_or_default(),
                    task = record.task_name.as_deref().unwrap_or_default(),
                    "hour record has names but no ids; row left to re-enter"
                );
                unresolved.push(record.hour);
            }
            entry.project = record.project_id;
            entry.task = record.project_id.and(record.task_id);
            entry.details = record
                .details
                .clone()
                .filter(|d| d != EMPTY_DETAILS)
                .unwrap_or_default();
        }

        if !unresolved.is_empty() {
            let hours: Vec<String> = unresolved.iter().map(usize::to_string).collect();
            self.notifications.push(Notification::error(format!(
                "Could not restore project/task for hour(s) {}",
                hours.join(", ")
            )));
        }

        let projects: BTreeSet<ProjectId> = self.entries.iter().filter_map(|e| e.project).collect();
        for project in projects {
            match self.cache.fetch(self.api, self.session, project) {
                Ok(tasks) => {
                    let tasks = tasks.to_vec();
                    for entry in self.entries.iter_mut().filter(|e| e.project == Some(project)) {
                        entry.task_options = tasks.clone();
                    }
                }
                Err(e) => {
                    tracing::warn!(project, error = %e, "prefill task fetch failed");
                    self.notifications
                        .push(Notification::error("Failed to fetch tasks for selected project"));
                }
            }
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn entries(&self) -> &[HourEntry] {
        &self.entries
    }

    pub fn entry(&self, hour: usize) -> AppResult<&HourEntry> {
        let idx = Self::index(hour)?;
        Ok(&self.entries[idx])
    }

    /// True when the editor was opened on an existing day record.
    pub fn is_editing(&self) -> bool {
        self.existing.is_some()
    }

    pub fn existing_status(&self) -> Option<DayStatus> {
        self.existing
    }

    pub fn cache(&self) -> &TaskCache {
        &self.cache
    }

    fn index(hour: usize) -> AppResult<usize> {
        if (1..=HOURS_PER_DAY).contains(&hour) {
            Ok(hour - 1)
        } else {
            Err(AppError::InvalidHour(hour))
        }
    }

    /// Set the project of `hour`, clearing its task and task options.
    ///
    /// The project's task list is fetched through the cache. A failed fetch
    /// leaves the options empty and records an error notification; the row
    /// stays editable.
    pub fn select_project(&mut self, hour: usize, project: Option<ProjectId>) -> AppResult<()> {
        let idx = Self::index(hour)?;
        {
            let entry = &mut self.entries[idx];
            entry.project = project;
            entry.task = None;
            entry.task_options.clear();
        }

        let Some(project) = project else {
            return Ok(());
        };

        match self.cache.fetch(self.api, self.session, project) {
            Ok(tasks) => self.entries[idx].task_options = tasks.to_vec(),
            Err(e) => {
                tracing::warn!(hour, project, error = %e, "task fetch failed");
                self.notifications
                    .push(Notification::error("Failed to fetch tasks for selected project"));
            }
        }
        Ok(())
    }

    /// Set the task of `hour`; it must belong to the hour's project.
    pub fn select_task(&mut self, hour: usize, task: TaskId) -> AppResult<()> {
        let idx = Self::index(hour)?;
        let entry = &mut self.entries[idx];

        let Some(project) = entry.project else {
            return Err(AppError::InvalidTask(format!(
                "hour {hour}: select a project first"
            )));
        };
        if !entry.task_options.iter().any(|t| t.id == task) {
            return Err(AppError::InvalidTask(format!(
                "task {task} does not belong to project {project}"
            )));
        }

        entry.task = Some(task);
        Ok(())
    }

    pub fn set_details(&mut self, hour: usize, details: &str) -> AppResult<()> {
        let idx = Self::index(hour)?;
        self.entries[idx].details = details.to_string();
        Ok(())
    }

    /// Task list for a bulk-assignment project, through the cache.
    pub fn project_tasks(&mut self, project: ProjectId) -> AppResult<Vec<Task>> {
        Ok(self.cache.fetch(self.api, self.session, project)?.to_vec())
    }

    /// Overwrite all 8 hours with one project/task/details triple.
    ///
    /// No-op unless both project and task are given; returns whether the
    /// rows were changed.
    pub fn bulk_assign(
        &mut self,
        project: Option<ProjectId>,
        task: Option<TaskId>,
        details: &str,
    ) -> bool {
        let (Some(project), Some(task)) = (project, task) else {
            return false;
        };

        let options = self.cache.get(project).map(<[Task]>::to_vec).unwrap_or_default();
        for entry in self.entries.iter_mut() {
            entry.project = Some(project);
            entry.task = Some(task);
            entry.details = details.to_string();
            entry.task_options = options.clone();
        }

        self.notifications
            .push(Notification::success("Tasks bulk assigned successfully!"));
        true
    }

    pub fn completed_hours(&self) -> usize {
        self.entries.iter().filter(|e| e.is_complete()).count()
    }

    /// Share of hours with both project and task (0.0..=1.0).
    pub fn completion(&self) -> f64 {
        self.completed_hours() as f64 / HOURS_PER_DAY as f64
    }

    /// Saving is allowed only when every hour has a project and a task.
    pub fn can_save(&self) -> bool {
        self.completed_hours() == HOURS_PER_DAY
    }

    /// Body of `POST /api/Sheet` for the current rows.
    pub fn sheet_entries(&self) -> AppResult<Vec<SheetEntry>> {
        self.entries
            .iter()
            .map(|e| {
                let task_id = e.task.ok_or(AppError::IncompleteDay(
                    HOURS_PER_DAY - self.completed_hours(),
                ))?;
                let details = if e.details.trim().is_empty() {
                    EMPTY_DETAILS.to_string()
                } else {
                    e.details.clone()
                };
                Ok(SheetEntry {
                    day: self.date,
                    hour: e.hour,
                    task_id,
                    details,
                })
            })
            .collect()
    }

    /// Send the full day. On success the caller moves to the timesheet
    /// summary; on failure the rows are left untouched for a retry.
    pub fn save(&mut self) -> AppResult<View> {
        if !self.can_save() {
            return Err(AppError::IncompleteDay(
                HOURS_PER_DAY - self.completed_hours(),
            ));
        }

        let entries = self.sheet_entries()?;
        self.api.save_sheet(self.session, &entries)?;

        tracing::info!(day = %self.date, updated = self.is_editing(), "day saved");
        self.notifications.push(Notification::success(if self.is_editing() {
            "Day's tasks updated successfully!"
        } else {
            "Day's tasks saved successfully!"
        }));
        Ok(View::TimeSheet)
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}
