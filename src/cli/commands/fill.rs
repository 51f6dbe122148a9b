//! Day-entry form: load the day, apply bulk and per-hour assignments,
//! save when all 8 hours are complete.

use crate::api::TimesheetApi;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::editor::DayEditor;
use crate::core::routes::View;
use crate::errors::{AppError, AppResult};
use crate::models::{HOURS_PER_DAY, ProjectId, TaskId};
use crate::ui::messages::{header, info};
use crate::ui::tables::form_table;
use crate::utils::date::{DateRange, today};
use crate::utils::formatting::progress_bar;

use super::sheet::show_timesheet;
use super::{connect, open_storage, parse_day, require_session};

/// One `--hour HOUR:PROJECT:TASK[:DETAILS]` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourSpec {
    pub hour: usize,
    pub project: ProjectId,
    pub task: TaskId,
    pub details: Option<String>,
}

impl HourSpec {
    pub fn parse(raw: &str) -> AppResult<Self> {
        let invalid = || AppError::InvalidEntry(format!("{raw} (expected HOUR:PROJECT:TASK[:DETAILS])"));

        let mut parts = raw.splitn(4, ':');
        let hour: usize = parts
            .next()
            .and_then(|h| h.trim().parse().ok())
            .ok_or_else(invalid)?;
        if !(1..=HOURS_PER_DAY).contains(&hour) {
            return Err(AppError::InvalidHour(hour));
        }
        let project = parts
            .next()
            .and_then(|p| p.trim().parse().ok())
            .ok_or_else(invalid)?;
        let task = parts
            .next()
            .and_then(|t| t.trim().parse().ok())
            .ok_or_else(invalid)?;
        let details = parts.next().map(str::to_string);

        Ok(Self {
            hour,
            project,
            task,
            details,
        })
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Fill {
        date,
        project,
        task,
        details,
        hours,
        dry_run,
    } = cmd
    {
        let day = match date {
            Some(d) => parse_day(d)?,
            None => today(),
        };
        let specs = hours
            .iter()
            .map(|h| HourSpec::parse(h))
            .collect::<AppResult<Vec<_>>>()?;

        let storage = open_storage(cfg)?;
        let session = require_session(&storage)?;
        View::TaskForm.authorize(Some(&session))?;
        DateRange::entry_window(today()).ensure_contains(day)?;

        let api = connect(cfg)?;
        let projects = api.projects(&session)?;
        let mut editor = DayEditor::open(&api, &session, day)?;
        if editor.is_editing() {
            info(format!("Editing existing entries of {}", day));
        }

        if let (Some(p), Some(t)) = (project, task) {
            let tasks = editor.project_tasks(*p)?;
            if !tasks.iter().any(|x| x.id == *t) {
                return Err(AppError::InvalidTask(format!(
                    "task {t} does not belong to project {p}"
                )));
            }
            editor.bulk_assign(Some(*p), Some(*t), details.as_deref().unwrap_or(""));
        }

        for spec in &specs {
            editor.select_project(spec.hour, Some(spec.project))?;
            editor.select_task(spec.hour, spec.task)?;
            if let Some(d) = &spec.details {
                editor.set_details(spec.hour, d)?;
            }
        }

        for n in editor.take_notifications() {
            n.show();
        }

        header(format!("Tasks of {}", day));
        print!(
            "{}",
            form_table(editor.entries(), &projects, &cfg.separator_char)
        );
        println!("{}\n", progress_bar(editor.completion(), HOURS_PER_DAY));

        if *dry_run {
            info("Dry run: nothing saved.");
            return Ok(());
        }

        let next = editor.save()?;
        storage.audit(
            "save",
            &day.to_string(),
            if editor.is_editing() {
                "Day updated"
            } else {
                "Day saved"
            },
        );
        for n in editor.take_notifications() {
            n.show();
        }

        if next == View::TimeSheet {
            show_timesheet(
                &api,
                &session,
                DateRange::default_view(today()),
                &cfg.separator_char,
            )?;
        }
    }
    Ok(())
}
