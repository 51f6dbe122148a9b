//! Reference data listings: projects, tasks and the manager's employees.

use crate::api::TimesheetApi;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::routes::View;
use crate::core::task_cache::TaskCache;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};

use super::{connect, open_storage, require_session};

pub fn projects(cfg: &Config) -> AppResult<()> {
    let storage = open_storage(cfg)?;
    let session = require_session(&storage)?;
    let api = connect(cfg)?;

    let projects = api.projects(&session)?;
    if projects.is_empty() {
        info("No projects available.");
        return Ok(());
    }

    let mut table = Table::new(vec![Column::new("ID", 6), Column::new("Project", 40)]);
    for p in &projects {
        table.add_row(vec![p.id.to_string(), p.name.clone()]);
    }
    header("Projects");
    print!("{}", table.render(&cfg.separator_char));
    Ok(())
}

pub fn tasks(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Tasks { project } = cmd {
        let storage = open_storage(cfg)?;
        let session = require_session(&storage)?;
        let api = connect(cfg)?;

        let mut cache = TaskCache::new();
        let tasks = cache.fetch(&api, &session, *project)?;
        if tasks.is_empty() {
            info(format!("No tasks for project {}.", project));
            return Ok(());
        }

        let mut table = Table::new(vec![Column::new("ID", 6), Column::new("Task", 40)]);
        for t in tasks {
            table.add_row(vec![t.id.to_string(), t.name.clone()]);
        }
        header(format!("Tasks of project {}", project));
        print!("{}", table.render(&cfg.separator_char));
    }
    Ok(())
}

/// Manager dashboard: the subordinate list.
pub fn employees(cfg: &Config) -> AppResult<()> {
    let storage = open_storage(cfg)?;
    let session = require_session(&storage)?;
    View::Dashboard.authorize(Some(&session))?;
    let api = connect(cfg)?;

    let employees = api.subordinates(&session)?;
    if employees.is_empty() {
        info("There is no employee under you");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("ID", 6),
        Column::new("Employee", 28),
        Column::new("Email", 32),
    ]);
    for e in &employees {
        table.add_row(vec![e.id.to_string(), e.label().to_string(), e.email.clone()]);
    }
    header("Employees");
    print!("{}", table.render(&cfg.separator_char));
    println!("Total employees: {}", employees.len());
    Ok(())
}
