#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rtimesheet::api::{Credentials, SheetEntry, StatusUpdate, TimesheetApi};
use rtimesheet::errors::{AppError, AppResult};
use rtimesheet::models::day_sheet::{DaySheet, HourRecord};
use rtimesheet::models::day_status::DayStatus;
use rtimesheet::models::employee::Employee;
use rtimesheet::models::project::Project;
use rtimesheet::models::session::Session;
use rtimesheet::models::task::Task;
use rtimesheet::models::{HOURS_PER_DAY, ProjectId, TaskId, UserId};
use rtimesheet::utils::date::DateRange;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rti() -> Command {
    cargo_bin_cmd!("rtimesheet")
}

/// Binary invocation isolated from the user's configuration: HOME points
/// to a per-test temp directory and the database to a fresh file in it.
pub fn rti_isolated(name: &str) -> (Command, String) {
    let home = temp_home(name);
    let db = home.join("test.sqlite").to_string_lossy().to_string();
    let mut cmd = rti();
    cmd.env("HOME", &home)
        .env("APPDATA", &home)
        .env_remove("RTIMESHEET_LOG")
        .args(["--db", &db]);
    (cmd, db)
}

/// Same HOME and database as [`rti_isolated`], for follow-up invocations.
pub fn rti_again(name: &str, db: &str) -> Command {
    let home = test_dir(name);
    let mut cmd = rti();
    cmd.env("HOME", &home)
        .env("APPDATA", &home)
        .env_remove("RTIMESHEET_LOG")
        .args(["--db", db]);
    cmd
}

fn test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rtimesheet_{}", name));
    path
}

/// Create an empty per-test directory inside the system temp dir
pub fn temp_home(name: &str) -> PathBuf {
    let path = test_dir(name);
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp home");
    path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

pub fn employee_session() -> Session {
    Session {
        token: "employee-token".into(),
        user_id: 7,
        user_name: "mario.rossi".into(),
        email: "mario.rossi@example.com".into(),
        is_manager: false,
    }
}

pub fn manager_session() -> Session {
    Session {
        token: "manager-token".into(),
        user_id: 1,
        user_name: "anna.bianchi".into(),
        email: "anna.bianchi@example.com".into(),
        is_manager: true,
    }
}

/// A full 8-hour day on one project/task.
pub fn full_day(day: NaiveDate, status: DayStatus, project: ProjectId, task: TaskId) -> DaySheet {
    DaySheet {
        day,
        status,
        hours: (1..=HOURS_PER_DAY)
            .map(|hour| HourRecord {
                hour,
                project_id: Some(project),
                project_name: Some(format!("Project {project}")),
                task_id: Some(task),
                task_name: Some(format!("Task {task}")),
                details: Some(format!("hour {hour}")),
            })
            .collect(),
    }
}

/// In-memory backend with call counters and switchable failures.
pub struct FakeApi {
    pub users: Vec<(String, String, Session)>,
    pub projects: Vec<Project>,
    pub tasks: HashMap<ProjectId, Vec<Task>>,
    pub days: RefCell<Vec<DaySheet>>,
    pub employee_days: RefCell<HashMap<UserId, Vec<DaySheet>>>,
    pub subordinates: Vec<Employee>,

    pub task_calls: RefCell<HashMap<ProjectId, usize>>,
    pub saved: RefCell<Vec<Vec<SheetEntry>>>,
    pub updates: RefCell<Vec<StatusUpdate>>,
    pub deleted: RefCell<Vec<NaiveDate>>,

    pub failing_tasks: RefCell<HashSet<ProjectId>>,
    pub fail_save: Cell<bool>,
    pub fail_update: Cell<bool>,
}

impl FakeApi {
    /// Two projects (1 "Atlas", 2 "Borealis") with two tasks each.
    pub fn new() -> Self {
        let task = |id: TaskId, name: &str| Task {
            id,
            name: name.to_string(),
            // the backend leaves it out; the cache fills it in
            project_id: 0,
        };

        let mut tasks = HashMap::new();
        tasks.insert(1, vec![task(11, "Design"), task(12, "Review")]);
        tasks.insert(2, vec![task(21, "Support"), task(22, "Meetings")]);

        Self {
            users: vec![
                ("mario.rossi".into(), "secret".into(), employee_session()),
                ("anna.bianchi".into(), "secret".into(), manager_session()),
            ],
            projects: vec![
                Project {
                    id: 1,
                    name: "Atlas".into(),
                },
                Project {
                    id: 2,
                    name: "Borealis".into(),
                },
            ],
            tasks,
            days: RefCell::new(Vec::new()),
            employee_days: RefCell::new(HashMap::new()),
            subordinates: vec![Employee {
                id: 7,
                user_name: "mario.rossi".into(),
                email: "mario.rossi@example.com".into(),
            }],
            task_calls: RefCell::new(HashMap::new()),
            saved: RefCell::new(Vec::new()),
            updates: RefCell::new(Vec::new()),
            deleted: RefCell::new(Vec::new()),
            failing_tasks: RefCell::new(HashSet::new()),
            fail_save: Cell::new(false),
            fail_update: Cell::new(false),
        }
    }

    pub fn with_days(self, days: Vec<DaySheet>) -> Self {
        *self.days.borrow_mut() = days;
        self
    }

    pub fn with_employee_days(self, employee: UserId, days: Vec<DaySheet>) -> Self {
        self.employee_days.borrow_mut().insert(employee, days);
        self
    }

    pub fn task_calls_for(&self, project: ProjectId) -> usize {
        self.task_calls.borrow().get(&project).copied().unwrap_or(0)
    }

    pub fn status_of(&self, day: NaiveDate) -> Option<DayStatus> {
        self.days
            .borrow()
            .iter()
            .find(|d| d.day == day)
            .map(|d| d.status)
    }

    pub fn employee_status_of(&self, employee: UserId, day: NaiveDate) -> Option<DayStatus> {
        self.employee_days
            .borrow()
            .get(&employee)
            .and_then(|days| days.iter().find(|d| d.day == day).map(|d| d.status))
    }

    fn authorize(session: &Session) -> AppResult<()> {
        if session.has_token() {
            Ok(())
        } else {
            Err(AppError::MissingToken)
        }
    }

    fn task_name(&self, task: TaskId) -> Option<(ProjectId, String)> {
        self.tasks.iter().find_map(|(project, list)| {
            list.iter()
                .find(|t| t.id == task)
                .map(|t| (*project, t.name.clone()))
        })
    }
}

fn in_range(days: &[DaySheet], range: &DateRange) -> Vec<DaySheet> {
    days.iter()
        .filter(|d| range.contains(d.day))
        .cloned()
        .collect()
}

impl TimesheetApi for FakeApi {
    fn login(&self, credentials: &Credentials) -> AppResult<Session> {
        self.users
            .iter()
            .find(|(u, p, _)| *u == credentials.username && *p == credentials.password)
            .map(|(_, _, s)| s.clone())
            .ok_or_else(|| AppError::AuthFailed("Invalid username or password".into()))
    }

    fn projects(&self, session: &Session) -> AppResult<Vec<Project>> {
        Self::authorize(session)?;
        Ok(self.projects.clone())
    }

    fn tasks(&self, session: &Session, project: ProjectId) -> AppResult<Vec<Task>> {
        Self::authorize(session)?;
        *self.task_calls.borrow_mut().entry(project).or_insert(0) += 1;
        if self.failing_tasks.borrow().contains(&project) {
            return Err(AppError::Api {
                status: 500,
                message: "Failed to fetch tasks".into(),
            });
        }
        Ok(self.tasks.get(&project).cloned().unwrap_or_default())
    }

    fn sheet(&self, session: &Session, range: &DateRange) -> AppResult<Vec<DaySheet>> {
        Self::authorize(session)?;
        Ok(in_range(&self.days.borrow(), range))
    }

    fn employee_sheet(
        &self,
        session: &Session,
        employee: UserId,
        range: &DateRange,
    ) -> AppResult<Vec<DaySheet>> {
        Self::authorize(session)?;
        Ok(self
            .employee_days
            .borrow()
            .get(&employee)
            .map(|days| in_range(days, range))
            .unwrap_or_default())
    }

    fn save_sheet(&self, session: &Session, entries: &[SheetEntry]) -> AppResult<()> {
        Self::authorize(session)?;
        if self.fail_save.get() {
            return Err(AppError::Api {
                status: 400,
                message: "Failed to save day tasks".into(),
            });
        }
        self.saved.borrow_mut().push(entries.to_vec());

        let Some(first) = entries.first() else {
            return Ok(());
        };
        let hours = entries
            .iter()
            .map(|e| {
                let (project, task_name) = self.task_name(e.task_id).unzip();
                HourRecord {
                    hour: e.hour,
                    project_id: project,
                    project_name: project.map(|p| format!("Project {p}")),
                    task_id: Some(e.task_id),
                    task_name,
                    details: Some(e.details.clone()),
                }
            })
            .collect();

        let mut days = self.days.borrow_mut();
        days.retain(|d| d.day != first.day);
        days.push(DaySheet {
            day: first.day,
            status: DayStatus::Posted,
            hours,
        });
        Ok(())
    }

    fn update_status(&self, session: &Session, update: &StatusUpdate) -> AppResult<()> {
        Self::authorize(session)?;
        self.updates.borrow_mut().push(update.clone());
        if self.fail_update.get() {
            return Err(AppError::Api {
                status: 500,
                message: "Internal server error".into(),
            });
        }
        let status = update.target_status().ok_or_else(|| AppError::Api {
            status: 400,
            message: "Unknown status".into(),
        })?;

        match update.user_id {
            None => {
                let mut days = self.days.borrow_mut();
                let conflict = update.days.iter().any(|day| {
                    days.iter()
                        .find(|d| d.day == *day)
                        .is_none_or(|d| !d.status.is_sendable())
                });
                if conflict {
                    return Err(AppError::Api {
                        status: 409,
                        message: "Day already submitted".into(),
                    });
                }
                for d in days.iter_mut().filter(|d| update.days.contains(&d.day)) {
                    d.status = status;
                }
            }
            Some(employee) => {
                let mut all = self.employee_days.borrow_mut();
                let days = all.entry(employee).or_default();
                for d in days.iter_mut().filter(|d| update.days.contains(&d.day)) {
                    d.status = status;
                }
            }
        }
        Ok(())
    }

    fn delete_day(&self, session: &Session, day: NaiveDate) -> AppResult<()> {
        Self::authorize(session)?;
        let mut days = self.days.borrow_mut();
        if !days.iter().any(|d| d.day == day) {
            return Err(AppError::Api {
                status: 404,
                message: "Day not found".into(),
            });
        }
        days.retain(|d| d.day != day);
        self.deleted.borrow_mut().push(day);
        Ok(())
    }

    fn subordinates(&self, session: &Session) -> AppResult<Vec<Employee>> {
        Self::authorize(session)?;
        Ok(self.subordinates.clone())
    }
}
