//! Role-based views and where each user lands after startup.

use crate::errors::{AppError, AppResult};
use crate::models::UserId;
use crate::models::session::Session;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Dashboard,
    TaskForm,
    TimeSheet,
    Profile,
    Employee(UserId),
}

impl View {
    /// Default view: login without a session, the dashboard for managers,
    /// the task form for employees.
    pub fn landing(session: Option<&Session>) -> Self {
        match session {
            Some(s) if s.has_token() && s.is_manager => View::Dashboard,
            Some(s) if s.has_token() => View::TaskForm,
            _ => View::Login,
        }
    }

    pub fn is_allowed(&self, session: Option<&Session>) -> bool {
        match (self, session) {
            (View::Login, _) => true,
            (_, None) => false,
            (_, Some(s)) if !s.has_token() => false,
            (View::Dashboard | View::Employee(_), Some(s)) => s.is_manager,
            (View::TaskForm | View::TimeSheet | View::Profile, Some(_)) => true,
        }
    }

    /// Fail with the error matching why `session` cannot open this view.
    pub fn authorize(&self, session: Option<&Session>) -> AppResult<()> {
        if self.is_allowed(session) {
            return Ok(());
        }
        match session {
            Some(s) if s.has_token() => Err(AppError::Forbidden),
            _ => Err(AppError::MissingToken),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Login => write!(f, "login"),
            View::Dashboard => write!(f, "dashboard"),
            View::TaskForm => write!(f, "task form"),
            View::TimeSheet => write!(f, "timesheet"),
            View::Profile => write!(f, "profile"),
            View::Employee(id) => write!(f, "employee {id}"),
        }
    }
}
