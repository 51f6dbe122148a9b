//! Remote timesheet API.
//!
//! [`TimesheetApi`] is the seam between core logic and the network: the
//! CLI talks to the server through [`client::HttpApi`], tests plug in an
//! in-memory implementation.

pub mod client;
pub mod dto;

use crate::errors::AppResult;
use crate::models::day_sheet::DaySheet;
use crate::models::employee::Employee;
use crate::models::project::Project;
use crate::models::session::Session;
use crate::models::task::Task;
use crate::models::{ProjectId, UserId};
use crate::utils::date::DateRange;
use chrono::NaiveDate;

pub use dto::{Credentials, SheetEntry, StatusUpdate};

/// Operations offered by the timesheet backend. Every call except
/// [`TimesheetApi::login`] is authorized by the given session.
pub trait TimesheetApi {
    /// `POST /api/Auth/login`
    fn login(&self, credentials: &Credentials) -> AppResult<Session>;

    /// `GET /api/Projects`
    fn projects(&self, session: &Session) -> AppResult<Vec<Project>>;

    /// `GET /api/Tasks/{projectId}`
    fn tasks(&self, session: &Session, project: ProjectId) -> AppResult<Vec<Task>>;

    /// `GET /api/Sheet?start=&end=`
    fn sheet(&self, session: &Session, range: &DateRange) -> AppResult<Vec<DaySheet>>;

    /// `GET /api/Sheet/{employeeId}?start=&end=`
    fn employee_sheet(
        &self,
        session: &Session,
        employee: UserId,
        range: &DateRange,
    ) -> AppResult<Vec<DaySheet>>;

    /// `POST /api/Sheet`
    fn save_sheet(&self, session: &Session, entries: &[SheetEntry]) -> AppResult<()>;

    /// `PUT /api/Sheet/updatestatus`
    fn update_status(&self, session: &Session, update: &StatusUpdate) -> AppResult<()>;

    /// `DELETE /api/tasks/{day}`
    fn delete_day(&self, session: &Session, day: NaiveDate) -> AppResult<()>;

    /// `GET /api/Users/subordinates`
    fn subordinates(&self, session: &Session) -> AppResult<Vec<Employee>>;
}
