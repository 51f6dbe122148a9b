//! HTTP client for the timesheet backend.
//!
//! Wraps the REST endpoints with a blocking [`reqwest`] client: the CLI
//! issues one request per user action and waits for its outcome.

use super::TimesheetApi;
use super::dto::{Credentials, Envelope, ErrorBody, SaveSheetBody, SheetEntry, StatusUpdate};
use crate::errors::{AppError, AppResult};
use crate::models::day_sheet::DaySheet;
use crate::models::employee::Employee;
use crate::models::project::Project;
use crate::models::session::Session;
use crate::models::task::Task;
use crate::models::{ProjectId, UserId};
use crate::utils::date::DateRange;
use chrono::NaiveDate;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    /// Create a client for the API rooted at `base_url`
    /// (e.g. `https://timesheet.example.com/`).
    ///
    /// Without `timeout` the transport default applies.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> AppResult<Self> {
        let mut builder = Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Attach the bearer token, refusing to build the request without one.
    fn authorized(&self, builder: RequestBuilder, session: &Session) -> AppResult<RequestBuilder> {
        if !session.has_token() {
            return Err(AppError::MissingToken);
        }
        Ok(builder.bearer_auth(&session.token))
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. On failure the
    /// server's `message` is surfaced verbatim when the body carries one,
    /// otherwise `fallback` is used.
    fn ensure_success(response: Response, fallback: &str) -> AppResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());

        tracing::warn!(status = status.as_u16(), %message, body = %body, "request failed");
        Err(AppError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Parse the response envelope of a successful request.
    fn envelope<T: DeserializeOwned>(response: Response, fallback: &str) -> AppResult<Envelope<T>> {
        let response = Self::ensure_success(response, fallback)?;
        let status = response.status().as_u16();
        let text = response.text()?;
        serde_json::from_str::<Envelope<T>>(&text).map_err(|e| {
            tracing::warn!(error = %e, body = %text, "unparseable response body");
            AppError::Api {
                status,
                message: format!("{fallback}: Invalid response from server"),
            }
        })
    }

    /// Envelope whose `succeeded` flag must be set.
    fn checked<T: DeserializeOwned>(response: Response, fallback: &str) -> AppResult<Envelope<T>> {
        let status = response.status().as_u16();
        let env = Self::envelope::<T>(response, fallback)?;
        if !env.succeeded {
            return Err(AppError::Api {
                status,
                message: env.message.unwrap_or_else(|| fallback.to_string()),
            });
        }
        Ok(env)
    }

    /// List endpoints: a missing `data` field means an empty list.
    fn list<T: DeserializeOwned>(response: Response, fallback: &str) -> AppResult<Vec<T>> {
        Ok(Self::envelope::<Vec<T>>(response, fallback)?
            .data
            .unwrap_or_default())
    }
}

impl TimesheetApi for HttpApi {
    fn login(&self, credentials: &Credentials) -> AppResult<Session> {
        tracing::debug!(user = %credentials.username, "login");
        let response = self
            .client
            .post(self.url("api/Auth/login"))
            .json(credentials)
            .send()?;

        let status = response.status();
        let text = response.text()?;
        let env: Option<Envelope<Session>> = serde_json::from_str(&text).ok();

        match env {
            Some(Envelope {
                data: Some(session),
                ..
            }) if status.is_success() => Ok(session),
            Some(env) => Err(AppError::AuthFailed(
                env.message.unwrap_or_else(|| "Login failed".to_string()),
            )),
            None => Err(AppError::AuthFailed("Login failed".to_string())),
        }
    }

    fn projects(&self, session: &Session) -> AppResult<Vec<Project>> {
        let req = self.authorized(self.client.get(self.url("api/Projects")), session)?;
        let projects = Self::list(req.send()?, "Failed to fetch projects")?;
        tracing::debug!(count = projects.len(), "projects fetched");
        Ok(projects)
    }

    fn tasks(&self, session: &Session, project: ProjectId) -> AppResult<Vec<Task>> {
        let req = self.authorized(
            self.client.get(self.url(&format!("api/Tasks/{project}"))),
            session,
        )?;
        let env = Self::checked::<Vec<Task>>(req.send()?, "Failed to fetch tasks")?;
        let tasks = env.data.ok_or_else(|| AppError::Api {
            status: 200,
            message: "Invalid tasks response".to_string(),
        })?;
        tracing::debug!(project, count = tasks.len(), "tasks fetched");
        Ok(tasks)
    }

    fn sheet(&self, session: &Session, range: &DateRange) -> AppResult<Vec<DaySheet>> {
        let req = self.authorized(
            self.client.get(self.url("api/Sheet")).query(&range.query()),
            session,
        )?;
        Self::list(req.send()?, "Error fetching data")
    }

    fn employee_sheet(
        &self,
        session: &Session,
        employee: UserId,
        range: &DateRange,
    ) -> AppResult<Vec<DaySheet>> {
        let req = self.authorized(
            self.client
                .get(self.url(&format!("api/Sheet/{employee}")))
                .query(&range.query()),
            session,
        )?;
        Self::list(req.send()?, "Failed to fetch data")
    }

    fn save_sheet(&self, session: &Session, entries: &[SheetEntry]) -> AppResult<()> {
        let req = self.authorized(
            self.client
                .post(self.url("api/Sheet"))
                .json(&SaveSheetBody { tasks: entries }),
            session,
        )?;
        Self::checked::<serde_json::Value>(req.send()?, "Failed to save day tasks")?;
        Ok(())
    }

    fn update_status(&self, session: &Session, update: &StatusUpdate) -> AppResult<()> {
        tracing::debug!(days = update.days.len(), status = update.status, "update status");
        let req = self.authorized(
            self.client
                .put(self.url("api/Sheet/updatestatus"))
                .json(update),
            session,
        )?;
        Self::ensure_success(req.send()?, "Failed to update status")?;
        Ok(())
    }

    fn delete_day(&self, session: &Session, day: NaiveDate) -> AppResult<()> {
        let req = self.authorized(
            self.client
                .delete(self.url(&format!("api/tasks/{}", day.format("%Y-%m-%d")))),
            session,
        )?;
        Self::ensure_success(req.send()?, "Failed to delete task")?;
        Ok(())
    }

    fn subordinates(&self, session: &Session) -> AppResult<Vec<Employee>> {
        let req = self.authorized(self.client.get(self.url("api/Users/subordinates")), session)?;
        Self::list(req.send()?, "Failed to fetch employees")
    }
}
