//! Day status transitions.
//!
//! The client only requests transitions; the server decides whether they
//! are legal and its answer is the new truth. A batch of days travels in a
//! single request and any failure is a failure of the whole batch.

use crate::api::{StatusUpdate, TimesheetApi};
use crate::errors::{AppError, AppResult};
use crate::models::UserId;
use crate::models::day_status::DayStatus;
use crate::models::session::Session;
use chrono::NaiveDate;

/// Manager verdict on submitted days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Reject,
}

impl Decision {
    pub fn status(&self) -> DayStatus {
        match self {
            Decision::Accept => DayStatus::Accepted,
            Decision::Reject => DayStatus::Rejected,
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            Decision::Accept => "accept",
            Decision::Reject => "reject",
        }
    }

    pub fn past(&self) -> &'static str {
        match self {
            Decision::Accept => "accepted",
            Decision::Reject => "rejected",
        }
    }

    pub fn success_message(&self) -> String {
        format!("Selected days {} successfully!", self.past())
    }

    pub fn failure_message(&self) -> String {
        format!("Failed to {} selected days.", self.verb())
    }
}

pub struct StatusWorkflow;

impl StatusWorkflow {
    /// Employee sends their own days to the manager (→ Submitted).
    ///
    /// Returns `false` without any request when `days` is empty. A refusal
    /// from the server is reported as [`AppError::AlreadySent`].
    pub fn send(api: &dyn TimesheetApi, session: &Session, days: &[NaiveDate]) -> AppResult<bool> {
        if days.is_empty() {
            return Ok(false);
        }

        let update = StatusUpdate::new(None, days.to_vec(), DayStatus::Submitted);
        match api.update_status(session, &update) {
            Ok(()) => {
                tracing::info!(days = days.len(), "days sent to manager");
                Ok(true)
            }
            Err(AppError::Api { status, message }) => {
                tracing::warn!(status, %message, "send refused by server");
                Err(AppError::AlreadySent(message))
            }
            Err(e) => Err(e),
        }
    }

    /// Manager accepts or rejects a subordinate's days.
    ///
    /// Returns `false` without any request when `days` is empty.
    pub fn decide(
        api: &dyn TimesheetApi,
        session: &Session,
        employee: UserId,
        days: &[NaiveDate],
        decision: Decision,
    ) -> AppResult<bool> {
        if !session.is_manager {
            return Err(AppError::Forbidden);
        }
        if days.is_empty() {
            return Ok(false);
        }

        let update = StatusUpdate::new(Some(employee), days.to_vec(), decision.status());
        api.update_status(session, &update)?;
        tracing::info!(employee, days = days.len(), decision = decision.past(), "review applied");
        Ok(true)
    }
}
