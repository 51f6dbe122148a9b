//! Unified application error type.
//! All modules (api, db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::models::day_status::DayStatus;
use chrono::NaiveDate;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Local storage
    // ---------------------------
    #[error("Local storage error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Remote API
    // ---------------------------
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Invalid response from server: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    AuthFailed(String),

    #[error("Authorization token is missing")]
    MissingToken,

    #[error("This action is reserved to managers")]
    Forbidden,

    #[error("There is a day already sent to the manager")]
    AlreadySent(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid hour: {0} (expected 1..=8)")]
    InvalidHour(usize),

    #[error("Invalid hour entry: {0}")]
    InvalidEntry(String),

    // ---------------------------
    // Editor errors
    // ---------------------------
    #[error("Invalid task: {0}")]
    InvalidTask(String),

    #[error("Day is incomplete: {0} of 8 hours still need a project and a task")]
    IncompleteDay(usize),

    #[error("Day {0} is {1} and can no longer be edited")]
    DayLocked(NaiveDate, DayStatus),

    #[error("Date {date} is outside the entry window ({start} .. {end})")]
    OutsideEntryWindow {
        date: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// Message coming from the server, when the error carries one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AppError::Api { message, .. } => Some(message),
            AppError::AuthFailed(msg) | AppError::AlreadySent(msg) => Some(msg),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
