//! One handler per subcommand, plus the helpers they share for opening
//! local storage, reaching the API and resolving periods.

pub mod auth;
pub mod config;
pub mod delete;
pub mod export;
pub mod fill;
pub mod init;
pub mod log;
pub mod reference;
pub mod review;
pub mod sheet;
pub mod theme;

use crate::api::client::HttpApi;
use crate::config::Config;
use crate::core::session::SessionLogic;
use crate::db::storage::LocalStorage;
use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use crate::ui::messages::warning;
use crate::ui::theme::Theme;
use crate::utils::date::{self, DateRange};
use chrono::NaiveDate;
use std::io::{self, Write};
use std::path::Path;

/// Open the local storage database and apply the stored theme.
pub(crate) fn open_storage(cfg: &Config) -> AppResult<LocalStorage> {
    let parent = Path::new(&cfg.database).parent();
    if let Some(dir) = parent.filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    let storage = LocalStorage::open(&cfg.database)?;
    Theme::load(&storage)?.apply();
    Ok(storage)
}

pub(crate) fn connect(cfg: &Config) -> AppResult<HttpApi> {
    let api = HttpApi::new(&cfg.api_url, cfg.request_timeout())?;
    tracing::debug!(base_url = api.base_url(), "api client ready");
    Ok(api)
}

/// Stored session, or [`AppError::MissingToken`] before any request is made.
pub(crate) fn require_session(storage: &LocalStorage) -> AppResult<Session> {
    SessionLogic::require(storage)
}

pub(crate) fn parse_day(s: &str) -> AppResult<NaiveDate> {
    date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// `--period` when given, the default timesheet range otherwise.
pub(crate) fn resolve_range(period: Option<&str>) -> AppResult<DateRange> {
    match period {
        Some(p) => date::parse_range(p),
        None => Ok(DateRange::default_view(date::today())),
    }
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
