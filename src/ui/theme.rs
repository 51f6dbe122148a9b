//! Dark-mode preference.
//!
//! The flag lives in local storage under `darkMode` and is applied once at
//! startup; color helpers read it to pick their palette.

use crate::db::storage::LocalStorage;
use crate::errors::AppResult;
use std::sync::atomic::{AtomicBool, Ordering};

pub const DARK_MODE_KEY: &str = "darkMode";

static DARK: AtomicBool = AtomicBool::new(false);

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_flag(dark: bool) -> Self {
        if dark { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Self {
        Theme::from_flag(!self.is_dark())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Read the stored preference; light when unset.
    pub fn load(storage: &LocalStorage) -> AppResult<Self> {
        let stored = storage.get(DARK_MODE_KEY)?;
        Ok(Theme::from_flag(stored.as_deref() == Some("true")))
    }

    pub fn save(&self, storage: &LocalStorage) -> AppResult<()> {
        storage.set(DARK_MODE_KEY, if self.is_dark() { "true" } else { "false" })
    }

    pub fn apply(&self) {
        DARK.store(self.is_dark(), Ordering::Relaxed);
    }
}

pub fn is_dark() -> bool {
    DARK.load(Ordering::Relaxed)
}
