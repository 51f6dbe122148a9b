use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::theme::Theme;

use super::open_storage;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Theme { mode, show } = cmd {
        let storage = open_storage(cfg)?;
        let current = Theme::load(&storage)?;

        if *show {
            info(format!("Current theme: {}", current.as_str()));
            return Ok(());
        }

        let next = mode.unwrap_or_else(|| current.toggled());
        next.save(&storage)?;
        next.apply();
        storage.audit("theme", next.as_str(), "Theme changed");
        success(format!("Theme set to {}", next.as_str()));
    }
    Ok(())
}
