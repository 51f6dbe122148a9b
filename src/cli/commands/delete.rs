use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::delete::DeleteLogic;
use crate::core::routes::View;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date::{DateRange, today};

use super::sheet::show_timesheet;
use super::{ask_confirmation, connect, open_storage, parse_day, require_session};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Delete { date, force } = cmd {
        let day = parse_day(date)?;

        let storage = open_storage(cfg)?;
        let session = require_session(&storage)?;
        View::TimeSheet.authorize(Some(&session))?;

        if !*force
            && !ask_confirmation(&format!(
                "Delete ALL entries for {}? This action is irreversible.",
                day
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let api = connect(cfg)?;
        DeleteLogic::apply(&api, &storage, &session, day)?;

        show_timesheet(
            &api,
            &session,
            DateRange::default_view(today()),
            &cfg.separator_char,
        )?;
    }
    Ok(())
}
