use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

use super::{connect, open_storage, require_session, resolve_range};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        employee,
        force,
    } = cmd
    {
        let storage = open_storage(cfg)?;
        let session = require_session(&storage)?;
        let range = resolve_range(range.as_deref())?;
        let api = connect(cfg)?;

        let rows = ExportLogic::export(&api, &session, &range, *employee, *format, file, *force)?;
        storage.audit("export", file, &format!("{} rows ({})", rows, range));
        info(format!("{} rows exported for {}", rows, range));
    }
    Ok(())
}
