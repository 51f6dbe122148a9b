//! Employee timesheet summary and `send`.

use crate::api::TimesheetApi;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::routes::View;
use crate::core::timesheet::TimeSheetView;
use crate::errors::AppResult;
use crate::models::day_status::DayStatus;
use crate::models::session::Session;
use crate::ui::messages::{header, info, warning};
use crate::ui::tables::days_table;
use crate::utils::date::DateRange;
use crate::utils::formatting::{bold, italic};

use super::{connect, open_storage, parse_day, require_session, resolve_range};

const SECTIONS: [(&str, DayStatus); 4] = [
    ("Days Not Sent Yet", DayStatus::Posted),
    ("Submitted", DayStatus::Submitted),
    ("Accepted", DayStatus::Accepted),
    ("Rejected", DayStatus::Rejected),
];

pub(crate) fn render_summary(view: &TimeSheetView, details: bool, separator: &str) {
    header(format!("Timesheet {}", view.range()));

    for (title, status) in SECTIONS {
        let days = view.with_status(status);
        println!("{} ({})", bold(title), days.len());
        if days.is_empty() {
            println!("{}\n", italic("  none"));
        } else {
            println!("{}", days_table(&days, details, separator));
        }
    }

    println!("Active hours: {}", view.active_hours());
}

/// Re-read the default range and print it; used after a change on the
/// server.
pub(crate) fn show_timesheet(
    api: &dyn TimesheetApi,
    session: &Session,
    range: DateRange,
    separator: &str,
) -> AppResult<()> {
    let view = TimeSheetView::load(api, session, range)?;
    render_summary(&view, false, separator);
    Ok(())
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sheet { period, details } = cmd {
        let storage = open_storage(cfg)?;
        let session = require_session(&storage)?;
        View::TimeSheet.authorize(Some(&session))?;
        let range = resolve_range(period.as_deref())?;
        let api = connect(cfg)?;

        let view = TimeSheetView::load(&api, &session, range)?;
        render_summary(&view, *details, &cfg.separator_char);
    }
    Ok(())
}

pub fn send(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Send { dates, all, period } = cmd {
        let storage = open_storage(cfg)?;
        let session = require_session(&storage)?;
        View::TimeSheet.authorize(Some(&session))?;
        let range = resolve_range(period.as_deref())?;
        let api = connect(cfg)?;

        let mut view = TimeSheetView::load(&api, &session, range)?;

        if *all {
            let sendable: Vec<_> = view.sendable().iter().map(|d| d.day).collect();
            for day in sendable {
                view.select(day);
            }
        } else {
            for raw in dates {
                let day = parse_day(raw)?;
                if view.day(day).is_some() {
                    view.select(day);
                } else {
                    warning(format!("No entries for {} in {}", day, view.range()));
                }
            }
        }

        let selected = view.selected();
        if selected.is_empty() {
            info("No days selected.");
            return Ok(());
        }

        if let Some(n) = view.send_selected(&api, &session)? {
            let list: Vec<String> = selected.iter().map(|d| d.to_string()).collect();
            storage.audit("send", &list.join(","), "Days sent to manager");
            n.show();
        }
        render_summary(&view, false, &cfg.separator_char);
    }
    Ok(())
}
