use crate::db::log::{LogRow, read_log};
use crate::db::storage::LocalStorage;
use crate::errors::AppResult;
use crate::utils::formatting::truncate;
use crate::utils::table::{strip_ansi, visible_width};
use ansi_term::Colour;

/// Color of an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "login" | "save" | "accept" => Colour::Green,
        "logout" | "delete" | "reject" => Colour::Red,
        "send" => Colour::Yellow,
        "theme" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Rows of the audit log, optionally restricted to one operation.
    pub fn entries(storage: &LocalStorage, operation: Option<&str>) -> AppResult<Vec<LogRow>> {
        let rows = read_log(storage.conn())?;
        Ok(match operation {
            Some(op) => rows.into_iter().filter(|r| r.operation == op).collect(),
            None => rows,
        })
    }

    pub fn print_log(storage: &LocalStorage, operation: Option<&str>) -> AppResult<()> {
        let entries = Self::entries(storage, operation)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let rendered: Vec<(i64, String, String, &str)> = entries
            .iter()
            .map(|r| {
                let date = chrono::DateTime::parse_from_rfc3339(&r.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| r.date.clone());

                let color = color_for_operation(&r.operation);
                let mut op_target = color.paint(r.operation.as_str()).to_string();
                if !r.target.is_empty() {
                    op_target.push_str(&format!(" ({})", truncate(&r.target, 48)));
                }
                (r.id, date, op_target, r.message.as_str())
            })
            .collect();

        let id_w = rendered
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = rendered
            .iter()
            .map(|(_, date, ..)| date.len())
            .max()
            .unwrap_or(10);
        let op_w = rendered
            .iter()
            .map(|(_, _, op, _)| strip_ansi(op).len())
            .max()
            .unwrap_or(10)
            .min(60);

        println!("📜 Internal log:\n");

        for (id, date, op_target, message) in rendered {
            let padding = " ".repeat(op_w.saturating_sub(visible_width(&op_target)));
            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                op_target,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
