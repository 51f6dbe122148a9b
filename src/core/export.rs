use crate::api::TimesheetApi;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, days_to_rows, ensure_writable, export_csv, export_json};
use crate::models::UserId;
use crate::models::session::Session;
use crate::utils::date::DateRange;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the days of `range` (own days, or a subordinate's when
    /// `employee` is given) to `file`.
    ///
    /// Returns the number of rows written.
    pub fn export(
        api: &dyn TimesheetApi,
        session: &Session,
        range: &DateRange,
        employee: Option<UserId>,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output path must be absolute: {file}"
            )));
        }
        ensure_writable(path, force)?;

        let days = match employee {
            Some(id) => {
                if !session.is_manager {
                    return Err(AppError::Forbidden);
                }
                api.employee_sheet(session, id, range)?
            }
            None => api.sheet(session, range)?,
        };
        let days: Vec<_> = days.into_iter().filter(|d| range.contains(d.day)).collect();
        let rows = days_to_rows(&days);

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        tracing::info!(rows = rows.len(), format = format.as_str(), "export written");
        Ok(rows.len())
    }
}
