use crate::api::TimesheetApi;
use crate::db::storage::LocalStorage;
use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use crate::ui::messages::success;
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove every entry of `day` on the server.
    pub fn apply(
        api: &dyn TimesheetApi,
        storage: &LocalStorage,
        session: &Session,
        day: NaiveDate,
    ) -> AppResult<()> {
        match api.delete_day(session, day) {
            Ok(()) => {
                storage.audit("delete", &day.to_string(), "Day entries deleted");
                success(format!("All entries for {} have been deleted.", day));
                Ok(())
            }
            Err(AppError::Api { status, .. }) => Err(AppError::Api {
                status,
                message: "Failed to delete task".to_string(),
            }),
            Err(e) => Err(e),
        }
    }
}
