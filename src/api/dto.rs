//! Wire types exchanged with the backend.

use crate::models::day_status::DayStatus;
use crate::models::{TaskId, UserId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/Auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Response wrapper used by every endpoint.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub succeeded: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

/// Error body shape: only `message` is looked at.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// One hour of `POST /api/Sheet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetEntry {
    pub day: NaiveDate,
    pub hour: usize,
    pub task_id: TaskId,
    pub details: String,
}

#[derive(Debug, Serialize)]
pub struct SaveSheetBody<'a> {
    pub tasks: &'a [SheetEntry],
}

/// Body of `PUT /api/Sheet/updatestatus`.
///
/// `user_id` is `None` when employees send their own days and the
/// subordinate's id when a manager decides on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub user_id: Option<UserId>,
    pub days: Vec<NaiveDate>,
    pub status: u8,
}

impl StatusUpdate {
    pub fn new(user_id: Option<UserId>, days: Vec<NaiveDate>, status: DayStatus) -> Self {
        Self {
            user_id,
            days,
            status: status.code(),
        }
    }

    pub fn target_status(&self) -> Option<DayStatus> {
        DayStatus::from_code(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_update_body_matches_backend() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
        let body = StatusUpdate::new(None, vec![day], DayStatus::Submitted);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"userId": null, "days": ["2026-10-14"], "status": 1})
        );
    }

    #[test]
    fn sheet_entry_is_camel_case() {
        let e = SheetEntry {
            day: NaiveDate::from_ymd_opt(2026, 10, 14).unwrap(),
            hour: 3,
            task_id: 12,
            details: "N/A".into(),
        };
        assert_eq!(
            serde_json::to_value(SaveSheetBody { tasks: &[e] }).unwrap(),
            json!({"tasks": [{"day": "2026-10-14", "hour": 3, "taskId": 12, "details": "N/A"}]})
        );
    }

    #[test]
    fn envelope_tolerates_missing_data() {
        let env: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"succeeded": false, "message": "nope"}"#).unwrap();
        assert!(!env.succeeded);
        assert!(env.data.is_none());
        assert_eq!(env.message.as_deref(), Some("nope"));
    }

    #[test]
    fn login_envelope_carries_the_session() {
        use crate::models::session::Session;

        let env: Envelope<Session> = serde_json::from_str(
            r#"{"succeeded": true, "message": null,
                "data": {"token": "jwt", "userId": 3, "userName": "luca.verdi", "email": "l@x.it", "isManager": false}}"#,
        )
        .unwrap();
        let session = env.data.unwrap();
        assert_eq!(session.user_id, 3);
        assert_eq!(session.token, "jwt");

        let refused: Envelope<Session> =
            serde_json::from_str(r#"{"succeeded": false, "message": "Invalid credentials"}"#).unwrap();
        assert!(refused.data.is_none());
    }
}
