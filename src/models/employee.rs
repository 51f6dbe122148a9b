use super::UserId;
use serde::{Deserialize, Serialize};

/// A manager's subordinate, as returned by `GET /api/Users/subordinates`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: UserId,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub email: String,
}

impl Employee {
    pub fn label(&self) -> &str {
        if self.user_name.is_empty() {
            "Employee Name"
        } else {
            &self.user_name
        }
    }
}
