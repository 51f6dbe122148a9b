use super::ProjectId;
use serde::{Deserialize, Serialize};

/// Project reference data, as returned by `GET /api/Projects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
}
