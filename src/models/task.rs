use super::{ProjectId, TaskId};
use serde::{Deserialize, Serialize};

/// Task reference data, as returned by `GET /api/Tasks/{projectId}`.
///
/// The server does not always echo the project id; the task cache stamps it
/// with the project the list was fetched for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    #[serde(default)]
    pub project_id: ProjectId,
}
