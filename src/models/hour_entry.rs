use super::task::Task;
use super::{ProjectId, TaskId};

/// One work hour of the day-entry editor.
///
/// Invariant: `task` is `None` whenever `project` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HourEntry {
    /// 1-based hour slot (1..=8)
    pub hour: usize,
    pub project: Option<ProjectId>,
    pub task: Option<TaskId>,
    pub details: String,
    /// Tasks selectable for `project`
    pub task_options: Vec<Task>,
}

impl HourEntry {
    pub fn empty(hour: usize) -> Self {
        Self {
            hour,
            ..Default::default()
        }
    }

    /// Both project and task are set.
    pub fn is_complete(&self) -> bool {
        self.project.is_some() && self.task.is_some()
    }

    pub fn task_name(&self) -> Option<&str> {
        let id = self.task?;
        self.task_options
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.name.as_str())
    }
}
