use crate::api::TimesheetApi;
use crate::errors::AppResult;
use crate::models::ProjectId;
use crate::models::session::Session;
use crate::models::task::Task;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Task lists memoized by project for the lifetime of one editor session.
///
/// A project's list is requested at most once; failed fetches are not
/// cached, so the next selection of that project retries.
#[derive(Debug, Default)]
pub struct TaskCache {
    tasks: HashMap<ProjectId, Vec<Task>>,
}

impl TaskCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, project: ProjectId) -> Option<&[Task]> {
        self.tasks.get(&project).map(Vec::as_slice)
    }

    pub fn contains(&self, project: ProjectId) -> bool {
        self.tasks.contains_key(&project)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Return the cached list for `project`, fetching it on first use.
    pub fn fetch(
        &mut self,
        api: &dyn TimesheetApi,
        session: &Session,
        project: ProjectId,
    ) -> AppResult<&[Task]> {
        match self.tasks.entry(project) {
            Entry::Occupied(e) => Ok(e.into_mut().as_slice()),
            Entry::Vacant(v) => {
                let mut list = api.tasks(session, project)?;
                for task in &mut list {
                    task.project_id = project;
                }
                Ok(v.insert(list).as_slice())
            }
        }
    }
}
