//! In-memory task store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{CourseId, Task, TaskId},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store preserving insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: Vec<Task>,
    id_index: HashMap<TaskId, usize>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with existing tasks.
    ///
    /// Later duplicates of an identifier are ignored.
    #[must_use]
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut state = InMemoryTaskState::default();
        for task in tasks {
            if !state.id_index.contains_key(&task.id()) {
                state.id_index.insert(task.id(), state.tasks.len());
                state.tasks.push(task);
            }
        }
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }
}

fn poisoned(err: &impl std::fmt::Display) -> TaskStoreError {
    TaskStoreError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn append(&self, task: &Task) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        if state.id_index.contains_key(&task.id()) {
            return Err(TaskStoreError::DuplicateTask(task.id()));
        }

        let position = state.tasks.len();
        state.id_index.insert(task.id(), position);
        state.tasks.push(task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        let task = state
            .id_index
            .get(&id)
            .and_then(|position| state.tasks.get(*position))
            .cloned();
        Ok(task)
    }

    async fn list(&self) -> TaskStoreResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(state.tasks.clone())
    }

    async fn list_by_course(&self, course_id: &CourseId) -> TaskStoreResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(state
            .tasks
            .iter()
            .filter(|task| task.course_id() == Some(course_id))
            .cloned()
            .collect())
    }
}
