use crate::error::AppError;
use crate::model::Task;
use crate::prompt::{Console, FIELD_PROMPT};
use std::io::{BufRead, Write};

pub const TASK_CHANGED: &str = "The task is changed";
pub const TASK_DELETED: &str = "The task is deleted";

/// Ordered tasks; position is display order and persisted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Appends `candidate` when it is complete; an incomplete draft is dropped.
    pub fn add_task(&mut self, candidate: Task) -> bool {
        if !candidate.is_complete() {
            tracing::debug!("discarding task draft with blank description");
            return false;
        }
        self.tasks.push(candidate);
        true
    }

    pub fn add_from_console<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<bool, AppError> {
        let draft = Task::read_draft(console)?;
        Ok(self.add_task(draft))
    }

    /// Prompts for a task number and removes that task. Does nothing, and
    /// asks nothing, when the list is empty.
    pub fn delete_task<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Option<Task>, AppError> {
        if self.tasks.is_empty() {
            return Ok(None);
        }

        let index = console.read_index(self.tasks.len())?;
        tracing::debug!(index, "deleting task");
        let removed = self.tasks.remove(index);
        console.say(TASK_DELETED)?;
        Ok(Some(removed))
    }

    /// Prompts for a task number and a field name, then re-acquires that field.
    pub fn edit_task<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<bool, AppError> {
        if self.tasks.is_empty() {
            return Ok(false);
        }

        let index = console.read_index(self.tasks.len())?;
        let field_name = console.ask(FIELD_PROMPT)?;
        tracing::debug!(index, field = %field_name.trim(), "editing task");
        let changed = self.tasks[index].edit(&field_name, console)?;
        if changed {
            console.say(TASK_CHANGED)?;
        }
        Ok(changed)
    }
}
