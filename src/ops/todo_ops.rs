use crate::model::{Todo, TodoDraft};

/// Error type for task operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TodoError {
    #[error("task title cannot be empty")]
    EmptyTitle,
}

/// The ordered, in-memory task collection. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    todos: Vec<Todo>,
}

impl TodoList {
    pub fn new(todos: Vec<Todo>) -> Self {
        TodoList { todos }
    }

    pub fn as_slice(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.todos.iter().position(|t| t.id == id)
    }

    /// Append a new record with a fresh id and the current instant
    pub fn add(&mut self, draft: &TodoDraft) -> Result<&Todo, TodoError> {
        self.push(Todo::new(draft.title.clone(), draft.text.clone()))
    }

    /// Append an already-built record
    pub fn push(&mut self, todo: Todo) -> Result<&Todo, TodoError> {
        validate_title(&todo.title)?;
        self.todos.push(todo);
        Ok(&self.todos[self.todos.len() - 1])
    }

    /// Replace title and text of the record with `id`. Returns `Ok(false)`
    /// when no record matches; identity and creation time never change.
    pub fn update(&mut self, id: &str, draft: &TodoDraft) -> Result<bool, TodoError> {
        validate_title(&draft.title)?;
        match self.todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.title = draft.title.clone();
                todo.text = draft.text.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the first record with `id`
    pub fn delete(&mut self, id: &str) -> Option<Todo> {
        let idx = self.position(id)?;
        Some(self.todos.remove(idx))
    }
}

fn validate_title(title: &str) -> Result<(), TodoError> {
    if title.trim().is_empty() {
        return Err(TodoError::EmptyTitle);
    }
    Ok(())
}
