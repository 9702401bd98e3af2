//! Task model and in-memory task list.
//!
//! Three task kinds: a plain to-do, a deadline with a due date, and an
//! event with a date. Each task renders itself two ways: a display form for
//! the interactive listing (`[D][X] submit report (by: 2024-01-15)`) and a
//! pipe-delimited line for the backing file (`D | 1 | submit report | 2024-01-15`).

use std::fmt;

use chrono::NaiveDate;

/// Field separator for the backing-file line encoding. Decoding splits on
/// this same literal, so encode and decode stay in step.
pub const SEPARATOR: &str = " | ";

/// Task kind, carrying the date where the kind has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Plain to-do, no date.
    Todo,
    /// Task with a due date.
    Deadline(NaiveDate),
    /// Event happening on a date.
    Event(NaiveDate),
}

/// A single task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// The task description (no embedded newlines).
    pub description: String,
    /// Whether the task is completed.
    pub done: bool,
    /// The kind, with its date if any.
    pub kind: TaskKind,
}

impl Task {
    /// Create a plain to-do.
    pub fn todo(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Todo,
        }
    }

    /// Create a deadline task due on `date`.
    pub fn deadline(description: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Deadline(date),
        }
    }

    /// Create an event task happening on `date`.
    pub fn event(description: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Event(date),
        }
    }

    /// Mark this task as completed.
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Mark this task as not completed.
    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    /// One-letter type tag used in both the listing and the backing file.
    pub fn type_tag(&self) -> char {
        match self.kind {
            TaskKind::Todo => 'T',
            TaskKind::Deadline(_) => 'D',
            TaskKind::Event(_) => 'E',
        }
    }

    /// The task's date, if its kind has one.
    pub fn date(&self) -> Option<NaiveDate> {
        match self.kind {
            TaskKind::Todo => None,
            TaskKind::Deadline(date) | TaskKind::Event(date) => Some(date),
        }
    }

    /// Format this task as a backing-file line (no trailing newline).
    ///
    /// Layout: `<tag> | <0|1> | <description>` plus ` | <YYYY-MM-DD>` for
    /// deadlines and events.
    pub fn to_line(&self) -> String {
        let done = if self.done { "1" } else { "0" };
        let mut fields = vec![
            self.type_tag().to_string(),
            done.to_string(),
            self.description.clone(),
        ];
        if let Some(date) = self.date() {
            fields.push(date.format("%Y-%m-%d").to_string());
        }
        fields.join(SEPARATOR)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let done = if self.done { 'X' } else { ' ' };
        match self.kind {
            TaskKind::Todo => write!(f, "[T][{}] {}", done, self.description),
            TaskKind::Deadline(date) => {
                write!(f, "[D][{}] {} (by: {})", done, self.description, date.format("%Y-%m-%d"))
            }
            TaskKind::Event(date) => {
                write!(f, "[E][{}] {} (at: {})", done, self.description, date.format("%Y-%m-%d"))
            }
        }
    }
}

/// The ordered task collection owned by the command loop.
///
/// Indices are 0-based here; the command loop presents 1-based numbering to
/// the user and converts at the boundary.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    /// Tasks in insertion order (which is also on-disk line order).
    pub tasks: Vec<Task>,
}

impl TaskList {
    /// Wrap an existing collection (typically the result of a load).
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Append a task at the end.
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Remove and return the task at `index`, or `None` if out of range.
    pub fn remove(&mut self, index: usize) -> Option<Task> {
        if index < self.tasks.len() {
            Some(self.tasks.remove(index))
        } else {
            None
        }
    }

    /// Mark the task at `index` as done, returning it for display.
    pub fn mark_done(&mut self, index: usize) -> Option<&Task> {
        let task = self.tasks.get_mut(index)?;
        task.mark_done();
        Some(task)
    }

    /// Mark the task at `index` as not done, returning it for display.
    pub fn mark_undone(&mut self, index: usize) -> Option<&Task> {
        let task = self.tasks.get_mut(index)?;
        task.mark_undone();
        Some(task)
    }

    /// Get the task at `index`.
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Case-insensitive description search. Returns `(index, task)` pairs
    /// in list order.
    pub fn find(&self, keyword: &str) -> Vec<(usize, &Task)> {
        let needle = keyword.to_lowercase();
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.description.to_lowercase().contains(&needle))
            .collect()
    }

    /// Count of completed tasks.
    pub fn done_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }

    /// Count of tasks not yet completed.
    pub fn pending_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.done).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_todo_to_line() {
        let mut task = Task::todo("read book");
        assert_eq!(task.to_line(), "T | 0 | read book");

        task.mark_done();
        assert_eq!(task.to_line(), "T | 1 | read book");
    }

    #[test]
    fn test_deadline_to_line() {
        let mut task = Task::deadline("submit report", date("2024-01-15"));
        assert_eq!(task.to_line(), "D | 0 | submit report | 2024-01-15");

        task.mark_done();
        assert_eq!(task.to_line(), "D | 1 | submit report | 2024-01-15");
    }

    #[test]
    fn test_event_to_line() {
        let task = Task::event("team lunch", date("2024-02-01"));
        assert_eq!(task.to_line(), "E | 0 | team lunch | 2024-02-01");
    }

    #[test]
    fn test_display_forms() {
        let mut todo = Task::todo("read book");
        assert_eq!(todo.to_string(), "[T][ ] read book");
        todo.mark_done();
        assert_eq!(todo.to_string(), "[T][X] read book");

        let deadline = Task::deadline("submit report", date("2024-01-15"));
        assert_eq!(deadline.to_string(), "[D][ ] submit report (by: 2024-01-15)");

        let event = Task::event("team lunch", date("2024-02-01"));
        assert_eq!(event.to_string(), "[E][ ] team lunch (at: 2024-02-01)");
    }

    #[test]
    fn test_mark_undone() {
        let mut task = Task::todo("read book");
        task.mark_done();
        assert!(task.done);
        task.mark_undone();
        assert!(!task.done);
    }

    #[test]
    fn test_type_tags() {
        assert_eq!(Task::todo("a").type_tag(), 'T');
        assert_eq!(Task::deadline("b", date("2024-01-01")).type_tag(), 'D');
        assert_eq!(Task::event("c", date("2024-01-01")).type_tag(), 'E');
    }

    #[test]
    fn test_list_add_remove() {
        let mut list = TaskList::default();
        list.add(Task::todo("one"));
        list.add(Task::todo("two"));
        assert_eq!(list.len(), 2);

        let removed = list.remove(0).unwrap();
        assert_eq!(removed.description, "one");
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).unwrap().description, "two");

        assert!(list.remove(5).is_none());
    }

    #[test]
    fn test_list_mark_done_undone() {
        let mut list = TaskList::new(vec![Task::todo("one")]);

        let task = list.mark_done(0).unwrap();
        assert!(task.done);
        assert_eq!(list.done_count(), 1);
        assert_eq!(list.pending_count(), 0);

        list.mark_undone(0).unwrap();
        assert_eq!(list.pending_count(), 1);

        assert!(list.mark_done(9).is_none());
    }

    #[test]
    fn test_list_find_case_insensitive() {
        let list = TaskList::new(vec![
            Task::todo("Read Book"),
            Task::todo("write report"),
            Task::todo("book flights"),
        ]);

        let matches = list.find("book");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].0, 0);
        assert_eq!(matches[1].0, 2);

        assert!(list.find("missing").is_empty());
    }
}
