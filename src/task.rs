//! To-do tasks

use std::cell::RefCell;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};

/// Whether a task has been done, and when.
///
/// Tasks built by this crate always record the completion time, but it is optional so that a task can be
/// marked as completed without a known date.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CompletionStatus {
    Completed(Option<DateTime<Utc>>),
    Uncompleted,
}
impl CompletionStatus {
    pub fn is_completed(&self) -> bool {
        match self {
            CompletionStatus::Completed(_) => true,
            _ => false,
        }
    }
}

/// A task shared between a [`TaskList`](crate::task_list::TaskList) and the views built from it.
///
/// Marking a task as done through any handle is visible through every other handle.
pub type TaskHandle = Rc<RefCell<Task>>;

/// A to-do task
///
/// Two tasks are equal when their names are equal, regardless of case.
/// Their due dates, completion statuses and uids are not compared.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Task {
    /// Random identifier, only used to tell apart tasks in logs
    uid: String,
    /// The display name of the task. This is also its identity
    name: String,
    /// The day this task is due
    due_date: NaiveDate,
    /// The time this task was created
    creation_date: DateTime<Utc>,
    /// The completion status of this task
    completion_status: CompletionStatus,
}

impl Task {
    /// Create a brand new, uncompleted Task.
    /// This will pick a new (random) uid.
    pub fn new(name: String, due_date: NaiveDate) -> Self {
        let new_uid = Uuid::new_v4().to_hyphenated().to_string();
        let new_creation_date = Utc::now();
        Self::new_with_parameters(name, new_uid, due_date, new_creation_date, CompletionStatus::Uncompleted)
    }

    /// Create a new Task instance with every field given
    pub fn new_with_parameters(name: String, uid: String, due_date: NaiveDate,
                               creation_date: DateTime<Utc>, completion_status: CompletionStatus,
                            ) -> Self
    {
        Self {
            uid,
            name,
            due_date,
            creation_date,
            completion_status,
        }
    }

    /// Wrap this task into a shareable handle
    pub fn into_handle(self) -> TaskHandle {
        Rc::new(RefCell::new(self))
    }

    pub fn uid(&self) -> &str                   { &self.uid               }
    pub fn name(&self) -> &str                  { &self.name              }
    pub fn due_date(&self) -> NaiveDate         { self.due_date           }
    pub fn done(&self) -> bool                  { self.completion_status.is_completed() }
    pub fn creation_date(&self) -> &DateTime<Utc>        { &self.creation_date }
    pub fn completion_status(&self) -> &CompletionStatus { &self.completion_status }

    /// Whether `name` is the name of this task, regardless of case
    pub fn has_name(&self, name: &str) -> bool {
        eq_ignore_case(&self.name, name)
    }

    /// Mark this task as done (or not done).
    /// Marking a done task as done again keeps its original completion date
    pub fn set_done(&mut self, done: bool) {
        if done == self.done() {
            return;
        }
        let new_status = if done {
            CompletionStatus::Completed(Some(Utc::now()))
        } else {
            CompletionStatus::Uncompleted
        };
        self.set_completion_status(new_status);
    }

    /// Set the completion status
    pub fn set_completion_status(&mut self, new_completion_status: CompletionStatus) {
        self.completion_status = new_completion_status;
    }
}

fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.chars().flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        eq_ignore_case(&self.name, &other.name)
    }
}
impl Eq for Task {}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Due Date: {}", self.due_date)?;
        writeln!(f, "Done: {}", if self.done() { "Yes" } else { "No" })
    }
}
