//! The collection of tasks of a session, and the views that can be derived from it

use std::rc::Rc;

use bitflags::bitflags;
use chrono::Local;

use crate::dyn_array::{self, DynArray};
use crate::error::ListError;
use crate::task::{Task, TaskHandle};
use crate::traits::OrderedList;

bitflags! {
    /// Flags to tell which tasks a view should keep
    pub struct TaskFilter: u8 {
        /// Tasks that have been done
        const COMPLETED = 1;
        /// Tasks that still have to be done
        const INCOMPLETE = 2;
    }
}

impl TaskFilter {
    /// Whether `task` passes this filter
    pub fn matches(&self, task: &Task) -> bool {
        if task.done() {
            self.contains(Self::COMPLETED)
        } else {
            self.contains(Self::INCOMPLETE)
        }
    }
}

impl Default for TaskFilter {
    fn default() -> Self {
        TaskFilter::all()
    }
}


/// An ordered list of tasks.
///
/// The list holds [`TaskHandle`]s, so that the views built by [`TaskList::filtered`] share their tasks with it.
#[derive(Clone, Debug, Default)]
pub struct TaskList {
    tasks: DynArray<TaskHandle>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task, and return the handle that is now stored in this list
    pub fn add_task(&mut self, task: Task) -> TaskHandle {
        let handle = task.into_handle();
        self.tasks.add_item(Rc::clone(&handle));
        handle
    }

    /// Iterate over the tasks, in insertion order
    pub fn iter(&self) -> dyn_array::Iter<'_, TaskHandle> {
        self.tasks.iter()
    }

    /// Build a new list that references every task matching `filter`, in the same order.
    ///
    /// The new list is a snapshot: tasks added, removed or re-filtered later are not reflected in it.
    /// The tasks themselves are shared, so changing a task through this view also changes it in `self`.
    pub fn filtered(&self, filter: TaskFilter) -> TaskList {
        let mut view = TaskList::new();
        for task in self.iter() {
            if filter.matches(&task.borrow()) {
                view.add_item(Rc::clone(task));
            }
        }
        view
    }

    /// The tasks that have been done
    pub fn completed_tasks(&self) -> TaskList {
        self.filtered(TaskFilter::COMPLETED)
    }

    /// The tasks that still have to be done
    pub fn incomplete_tasks(&self) -> TaskList {
        self.filtered(TaskFilter::INCOMPLETE)
    }

    pub fn completed_count(&self) -> usize {
        self.iter().filter(|task| task.borrow().done()).count()
    }

    /// Returns the first task named `name`, regardless of case
    pub fn find_by_name(&self, name: &str) -> Option<TaskHandle> {
        self.iter()
            .find(|task| task.borrow().has_name(name))
            .map(Rc::clone)
    }

    /// Whether a task named `name` exists, regardless of case.
    /// This relies on the equality of [`Task`]s, that only compares names.
    pub fn contains_name(&self, name: &str) -> bool {
        let probe = Task::new(name.to_string(), Local::now().date_naive()).into_handle();
        self.contains(&probe)
    }
}

impl OrderedList<TaskHandle> for TaskList {
    fn add_item(&mut self, item: TaskHandle) {
        self.tasks.add_item(item)
    }

    fn remove_item(&mut self, index: usize) -> Result<TaskHandle, ListError> {
        self.tasks.remove_item(index)
    }

    fn get_item(&self, index: usize) -> Result<&TaskHandle, ListError> {
        self.tasks.get_item(index)
    }

    fn get_item_mut(&mut self, index: usize) -> Result<&mut TaskHandle, ListError> {
        self.tasks.get_item_mut(index)
    }

    fn set_item(&mut self, index: usize, item: TaskHandle) -> Result<TaskHandle, ListError> {
        self.tasks.set_item(index, item)
    }

    fn size(&self) -> usize {
        self.tasks.size()
    }

    fn contains(&self, item: &TaskHandle) -> bool {
        self.tasks.contains(item)
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a TaskHandle;
    type IntoIter = dyn_array::Iter<'a, TaskHandle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
