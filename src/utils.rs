//! Some utility functions to display tasks

use std::io::{self, Write};

use crate::task::Task;
use crate::task_list::{TaskFilter, TaskList};
use crate::traits::OrderedList;

const ROW_SEPARATOR: &str = "-------------------------------------------------------------------";

/// Write `text` without a line break, and flush so that it is shown before the user types
pub fn prompt<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()
}

/// How tasks kept by `filter` are called in titles
pub fn filter_label(filter: TaskFilter) -> &'static str {
    if filter == TaskFilter::COMPLETED {
        "Completed"
    } else if filter == TaskFilter::INCOMPLETE {
        "Incomplete"
    } else {
        "All"
    }
}

fn empty_message(filter: TaskFilter) -> &'static str {
    if filter == TaskFilter::COMPLETED {
        "No Tasks Completed yet"
    } else if filter == TaskFilter::INCOMPLETE {
        "No Tasks Remaining"
    } else {
        "No Task added yet. Please add a task"
    }
}

fn table_row(index: &str, name: &str, due_date: &str, done: &str) -> String {
    format!("{:<8} {:<35} {:<15} {:<15}", index, name, due_date, done)
        .trim_end()
        .to_string()
}

/// Write `tasks` as a table, with 1-based indices.
///
/// `filter` is the filter `tasks` has been built with. It only changes the title, and the message shown when there is no task.
pub fn write_task_table<W: Write>(out: &mut W, tasks: &TaskList, filter: TaskFilter) -> io::Result<()> {
    let count = tasks.size();
    writeln!(out, "--- Showing {} Tasks[{}] ---", filter_label(filter), count)?;
    if count == 0 {
        return writeln!(out, "{}", empty_message(filter));
    }

    writeln!(out, "{}", ROW_SEPARATOR)?;
    writeln!(out, "{}", table_row("Index", "Name", "Due Date", "Done"))?;
    writeln!(out, "{}", ROW_SEPARATOR)?;
    for (i, task) in tasks.iter().enumerate() {
        let task = task.borrow();
        let row = table_row(
            &(i + 1).to_string(),
            task.name(),
            &task.due_date().to_string(),
            if task.done() { "Yes" } else { "No" },
        );
        writeln!(out, "{}", row)?;
    }
    Ok(())
}

/// Write every detail of a single task
pub fn write_task_details<W: Write>(out: &mut W, task: &Task) -> io::Result<()> {
    writeln!(out, "--- Task Details ---")?;
    writeln!(out, "{}", task)
}
