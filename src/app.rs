//! An interactive, menu-driven session over a [`TaskList`]
//!
//! The session reads one answer per line from any [`BufRead`] and writes to any [`Write`], so that it can be driven
//! by a terminal as well as by a test script. \
//! Invalid answers are reported to the user and never end the session. Only I/O errors do.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use chrono::{Local, NaiveDate};

use crate::config;
use crate::error::InputError;
use crate::task::Task;
use crate::task_list::{TaskFilter, TaskList};
use crate::traits::OrderedList;
use crate::utils::{prompt, write_task_details, write_task_table};

/// Entries of the main menu
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuOption {
    AddTask,
    ShowAllTasks,
    ShowCompletedTasks,
    ShowIncompleteTasks,
    MarkTaskDone,
    RemoveTask,
    FindTask,
    CheckTaskExists,
    Quit,
}

impl MenuOption {
    /// Text shown when this action fails
    fn failure_label(&self) -> &'static str {
        match self {
            MenuOption::AddTask => "Task Addition failed",
            MenuOption::MarkTaskDone => "Task Completion failed",
            MenuOption::RemoveTask => "Task Removal failed",
            _ => "Action failed",
        }
    }
}

impl FromStr for MenuOption {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuOption::AddTask),
            "2" => Ok(MenuOption::ShowAllTasks),
            "3" => Ok(MenuOption::ShowCompletedTasks),
            "4" => Ok(MenuOption::ShowIncompleteTasks),
            "5" => Ok(MenuOption::MarkTaskDone),
            "6" => Ok(MenuOption::RemoveTask),
            "7" => Ok(MenuOption::FindTask),
            "8" => Ok(MenuOption::CheckTaskExists),
            "9" => Ok(MenuOption::Quit),
            other => Err(InputError::InvalidSelection { input: other.to_string() }),
        }
    }
}

/// Parse a due date typed by the user
pub fn parse_due_date(input: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(input.trim(), config::DATE_FORMAT)
        .map_err(|source| InputError::InvalidDate { input: input.to_string(), source })
}

/// Check the fields of a task about to be created.
/// A task may be due today, but not before.
pub fn validate_new_task(name: &str, due_date: NaiveDate, today: NaiveDate) -> Result<(), InputError> {
    if due_date < today {
        return Err(InputError::DueDateInPast { due: due_date, today });
    }
    if name.trim().is_empty() {
        return Err(InputError::BlankName);
    }
    Ok(())
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// An interactive session. Its tasks live as long as it does.
pub struct TodoApp<R, W> {
    tasks: TaskList,
    input: R,
    output: W,
    today: fn() -> NaiveDate,
}

impl<R: BufRead, W: Write> TodoApp<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            tasks: TaskList::new(),
            input,
            output,
            today: local_today,
        }
    }

    /// Use another source for the current date (the local date is used by default)
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Consume the session, and give back its output
    pub fn into_output(self) -> W {
        self.output
    }

    /// Show the main menu and run the chosen actions, until the user quits or the input ends
    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        writeln!(self.output, "WELCOME TO {}", config::app_name())?;
        loop {
            self.show_main_menu()?;
            let line = match self.read_line()? {
                Some(line) => line,
                None => {
                    log::info!("End of input, leaving the session");
                    break;
                }
            };
            writeln!(self.output)?;

            let option = match line.parse::<MenuOption>() {
                Ok(option) => option,
                Err(err) => {
                    log::warn!("{}", err);
                    writeln!(self.output, "Invalid Option Selected. Please try again")?;
                    continue;
                }
            };
            if option == MenuOption::Quit {
                writeln!(self.output, "Exiting Application...")?;
                break;
            }

            if let Err(err) = self.perform(option) {
                match err.downcast::<io::Error>() {
                    Ok(io_err) if io_err.kind() == io::ErrorKind::UnexpectedEof => {
                        log::info!("End of input during {:?}, leaving the session", option);
                        break;
                    },
                    Ok(io_err) => {
                        let err: Box<dyn Error> = io_err;
                        return Err(err);
                    },
                    Err(err) => {
                        log::warn!("{:?} failed: {}", option, err);
                        writeln!(self.output, "ERROR: {} [{}]", option.failure_label(), err)?;
                    },
                }
            }
        }
        Ok(())
    }

    fn perform(&mut self, option: MenuOption) -> Result<(), Box<dyn Error>> {
        match option {
            MenuOption::AddTask => self.add_task(),
            MenuOption::ShowAllTasks => Ok(write_task_table(&mut self.output, &self.tasks, TaskFilter::all())?),
            MenuOption::ShowCompletedTasks => {
                let completed = self.tasks.completed_tasks();
                Ok(write_task_table(&mut self.output, &completed, TaskFilter::COMPLETED)?)
            },
            MenuOption::ShowIncompleteTasks => {
                let incomplete = self.tasks.incomplete_tasks();
                Ok(write_task_table(&mut self.output, &incomplete, TaskFilter::INCOMPLETE)?)
            },
            MenuOption::MarkTaskDone => self.mark_task_done(),
            MenuOption::RemoveTask => self.remove_task(),
            MenuOption::FindTask => self.find_task(),
            MenuOption::CheckTaskExists => self.check_task_exists(),
            MenuOption::Quit => Ok(()),
        }
    }

    fn show_main_menu(&mut self) -> io::Result<()> {
        let total = self.tasks.size();
        let done = self.tasks.completed_count();
        let out = &mut self.output;
        writeln!(out)?;
        writeln!(out, "**************************************")?;
        writeln!(out, "              MAIN MENU")?;
        writeln!(out, "**************************************")?;
        writeln!(out, "Total Tasks [{}] | Completed Tasks [{}] | Remaining Tasks [{}]", total, done, total - done)?;
        writeln!(out, "1. Add a New Task")?;
        writeln!(out, "2. Show All Tasks")?;
        writeln!(out, "3. Show All Completed Tasks")?;
        writeln!(out, "4. Show All Incomplete Tasks")?;
        writeln!(out, "5. Mark Task as Done")?;
        writeln!(out, "6. Remove a Task")?;
        writeln!(out, "7. Find a Task by Name")?;
        writeln!(out, "8. Check if a Task Exists")?;
        writeln!(out, "9. Quit")?;
        prompt(out, "Please choose an option[1-9]: ")
    }

    /// Read a line, without its line break. Returns `None` at the end of the input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Read a line that must be there
    fn expect_line(&mut self) -> io::Result<String> {
        self.read_line()?
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "input ended unexpectedly"))
    }

    fn add_task(&mut self) -> Result<(), Box<dyn Error>> {
        writeln!(self.output, "--- Enter Task Details ---")?;
        prompt(&mut self.output, "Enter Task Name: ")?;
        let name = self.expect_line()?;
        prompt(&mut self.output, &format!("Enter Task Due Date[{}]: ", config::DATE_FORMAT_HINT))?;
        let due_date = parse_due_date(&self.expect_line()?)?;
        validate_new_task(&name, due_date, (self.today)())?;

        let handle = self.tasks.add_task(Task::new(name, due_date));
        let task = handle.borrow();
        log::debug!("Added task {} ({}), {} tasks in the list", task.name(), task.uid(), self.tasks.size());
        if log::log_enabled!(log::Level::Trace) {
            match serde_json::to_string(&*task) {
                Ok(json) => log::trace!("{}", json),
                Err(err) => log::warn!("Unable to serialize task {}: {}", task.uid(), err),
            }
        }
        writeln!(self.output, "SUCCESS: Task Added")?;
        Ok(())
    }

    /// Let the user pick a task of `tasks`, and confirm the choice with `confirmation`.
    ///
    /// Returns the 0-based index of the task in `tasks`, or `None` if the user went back to the main menu.
    fn pick_task(&mut self, tasks: &TaskList, filter: TaskFilter, confirmation: &str) -> Result<Option<usize>, Box<dyn Error>> {
        let back = tasks.size() + 1;
        loop {
            write_task_table(&mut self.output, tasks, filter)?;
            writeln!(self.output, "{:<8} {}", back, "Back to Main Menu")?;
            prompt(&mut self.output, &format!("Please choose an option[1-{}]: ", back))?;

            let answer = self.expect_line()?;
            let selected: usize = answer.trim().parse()
                .map_err(|_| InputError::InvalidSelection { input: answer.clone() })?;
            if selected == back {
                return Ok(None);
            }
            if selected == 0 || selected > tasks.size() {
                return Err(InputError::SelectionOutOfRange { selected, max: back }.into());
            }

            prompt(&mut self.output, confirmation)?;
            if self.expect_line()?.trim().eq_ignore_ascii_case("y") {
                return Ok(Some(selected - 1));
            }
        }
    }

    fn mark_task_done(&mut self) -> Result<(), Box<dyn Error>> {
        let incomplete = self.tasks.incomplete_tasks();
        if incomplete.is_empty() {
            let message = if self.tasks.is_empty() {
                "No Task added yet. Please add a task"
            } else {
                "All Tasks are already Marked as Done"
            };
            writeln!(self.output, "{}", message)?;
            return Ok(());
        }

        writeln!(self.output, "--- Complete a Task ---")?;
        let confirmation = "Are you sure you want to mark this task done (Y/N): ";
        if let Some(index) = self.pick_task(&incomplete, TaskFilter::INCOMPLETE, confirmation)? {
            let mut task = incomplete.get_item(index)?.borrow_mut();
            task.set_done(true);
            log::debug!("Task {} ({}) marked as done", task.name(), task.uid());
            writeln!(self.output, "SUCCESS: Task Marked Done")?;
        }
        Ok(())
    }

    fn remove_task(&mut self) -> Result<(), Box<dyn Error>> {
        if self.tasks.is_empty() {
            writeln!(self.output, "No Task added yet. Please add a task")?;
            return Ok(());
        }

        writeln!(self.output, "--- Remove a Task ---")?;
        // Indices of this snapshot are the indices of self.tasks
        let all = self.tasks.filtered(TaskFilter::all());
        let confirmation = "Are you sure you want to remove (Y/N): ";
        if let Some(index) = self.pick_task(&all, TaskFilter::all(), confirmation)? {
            let removed = self.tasks.remove_item(index)?;
            log::debug!("Removed task {} ({})", removed.borrow().name(), removed.borrow().uid());
            writeln!(self.output, "SUCCESS: Task Removed")?;
        }
        Ok(())
    }

    fn find_task(&mut self) -> Result<(), Box<dyn Error>> {
        writeln!(self.output, "--- Find a Task by Name ---")?;
        prompt(&mut self.output, "Please enter the task name: ")?;
        let name = self.expect_line()?;
        match self.tasks.find_by_name(&name) {
            Some(task) => write_task_details(&mut self.output, &task.borrow())?,
            None => writeln!(self.output, "No task found by this name[{}]", name)?,
        }
        Ok(())
    }

    fn check_task_exists(&mut self) -> Result<(), Box<dyn Error>> {
        writeln!(self.output, "--- Check if a Task Exists ---")?;
        prompt(&mut self.output, "Please enter the task name: ")?;
        let name = self.expect_line()?;
        if self.tasks.contains_name(&name) {
            writeln!(self.output, "Task with this name[{}] exists", name)?;
        } else {
            writeln!(self.output, "No task found by this name[{}]", name)?;
        }
        Ok(())
    }
}
