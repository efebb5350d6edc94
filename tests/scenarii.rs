//! Scripted interactive sessions, checking what the user sees and what ends up in the task list

use std::io::Cursor;

use chrono::NaiveDate;

use todo_list::app::TodoApp;
use todo_list::traits::OrderedList;
use todo_list::TaskList;

/// Every session of this file believes today is 2030-01-10
fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 1, 10).unwrap()
}

/// Run a whole session with `script` as the user input
fn run_session(script: &str) -> (String, TaskList) {
    let input = Cursor::new(script.as_bytes().to_vec());
    let mut app = TodoApp::new(input, Vec::new()).with_clock(fixed_today);
    app.run().unwrap();

    let tasks = app.tasks().clone();
    let output = String::from_utf8(app.into_output()).unwrap();
    (output, tasks)
}

fn names(tasks: &TaskList) -> Vec<String> {
    tasks.iter().map(|t| t.borrow().name().to_string()).collect()
}

#[test]
fn add_then_complete() {
    let (output, tasks) = run_session(
        "1\nBuy milk\n2030-01-15\n\
         1\nWalk dog\n2030-01-20\n\
         1\nRead book\n2030-01-10\n\
         5\n2\ny\n\
         3\n\
         9\n");

    assert_eq!(output.matches("SUCCESS: Task Added").count(), 3);
    assert!(output.contains("SUCCESS: Task Marked Done"));
    assert!(output.contains("--- Showing Completed Tasks[1] ---"));
    assert!(output.contains("Total Tasks [3] | Completed Tasks [1] | Remaining Tasks [2]"));
    assert!(output.trim_end().ends_with("Exiting Application..."));

    assert_eq!(names(&tasks), vec!["Buy milk", "Walk dog", "Read book"]);
    assert!(tasks.get_item(1).unwrap().borrow().done());
    assert_eq!(tasks.completed_count(), 1);
    assert_eq!(tasks.get_item(0).unwrap().borrow().due_date(), NaiveDate::from_ymd_opt(2030, 1, 15).unwrap());
}

#[test]
fn completing_picks_among_incomplete_tasks() {
    // Once "A" is done, option 1 of the completion menu is "B"
    let (_output, tasks) = run_session(
        "1\nA\n2030-02-01\n\
         1\nB\n2030-02-01\n\
         5\n1\nY\n\
         5\n1\nY\n\
         5\n\
         9\n");

    assert_eq!(tasks.completed_count(), 2);
}

#[test]
fn nothing_to_complete() {
    let (output, _) = run_session("5\n1\nA\n2030-02-01\n5\n1\ny\n5\n9\n");
    assert!(output.contains("No Task added yet. Please add a task"));
    assert!(output.contains("All Tasks are already Marked as Done"));
}

#[test]
fn invalid_new_tasks_are_rejected() {
    let (output, tasks) = run_session(
        "1\nOld task\n2030-01-09\n\
         1\n   \n2030-01-10\n\
         1\nBad date\n2030-13-01\n\
         9\n");

    assert!(output.contains("ERROR: Task Addition failed [Due date 2030-01-09 is older than the current date 2030-01-10]"));
    assert!(output.contains("ERROR: Task Addition failed [Name for the task is a required field]"));
    assert!(output.contains("ERROR: Task Addition failed [Invalid due date '2030-13-01'"));
    assert!(!output.contains("SUCCESS"));
    assert!(tasks.is_empty());
}

#[test]
fn unknown_menu_option() {
    let (output, _) = run_session("0\nhello\n9\n");
    assert_eq!(output.matches("Invalid Option Selected. Please try again").count(), 2);
}

#[test]
fn remove_after_declining_once() {
    let (output, tasks) = run_session(
        "1\nA\n2030-01-10\n\
         1\nB\n2030-01-11\n\
         6\n1\nn\n3\n\
         6\n1\nY\n\
         9\n");

    assert!(output.contains("3        Back to Main Menu"));
    assert_eq!(output.matches("SUCCESS: Task Removed").count(), 1);
    assert_eq!(names(&tasks), vec!["B"]);
}

#[test]
fn remove_with_invalid_selection() {
    let (output, tasks) = run_session(
        "6\n\
         1\nA\n2030-01-10\n\
         6\n5\n\
         6\nfirst\n\
         9\n");

    assert!(output.contains("No Task added yet. Please add a task"));
    assert!(output.contains("ERROR: Task Removal failed [Option 5 is out of range [1-2]]"));
    assert!(output.contains("ERROR: Task Removal failed ['first' is not a valid option]"));
    assert_eq!(tasks.size(), 1);
}

#[test]
fn find_and_check_by_name() {
    let (output, _) = run_session(
        "1\nBuy Milk\n2030-03-01\n\
         7\nbuy milk\n\
         7\nbread\n\
         8\nBUY MILK\n\
         8\nbread\n\
         9\n");

    assert!(output.contains("--- Task Details ---\nName: Buy Milk\nDue Date: 2030-03-01\nDone: No\n"));
    assert!(output.contains("Task with this name[BUY MILK] exists"));
    assert_eq!(output.matches("No task found by this name[bread]").count(), 2);
}

#[test]
fn show_lists() {
    let (output, _) = run_session(
        "2\n3\n4\n\
         1\nPlan trip\n2030-06-01\n\
         2\n4\n\
         9\n");

    assert!(output.contains("--- Showing All Tasks[0] ---\nNo Task added yet. Please add a task"));
    assert!(output.contains("--- Showing Completed Tasks[0] ---\nNo Tasks Completed yet"));
    assert!(output.contains("--- Showing Incomplete Tasks[0] ---\nNo Tasks Remaining"));
    assert!(output.contains("--- Showing All Tasks[1] ---"));
    assert!(output.contains("--- Showing Incomplete Tasks[1] ---"));
    assert!(output.contains("Plan trip"));
}

#[test]
fn end_of_input_ends_the_session() {
    let (output, tasks) = run_session("1\nHalf a task");
    assert!(tasks.is_empty());
    assert!(!output.contains("Exiting Application..."));

    let (_, tasks) = run_session("");
    assert!(tasks.is_empty());
}

#[test]
fn windows_line_breaks() {
    let (_, tasks) = run_session("1\r\nTidy desk\r\n2030-01-12\r\n9\r\n");
    assert_eq!(names(&tasks), vec!["Tidy desk"]);
}

#[test]
fn custom_app_name() {
    *todo_list::config::APP_NAME.lock().unwrap() = "GROCERY LIST".to_string();
    let (output, _) = run_session("9\n");
    assert!(output.starts_with("WELCOME TO GROCERY LIST\n"));
}
