use std::io;

use todo_list::app::TodoApp;


fn main() {
    env_logger::init();

    let stdin = io::stdin();
    let mut app = TodoApp::new(stdin.lock(), io::stdout());

    if let Err(err) = app.run() {
        log::error!("Session aborted: {}", err);
        eprintln!("ERROR: Issue in the TODO APP [{}]", err);
        std::process::exit(1);
    }
}
