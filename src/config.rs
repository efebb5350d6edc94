//! Support for application configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// Name shown in the welcome banner of an interactive session.
/// Feel free to override it before starting a session.
pub static APP_NAME: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("TODO APP".to_string())));

/// `chrono` format of due dates, both when they are typed and when they are displayed
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// How [`DATE_FORMAT`] is spelled out to users
pub const DATE_FORMAT_HINT: &str = "yyyy-mm-dd";

/// Current value of [`APP_NAME`]
pub fn app_name() -> String {
    match APP_NAME.lock() {
        Ok(name) => name.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}
