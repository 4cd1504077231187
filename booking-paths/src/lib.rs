//! XDG Base Directory paths for the booking tools.
//!
//! The CLI, server and terminal wizard all resolve their files through
//! these helpers so a single `XDG_*` override moves everything at once.

use std::path::PathBuf;

const APP_DIR: &str = "booking";

/// Get the booking config directory.
///
/// Returns `$XDG_CONFIG_HOME/booking` if set, otherwise `~/.config/booking`.
///
/// # Examples
///
/// ```
/// use booking_paths::config_dir;
///
/// let flows = config_dir().join("flows");
/// ```
pub fn config_dir() -> PathBuf {
    xdg_dir("XDG_CONFIG_HOME", ".config")
}

/// Get the booking data directory.
///
/// Returns `$XDG_DATA_HOME/booking` if set, otherwise `~/.local/share/booking`.
/// The notes database lives here unless configured otherwise.
pub fn data_dir() -> PathBuf {
    xdg_dir("XDG_DATA_HOME", ".local/share")
}

/// Default location of the notes database.
pub fn default_database_path() -> PathBuf {
    data_dir().join("notes.db")
}

fn xdg_dir(var: &str, home_relative: &str) -> PathBuf {
    if let Ok(base) = std::env::var(var)
        && !base.is_empty()
    {
        PathBuf::from(base).join(APP_DIR)
    } else if let Some(home) = dirs::home_dir() {
        home.join(home_relative).join(APP_DIR)
    } else {
        PathBuf::from(home_relative).join(APP_DIR)
    }
}
