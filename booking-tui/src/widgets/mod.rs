//! Widgets drawn around the active step

mod progress;

pub use progress::ProgressWidget;
