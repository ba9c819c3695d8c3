// UI layer: terminal feedback while uploading, plus the optional pause used
// when debugging a run. Nothing here affects what gets uploaded.

use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::time::Duration;

/// What to do when an error path is hit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DebugHook {
    #[default]
    Off,
    /// Block on the terminal until Enter is pressed.
    Pause,
}

impl DebugHook {
    pub fn from_flag(debug: bool) -> Self {
        if debug {
            DebugHook::Pause
        } else {
            DebugHook::Off
        }
    }

    /// Called on every error path. Never aborts the run.
    pub fn fire(&self) {
        if *self == DebugHook::Off {
            return;
        }
        let answer = Input::<String>::new()
            .with_prompt("Paused on error, press Enter to continue")
            .allow_empty(true)
            .interact_text();
        if let Err(e) = answer {
            debug!("Debug pause prompt failed: {}", e);
        }
    }
}

/// Spinner shown while a single request is in flight. It draws to stderr and
/// stays hidden when stderr is not a terminal.
pub fn upload_spinner(index: usize) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Uploading user #{}...", index));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
