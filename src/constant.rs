// Window size constants
pub const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;
pub const DEFAULT_WINDOW_TITLE: &str = "Diff Desk";

/// Application name and metadata constants
pub const APP_QUALIFIER: &str = "com";
pub const APP_ORGANIZATION: &str = "DiffDesk";
pub const APP_NAME: &str = "Diff Desk";

/// Most-recent entries kept per history list
pub const MAX_HISTORY_ENTRIES: usize = 10;

/// Fixed history keys, one file each under the history directory
pub const DIFF_HISTORY_KEY: &str = "diff_history";
pub const JSON_HISTORY_KEY: &str = "json_history";

/// Shown on both panes when the inputs are identical
pub const NO_DIFFERENCES: &str = "No differences found.";

/// Separates the left and right pane text inside a stored compare result
pub const HISTORY_PANE_SEPARATOR: &str = "\n---\n";

pub const TOAST_DURATION_SECS: u64 = 5;
pub const DEFAULT_MAX_INPUT_BYTES: usize = 4 * 1024 * 1024;
pub const DEFAULT_JSON_INDENT: usize = 2;
