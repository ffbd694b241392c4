/// Initial size of the host window.
pub const WINDOW_SIZE: [f32; 2] = [1024.0, 720.0];

/// Inner margin between the panel border and its content.
pub const PANEL_MARGIN: f32 = 6.0;

/// Width of the panel border, painted inside the panel rect.
pub const PANEL_STROKE_WIDTH: f32 = 2.0;

pub const PANEL_CORNER_RADIUS: f32 = 6.0;

/// Height of the panel header (the drag handle row).
pub const HEADER_HEIGHT: f32 = 24.0;

/// Width of each header button cell (minimize, close).
pub const HEADER_BUTTON_WIDTH: f32 = 24.0;

/// Width of the progress bar in the minimized strip.
pub const MINIMIZED_PROGRESS_WIDTH: f32 = 64.0;

/// Fallback title when no task is being timed.
pub const DEFAULT_TITLE: &str = "Study Timer";

/// How often the host repaints while the countdown is running.
pub const RUNNING_REPAINT_MS: u64 = 250;
