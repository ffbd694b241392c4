//! Color constants for the timer panel.

use eframe::egui::Color32;

// Header and progress bar
pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
pub const PROGRESS_FILL: Color32 = Color32::from_rgb(124, 58, 237);

// Control buttons
pub const START_FILL: Color32 = Color32::from_rgb(34, 197, 94);
pub const PAUSE_FILL: Color32 = Color32::from_rgb(249, 115, 22);
pub const STOP_FILL: Color32 = Color32::from_rgb(107, 114, 128);
pub const BUTTON_TEXT: Color32 = Color32::WHITE;
