//! Core logic for the popout timer: duration formatting, the drag positioner,
//! and the timer model consumed by the floating panel.

pub mod counter;
pub mod drag;
pub mod time_format;
pub mod timer;

pub use counter::Counter;
pub use drag::{
    DragState, PanelMode, PanelSize, Point, PointerCapture, PointerScope, Position, Positioner,
    Viewport,
};
pub use time_format::format_duration;
pub use timer::{SessionInfo, Task, TimerCommand, TimerController, TimerSnapshot};
