//! Drag positioning for the floating panel.
//!
//! A [`Positioner`] turns pointer-down/move/up events on the panel's drag
//! handle into a [`Position`] that always stays inside the viewport. While a
//! gesture is active it holds a [`PointerCapture`] from the window-wide
//! [`PointerScope`], so the host keeps routing pointer events to it even after
//! the pointer leaves the handle.

use std::cell::Cell;
use std::ops::Sub;
use std::rc::Rc;

/// Panel position used whenever a panel is mounted.
pub const DEFAULT_POSITION: Position = Point { x: 20, y: 20 };

/// Panel width used for horizontal clamping.
pub const PANEL_WIDTH: i32 = 300;

/// Panel height in [`PanelMode::Normal`].
pub const PANEL_HEIGHT_NORMAL: i32 = 200;

/// Panel height in [`PanelMode::Minimized`].
pub const PANEL_HEIGHT_MINIMIZED: i32 = 60;

/// A screen coordinate in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

/// Top-left corner of the panel.
pub type Position = Point;

/// Size of the visible area the panel must stay inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Layout dimensions of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSize {
    pub width: i32,
    pub height: i32,
}

/// Whether the panel shows its full content or only the compact strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelMode {
    #[default]
    Normal,
    Minimized,
}

impl PanelMode {
    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            PanelMode::Normal => PanelMode::Minimized,
            PanelMode::Minimized => PanelMode::Normal,
        }
    }

    /// Dimensions used when clamping the panel to the viewport.
    pub fn panel_size(self) -> PanelSize {
        let height = match self {
            PanelMode::Normal => PANEL_HEIGHT_NORMAL,
            PanelMode::Minimized => PANEL_HEIGHT_MINIMIZED,
        };
        PanelSize {
            width: PANEL_WIDTH,
            height,
        }
    }
}

/// Window-wide registry of pointer move/up listeners.
///
/// Cloning yields another handle to the same registry. Listeners are only
/// registered through [`PointerScope::capture`], which hands back a guard that
/// deregisters them when dropped.
#[derive(Debug, Clone, Default)]
pub struct PointerScope {
    listeners: Rc<Cell<usize>>,
}

/// Number of listeners (move and up) registered per capture.
const LISTENERS_PER_CAPTURE: usize = 2;

impl PointerScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers pointer move/up listeners for the lifetime of the guard.
    pub fn capture(&self) -> PointerCapture {
        self.listeners.set(self.listeners.get() + LISTENERS_PER_CAPTURE);
        PointerCapture {
            listeners: Rc::clone(&self.listeners),
        }
    }

    /// Whether pointer events must currently be routed window-wide.
    pub fn is_capturing(&self) -> bool {
        self.listeners.get() > 0
    }

    /// Number of live listener registrations.
    pub fn active_listeners(&self) -> usize {
        self.listeners.get()
    }
}

/// RAII guard for listeners registered on a [`PointerScope`].
#[derive(Debug)]
#[must_use = "listeners are released as soon as the capture is dropped"]
pub struct PointerCapture {
    listeners: Rc<Cell<usize>>,
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        self.listeners
            .set(self.listeners.get().saturating_sub(LISTENERS_PER_CAPTURE));
    }
}

/// Drag gesture state.
#[derive(Debug, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// `offset` is the pointer position relative to the panel's top-left
    /// corner when the gesture started.
    Dragging {
        offset: Point,
        capture: PointerCapture,
    },
}

/// Tracks drag gestures for one panel and owns its committed position.
#[derive(Debug)]
pub struct Positioner {
    scope: PointerScope,
    position: Position,
    state: DragState,
}

impl Positioner {
    /// Creates an idle positioner at [`DEFAULT_POSITION`].
    pub fn new(scope: PointerScope) -> Self {
        Self {
            scope,
            position: DEFAULT_POSITION,
            state: DragState::Idle,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Offset recorded at the start of the active gesture, if any.
    pub fn drag_offset(&self) -> Option<Point> {
        match &self.state {
            DragState::Dragging { offset, .. } => Some(*offset),
            DragState::Idle => None,
        }
    }

    /// Starts a gesture with the pointer pressed on the drag handle.
    ///
    /// A press during an active gesture restarts it with a fresh offset.
    pub fn pointer_down(&mut self, pointer: Point, panel_top_left: Point) {
        let offset = pointer - panel_top_left;
        // Release the previous capture before taking a new one.
        self.state = DragState::Idle;
        self.state = DragState::Dragging {
            offset,
            capture: self.scope.capture(),
        };
        log::debug!("drag started with offset ({}, {})", offset.x, offset.y);
    }

    /// Moves the panel to follow the pointer, clamped to the viewport.
    ///
    /// Returns whether a new position was committed. Moves while idle are
    /// ignored.
    pub fn pointer_move(&mut self, pointer: Point, viewport: Viewport, panel: PanelSize) -> bool {
        let DragState::Dragging { offset, .. } = &self.state else {
            return false;
        };
        let candidate = pointer - *offset;
        self.position = Point::new(
            clamp_axis(candidate.x, viewport.width.saturating_sub(panel.width)),
            clamp_axis(candidate.y, viewport.height.saturating_sub(panel.height)),
        );
        true
    }

    /// Ends the active gesture, wherever the pointer was released.
    pub fn pointer_up(&mut self) {
        if self.is_dragging() {
            log::debug!("drag ended at ({}, {})", self.position.x, self.position.y);
        }
        self.state = DragState::Idle;
    }
}

/// Saturates `value` into `[0, max]`; a negative `max` yields 0.
fn clamp_axis(value: i32, max: i32) -> i32 {
    value.min(max).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport::new(1280, 720);

    fn dragging_at(pointer: Point) -> (PointerScope, Positioner) {
        let scope = PointerScope::new();
        let mut positioner = Positioner::new(scope.clone());
        positioner.pointer_down(pointer, positioner.position());
        (scope, positioner)
    }

    #[test]
    fn starts_idle_at_default_position() {
        let positioner = Positioner::new(PointerScope::new());
        assert_eq!(positioner.position(), Point::new(20, 20));
        assert!(matches!(positioner.state(), DragState::Idle));
    }

    #[test]
    fn pointer_down_records_offset_from_top_left() {
        let mut positioner = Positioner::new(PointerScope::new());
        positioner.pointer_down(Point::new(57, 31), Point::new(20, 20));
        assert_eq!(positioner.drag_offset(), Some(Point::new(37, 11)));
    }

    #[test]
    fn move_keeps_offset_under_pointer() {
        let (_scope, mut positioner) = dragging_at(Point::new(30, 25));
        let panel = PanelMode::Normal.panel_size();
        assert!(positioner.pointer_move(Point::new(110, 95), VIEWPORT, panel));
        assert_eq!(positioner.position(), Point::new(100, 90));
    }

    #[test]
    fn move_clamps_to_viewport() {
        let (_scope, mut positioner) = dragging_at(Point::new(30, 25));
        let panel = PanelMode::Normal.panel_size();

        positioner.pointer_move(Point::new(-500, -500), VIEWPORT, panel);
        assert_eq!(positioner.position(), Point::new(0, 0));

        positioner.pointer_move(Point::new(5000, 5000), VIEWPORT, panel);
        assert_eq!(positioner.position(), Point::new(1280 - 300, 720 - 200));
    }

    #[test]
    fn axes_clamp_independently() {
        let (_scope, mut positioner) = dragging_at(Point::new(20, 20));
        positioner.pointer_move(Point::new(400, -40), VIEWPORT, PanelMode::Normal.panel_size());
        assert_eq!(positioner.position(), Point::new(400, 0));
    }

    #[test]
    fn viewport_smaller_than_panel_pins_to_origin() {
        let (_scope, mut positioner) = dragging_at(Point::new(20, 20));
        positioner.pointer_move(
            Point::new(150, 150),
            Viewport::new(200, 100),
            PanelMode::Normal.panel_size(),
        );
        assert_eq!(positioner.position(), Point::new(0, 0));
    }

    #[test]
    fn move_while_idle_is_ignored() {
        let mut positioner = Positioner::new(PointerScope::new());
        let panel = PanelMode::Normal.panel_size();
        assert!(!positioner.pointer_move(Point::new(500, 500), VIEWPORT, panel));
        assert_eq!(positioner.position(), DEFAULT_POSITION);
    }

    #[test]
    fn pointer_up_returns_to_idle_and_releases_listeners() {
        let (scope, mut positioner) = dragging_at(Point::new(20, 20));
        assert!(scope.is_capturing());
        positioner.pointer_move(Point::new(-100, 9000), VIEWPORT, PanelMode::Normal.panel_size());
        positioner.pointer_up();
        assert!(!positioner.is_dragging());
        assert!(!scope.is_capturing());
        assert_eq!(scope.active_listeners(), 0);
    }

    #[test]
    fn pointer_up_while_idle_is_harmless() {
        let scope = PointerScope::new();
        let mut positioner = Positioner::new(scope.clone());
        positioner.pointer_up();
        assert!(!positioner.is_dragging());
        assert_eq!(scope.active_listeners(), 0);
    }

    #[test]
    fn repeated_pointer_down_does_not_leak_listeners() {
        let (scope, mut positioner) = dragging_at(Point::new(20, 20));
        positioner.pointer_down(Point::new(40, 40), positioner.position());
        assert_eq!(scope.active_listeners(), 2);
        assert_eq!(positioner.drag_offset(), Some(Point::new(20, 20)));
    }

    #[test]
    fn dropping_positioner_mid_drag_releases_listeners() {
        let (scope, positioner) = dragging_at(Point::new(20, 20));
        assert_eq!(scope.active_listeners(), 2);
        drop(positioner);
        assert!(!scope.is_capturing());
    }

    #[test]
    fn minimized_mode_allows_lower_position_on_next_move() {
        let (_scope, mut positioner) = dragging_at(Point::new(20, 20));
        positioner.pointer_move(Point::new(20, 5000), VIEWPORT, PanelMode::Normal.panel_size());
        assert_eq!(positioner.position().y, 720 - 200);

        positioner.pointer_move(Point::new(20, 5000), VIEWPORT, PanelMode::Minimized.panel_size());
        assert_eq!(positioner.position().y, 720 - 60);
    }

    #[test]
    fn mode_toggle_round_trips() {
        assert_eq!(PanelMode::Normal.toggled(), PanelMode::Minimized);
        assert_eq!(PanelMode::Minimized.toggled(), PanelMode::Normal);
    }
}
