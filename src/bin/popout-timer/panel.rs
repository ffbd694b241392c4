//! The floating, draggable timer panel.

use crate::colors;
use crate::constants::{
    DEFAULT_TITLE, HEADER_BUTTON_WIDTH, HEADER_HEIGHT, MINIMIZED_PROGRESS_WIDTH,
    PANEL_CORNER_RADIUS, PANEL_MARGIN, PANEL_STROKE_WIDTH,
};
use crate::coordinates::{to_point, to_pos2, viewport_of};
use eframe::egui;
use popout_timer::{
    PanelMode, PointerScope, Positioner, SessionInfo, Task, TimerCommand, TimerController,
    TimerSnapshot, format_duration,
};

/// Layer id of the panel's area.
fn area_id() -> egui::Id {
    egui::Id::new("popout_timer")
}

/// Data and callbacks the host hands to the panel each frame.
pub struct PanelProps<'a> {
    pub task: Option<&'a Task>,
    pub session: Option<&'a SessionInfo>,
    pub timer: &'a mut dyn TimerController,
}

/// Per-mount state of the popout panel. Dropping it ends any drag in progress.
pub struct PopoutPanel {
    positioner: Positioner,
    mode: PanelMode,
}

impl PopoutPanel {
    pub fn new(scope: PointerScope) -> Self {
        Self {
            positioner: Positioner::new(scope),
            mode: PanelMode::Normal,
        }
    }

    /// Applies this frame's window-wide pointer state to the active drag.
    ///
    /// Called by the host only while the pointer scope is capturing, so the
    /// gesture keeps tracking after the pointer leaves the header.
    pub fn handle_captured_pointer(&mut self, ctx: &egui::Context) {
        let (latest, released) = ctx.input(|i| {
            (
                i.pointer.latest_pos(),
                i.pointer.primary_released() || !i.pointer.primary_down(),
            )
        });

        if let Some(pos) = latest {
            let viewport = viewport_of(ctx.screen_rect());
            self.positioner
                .pointer_move(to_point(pos), viewport, self.mode.panel_size());
        }

        if released {
            self.positioner.pointer_up();
        }
    }

    /// Renders the panel at its committed position.
    ///
    /// The panel occupies exactly `panel_size()` at `position()`; content that
    /// does not fit is clipped. Returns `true` when the user asked to close it.
    pub fn show(&mut self, ctx: &egui::Context, props: PanelProps<'_>) -> bool {
        let snapshot = props.timer.snapshot();
        let mut commands: Vec<TimerCommand> = Vec::new();
        let mut close_requested = false;

        let size = self.mode.panel_size();
        let panel_size = egui::vec2(size.width as f32, size.height as f32);

        egui::Area::new(area_id())
            .fixed_pos(to_pos2(self.positioner.position()))
            .constrain(false)
            .order(egui::Order::Foreground)
            .interactable(true)
            .show(ctx, |ui| {
                let (rect, _) = ui.allocate_exact_size(panel_size, egui::Sense::hover());
                ui.painter()
                    .rect_filled(rect, PANEL_CORNER_RADIUS, ui.visuals().window_fill);
                ui.painter().rect_stroke(
                    rect,
                    PANEL_CORNER_RADIUS,
                    egui::Stroke::new(PANEL_STROKE_WIDTH, colors::ACCENT),
                    egui::StrokeKind::Inside,
                );

                let content_rect = rect.shrink(PANEL_MARGIN);
                let mut content = ui.new_child(
                    egui::UiBuilder::new()
                        .max_rect(content_rect)
                        .layout(egui::Layout::top_down(egui::Align::Min)),
                );
                content.set_clip_rect(rect);

                close_requested = self.show_header(&mut content, ctx, props.task);

                match self.mode {
                    PanelMode::Normal => {
                        content.separator();
                        let session = props.session;
                        Self::show_full_content(&mut content, &snapshot, session, &mut commands);
                    }
                    PanelMode::Minimized => {
                        Self::show_minimized_content(&mut content, &snapshot, &mut commands);
                    }
                }
            });

        for command in commands {
            props.timer.apply(command);
        }

        close_requested
    }

    /// Renders the drag handle row with the minimize and close buttons.
    ///
    /// Buttons sit in fixed cells at the right end of the row; the rest of the
    /// row is the drag handle.
    fn show_header(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        task: Option<&Task>,
    ) -> bool {
        let mut close_requested = false;
        let title = task.map_or(DEFAULT_TITLE, |task| task.title.as_str());

        let (row, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), HEADER_HEIGHT),
            egui::Sense::hover(),
        );
        let (handle_rect, buttons_rect) =
            row.split_left_right_at_x(row.right() - 2.0 * HEADER_BUTTON_WIDTH);
        let (minimize_rect, close_rect) =
            buttons_rect.split_left_right_at_x(buttons_rect.left() + HEADER_BUTTON_WIDTH);

        let handle = ui.interact(handle_rect, ui.id().with("drag_handle"), egui::Sense::drag());
        ui.painter().with_clip_rect(handle_rect).text(
            handle_rect.left_center(),
            egui::Align2::LEFT_CENTER,
            format!("✥ {title}"),
            egui::FontId::proportional(14.0),
            ui.visuals().strong_text_color(),
        );

        if handle.drag_started_by(egui::PointerButton::Primary)
            && let Some(origin) = ctx.input(|i| i.pointer.press_origin())
        {
            let top_left = self.positioner.position();
            self.positioner.pointer_down(to_point(origin), top_left);
        }

        if self.positioner.is_dragging() {
            ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
        } else {
            handle.on_hover_cursor(egui::CursorIcon::Grab);
        }

        let (icon, hint) = match self.mode {
            PanelMode::Normal => ("🗕", "Minimize"),
            PanelMode::Minimized => ("🗖", "Maximize"),
        };
        if ui
            .put(minimize_rect, egui::Button::new(icon).small())
            .on_hover_text(hint)
            .clicked()
        {
            self.mode = self.mode.toggled();
        }
        if ui
            .put(close_rect, egui::Button::new("❌").small())
            .on_hover_text("Close")
            .clicked()
        {
            close_requested = true;
        }

        close_requested
    }

    /// Renders the time, session line, progress bar and Start/Pause/Stop.
    fn show_full_content(
        ui: &mut egui::Ui,
        snapshot: &TimerSnapshot,
        session: Option<&SessionInfo>,
        commands: &mut Vec<TimerCommand>,
    ) {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(format_duration(snapshot.current_time))
                    .size(24.0)
                    .strong(),
            );
            if let Some(session) = session {
                let line = match session.session_number {
                    Some(number) => format!("Session {number}"),
                    None => "Session".to_string(),
                };
                ui.small(line);
            }
        });

        ui.add_space(4.0);
        ui.add(
            egui::ProgressBar::new(snapshot.progress())
                .fill(colors::PROGRESS_FILL)
                .desired_height(8.0),
        );
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            Self::start_or_pause_button(ui, snapshot.is_running, true, commands);
            if ui
                .add(command_button("⏹ Stop", colors::STOP_FILL))
                .clicked()
            {
                commands.push(TimerCommand::Stop);
            }
        });
    }

    /// Renders the compact strip: time, small progress bar, Start/Pause.
    fn show_minimized_content(
        ui: &mut egui::Ui,
        snapshot: &TimerSnapshot,
        commands: &mut Vec<TimerCommand>,
    ) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format_duration(snapshot.current_time))
                    .size(16.0)
                    .strong(),
            );
            ui.add(
                egui::ProgressBar::new(snapshot.progress())
                    .fill(colors::PROGRESS_FILL)
                    .desired_width(MINIMIZED_PROGRESS_WIDTH)
                    .desired_height(6.0),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                Self::start_or_pause_button(ui, snapshot.is_running, false, commands);
            });
        });
    }

    fn start_or_pause_button(
        ui: &mut egui::Ui,
        is_running: bool,
        with_label: bool,
        commands: &mut Vec<TimerCommand>,
    ) {
        let (icon, label, fill, command) = if is_running {
            ("⏸", "Pause", colors::PAUSE_FILL, TimerCommand::Pause)
        } else {
            ("▶", "Start", colors::START_FILL, TimerCommand::Start)
        };
        let text = if with_label {
            format!("{icon} {label}")
        } else {
            icon.to_string()
        };
        if ui
            .add(command_button(&text, fill))
            .on_hover_text(label)
            .clicked()
        {
            commands.push(command);
        }
    }
}

fn command_button(text: &str, fill: egui::Color32) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text).color(colors::BUTTON_TEXT)).fill(fill)
}

/// Mounts, renders or unmounts the panel according to `open`.
///
/// A fresh [`PopoutPanel`] is created on every mount, so position and mode
/// start from their defaults each time the panel opens.
pub fn show_popout(
    ctx: &egui::Context,
    slot: &mut Option<PopoutPanel>,
    open: bool,
    scope: &PointerScope,
    props: PanelProps<'_>,
    on_close: impl FnOnce(),
) {
    if !open {
        if slot.take().is_some() {
            log::debug!("popout timer unmounted");
        }
        return;
    }

    let panel = slot.get_or_insert_with(|| {
        log::debug!("popout timer mounted");
        PopoutPanel::new(scope.clone())
    });
    if panel.show(ctx, props) {
        on_close();
    }
}
