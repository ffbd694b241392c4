//! UI rendering methods for the host window.

use crate::TimerApp;
use crate::panel::{PanelProps, show_popout};
use eframe::egui;
use popout_timer::{TimerController, format_duration};

impl TimerApp {
    /// Renders the bottom status bar with the timer state and a usage hint.
    pub fn show_status_bar(&self, ctx: &egui::Context) {
        let snapshot = self.timer.snapshot();
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Drag the timer header to move it | 🗕: Minimize | ❌: Close");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let state = if snapshot.is_running {
                        "running"
                    } else {
                        "paused"
                    };
                    ui.label(format!(
                        "{} / {} ({state})",
                        format_duration(snapshot.current_time),
                        format_duration(snapshot.total_time),
                    ));
                });
            });
        });
    }

    /// Renders the scaffold test component and the popout toggle.
    pub fn show_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Test Component");
            ui.label(format!("Count: {}", self.counter.count()));
            if ui.button("Increment").clicked() {
                self.counter.increment();
            }

            ui.add_space(12.0);
            ui.separator();

            let label = if self.popout_open {
                "Close timer"
            } else {
                "Open timer"
            };
            if ui.button(label).clicked() {
                self.popout_open = !self.popout_open;
            }
        });
    }

    /// Routes captured pointer events, then renders the popout when open.
    pub fn show_popout_timer(&mut self, ctx: &egui::Context) {
        if self.pointer_scope.is_capturing()
            && let Some(panel) = &mut self.popout
        {
            panel.handle_captured_pointer(ctx);
        }

        let props = PanelProps {
            task: self.task.as_ref(),
            session: self.session.as_ref(),
            timer: &mut self.timer,
        };
        let open = self.popout_open;
        show_popout(
            ctx,
            &mut self.popout,
            open,
            &self.pointer_scope,
            props,
            || self.popout_open = false,
        );
    }
}
