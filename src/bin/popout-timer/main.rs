#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod colors;
mod config;
mod constants;
mod coordinates;
mod countdown;
mod panel;
mod ui;

use clap::Parser;
use config::{AppConfig, Cli, ConfigError};
use constants::{RUNNING_REPAINT_MS, WINDOW_SIZE};
use countdown::CountdownTimer;
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use panel::PopoutPanel;
use popout_timer::{Counter, PointerScope, SessionInfo, Task, TimerController};
use std::time::{Duration, Instant};

/// Main application state: the test component plus the popout timer.
pub struct TimerApp {
    counter: Counter,
    timer: CountdownTimer,
    task: Option<Task>,
    session: Option<SessionInfo>,
    popout_open: bool,
    /// Mounted panel state; `None` while the popout is closed
    popout: Option<PopoutPanel>,
    pointer_scope: PointerScope,
    toasts: Toasts,
}

impl TimerApp {
    fn new(config: AppConfig, config_error: Option<ConfigError>) -> Self {
        let mut toasts = Toasts::new()
            .anchor(egui::Align2::RIGHT_TOP, (-10.0, 10.0))
            .direction(egui::Direction::TopDown);

        if let Some(err) = config_error {
            toasts.add(Toast {
                kind: ToastKind::Error,
                text: format!("{err}; using defaults").into(),
                options: ToastOptions::default()
                    .duration_in_seconds(10.0)
                    .show_icon(true),
                ..Default::default()
            });
        }

        log::info!(
            "Starting with a {}s timer for {}",
            config.timer_duration_secs,
            config.task_title.as_deref().unwrap_or("no task"),
        );

        Self {
            counter: Counter::default(),
            timer: CountdownTimer::new(config.timer_duration_secs),
            task: config.task(),
            session: config.session(),
            popout_open: config.open_on_start,
            popout: None,
            pointer_scope: PointerScope::new(),
            toasts,
        }
    }

    /// Stops a finished countdown and keeps frames coming while it runs.
    fn poll_timer(&mut self, ctx: &egui::Context) {
        if self.timer.finish_if_elapsed(Instant::now()) {
            self.toasts.add(Toast {
                kind: ToastKind::Success,
                text: "Time's up!".into(),
                options: ToastOptions::default()
                    .duration_in_seconds(6.0)
                    .show_icon(true),
                ..Default::default()
            });
        }

        if self.timer.snapshot().is_running {
            ctx.request_repaint_after(Duration::from_millis(RUNNING_REPAINT_MS));
        }
    }
}

impl eframe::App for TimerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_timer(ctx);

        self.show_status_bar(ctx);
        self.show_central_panel(ctx);
        self.show_popout_timer(ctx);

        self.toasts.show(ctx);
    }
}

fn main() -> eframe::Result {
    env_logger::init();

    let cli = Cli::parse();
    let (config, config_error) = config::resolve(&cli);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "Popout Timer",
        options,
        Box::new(|_cc| Ok(Box::new(TimerApp::new(config, config_error)))),
    )
}
