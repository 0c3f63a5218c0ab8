//! Main application state and GUI logic.
//!
//! This module defines the main application struct and implements the
//! eframe::App trait, wiring the entry form and record table to the
//! in-memory workout log.

use eframe::egui;

use crate::core::config::AppSettings;
use crate::core::log::{Upserted, WorkoutLog};

use super::form::{EntryForm, FormAction};
use super::table::{RowAction, TableRenderer};

/// Kind of status message to display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatusKind {
    /// Success message (shown in green)
    Success,
    /// Error message (shown in red)
    Error,
}

/// A status message with its kind and timestamp.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// The message text
    pub text: String,
    /// Kind of message (success/error)
    pub kind: StatusKind,
    /// When the message was created (for auto-dismiss)
    pub created_at: std::time::Instant,
}

impl StatusMessage {
    /// Create a new status message.
    pub fn new(text: impl Into<String>, kind: StatusKind) -> Self {
        Self {
            text: text.into(),
            kind,
            created_at: std::time::Instant::now(),
        }
    }

    /// Duration to show status messages before auto-dismissing.
    const DISPLAY_DURATION: std::time::Duration = std::time::Duration::from_secs(5);

    /// Check if the message should still be displayed.
    pub fn is_visible(&self) -> bool {
        self.created_at.elapsed() < Self::DISPLAY_DURATION
    }
}

/// Main application state and GUI logic.
pub struct WorkoutLogApp {
    /// The in-memory workout log
    log: WorkoutLog,
    /// Entry form state (add/edit)
    form: EntryForm,
    /// Persisted UI settings
    settings: AppSettings,
    /// Status message to display (success/error notifications)
    status_message: Option<StatusMessage>,
}

impl WorkoutLogApp {
    /// Create a new application instance with the given settings.
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: AppSettings) -> Self {
        Self {
            log: WorkoutLog::new(),
            form: EntryForm::new(),
            settings,
            status_message: None,
        }
    }

    /// Set the status message shown in the bottom bar.
    fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status_message = Some(StatusMessage::new(text, kind));
    }

    /// Apply a form action to the log.
    fn handle_form_action(&mut self, action: FormAction) {
        match action {
            FormAction::Submit { date, kilometers } => {
                let decimals = self.settings.get_km_decimals();
                match self.log.upsert(date, kilometers) {
                    Ok(Upserted::Inserted) => {
                        self.set_status(
                            format!("Added {}: {:.prec$} km", date, kilometers, prec = decimals),
                            StatusKind::Success,
                        );
                        self.form.clear();
                    }
                    Ok(Upserted::Merged) => {
                        let total = self
                            .log
                            .records()
                            .iter()
                            .find(|r| r.date == date)
                            .map(|r| r.kilometers)
                            .unwrap_or(kilometers);
                        self.set_status(
                            format!("Updated {}: {:.prec$} km total", date, total, prec = decimals),
                            StatusKind::Success,
                        );
                        self.form.clear();
                    }
                    Err(e) => {
                        self.set_status(e.to_string(), StatusKind::Error);
                    }
                }
            }
            FormAction::CancelEdit => {
                self.form.clear();
            }
        }
    }

    /// Apply a table row action to the log.
    fn handle_row_action(&mut self, action: RowAction) {
        match action {
            RowAction::Edit(index) => match self.log.record_at(index) {
                Ok(record) => {
                    self.form.begin_edit(index, record);
                }
                Err(e) => {
                    self.set_status(e.to_string(), StatusKind::Error);
                }
            },
            RowAction::Delete(index) => {
                if let Some(removed) = self.log.delete_at(index) {
                    self.form.record_deleted(index);
                    let decimals = self.settings.get_km_decimals();
                    self.set_status(
                        format!(
                            "Deleted {} ({:.prec$} km)",
                            removed.date,
                            removed.kilometers,
                            prec = decimals
                        ),
                        StatusKind::Success,
                    );
                }
            }
        }
    }

    /// Handle keyboard shortcuts.
    ///
    /// Returns an action if a shortcut was triggered, None otherwise.
    fn handle_keyboard_shortcuts(&self, ctx: &egui::Context) -> Option<FormAction> {
        // Escape: leave edit mode
        if self.form.is_editing() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            return Some(FormAction::CancelEdit);
        }

        None
    }

    /// Render the top panel containing the entry form.
    fn render_form_panel(&mut self, ctx: &egui::Context) {
        let mut action: Option<FormAction> = None;

        egui::TopBottomPanel::top("entry_form").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.heading("Workout Log");
                ui.separator();
                action = self.form.render(ui);
            });
            ui.add_space(4.0);
        });

        if let Some(action) = action {
            self.handle_form_action(action);
        }
    }

    /// Render the bottom status bar with the log summary and status message.
    fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let decimals = self.settings.get_km_decimals();
                ui.label(format!(
                    "Entries: {} | Total: {:.prec$} km",
                    self.log.len(),
                    self.log.total_kilometers(),
                    prec = decimals
                ));

                // Show status message right-aligned
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.render_status_message(ui);
                });
            });
        });
    }

    /// Render the status message if one is active.
    fn render_status_message(&mut self, ui: &mut egui::Ui) {
        // Check if we should dismiss the message
        let should_dismiss = self
            .status_message
            .as_ref()
            .is_some_and(|msg| !msg.is_visible());

        if should_dismiss {
            self.status_message = None;
            return;
        }

        // Extract message info before rendering to avoid borrow issues
        let msg_info = self.status_message.as_ref().map(|msg| {
            let color = match msg.kind {
                StatusKind::Success => self.settings.colors.status_success_color(),
                StatusKind::Error => self.settings.colors.status_error_color(),
            };
            (color, msg.text.clone())
        });

        if let Some((color, text)) = msg_info {
            let mut dismiss_clicked = false;

            ui.horizontal(|ui| {
                // Dismiss button
                if ui.small_button("✕").clicked() {
                    dismiss_clicked = true;
                }
                ui.colored_label(color, &text);
            });

            if dismiss_clicked {
                self.status_message = None;
            }
        }
    }

    /// Render the central panel containing the record table.
    fn render_table_panel(&mut self, ctx: &egui::Context) {
        let mut action: Option<RowAction> = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.log.is_empty() {
                self.render_empty_placeholder(ui);
            } else {
                let renderer = TableRenderer::new(
                    &self.log,
                    self.form.editing(),
                    &self.settings.colors,
                    self.settings.get_km_decimals(),
                );
                action = renderer.render(ui);
            }
        });

        if let Some(action) = action {
            self.handle_row_action(action);
        }
    }

    /// Render the placeholder view when the log is empty.
    fn render_empty_placeholder(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);

            ui.heading("No workouts logged yet");
            ui.add_space(10.0);
            ui.label("Pick a date and a distance above, then press \"Add\".");
            ui.label("Entries stay sorted by date; logging the same day twice adds the distances.");
        });
    }
}

impl eframe::App for WorkoutLogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Remember the window size for the next session
        let size = ctx.screen_rect().size();
        self.settings.set_window_size(size.x, size.y);

        if let Some(action) = self.handle_keyboard_shortcuts(ctx) {
            self.handle_form_action(action);
        }

        self.render_form_panel(ctx);
        self.render_status_bar(ctx);
        self.render_table_panel(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.settings.save() {
            eprintln!("Failed to save settings: {}", e);
        }
    }
}
