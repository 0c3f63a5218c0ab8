//! Record table rendering.
//!
//! This module draws the workout table (date, distance, and per-row actions)
//! and reports row button clicks back to the app.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::core::config::ColorSettings;
use crate::core::log::WorkoutLog;

/// Height of the header row in pixels.
const HEADER_HEIGHT: f32 = 20.0;

/// Height of each record row in pixels.
const ROW_HEIGHT: f32 = 24.0;

/// User actions that can be triggered from a table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// Load the record at this position into the edit form
    Edit(usize),
    /// Delete the record at this position
    Delete(usize),
}

/// Renders the workout table and returns any action triggered by row buttons.
pub struct TableRenderer<'a> {
    /// The log to display
    log: &'a WorkoutLog,
    /// Table position currently loaded in the edit form, if any
    editing: Option<usize>,
    /// Color settings for the edit highlight
    colors: &'a ColorSettings,
    /// Decimal places for distance display
    km_decimals: usize,
}

impl<'a> TableRenderer<'a> {
    /// Create a new table renderer.
    pub fn new(
        log: &'a WorkoutLog,
        editing: Option<usize>,
        colors: &'a ColorSettings,
        km_decimals: usize,
    ) -> Self {
        Self {
            log,
            editing,
            colors,
            km_decimals,
        }
    }

    /// Render the table and return any triggered action.
    pub fn render(&self, ui: &mut egui::Ui) -> Option<RowAction> {
        let mut action: Option<RowAction> = None;

        // The row-selection background doubles as the edit highlight
        ui.visuals_mut().selection.bg_fill = self.colors.editing_highlight_color();

        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(100.0))
            .column(Column::remainder().at_least(80.0))
            .column(Column::auto().at_least(60.0))
            .header(HEADER_HEIGHT, |mut header| {
                header.col(|ui| {
                    ui.strong("Date");
                });
                header.col(|ui| {
                    ui.strong("Kilometers");
                });
                header.col(|ui| {
                    ui.strong("Actions");
                });
            })
            .body(|mut body| {
                for (i, record) in self.log.records().iter().enumerate() {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.set_selected(self.editing == Some(i));

                        row.col(|ui| {
                            ui.label(record.date.to_string());
                        });
                        row.col(|ui| {
                            ui.label(format!(
                                "{:.prec$}",
                                record.kilometers,
                                prec = self.km_decimals
                            ));
                        });
                        row.col(|ui| {
                            if ui
                                .small_button("✎")
                                .on_hover_text("Edit this entry")
                                .clicked()
                            {
                                action = Some(RowAction::Edit(i));
                            }
                            if ui
                                .small_button("✘")
                                .on_hover_text("Delete this entry")
                                .clicked()
                            {
                                action = Some(RowAction::Delete(i));
                            }
                        });
                    });
                }
            });

        action
    }
}
