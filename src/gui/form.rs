//! Entry form for adding and editing workout records.
//!
//! This module owns the form input state (date picker and distance field)
//! and renders the form row, returning actions for the app to apply.

use chrono::{Local, NaiveDate};
use eframe::egui;
use egui_extras::DatePickerButton;

use crate::core::log::WorkoutRecord;

/// Upper bound for the distance input widget, in kilometers.
const MAX_KILOMETERS: f64 = 1000.0;

/// User actions that can be triggered from the entry form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormAction {
    /// Submit the current date and distance (add or update)
    Submit { date: NaiveDate, kilometers: f64 },
    /// Leave edit mode without submitting
    CancelEdit,
}

/// State of the entry form: the values being typed and the optional table
/// position the form was pre-filled from.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryForm {
    /// Date currently shown in the date picker
    pub date: NaiveDate,
    /// Distance currently shown in the input, in kilometers
    pub kilometers: f64,
    /// Table position being edited, if the form was pre-filled from a row
    editing: Option<usize>,
}

impl Default for EntryForm {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryForm {
    /// Create a fresh form: today's date, zero distance, add mode.
    pub fn new() -> Self {
        Self {
            date: Local::now().date_naive(),
            kilometers: 0.0,
            editing: None,
        }
    }

    /// Table position currently being edited, if any.
    pub fn editing(&self) -> Option<usize> {
        self.editing
    }

    /// Whether the form is in edit mode (the submit button reads "Update").
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Pre-fill the form from a table row for editing.
    pub fn begin_edit(&mut self, index: usize, record: WorkoutRecord) {
        self.date = record.date;
        self.kilometers = record.kilometers;
        self.editing = Some(index);
    }

    /// Reset to a fresh form for the next entry.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Keep the editing position in sync after a row was deleted.
    ///
    /// Deleting the row being edited leaves nothing to edit, so the form is
    /// cleared; deleting an earlier row shifts the position down by one.
    pub fn record_deleted(&mut self, deleted: usize) {
        match self.editing {
            Some(i) if i == deleted => self.clear(),
            Some(i) if i > deleted => self.editing = Some(i - 1),
            _ => {}
        }
    }

    /// Render the form row and return any triggered action.
    pub fn render(&mut self, ui: &mut egui::Ui) -> Option<FormAction> {
        let mut action: Option<FormAction> = None;

        ui.horizontal(|ui| {
            ui.label("Date:");
            ui.add(DatePickerButton::new(&mut self.date).id_salt("entry_date"));

            ui.separator();

            ui.label("Distance:");
            ui.add(
                egui::DragValue::new(&mut self.kilometers)
                    .range(0.0..=MAX_KILOMETERS)
                    .speed(0.25)
                    .suffix(" km"),
            );

            ui.separator();

            let submit_label = if self.is_editing() { "Update" } else { "Add" };
            if ui.button(submit_label).clicked() {
                action = Some(FormAction::Submit {
                    date: self.date,
                    kilometers: self.kilometers,
                });
            }

            if self.is_editing()
                && ui
                    .button("Cancel")
                    .on_hover_text("Discard the edit (Esc)")
                    .clicked()
            {
                action = Some(FormAction::CancelEdit);
            }
        });

        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(y: i32, m: u32, d: u32, km: f64) -> WorkoutRecord {
        WorkoutRecord {
            date: date(y, m, d),
            kilometers: km,
        }
    }

    #[test]
    fn test_new_form_starts_in_add_mode() {
        let form = EntryForm::new();
        assert!(!form.is_editing());
        assert!(form.editing().is_none());
        assert_eq!(form.kilometers, 0.0);
    }

    #[test]
    fn test_begin_edit_prefills_values() {
        let mut form = EntryForm::new();
        form.begin_edit(2, record(2024, 1, 3, 8.0));

        assert!(form.is_editing());
        assert_eq!(form.editing(), Some(2));
        assert_eq!(form.date, date(2024, 1, 3));
        assert_eq!(form.kilometers, 8.0);
    }

    #[test]
    fn test_clear_resets_to_add_mode() {
        let mut form = EntryForm::new();
        form.begin_edit(0, record(2024, 1, 3, 8.0));

        form.clear();

        assert!(!form.is_editing());
        assert_eq!(form.kilometers, 0.0);
    }

    #[test]
    fn test_record_deleted_clears_matching_edit() {
        let mut form = EntryForm::new();
        form.begin_edit(1, record(2024, 1, 3, 8.0));

        form.record_deleted(1);

        assert!(!form.is_editing());
    }

    #[test]
    fn test_record_deleted_shifts_later_edit_position() {
        let mut form = EntryForm::new();
        form.begin_edit(3, record(2024, 1, 3, 8.0));

        form.record_deleted(1);

        assert_eq!(form.editing(), Some(2));
        // Values stay put; only the position moves
        assert_eq!(form.kilometers, 8.0);
    }

    #[test]
    fn test_record_deleted_ignores_later_rows() {
        let mut form = EntryForm::new();
        form.begin_edit(1, record(2024, 1, 3, 8.0));

        form.record_deleted(4);

        assert_eq!(form.editing(), Some(1));
    }

    #[test]
    fn test_record_deleted_without_edit_is_noop() {
        let mut form = EntryForm::new();
        form.record_deleted(0);
        assert!(!form.is_editing());
    }
}
