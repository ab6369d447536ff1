use std::path::PathBuf;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter::{FilterChoice, FilterField, SortKey};
use crate::state::{AppState, Message};
use crate::view::{ListEntry, list_entries};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar. Returns a path if the user picked a file.
pub fn top_bar(ui: &mut Ui, state: &AppState) -> Option<PathBuf> {
    let mut picked = None;

    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                picked = open_file_dialog();
                ui.close_menu();
            }
        });

        ui.separator();

        match &state.file_name {
            Some(name) => ui.label(RichText::new(name).strong()),
            None => ui.weak("No file selected"),
        };

        if state.loading {
            ui.spinner();
        }

        ui.separator();

        if !state.courses.is_empty() {
            ui.label(format!(
                "{} courses loaded, {} shown",
                state.courses.len(),
                state.view.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });

    picked
}

// ---------------------------------------------------------------------------
// Left side panel – filter and sort controls
// ---------------------------------------------------------------------------

/// Render the filter/sort controls.
pub fn filter_panel(ui: &mut Ui, state: &AppState, messages: &mut Vec<Message>) {
    ui.heading("Filters");
    ui.separator();

    for field in FilterField::ALL {
        let current = state.controls.filter(field);
        ui.strong(field.label());
        egui::ComboBox::from_id_salt(field.label())
            .width(ui.available_width())
            .selected_text(current.to_string())
            .show_ui(ui, |ui: &mut Ui| {
                for choice in state.options.choices(field) {
                    let is_current = &choice == current;
                    let label = choice.to_string();
                    if ui.selectable_label(is_current, label).clicked() && !is_current {
                        messages.push(Message::SetFilter(field, choice));
                    }
                }
            });
        ui.add_space(4.0);
    }

    ui.separator();
    ui.strong("Sort by");
    let current_sort = state.controls.sort;
    egui::ComboBox::from_id_salt("sort_by")
        .width(ui.available_width())
        .selected_text(current_sort.label())
        .show_ui(ui, |ui: &mut Ui| {
            for key in SortKey::ALL {
                if ui.selectable_label(key == current_sort, key.label()).clicked()
                    && key != current_sort
                {
                    messages.push(Message::SetSort(key));
                }
            }
        });

    ui.add_space(8.0);
    let any_active = state.controls.sort != SortKey::None
        || FilterField::ALL
            .iter()
            .any(|&f| *state.controls.filter(f) != FilterChoice::All);
    if ui
        .add_enabled(any_active, egui::Button::new("Reset filters"))
        .clicked()
    {
        messages.push(Message::ClearFilters);
    }
}

// ---------------------------------------------------------------------------
// Course list
// ---------------------------------------------------------------------------

/// Render the scrollable list of courses in the current view.
pub fn course_list(ui: &mut Ui, state: &AppState, messages: &mut Vec<Message>) {
    ui.heading("Courses");
    ui.separator();

    ScrollArea::vertical()
        .id_salt("course_list")
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for entry in list_entries(state) {
                match entry {
                    ListEntry::Placeholder(text) => {
                        ui.weak(text);
                    }
                    ListEntry::Course {
                        id,
                        department,
                        selected,
                    } => {
                        let color = state.department_colors.color_for(&department);
                        let text = RichText::new(&id).monospace().color(color);
                        if ui.selectable_label(selected, text).clicked() {
                            messages.push(Message::SelectCourse(id));
                        }
                    }
                }
            }
        });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Open course catalog")
        .add_filter("Supported files", &["json", "csv"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file()
}
