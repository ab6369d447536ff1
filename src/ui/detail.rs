use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;
use crate::view::{DetailView, detail_view};

// ---------------------------------------------------------------------------
// Detail panel (central panel)
// ---------------------------------------------------------------------------

/// Render every field of the selected course as a read-only table.
pub fn course_detail(ui: &mut Ui, state: &AppState) {
    let fields = match detail_view(state) {
        DetailView::Course(fields) => fields,
        DetailView::Placeholder(text) => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading(text);
            });
            return;
        }
    };

    if let Some(course) = state.selected_course() {
        ui.horizontal(|ui: &mut Ui| {
            let color = state.department_colors.color_for(&course.department);
            let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, 2.0, color);
            ui.heading(&course.title);
        });
        ui.separator();
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(100.0))
        .column(Column::remainder())
        .body(|mut body| {
            for field in fields {
                // Descriptions wrap, so give them room.
                let height = if field.label == "Description" { 72.0 } else { 20.0 };
                body.row(height, |mut row| {
                    row.col(|ui: &mut Ui| {
                        ui.label(RichText::new(field.label).strong());
                    });
                    row.col(|ui: &mut Ui| {
                        ui.add(egui::Label::new(&field.value).wrap());
                    });
                });
            }
        });
}
