//! Rendered table rows, kept in step with the store through its refresh signal.

use eframe::egui;
use reservations::{
    columns::{COLUMNS, COLUMN_COUNT},
    render_row, ReservationStore, StoreEvent,
};

#[derive(Debug, Default)]
pub struct RowCache {
    rows: Vec<[String; COLUMN_COUNT]>,
}

impl RowCache {
    pub fn apply(&mut self, event: StoreEvent, store: &ReservationStore) {
        match event {
            StoreEvent::Appended { index, .. } => match store.list_all().get(index) {
                Some(reservation) if self.rows.len() == index => {
                    self.rows.push(render_row(reservation));
                }
                _ => self.rebuild(store),
            },
        }
    }

    pub fn rebuild(&mut self, store: &ReservationStore) {
        tracing::debug!(total = store.len(), "rebuilding reservation rows");
        self.rows = store.list_all().iter().map(render_row).collect();
    }

    pub fn rows(&self) -> &[[String; COLUMN_COUNT]] {
        &self.rows
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Grid::new("reservation_table")
                    .striped(true)
                    .num_columns(COLUMN_COUNT)
                    .spacing(egui::vec2(12.0, 6.0))
                    .show(ui, |ui| {
                        for column in COLUMNS {
                            ui.add_sized(
                                [column.min_width, 20.0],
                                egui::Label::new(egui::RichText::new(column.title).strong()),
                            );
                        }
                        ui.end_row();

                        for row in &self.rows {
                            for (column, cell) in COLUMNS.iter().zip(row) {
                                ui.add_sized([column.min_width, 18.0], egui::Label::new(cell));
                            }
                            ui.end_row();
                        }
                    });

                if self.rows.is_empty() {
                    ui.add_space(8.0);
                    ui.weak("Aucun contenu dans la table");
                }
            });
    }
}
