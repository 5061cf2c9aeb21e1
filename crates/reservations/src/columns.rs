//! Table columns declared as data: a title, a minimum width, and a cell accessor.

use crate::domain::Reservation;

pub const MIN_COLUMN_WIDTH: f32 = 150.0;
pub const COLUMN_COUNT: usize = 3;

#[derive(Clone, Copy)]
pub struct Column {
    pub title: &'static str,
    pub min_width: f32,
    pub cell: fn(&Reservation) -> String,
}

pub const COLUMNS: [Column; COLUMN_COUNT] = [
    Column {
        title: "Nom du Client",
        min_width: MIN_COLUMN_WIDTH,
        cell: client_name_cell,
    },
    Column {
        title: "Date de l'événement",
        min_width: MIN_COLUMN_WIDTH,
        cell: date_cell,
    },
    Column {
        title: "Type d'événement",
        min_width: MIN_COLUMN_WIDTH,
        cell: event_type_cell,
    },
];

fn client_name_cell(reservation: &Reservation) -> String {
    reservation.client_name().to_string()
}

fn date_cell(reservation: &Reservation) -> String {
    reservation.date().format("%Y-%m-%d").to_string()
}

fn event_type_cell(reservation: &Reservation) -> String {
    reservation.event_type().label().to_string()
}

pub fn render_row(reservation: &Reservation) -> [String; COLUMN_COUNT] {
    COLUMNS.map(|column| (column.cell)(reservation))
}
