//! UI layer: the application shell and the reservation table.

pub mod app;
pub mod table;

pub use app::{HallApp, WINDOW_TITLE};
