//! Event-hall reservation core: records, the in-memory store, the form controller,
//! and the table column mapping used by the desktop front-end.

pub mod columns;
pub mod domain;
pub mod error;
pub mod form;
pub mod store;

pub use columns::{render_row, Column, COLUMNS};
pub use domain::{EventType, Reservation};
pub use error::{UnknownEventType, ValidationError, Warning};
pub use form::{submit, FormDraft, Submitted};
pub use store::{ReservationStore, StoreEvent};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
