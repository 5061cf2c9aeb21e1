//! Form controller: presence checks, record construction, and store append.

use chrono::NaiveDate;

use crate::{
    domain::{EventType, Reservation},
    error::ValidationError,
    store::ReservationStore,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitted {
    pub reservation: Reservation,
    pub index: usize,
}

/// Validates one submission and appends the resulting reservation.
///
/// On `Ok` the caller clears the name and date inputs and leaves the event type
/// selection alone. On `Err` the store has not been touched.
pub fn submit(
    store: &mut ReservationStore,
    name: &str,
    date: Option<NaiveDate>,
    event_type: Option<EventType>,
) -> Result<Submitted, ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    let Some(date) = date else {
        return Err(ValidationError::MissingDate);
    };

    let reservation = Reservation::new(name, date, event_type.unwrap_or_default());
    let index = store.append(reservation.clone());
    tracing::debug!(
        index,
        %date,
        event_type = reservation.event_type().label(),
        "reservation submitted"
    );
    Ok(Submitted { reservation, index })
}

/// Editable state behind the reservation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub name: String,
    pub date: Option<NaiveDate>,
    pub event_type: EventType,
}

impl FormDraft {
    pub fn submit_to(
        &mut self,
        store: &mut ReservationStore,
    ) -> Result<Submitted, ValidationError> {
        let submitted = submit(store, &self.name, self.date, Some(self.event_type))?;
        self.name.clear();
        self.date = None;
        Ok(submitted)
    }
}
