//! Applies a form submission to the store and reports the outcome to the shell.

use reservations::{FormDraft, ReservationStore, Warning};

/// Returns the warning to display when the submission was rejected.
pub fn submit_draft(
    store: &mut ReservationStore,
    draft: &mut FormDraft,
    status: &mut String,
) -> Option<Warning> {
    match draft.submit_to(store) {
        Ok(submitted) => {
            tracing::info!(
                index = submitted.index,
                total = store.len(),
                "reservation added"
            );
            *status = format!(
                "Réservation ajoutée pour {}",
                submitted.reservation.client_name()
            );
            None
        }
        Err(err) => {
            tracing::warn!(reason = %err, "reservation rejected");
            let warning = err.warning();
            *status = warning.message.to_string();
            Some(warning)
        }
    }
}
