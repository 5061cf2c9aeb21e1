//! Events raised by widgets during a frame and applied once the frame is laid out.

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    SubmitRequested,
    DatePicked(NaiveDate),
    WarningDismissed,
}
