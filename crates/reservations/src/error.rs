use thiserror::Error;

pub const WARNING_TITLE: &str = "Erreur";
pub const WARNING_MESSAGE: &str = "Veuillez remplir tous les champs.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("client name is missing")]
    MissingName,
    #[error("event date is missing")]
    MissingDate,
}

impl ValidationError {
    /// The modal shown to the user. Identical for every variant.
    pub fn warning(&self) -> Warning {
        Warning {
            title: WARNING_TITLE,
            message: WARNING_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Warning {
    pub title: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown event type: {0:?}")]
pub struct UnknownEventType(pub String);
