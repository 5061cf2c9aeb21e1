use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::UnknownEventType;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    #[default]
    Wedding,
    Birthday,
    Meeting,
    Other,
}

impl EventType {
    /// Dropdown order; the first entry is the pre-selected default.
    pub const ALL: [EventType; 4] = [
        EventType::Wedding,
        EventType::Birthday,
        EventType::Meeting,
        EventType::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Wedding => "Mariage",
            Self::Birthday => "Anniversaire",
            Self::Meeting => "Réunion",
            Self::Other => "Autre",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EventType {
    type Err = UnknownEventType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().to_lowercase() == wanted)
            .ok_or_else(|| UnknownEventType(s.to_string()))
    }
}

/// A client's booking of the hall for one day.
///
/// Built only by the form controller after validation, and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reservation {
    client_name: String,
    date: NaiveDate,
    event_type: EventType,
}

impl Reservation {
    pub(crate) fn new(
        client_name: impl Into<String>,
        date: NaiveDate,
        event_type: EventType,
    ) -> Self {
        Self {
            client_name: client_name.into(),
            date,
            event_type,
        }
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }
}
