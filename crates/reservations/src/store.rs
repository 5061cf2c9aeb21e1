//! In-memory, append-only reservation list with an explicit refresh signal.

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::domain::Reservation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Appended { index: usize, total: usize },
}

#[derive(Debug, Default)]
pub struct ReservationStore {
    reservations: Vec<Reservation>,
    subscribers: Vec<Sender<StoreEvent>>,
}

impl ReservationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer that receives one event per subsequent append.
    pub fn subscribe(&mut self) -> Receiver<StoreEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    pub fn append(&mut self, reservation: Reservation) -> usize {
        let index = self.reservations.len();
        self.reservations.push(reservation);
        let event = StoreEvent::Appended {
            index,
            total: self.reservations.len(),
        };

        // Dropped receivers are pruned here; nobody else removes them.
        self.subscribers.retain(|tx| tx.send(event).is_ok());
        tracing::debug!(
            index,
            total = self.reservations.len(),
            observers = self.subscribers.len(),
            "reservation appended"
        );
        index
    }

    pub fn list_all(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }
}
