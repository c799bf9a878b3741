//! Application-level broadcast messages

use tokio::sync::broadcast;

/// Messages published across stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StationMessage {
    /// A simulator was created; roster holders should re-retrieve
    /// rather than guessing at the new device's record.
    SimulatorCreated,
}

/// Broadcast channel handle shared by all stores.
#[derive(Debug, Clone)]
pub struct StationBroadcast {
    tx: broadcast::Sender<StationMessage>,
}

impl StationBroadcast {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(64);
        Self { tx }
    }

    /// Subscribe to station messages
    pub fn subscribe(&self) -> broadcast::Receiver<StationMessage> {
        self.tx.subscribe()
    }

    /// Broadcast a message to all subscribers
    pub fn send(&self, message: StationMessage) {
        // Ignore send errors (no subscribers is fine)
        let _ = self.tx.send(message);
    }
}

impl Default for StationBroadcast {
    fn default() -> Self {
        Self::new()
    }
}
