//! The roster owner: single writer over the simulator registry

use std::sync::Arc;

use tokio::sync::broadcast;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::broadcast::StationMessage;
use crate::environment::Environment;
use simstation_core::prelude::*;
use simstation_core::{Simulator, SimulatorRegistry, SimulatorState};
use simstation_shell::ShellCommand;

/// Owns the device registry and is its only writer.
///
/// Every mutation happens strictly after the underlying command's
/// result is known: a failed or cancelled command leaves the registry
/// exactly as it was, so readers always see the last known-good state.
pub struct SimulatorStore {
    registry: RwLock<SimulatorRegistry>,
    env: Environment,
}

impl SimulatorStore {
    pub fn new(env: Environment) -> Self {
        Self {
            registry: RwLock::new(SimulatorRegistry::new()),
            env,
        }
    }

    /// Read-only snapshot of the registry.
    pub async fn snapshot(&self) -> SimulatorRegistry {
        self.registry.read().await.clone()
    }

    /// Replace the registry with a freshly fetched roster.
    ///
    /// The swap is a single write: readers see either the old roster or
    /// the new one, never a partially applied mix. Concurrent calls are
    /// idempotent in effect (last write wins).
    pub async fn retrieve(&self) -> Result<()> {
        let roster = (self.env.fetch_simulators)().run().await?;

        info!(
            "Roster retrieved: {} groups, {} devices",
            roster.len(),
            roster.values().map(Vec::len).sum::<usize>()
        );
        *self.registry.write().await = roster;
        Ok(())
    }

    /// Drive a device to the target state and record it.
    ///
    /// `Booted` opens the device (boot prerequisite included); `Shutdown`
    /// shuts it down. The state field is overwritten in place only after
    /// the command succeeded.
    pub async fn set_state(&self, simulator: &Simulator, target: SimulatorState) -> Result<()> {
        match target {
            SimulatorState::Booted => (self.env.open_simulator)(simulator.id()).run().await?,
            SimulatorState::Shutdown => {
                (self.env.shutdown_simulator)(simulator.id()).run().await?
            }
        }

        let Some(os) = &simulator.os else {
            return Ok(());
        };

        let mut registry = self.registry.write().await;
        if let Some(group) = registry.get_mut(os) {
            if let Some(entry) = group.iter_mut().find(|s| s.udid == simulator.udid) {
                entry.state = Some(target);
            }
        }
        Ok(())
    }

    /// Delete a device and, on success, remove it from its group. An
    /// emptied group loses its key entirely.
    pub async fn delete(&self, simulator: &Simulator) -> Result<()> {
        (self.env.delete_simulator)(simulator.id()).run().await?;

        let Some(os) = &simulator.os else {
            return Ok(());
        };

        let mut registry = self.registry.write().await;
        if let Some(group) = registry.get_mut(os) {
            group.retain(|s| s.udid != simulator.udid);
            if group.is_empty() {
                registry.remove(os);
            }
        }
        Ok(())
    }

    /// Find a device by identifier in the current registry.
    pub async fn find(&self, udid: &str) -> Option<Simulator> {
        self.registry
            .read()
            .await
            .values()
            .flatten()
            .find(|s| s.udid.as_deref() == Some(udid))
            .cloned()
    }

    /// Spawn a task that re-retrieves the roster whenever a simulator
    /// creation is broadcast. Ends when the channel closes.
    pub fn watch_creations(
        self: Arc<Self>,
        mut rx: broadcast::Receiver<StationMessage>,
    ) -> JoinHandle<()> {
        let store = self;
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(StationMessage::SimulatorCreated) => {
                        if let Err(e) = store.retrieve().await {
                            warn!("Roster refresh after creation failed: {e}");
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        debug!("Creation watcher lagged, skipped {skipped} messages");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        })
    }
}
