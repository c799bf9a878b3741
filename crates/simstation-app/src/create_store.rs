//! Simulator creation: selection state, validation guard, broadcast

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::broadcast::{StationBroadcast, StationMessage};
use crate::environment::Environment;
use simstation_core::prelude::*;
use simstation_core::{DeviceType, Loadable, SimulatorRuntime};
use simstation_shell::commands::CreateParameters;
use simstation_shell::ShellCommand;

/// What the user has picked so far.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub runtime: Option<SimulatorRuntime>,
    pub device_type: Option<DeviceType>,
    pub name: String,
}

/// Drives the create flow: runtime catalog retrieval, selection, and
/// the guarded create call.
pub struct CreateSimulatorStore {
    runtimes: RwLock<Loadable<Vec<SimulatorRuntime>>>,
    creating: RwLock<Loadable<()>>,
    selection: RwLock<Selection>,
    env: Environment,
    broadcast: StationBroadcast,
}

impl CreateSimulatorStore {
    pub fn new(env: Environment, broadcast: StationBroadcast) -> Self {
        Self {
            runtimes: RwLock::new(Loadable::Idle),
            creating: RwLock::new(Loadable::Idle),
            selection: RwLock::new(Selection::default()),
            env,
            broadcast,
        }
    }

    /// Fetch the runtime catalog into the `runtimes` slot.
    pub async fn retrieve_runtimes(&self) {
        *self.runtimes.write().await = Loadable::Loading;
        let result = (self.env.fetch_runtimes)().run().await;
        *self.runtimes.write().await = Loadable::from_result(result);
    }

    pub async fn select_runtime(&self, runtime: SimulatorRuntime) {
        self.selection.write().await.runtime = Some(runtime);
    }

    pub async fn select_device_type(&self, device_type: DeviceType) {
        self.selection.write().await.device_type = Some(device_type);
    }

    pub async fn set_name(&self, name: impl Into<String>) {
        self.selection.write().await.name = name.into();
    }

    /// Clear the selection for a fresh create flow.
    pub async fn reset(&self) {
        *self.selection.write().await = Selection::default();
        *self.creating.write().await = Loadable::Idle;
    }

    /// Create a device from the current selection.
    ///
    /// Guard: without a runtime and device type selected and a name
    /// longer than 3 characters, nothing is launched at all; the call
    /// is a silent no-op rather than an error, so a half-filled form
    /// never fires a doomed external process.
    ///
    /// A successful creation broadcasts [`StationMessage::SimulatorCreated`]
    /// so the roster owner re-retrieves instead of guessing at the new
    /// record.
    pub async fn create(&self) {
        let selection = self.selection.read().await.clone();

        let Some(runtime) = selection.runtime else {
            return;
        };
        let Some(device_type) = selection.device_type else {
            return;
        };
        if selection.name.chars().count() <= 3 {
            return;
        }

        let parameters = CreateParameters {
            name: selection.name,
            device_type: device_type.identifier,
            runtime: runtime.identifier,
        };

        info!("Creating simulator {:?}", parameters.name);
        *self.creating.write().await = Loadable::Loading;

        match (self.env.create_simulator)(&parameters).run().await {
            Ok(()) => {
                *self.creating.write().await = Loadable::Loaded(());
                self.broadcast.send(StationMessage::SimulatorCreated);
            }
            Err(e) => {
                warn!("Simulator creation failed: {e}");
                *self.creating.write().await = Loadable::Failed(Arc::new(e));
            }
        }
    }

    pub async fn runtimes(&self) -> Loadable<Vec<SimulatorRuntime>> {
        self.runtimes.read().await.clone()
    }

    pub async fn creating(&self) -> Loadable<()> {
        self.creating.read().await.clone()
    }

    pub async fn selection(&self) -> Selection {
        self.selection.read().await.clone()
    }
}
