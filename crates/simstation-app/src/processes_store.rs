//! Per-simulator active process listing

use tokio::sync::RwLock;

use crate::environment::Environment;
use simstation_core::{Loadable, SimulatorProcess};
use simstation_shell::ShellCommand;

/// Processes running inside one simulator.
pub struct ActiveProcessesStore {
    id: String,
    processes: RwLock<Loadable<Vec<SimulatorProcess>>>,
    env: Environment,
}

impl ActiveProcessesStore {
    pub fn new(id: impl Into<String>, env: Environment) -> Self {
        Self {
            id: id.into(),
            processes: RwLock::new(Loadable::Idle),
            env,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub async fn retrieve(&self) {
        *self.processes.write().await = Loadable::Loading;
        let result = (self.env.fetch_processes)(&self.id).run().await;
        *self.processes.write().await = Loadable::from_result(result);
    }

    pub async fn processes(&self) -> Loadable<Vec<SimulatorProcess>> {
        self.processes.read().await.clone()
    }
}
