//! Command factories injected into the stores

use std::sync::Arc;

use simstation_core::BatteryState;
use simstation_shell::commands::{
    CreateParameters, CreateSimulatorCommand, DeleteSimulatorCommand,
    FetchActiveProcessesCommand, FetchInstalledApplicationsCommand, FetchRuntimesCommand,
    FetchSimulatorsCommand, OpenPathCommand, OpenSimulatorCommand, RetrieveBatteryStateCommand,
    SetBatteryStateCommand, ShutdownSimulatorCommand, UpdateLocationCommand,
};

/// The set of command constructors the stores use.
///
/// Factories rather than commands: each invocation builds a fresh
/// command, and tests swap factories to point commands at stub
/// processes instead of the native tool.
#[derive(Clone)]
pub struct Environment {
    pub fetch_simulators: Arc<dyn Fn() -> FetchSimulatorsCommand + Send + Sync>,
    pub open_simulator: Arc<dyn Fn(&str) -> OpenSimulatorCommand + Send + Sync>,
    pub shutdown_simulator: Arc<dyn Fn(&str) -> ShutdownSimulatorCommand + Send + Sync>,
    pub delete_simulator: Arc<dyn Fn(&str) -> DeleteSimulatorCommand + Send + Sync>,
    pub create_simulator: Arc<dyn Fn(&CreateParameters) -> CreateSimulatorCommand + Send + Sync>,
    pub fetch_runtimes: Arc<dyn Fn() -> FetchRuntimesCommand + Send + Sync>,
    pub retrieve_battery: Arc<dyn Fn(&str) -> RetrieveBatteryStateCommand + Send + Sync>,
    pub set_battery: Arc<dyn Fn(&str, BatteryState) -> SetBatteryStateCommand + Send + Sync>,
    pub fetch_processes: Arc<dyn Fn(&str) -> FetchActiveProcessesCommand + Send + Sync>,
    pub fetch_applications:
        Arc<dyn Fn(&str) -> FetchInstalledApplicationsCommand + Send + Sync>,
    pub open_path: Arc<dyn Fn(&str) -> OpenPathCommand + Send + Sync>,
    pub update_location: Arc<dyn Fn(&str, f64, f64) -> UpdateLocationCommand + Send + Sync>,
}

impl Environment {
    /// Live wiring against the native tool.
    pub fn live() -> Self {
        Self {
            fetch_simulators: Arc::new(FetchSimulatorsCommand::new),
            open_simulator: Arc::new(|id: &str| OpenSimulatorCommand::new(id)),
            shutdown_simulator: Arc::new(|id: &str| ShutdownSimulatorCommand::new(id)),
            delete_simulator: Arc::new(|id: &str| DeleteSimulatorCommand::new(id)),
            create_simulator: Arc::new(|parameters: &CreateParameters| {
                CreateSimulatorCommand::new(parameters)
            }),
            fetch_runtimes: Arc::new(FetchRuntimesCommand::new),
            retrieve_battery: Arc::new(|id: &str| RetrieveBatteryStateCommand::new(id)),
            set_battery: Arc::new(|id: &str, state: BatteryState| {
                SetBatteryStateCommand::new(id, state)
            }),
            fetch_processes: Arc::new(|id: &str| FetchActiveProcessesCommand::new(id)),
            fetch_applications: Arc::new(|id: &str| FetchInstalledApplicationsCommand::new(id)),
            open_path: Arc::new(|path: &str| OpenPathCommand::new(path)),
            update_location: Arc::new(|id: &str, latitude: f64, longitude: f64| {
                UpdateLocationCommand::new(id, latitude, longitude)
            }),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::live()
    }
}
