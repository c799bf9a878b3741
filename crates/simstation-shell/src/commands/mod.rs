//! Concrete commands against the native tool
//!
//! One module per command, each implementing [`crate::ShellCommand`]
//! with its own descriptor shape and parse rule.

pub mod applications;
pub mod battery;
pub mod create;
pub mod delete;
pub mod erase;
pub mod location;
pub mod open;
pub mod open_path;
pub mod processes;
pub mod runtimes;
pub mod shutdown;
pub mod simulators;

pub use applications::FetchInstalledApplicationsCommand;
pub use battery::{RetrieveBatteryStateCommand, SetBatteryStateCommand};
pub use create::{CreateParameters, CreateSimulatorCommand};
pub use delete::DeleteSimulatorCommand;
pub use erase::EraseContentCommand;
pub use location::UpdateLocationCommand;
pub use open::{BootSimulatorCommand, OpenSimulatorCommand};
pub use open_path::OpenPathCommand;
pub use processes::FetchActiveProcessesCommand;
pub use runtimes::FetchRuntimesCommand;
pub use shutdown::ShutdownSimulatorCommand;
pub use simulators::FetchSimulatorsCommand;
