//! Fetch the installed runtime catalog

use crate::command::ShellCommand;
use crate::descriptor::{CommandDescriptor, ShellPath};
use crate::runner::ProcessOutput;
use simstation_core::prelude::*;
use simstation_core::{SimulatorRuntime, SimulatorRuntimesResponse};

/// `xcrun simctl list -j runtimes`, decoded straight from JSON with no
/// text post-processing.
#[derive(Debug, Clone)]
pub struct FetchRuntimesCommand {
    descriptor: CommandDescriptor,
}

impl FetchRuntimesCommand {
    pub fn new() -> Self {
        Self {
            descriptor: CommandDescriptor::new(ShellPath::Xcrun, ["simctl", "list", "-j", "runtimes"]),
        }
    }

    #[cfg(any(test, feature = "test-helpers"))]
    pub fn with_descriptor(descriptor: CommandDescriptor) -> Self {
        Self { descriptor }
    }
}

impl Default for FetchRuntimesCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellCommand for FetchRuntimesCommand {
    type Output = Vec<SimulatorRuntime>;

    fn descriptor(&self) -> CommandDescriptor {
        self.descriptor.clone()
    }

    fn parse(&self, output: ProcessOutput) -> Result<Vec<SimulatorRuntime>> {
        let response: SimulatorRuntimesResponse = serde_json::from_slice(&output.stdout)?;
        Ok(response.runtimes)
    }
}
