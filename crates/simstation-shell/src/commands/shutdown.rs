//! Shut down a running simulator

use crate::command::ShellCommand;
use crate::descriptor::{CommandDescriptor, ShellPath};
use crate::runner::ProcessOutput;
use simstation_core::prelude::*;

/// `xcrun simctl shutdown <id>`. No output parsing; success is clean
/// process completion.
#[derive(Debug, Clone)]
pub struct ShutdownSimulatorCommand {
    descriptor: CommandDescriptor,
}

impl ShutdownSimulatorCommand {
    pub fn new(id: &str) -> Self {
        Self {
            descriptor: CommandDescriptor::new(ShellPath::Xcrun, ["simctl", "shutdown", id]),
        }
    }

    #[cfg(any(test, feature = "test-helpers"))]
    pub fn with_descriptor(descriptor: CommandDescriptor) -> Self {
        Self { descriptor }
    }
}

impl ShellCommand for ShutdownSimulatorCommand {
    type Output = ();

    fn descriptor(&self) -> CommandDescriptor {
        self.descriptor.clone()
    }

    fn parse(&self, _output: ProcessOutput) -> Result<()> {
        Ok(())
    }
}
