//! Delete a simulator device

use crate::command::ShellCommand;
use crate::descriptor::{CommandDescriptor, ShellPath};
use crate::runner::ProcessOutput;
use simstation_core::prelude::*;

/// `xcrun simctl delete <id>`.
///
/// Unlike the other lifecycle commands this one checks the exit code:
/// a nonzero status is a distinct termination failure even when stderr
/// stayed quiet.
#[derive(Debug, Clone)]
pub struct DeleteSimulatorCommand {
    descriptor: CommandDescriptor,
}

impl DeleteSimulatorCommand {
    pub fn new(id: &str) -> Self {
        Self {
            descriptor: CommandDescriptor::new(ShellPath::Xcrun, ["simctl", "delete", id]),
        }
    }

    #[cfg(any(test, feature = "test-helpers"))]
    pub fn with_descriptor(descriptor: CommandDescriptor) -> Self {
        Self { descriptor }
    }
}

impl ShellCommand for DeleteSimulatorCommand {
    type Output = ();

    fn descriptor(&self) -> CommandDescriptor {
        self.descriptor.clone()
    }

    fn parse(&self, output: ProcessOutput) -> Result<()> {
        if output.status.success() {
            Ok(())
        } else {
            Err(Error::termination_status(output.status.code()))
        }
    }
}
