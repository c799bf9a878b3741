//! Override a simulator's simulated location

use crate::command::ShellCommand;
use crate::descriptor::{CommandDescriptor, ShellPath};
use crate::runner::ProcessOutput;
use simstation_core::prelude::*;

/// `xcrun simctl location <id> set <lat>,<lon>`; exit status only.
#[derive(Debug, Clone)]
pub struct UpdateLocationCommand {
    descriptor: CommandDescriptor,
}

impl UpdateLocationCommand {
    pub fn new(id: &str, latitude: f64, longitude: f64) -> Self {
        let coordinate = format!("{latitude},{longitude}");
        Self {
            descriptor: CommandDescriptor::new(
                ShellPath::Xcrun,
                ["simctl", "location", id, "set", coordinate.as_str()],
            ),
        }
    }

    #[cfg(any(test, feature = "test-helpers"))]
    pub fn with_descriptor(descriptor: CommandDescriptor) -> Self {
        Self { descriptor }
    }
}

impl ShellCommand for UpdateLocationCommand {
    type Output = ();

    fn descriptor(&self) -> CommandDescriptor {
        self.descriptor.clone()
    }

    fn parse(&self, _output: ProcessOutput) -> Result<()> {
        Ok(())
    }
}
