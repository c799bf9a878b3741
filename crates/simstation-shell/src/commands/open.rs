//! Boot a simulator and point the Simulator app at it

use crate::command::{ShellCommand, Subcommand};
use crate::descriptor::{CommandDescriptor, ShellPath};
use crate::runner::ProcessOutput;
use simstation_core::prelude::*;

/// `xcrun simctl boot <id>`. Only ever issued as the prerequisite of
/// [`OpenSimulatorCommand`].
#[derive(Debug, Clone)]
pub struct BootSimulatorCommand {
    descriptor: CommandDescriptor,
}

impl BootSimulatorCommand {
    pub fn new(id: &str) -> Self {
        Self {
            descriptor: CommandDescriptor::new(ShellPath::Xcrun, ["simctl", "boot", id]),
        }
    }

    #[cfg(any(test, feature = "test-helpers"))]
    pub fn with_descriptor(descriptor: CommandDescriptor) -> Self {
        Self { descriptor }
    }
}

impl ShellCommand for BootSimulatorCommand {
    type Output = ();

    fn descriptor(&self) -> CommandDescriptor {
        self.descriptor.clone()
    }

    fn parse(&self, _output: ProcessOutput) -> Result<()> {
        Ok(())
    }
}

/// `open -a Simulator --args -CurrentDeviceUDID <id>`, with a boot
/// prerequisite: the device must finish booting before the app is
/// pointed at it.
#[derive(Debug, Clone)]
pub struct OpenSimulatorCommand {
    descriptor: CommandDescriptor,
    prerequisites: Vec<Subcommand>,
}

impl OpenSimulatorCommand {
    pub fn new(id: &str) -> Self {
        Self {
            descriptor: CommandDescriptor::new(
                ShellPath::Open,
                ["-a", "Simulator", "--args", "-CurrentDeviceUDID", id],
            ),
            prerequisites: vec![Subcommand::Boot(id.to_string())],
        }
    }

    #[cfg(any(test, feature = "test-helpers"))]
    pub fn with_parts(descriptor: CommandDescriptor, prerequisites: Vec<Subcommand>) -> Self {
        Self {
            descriptor,
            prerequisites,
        }
    }
}

impl ShellCommand for OpenSimulatorCommand {
    type Output = ();

    fn descriptor(&self) -> CommandDescriptor {
        self.descriptor.clone()
    }

    fn prerequisites(&self) -> Vec<Subcommand> {
        self.prerequisites.clone()
    }

    fn parse(&self, _output: ProcessOutput) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_descriptor_shape() {
        let command = OpenSimulatorCommand::new("ABC-123");
        let descriptor = command.descriptor();

        assert_eq!(descriptor.program(), "/usr/bin/open");
        assert_eq!(
            descriptor.arguments(),
            ["-a", "Simulator", "--args", "-CurrentDeviceUDID", "ABC-123"]
        );
    }

    #[test]
    fn test_open_boots_first() {
        let command = OpenSimulatorCommand::new("ABC-123");
        assert_eq!(
            command.prerequisites(),
            [Subcommand::Boot("ABC-123".to_string())]
        );
    }

    #[test]
    fn test_boot_descriptor_shape() {
        let command = BootSimulatorCommand::new("ABC-123");
        let descriptor = command.descriptor();

        assert_eq!(descriptor.program(), "/usr/bin/xcrun");
        assert_eq!(descriptor.arguments(), ["simctl", "boot", "ABC-123"]);
        assert!(command.prerequisites().is_empty());
    }
}
