//! Erase a simulator's content and settings

use crate::command::{ShellCommand, Subcommand};
use crate::descriptor::{CommandDescriptor, ShellPath};
use crate::runner::ProcessOutput;
use simstation_core::prelude::*;

/// `xcrun simctl erase <id>`, wrapped in the full composition contract:
/// the device must be shut down before erasing, and is reopened
/// afterward whether or not it was open before.
#[derive(Debug, Clone)]
pub struct EraseContentCommand {
    descriptor: CommandDescriptor,
    prerequisites: Vec<Subcommand>,
    follow_ups: Vec<Subcommand>,
}

impl EraseContentCommand {
    pub fn new(id: &str) -> Self {
        Self {
            descriptor: CommandDescriptor::new(ShellPath::Xcrun, ["simctl", "erase", id]),
            prerequisites: vec![Subcommand::Shutdown(id.to_string())],
            follow_ups: vec![Subcommand::Open(id.to_string())],
        }
    }

    #[cfg(any(test, feature = "test-helpers"))]
    pub fn with_parts(
        prerequisites: Vec<Subcommand>,
        descriptor: CommandDescriptor,
        follow_ups: Vec<Subcommand>,
    ) -> Self {
        Self {
            descriptor,
            prerequisites,
            follow_ups,
        }
    }
}

impl ShellCommand for EraseContentCommand {
    type Output = ();

    fn descriptor(&self) -> CommandDescriptor {
        self.descriptor.clone()
    }

    fn prerequisites(&self) -> Vec<Subcommand> {
        self.prerequisites.clone()
    }

    fn follow_ups(&self) -> Vec<Subcommand> {
        self.follow_ups.clone()
    }

    fn parse(&self, _output: ProcessOutput) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composition_shape() {
        let command = EraseContentCommand::new("ABC-123");

        assert_eq!(
            command.prerequisites(),
            [Subcommand::Shutdown("ABC-123".to_string())]
        );
        assert_eq!(
            command.follow_ups(),
            [Subcommand::Open("ABC-123".to_string())]
        );

        let descriptor = command.descriptor();
        assert_eq!(descriptor.program(), "/usr/bin/xcrun");
        assert_eq!(descriptor.arguments(), ["simctl", "erase", "ABC-123"]);
    }
}
