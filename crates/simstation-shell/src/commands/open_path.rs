//! Reveal a filesystem path with the system opener

use crate::command::ShellCommand;
use crate::descriptor::{CommandDescriptor, ShellPath};
use crate::runner::ProcessOutput;
use simstation_core::prelude::*;

/// `/usr/bin/open <path>`; exit status only.
#[derive(Debug, Clone)]
pub struct OpenPathCommand {
    descriptor: CommandDescriptor,
}

impl OpenPathCommand {
    pub fn new(path: &str) -> Self {
        Self {
            descriptor: CommandDescriptor::new(ShellPath::Open, [path]),
        }
    }

    #[cfg(any(test, feature = "test-helpers"))]
    pub fn with_descriptor(descriptor: CommandDescriptor) -> Self {
        Self { descriptor }
    }
}

impl ShellCommand for OpenPathCommand {
    type Output = ();

    fn descriptor(&self) -> CommandDescriptor {
        self.descriptor.clone()
    }

    fn parse(&self, _output: ProcessOutput) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_shape() {
        let descriptor = OpenPathCommand::new("/containers/com.example.app").descriptor();

        assert_eq!(descriptor.program(), "/usr/bin/open");
        assert_eq!(descriptor.arguments(), ["/containers/com.example.app"]);
    }
}
