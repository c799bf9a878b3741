//! Create a new simulator device

use std::sync::LazyLock;

use regex::Regex;

use crate::command::ShellCommand;
use crate::descriptor::{CommandDescriptor, ShellPath};
use crate::runner::ProcessOutput;
use simstation_core::prelude::*;

/// Canonical hyphenated UUID, as `simctl create` prints it.
static UUID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9A-F]{8}-[0-9A-F]{4}-[0-9A-F]{4}-[0-9A-F]{4}-[0-9A-F]{12}$")
        .expect("Invalid UUID pattern regex")
});

/// Parameters for creating a device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateParameters {
    pub name: String,
    /// Full device-type identifier.
    pub device_type: String,
    /// Full runtime identifier.
    pub runtime: String,
}

/// `xcrun simctl create <name> <deviceType> <runtime>`.
///
/// On success the tool prints the new device's UUID on stdout; anything
/// else means the creation did not happen as requested.
#[derive(Debug, Clone)]
pub struct CreateSimulatorCommand {
    descriptor: CommandDescriptor,
}

impl CreateSimulatorCommand {
    pub fn new(parameters: &CreateParameters) -> Self {
        Self {
            descriptor: CommandDescriptor::new(
                ShellPath::Xcrun,
                [
                    "simctl",
                    "create",
                    parameters.name.as_str(),
                    parameters.device_type.as_str(),
                    parameters.runtime.as_str(),
                ],
            ),
        }
    }

    #[cfg(any(test, feature = "test-helpers"))]
    pub fn with_descriptor(descriptor: CommandDescriptor) -> Self {
        Self { descriptor }
    }
}

impl ShellCommand for CreateSimulatorCommand {
    type Output = ();

    fn descriptor(&self) -> CommandDescriptor {
        self.descriptor.clone()
    }

    fn parse(&self, output: ProcessOutput) -> Result<()> {
        let text = output.stdout_lossy();
        let trimmed = text.trim();

        if UUID_PATTERN.is_match(trimmed) {
            Ok(())
        } else {
            Err(Error::unexpected_output(format!(
                "create did not return a device identifier: {trimmed:?}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::process::ExitStatusExt;
    use std::process::ExitStatus;

    fn output(stdout: &str) -> ProcessOutput {
        ProcessOutput {
            stdout: stdout.as_bytes().to_vec(),
            status: ExitStatus::from_raw(0),
        }
    }

    fn command() -> CreateSimulatorCommand {
        CreateSimulatorCommand::new(&CreateParameters {
            name: "My Phone".to_string(),
            device_type: "com.apple.CoreSimulator.SimDeviceType.iPhone-15".to_string(),
            runtime: "com.apple.CoreSimulator.SimRuntime.iOS-17-0".to_string(),
        })
    }

    #[test]
    fn test_descriptor_shape() {
        let descriptor = command().descriptor();

        assert_eq!(descriptor.program(), "/usr/bin/xcrun");
        assert_eq!(
            descriptor.arguments(),
            [
                "simctl",
                "create",
                "My Phone",
                "com.apple.CoreSimulator.SimDeviceType.iPhone-15",
                "com.apple.CoreSimulator.SimRuntime.iOS-17-0",
            ]
        );
    }

    #[test]
    fn test_uuid_stdout_is_success() {
        let result = command().parse(output("0E4A0E9B-9F3A-4E88-8C2D-5B1A2C3D4E5F\n"));
        assert!(result.is_ok());
    }

    #[test]
    fn test_untrimmed_uuid_is_success() {
        let result = command().parse(output("  0E4A0E9B-9F3A-4E88-8C2D-5B1A2C3D4E5F  \n"));
        assert!(result.is_ok());
    }

    #[test]
    fn test_non_uuid_stdout_fails() {
        let result = command().parse(output("Invalid device type\n"));
        assert!(matches!(result, Err(Error::UnexpectedOutput { .. })));
    }

    #[test]
    fn test_empty_stdout_fails() {
        let result = command().parse(output(""));
        assert!(matches!(result, Err(Error::UnexpectedOutput { .. })));
    }

    #[test]
    fn test_lowercase_uuid_fails() {
        // simctl prints uppercase identifiers; anything else is not one.
        let result = command().parse(output("0e4a0e9b-9f3a-4e88-8c2d-5b1a2c3d4e5f\n"));
        assert!(matches!(result, Err(Error::UnexpectedOutput { .. })));
    }
}
