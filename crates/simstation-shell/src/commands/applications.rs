//! List the applications installed on a simulator

use std::collections::HashMap;

use crate::command::ShellCommand;
use crate::descriptor::{CommandDescriptor, ShellPath};
use crate::runner::ProcessOutput;
use simstation_core::prelude::*;
use simstation_core::InstalledApplication;

/// `xcrun simctl listapps <id> --json`.
///
/// Despite the flag, the tool emits a property list (binary on real
/// devices) keyed by bundle identifier. System applications are
/// filtered out of the result.
#[derive(Debug, Clone)]
pub struct FetchInstalledApplicationsCommand {
    descriptor: CommandDescriptor,
}

impl FetchInstalledApplicationsCommand {
    pub fn new(id: &str) -> Self {
        Self {
            descriptor: CommandDescriptor::new(
                ShellPath::Xcrun,
                ["simctl", "listapps", id, "--json"],
            ),
        }
    }

    #[cfg(any(test, feature = "test-helpers"))]
    pub fn with_descriptor(descriptor: CommandDescriptor) -> Self {
        Self { descriptor }
    }
}

impl ShellCommand for FetchInstalledApplicationsCommand {
    type Output = Vec<InstalledApplication>;

    fn descriptor(&self) -> CommandDescriptor {
        self.descriptor.clone()
    }

    fn parse(&self, output: ProcessOutput) -> Result<Vec<InstalledApplication>> {
        let by_bundle_id: HashMap<String, InstalledApplication> =
            plist::from_bytes(&output.stdout)?;

        let mut applications: Vec<InstalledApplication> = by_bundle_id
            .into_values()
            .filter(|application| !application.is_system())
            .collect();
        applications.sort_by(|a, b| a.identifier.cmp(&b.identifier));

        Ok(applications)
    }
}
