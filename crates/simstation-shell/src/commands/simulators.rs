//! Fetch the device roster grouped by canonical OS

use std::collections::HashMap;

use serde::Deserialize;

use crate::command::ShellCommand;
use crate::descriptor::{CommandDescriptor, ShellPath};
use crate::runner::ProcessOutput;
use simstation_core::prelude::*;
use simstation_core::{OsName, Simulator, SimulatorRegistry, SimulatorState};

/// Wire shape of `simctl list devices --json`.
#[derive(Debug, Deserialize)]
struct DeviceListResponse {
    devices: HashMap<String, Vec<RawDevice>>,
}

/// One device dictionary. Every field is optional so partial records
/// decode rather than failing the roster.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDevice {
    data_path: Option<String>,
    data_path_size: Option<i64>,
    device_type_identifier: Option<String>,
    is_available: Option<bool>,
    log_path: Option<String>,
    name: Option<String>,
    state: Option<String>,
    udid: Option<String>,
}

/// `xcrun simctl list devices --json`, decoded into the registry:
/// raw OS keys become canonical [`OsName`] groups, groups without a
/// single usable device are omitted, devices keep their source order
/// within a group, and the map iterates in canonical key order.
#[derive(Debug, Clone)]
pub struct FetchSimulatorsCommand {
    descriptor: CommandDescriptor,
}

impl FetchSimulatorsCommand {
    pub fn new() -> Self {
        Self {
            descriptor: CommandDescriptor::new(
                ShellPath::Xcrun,
                ["simctl", "list", "devices", "--json"],
            ),
        }
    }

    #[cfg(any(test, feature = "test-helpers"))]
    pub fn with_descriptor(descriptor: CommandDescriptor) -> Self {
        Self { descriptor }
    }
}

impl Default for FetchSimulatorsCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellCommand for FetchSimulatorsCommand {
    type Output = SimulatorRegistry;

    fn descriptor(&self) -> CommandDescriptor {
        self.descriptor.clone()
    }

    fn parse(&self, output: ProcessOutput) -> Result<SimulatorRegistry> {
        let response: DeviceListResponse = serde_json::from_slice(&output.stdout)?;
        Ok(build_registry(response))
    }
}

fn build_registry(response: DeviceListResponse) -> SimulatorRegistry {
    let mut registry = SimulatorRegistry::new();

    for (raw_key, raw_devices) in response.devices {
        let Some(os) = OsName::parse(&raw_key) else {
            debug!("Skipping unparseable runtime key: {raw_key}");
            continue;
        };

        let devices: Vec<Simulator> = raw_devices
            .into_iter()
            .map(|raw| into_simulator(raw, &os))
            .collect();

        if devices.is_empty() {
            continue;
        }
        registry.insert(os, devices);
    }

    registry
}

fn into_simulator(raw: RawDevice, os: &OsName) -> Simulator {
    Simulator {
        data_path: raw.data_path,
        data_path_size: raw.data_path_size,
        device_type_identifier: raw.device_type_identifier.as_deref().map(model_suffix),
        is_available: raw.is_available,
        log_path: raw.log_path,
        name: raw.name,
        os: Some(os.clone()),
        // A state that is neither booted nor shutdown is not persisted.
        state: raw.state.as_deref().and_then(SimulatorState::parse),
        udid: raw.udid,
    }
}

/// `com.apple.CoreSimulator.SimDeviceType.iPhone-15-Pro` → `iPhone-15-Pro`
fn model_suffix(device_type_identifier: &str) -> String {
    device_type_identifier
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_string()
}
