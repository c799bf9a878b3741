//! Runtime and device-type catalog entries
//!
//! Immutable values decoded from `xcrun simctl list -j runtimes`. They
//! exist only for display and as parameters to the create command.

use serde::{Deserialize, Serialize};

/// Wire shape of the runtimes listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorRuntimesResponse {
    pub runtimes: Vec<SimulatorRuntime>,
}

/// One installed simulator runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatorRuntime {
    pub is_available: bool,
    pub version: String,
    pub is_internal: bool,
    pub buildversion: String,
    pub supported_architectures: Vec<String>,
    pub supported_device_types: Vec<DeviceType>,
    pub identifier: String,
    pub platform: String,
    pub bundle_path: String,
    pub runtime_root: String,
    pub last_usage: LastUsage,
    pub name: String,
}

/// A device model a runtime can host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceType {
    pub bundle_path: String,
    pub name: String,
    pub identifier: String,
    pub product_family: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastUsage {
    pub arm64: String,
}
