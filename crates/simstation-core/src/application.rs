//! Installed application descriptors
//!
//! Decoded from the binary property list emitted by
//! `xcrun simctl listapps`. Field names match the plist keys.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One application installed on a simulator, keyed by bundle identifier
/// in the native tool's output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledApplication {
    #[serde(rename = "ApplicationType")]
    pub application_type: String,
    #[serde(rename = "Bundle")]
    pub bundle: String,
    #[serde(rename = "CFBundleDisplayName")]
    pub display_name: String,
    #[serde(rename = "CFBundleExecutable")]
    pub executable: String,
    #[serde(rename = "CFBundleIdentifier")]
    pub identifier: String,
    #[serde(rename = "CFBundleName")]
    pub bundle_name: String,
    #[serde(rename = "CFBundleVersion")]
    pub version: String,
    #[serde(rename = "DataContainer")]
    pub data_container: Option<String>,
    #[serde(rename = "Path")]
    pub path: String,
    #[serde(rename = "GroupContainers")]
    pub group_containers: Option<HashMap<String, String>>,
    #[serde(rename = "SBAppTags")]
    pub sb_app_tags: Option<Vec<String>>,
}

impl InstalledApplication {
    /// System applications are filtered out of listings.
    pub fn is_system(&self) -> bool {
        self.application_type == "System"
    }
}
