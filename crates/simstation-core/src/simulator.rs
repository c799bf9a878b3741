//! Simulator device records and the grouped registry

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Boot state of a simulator.
///
/// Only these two values are ever persisted; any other state string in
/// the native tool's output parses to `None` and never overwrites a
/// previously known state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulatorState {
    Booted,
    Shutdown,
}

impl SimulatorState {
    /// Parse the native tool's state string, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "booted" => Some(Self::Booted),
            "shutdown" => Some(Self::Shutdown),
            _ => None,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Booted => Self::Shutdown,
            Self::Shutdown => Self::Booted,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Booted => "Booted",
            Self::Shutdown => "Shutdown",
        }
    }
}

impl fmt::Display for SimulatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical OS grouping key parsed from a raw runtime key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OsName {
    pub platform: String,
    pub version: String,
}

impl OsName {
    pub fn new(platform: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            version: version.into(),
        }
    }

    /// Extract the canonical key from a raw runtime key.
    ///
    /// `com.apple.CoreSimulator.SimRuntime.iOS-17-0` → `("iOS", "17-0")`:
    /// the substring after the last `.`, split on `-`, first token as
    /// platform and the remainder rejoined as version.
    pub fn parse(raw_key: &str) -> Option<Self> {
        let tail = raw_key.rsplit('.').next()?;
        let mut parts = tail.split('-');
        let platform = parts.next()?.to_string();
        if platform.is_empty() {
            return None;
        }
        let version = parts.collect::<Vec<_>>().join("-");
        Some(Self { platform, version })
    }
}

impl fmt::Display for OsName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.version.is_empty() {
            f.write_str(&self.platform)
        } else {
            write!(f, "{} {}", self.platform, self.version)
        }
    }
}

/// A simulator device.
///
/// Every field is optional: the roster output routinely omits fields,
/// and a partial record is still a valid record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Simulator {
    pub data_path: Option<String>,
    pub data_path_size: Option<i64>,
    /// Model suffix only, e.g. `iPhone-15-Pro` (text after the last `.`
    /// of the full device-type identifier).
    pub device_type_identifier: Option<String>,
    pub is_available: Option<bool>,
    pub log_path: Option<String>,
    pub name: Option<String>,
    pub os: Option<OsName>,
    pub state: Option<SimulatorState>,
    pub udid: Option<String>,
}

impl Simulator {
    /// Stable identifier used for all native tool invocations.
    pub fn id(&self) -> &str {
        self.udid.as_deref().unwrap_or("")
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed")
    }
}

/// The full roster: devices grouped by canonical OS key, iterated in
/// key order. Exclusively owned by the simulator store; everyone else
/// gets cloned snapshots.
pub type SimulatorRegistry = BTreeMap<OsName, Vec<Simulator>>;

/// One row of `launchctl list` inside a simulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorProcess {
    pub pid: String,
    pub status: String,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_parse_case_insensitive() {
        assert_eq!(SimulatorState::parse("Booted"), Some(SimulatorState::Booted));
        assert_eq!(SimulatorState::parse("booted"), Some(SimulatorState::Booted));
        assert_eq!(
            SimulatorState::parse("Shutdown"),
            Some(SimulatorState::Shutdown)
        );
        assert_eq!(
            SimulatorState::parse("shutdown"),
            Some(SimulatorState::Shutdown)
        );
    }

    #[test]
    fn test_state_parse_rejects_other_values() {
        assert_eq!(SimulatorState::parse("Booting"), None);
        assert_eq!(SimulatorState::parse("Creating"), None);
        assert_eq!(SimulatorState::parse(""), None);
    }

    #[test]
    fn test_state_opposite() {
        assert_eq!(SimulatorState::Booted.opposite(), SimulatorState::Shutdown);
        assert_eq!(SimulatorState::Shutdown.opposite(), SimulatorState::Booted);
    }

    #[test]
    fn test_os_name_parse() {
        let os = OsName::parse("com.apple.CoreSimulator.SimRuntime.iOS-17-0").unwrap();
        assert_eq!(os.platform, "iOS");
        assert_eq!(os.version, "17-0");
    }

    #[test]
    fn test_os_name_parse_multi_part_version() {
        let os = OsName::parse("com.apple.CoreSimulator.SimRuntime.watchOS-10-5-1").unwrap();
        assert_eq!(os.platform, "watchOS");
        assert_eq!(os.version, "10-5-1");
    }

    #[test]
    fn test_os_name_parse_no_version() {
        let os = OsName::parse("com.apple.CoreSimulator.SimRuntime.iOS").unwrap();
        assert_eq!(os.platform, "iOS");
        assert_eq!(os.version, "");
    }

    #[test]
    fn test_os_name_parse_empty_tail() {
        assert!(OsName::parse("com.apple.").is_none());
    }

    #[test]
    fn test_os_name_display() {
        assert_eq!(OsName::new("iOS", "17-0").to_string(), "iOS 17-0");
        assert_eq!(OsName::new("iOS", "").to_string(), "iOS");
    }

    #[test]
    fn test_os_name_ordering_groups_platforms() {
        let mut keys = vec![
            OsName::new("watchOS", "10-5"),
            OsName::new("iOS", "17-0"),
            OsName::new("iOS", "16-4"),
        ];
        keys.sort();
        assert_eq!(keys[0], OsName::new("iOS", "16-4"));
        assert_eq!(keys[1], OsName::new("iOS", "17-0"));
        assert_eq!(keys[2], OsName::new("watchOS", "10-5"));
    }

    #[test]
    fn test_simulator_id_fallback() {
        let simulator = Simulator::default();
        assert_eq!(simulator.id(), "");

        let simulator = Simulator {
            udid: Some("ABC-123".to_string()),
            ..Simulator::default()
        };
        assert_eq!(simulator.id(), "ABC-123");
    }

    #[test]
    fn test_registry_iterates_in_key_order() {
        let mut registry = SimulatorRegistry::new();
        registry.insert(OsName::new("watchOS", "10-5"), vec![Simulator::default()]);
        registry.insert(OsName::new("iOS", "17-0"), vec![Simulator::default()]);

        let keys: Vec<_> = registry.keys().cloned().collect();
        assert_eq!(keys[0], OsName::new("iOS", "17-0"));
        assert_eq!(keys[1], OsName::new("watchOS", "10-5"));
    }
}
