//! Availability probing for the external tools
//!
//! The command layer assumes `/usr/bin/xcrun`, `/usr/bin/open`, and
//! `/bin/bash` exist; this module checks once at startup so the
//! application can warn up front instead of failing per command.

use std::path::Path;

use crate::descriptor::ShellPath;

/// Cached availability of the executables the shell layer invokes.
#[derive(Debug, Clone, Default)]
pub struct ToolAvailability {
    /// Whether `xcrun simctl` responds (macOS with Xcode)
    pub simctl: bool,

    /// Whether `/usr/bin/open` exists
    pub open: bool,

    /// Whether `/bin/bash` exists
    pub bash: bool,
}

impl ToolAvailability {
    /// Check tool availability (run once at startup)
    pub async fn check() -> Self {
        Self {
            simctl: Self::check_simctl().await,
            open: Path::new(ShellPath::Open.as_str()).exists(),
            bash: Path::new(ShellPath::Bash.as_str()).exists(),
        }
    }

    /// Check if xcrun simctl is available
    async fn check_simctl() -> bool {
        // Only available on macOS
        #[cfg(not(target_os = "macos"))]
        return false;

        #[cfg(target_os = "macos")]
        {
            use std::process::Stdio;
            use tokio::process::Command;

            Command::new(ShellPath::Xcrun.as_str())
                .args(["simctl", "help"])
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .await
                .map(|s| s.success())
                .inspect_err(|e| tracing::debug!("xcrun simctl check failed: {}", e))
                .unwrap_or(false)
        }
    }

    /// Get user-friendly message when simulators cannot be managed
    pub fn simctl_unavailable_message(&self) -> Option<&'static str> {
        if self.simctl {
            None
        } else {
            #[cfg(target_os = "macos")]
            {
                Some("Xcode not installed. Install Xcode to manage simulators.")
            }

            #[cfg(not(target_os = "macos"))]
            {
                Some("Simulators can only be managed on macOS.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_availability_default() {
        let availability = ToolAvailability::default();
        assert!(!availability.simctl);
        assert!(!availability.open);
        assert!(!availability.bash);
    }

    #[test]
    fn test_simctl_unavailable_message() {
        let availability = ToolAvailability::default();
        assert!(availability.simctl_unavailable_message().is_some());
    }

    #[test]
    fn test_simctl_available_no_message() {
        let availability = ToolAvailability {
            simctl: true,
            open: true,
            bash: true,
        };
        assert!(availability.simctl_unavailable_message().is_none());
    }

    #[tokio::test]
    async fn test_check_does_not_panic() {
        // Outcome depends on the host; the probe itself must not fail.
        let _ = ToolAvailability::check().await;
    }
}
