//! Read and override the status-bar battery state

use crate::command::ShellCommand;
use crate::descriptor::{CommandDescriptor, ShellPath};
use crate::runner::ProcessOutput;
use simstation_core::prelude::*;
use simstation_core::{BatteryChargeState, BatteryState};

/// `xcrun simctl status_bar <id> list`.
///
/// The line count tells the story: exactly 2 lines means no override is
/// active (the device reports a full battery); exactly 3 means an
/// override is present and the `Battery State:` line carries the
/// numeric state and level. Anything else is unexpected.
#[derive(Debug, Clone)]
pub struct RetrieveBatteryStateCommand {
    descriptor: CommandDescriptor,
}

impl RetrieveBatteryStateCommand {
    pub fn new(id: &str) -> Self {
        Self {
            descriptor: CommandDescriptor::new(
                ShellPath::Xcrun,
                ["simctl", "status_bar", id, "list"],
            ),
        }
    }

    #[cfg(any(test, feature = "test-helpers"))]
    pub fn with_descriptor(descriptor: CommandDescriptor) -> Self {
        Self { descriptor }
    }
}

impl ShellCommand for RetrieveBatteryStateCommand {
    type Output = BatteryState;

    fn descriptor(&self) -> CommandDescriptor {
        self.descriptor.clone()
    }

    fn parse(&self, output: ProcessOutput) -> Result<BatteryState> {
        parse_battery_output(&output.stdout_lossy())
    }
}

fn parse_battery_output(text: &str) -> Result<BatteryState> {
    let lines: Vec<&str> = text.split('\n').filter(|line| !line.is_empty()).collect();

    match lines.len() {
        // No override was ever applied.
        2 => Ok(BatteryState::new(BatteryChargeState::Charged, 100)),
        3 => parse_override_lines(&lines),
        n => Err(Error::unexpected_output(format!(
            "expected 2 or 3 status bar lines, got {n}"
        ))),
    }
}

/// Scan from the end for the battery line, then pick the numeric state
/// and level out of its comma-separated fields.
fn parse_override_lines(lines: &[&str]) -> Result<BatteryState> {
    let battery_line = lines
        .iter()
        .rev()
        .find(|line| line.contains("Battery State:"))
        .ok_or_else(|| Error::unexpected_output("no Battery State line in override output"))?;

    let mut charge_state = None;
    let mut level = None;

    for component in battery_line.split(',') {
        if component.contains("State:") {
            let token = component.split_whitespace().last().unwrap_or_default();
            charge_state = Some(match token.parse::<i64>() {
                Ok(code) => BatteryChargeState::from_code(code),
                // An unreadable code still means an override is active.
                Err(_) => BatteryChargeState::Charged,
            });
        } else if component.contains("Level:") {
            level = component
                .split_whitespace()
                .last()
                .and_then(|token| token.parse::<i64>().ok());
        }
    }

    match (charge_state, level) {
        (Some(charge_state), Some(level)) => Ok(BatteryState::new(charge_state, level)),
        _ => Err(Error::decode(
            "battery line is missing its State or Level field",
        )),
    }
}

/// `xcrun simctl status_bar <id> override --batteryState <state>
/// --batteryLevel <level>`.
///
/// The native tool performs no validation; callers must reject levels
/// outside `[0, 100]` and the `unknown` state before building this.
#[derive(Debug, Clone)]
pub struct SetBatteryStateCommand {
    descriptor: CommandDescriptor,
}

impl SetBatteryStateCommand {
    pub fn new(id: &str, state: BatteryState) -> Self {
        let level = state.level.to_string();
        Self {
            descriptor: CommandDescriptor::new(
                ShellPath::Xcrun,
                [
                    "simctl",
                    "status_bar",
                    id,
                    "override",
                    "--batteryState",
                    state.charge_state.as_str(),
                    "--batteryLevel",
                    level.as_str(),
                ],
            ),
        }
    }

    #[cfg(any(test, feature = "test-helpers"))]
    pub fn with_descriptor(descriptor: CommandDescriptor) -> Self {
        Self { descriptor }
    }
}

impl ShellCommand for SetBatteryStateCommand {
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
    fn test_two_lines_means_no_override() {
        let text = "Status bar overrides for device ABC-123:\nNone\n";
        let state = parse_battery_output(text).unwrap();

        assert_eq!(state.charge_state, BatteryChargeState::Charged);
        assert_eq!(state.level, 100);
    }

    #[test]
    fn test_three_lines_parses_the_override() {
        let text = "Status bar overrides for device ABC-123:\n\
                    Overrides:\n\
                    Battery State: 1, Battery Level: 42\n";
        let state = parse_battery_output(text).unwrap();

        assert_eq!(state.charge_state, BatteryChargeState::Charging);
        assert_eq!(state.level, 42);
    }

    #[test]
    fn test_state_codes() {
        for (code, expected) in [
            (0, BatteryChargeState::Discharging),
            (1, BatteryChargeState::Charging),
            (2, BatteryChargeState::Charged),
            (7, BatteryChargeState::Charged),
        ] {
            let text = format!("header\nOverrides:\nBattery State: {code}, Level: 10\n");
            let state = parse_battery_output(&text).unwrap();
            assert_eq!(state.charge_state, expected, "code {code}");
        }
    }

    #[test]
    fn test_battery_line_found_scanning_from_the_end() {
        // The battery line is not necessarily last.
        let text = "header\nBattery State: 0, Level: 5\ntrailing note\n";
        let state = parse_battery_output(text).unwrap();

        assert_eq!(state.charge_state, BatteryChargeState::Discharging);
        assert_eq!(state.level, 5);
    }

    #[test]
    fn test_unexpected_line_count_fails() {
        assert!(matches!(
            parse_battery_output("only one line\n"),
            Err(Error::UnexpectedOutput { .. })
        ));
        assert!(matches!(
            parse_battery_output("a\nb\nc\nd\n"),
            Err(Error::UnexpectedOutput { .. })
        ));
        assert!(matches!(
            parse_battery_output(""),
            Err(Error::UnexpectedOutput { .. })
        ));
    }

    #[test]
    fn test_missing_battery_line_fails() {
        let text = "header\nOverrides:\nTime: 9:41\n";
        assert!(matches!(
            parse_battery_output(text),
            Err(Error::UnexpectedOutput { .. })
        ));
    }

    #[test]
    fn test_missing_level_is_a_decode_failure() {
        let text = "header\nOverrides:\nBattery State: 1\n";
        assert!(matches!(
            parse_battery_output(text),
            Err(Error::Decode { .. })
        ));
    }

    #[test]
    fn test_override_descriptor_shape() {
        let state = BatteryState::new(BatteryChargeState::Discharging, 25);
        let descriptor = SetBatteryStateCommand::new("ABC-123", state).descriptor();

        assert_eq!(descriptor.program(), "/usr/bin/xcrun");
        assert_eq!(
            descriptor.arguments(),
            [
                "simctl",
                "status_bar",
                "ABC-123",
                "override",
                "--batteryState",
                "discharging",
                "--batteryLevel",
                "25",
            ]
        );
    }

    #[test]
    fn test_list_descriptor_shape() {
        let descriptor = RetrieveBatteryStateCommand::new("ABC-123").descriptor();

        assert_eq!(descriptor.program(), "/usr/bin/xcrun");
        assert_eq!(
            descriptor.arguments(),
            ["simctl", "status_bar", "ABC-123", "list"]
        );
    }
}
