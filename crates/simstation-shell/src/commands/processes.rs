//! List the processes running inside a simulator

use crate::command::ShellCommand;
use crate::descriptor::{CommandDescriptor, ShellPath};
use crate::runner::ProcessOutput;
use simstation_core::prelude::*;
use simstation_core::SimulatorProcess;

/// `bash -c "xcrun simctl spawn <id> launchctl list"`.
///
/// launchctl prints a tab-separated table: a header line followed by
/// `pid<TAB>status<TAB>label` rows.
#[derive(Debug, Clone)]
pub struct FetchActiveProcessesCommand {
    descriptor: CommandDescriptor,
}

impl FetchActiveProcessesCommand {
    pub fn new(id: &str) -> Self {
        let pipeline = format!("xcrun simctl spawn {id} launchctl list");
        Self {
            descriptor: CommandDescriptor::new(ShellPath::Bash, ["-c", pipeline.as_str()]),
        }
    }

    #[cfg(any(test, feature = "test-helpers"))]
    pub fn with_descriptor(descriptor: CommandDescriptor) -> Self {
        Self { descriptor }
    }
}

impl ShellCommand for FetchActiveProcessesCommand {
    type Output = Vec<SimulatorProcess>;

    fn descriptor(&self) -> CommandDescriptor {
        self.descriptor.clone()
    }

    fn parse(&self, output: ProcessOutput) -> Result<Vec<SimulatorProcess>> {
        Ok(parse_process_list(&output.stdout_lossy()))
    }
}

/// The header line is discarded; rows without exactly three fields are
/// silently dropped rather than failing the whole parse.
fn parse_process_list(text: &str) -> Vec<SimulatorProcess> {
    text.lines()
        .skip(1)
        .filter_map(|line| {
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() != 3 {
                return None;
            }
            Some(SimulatorProcess {
                pid: fields[0].to_string(),
                status: fields[1].to_string(),
                label: fields[2].to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_shape() {
        let descriptor = FetchActiveProcessesCommand::new("ABC-123").descriptor();

        assert_eq!(descriptor.program(), "/bin/bash");
        assert_eq!(
            descriptor.arguments(),
            ["-c", "xcrun simctl spawn ABC-123 launchctl list"]
        );
    }

    #[test]
    fn test_header_line_is_dropped() {
        let text = "PID\tStatus\tLabel\n123\t0\tcom.apple.example\n";
        let processes = parse_process_list(text);

        assert_eq!(processes.len(), 1);
        assert_eq!(processes[0].pid, "123");
        assert_eq!(processes[0].status, "0");
        assert_eq!(processes[0].label, "com.apple.example");
    }

    #[test]
    fn test_malformed_lines_are_dropped_silently() {
        let text = "PID\tStatus\tLabel\n\
                    123\t0\tcom.apple.one\n\
                    garbage line without tabs\n\
                    456\t-9\n\
                    789\t0\tcom.apple.two\textra\n\
                    999\t0\tcom.apple.three\n";
        let processes = parse_process_list(text);

        assert_eq!(processes.len(), 2);
        assert_eq!(processes[0].label, "com.apple.one");
        assert_eq!(processes[1].label, "com.apple.three");
    }

    #[test]
    fn test_positional_field_mapping() {
        let text = "header\n-\t78\tcom.apple.backgroundtask\n";
        let processes = parse_process_list(text);

        assert_eq!(processes[0].pid, "-");
        assert_eq!(processes[0].status, "78");
        assert_eq!(processes[0].label, "com.apple.backgroundtask");
    }

    #[test]
    fn test_empty_output_yields_no_processes() {
        assert!(parse_process_list("").is_empty());
        assert!(parse_process_list("header only\n").is_empty());
    }
}
