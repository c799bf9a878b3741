//! Executable paths and immutable command descriptors

/// Closed set of executables the shell layer invokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellPath {
    Bash,
    Open,
    Xcrun,
}

impl ShellPath {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bash => "/bin/bash",
            Self::Open => "/usr/bin/open",
            Self::Xcrun => "/usr/bin/xcrun",
        }
    }
}

/// An executable plus its ordered argument list.
///
/// Immutable once built. Whether the executable actually exists is not
/// validated here; the spawn call is the source of truth for that
/// failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
    program: String,
    arguments: Vec<String>,
}

impl CommandDescriptor {
    pub fn new<I, S>(path: ShellPath, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::raw(path.as_str(), arguments)
    }

    /// Descriptor for an arbitrary program. Tests use this to point
    /// commands at stub processes instead of the native tool.
    pub fn raw<I, S>(program: impl Into<String>, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            arguments: arguments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_paths() {
        assert_eq!(ShellPath::Bash.as_str(), "/bin/bash");
        assert_eq!(ShellPath::Open.as_str(), "/usr/bin/open");
        assert_eq!(ShellPath::Xcrun.as_str(), "/usr/bin/xcrun");
    }

    #[test]
    fn test_descriptor_preserves_argument_order() {
        let descriptor =
            CommandDescriptor::new(ShellPath::Xcrun, ["simctl", "shutdown", "ABC-123"]);

        assert_eq!(descriptor.program(), "/usr/bin/xcrun");
        assert_eq!(descriptor.arguments(), ["simctl", "shutdown", "ABC-123"]);
    }

    #[test]
    fn test_raw_descriptor() {
        let descriptor = CommandDescriptor::raw("/bin/sh", ["-c", "true"]);
        assert_eq!(descriptor.program(), "/bin/sh");
        assert_eq!(descriptor.arguments(), ["-c", "true"]);
    }
}
