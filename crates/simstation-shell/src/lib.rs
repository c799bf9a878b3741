//! # simstation-shell - Native Tool Command Layer
//!
//! Typed commands over `xcrun simctl` and friends: descriptor building,
//! child process execution with deadlock-free concurrent pipe draining,
//! command composition (prerequisite and follow-up chains), and
//! per-command output parsing.
//!
//! Depends on [`simstation_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Execution
//! - [`CommandDescriptor`], [`ShellPath`] - What to launch
//! - [`run_descriptor`] - Launch and drain a child process
//! - [`ProcessOutput`] - Raw stdout plus exit status
//!
//! ### Commands
//! - [`ShellCommand`] - The command capability: descriptor, optional
//!   prerequisite/follow-up chains, output parsing, composed `run`
//! - [`Subcommand`] - Closed set of chainable sub-commands
//! - [`commands`] - One concrete command per native tool invocation
//!
//! ### Diagnostics
//! - [`ToolAvailability`] - Startup probe for the external tools
//!
//! The `test-helpers` feature exposes stub-descriptor constructors so
//! downstream tests can substitute `/bin/sh` stand-ins for the native
//! tool.

pub mod command;
pub mod commands;
pub mod descriptor;
pub mod runner;
pub mod tool_availability;

pub use command::{ShellCommand, Subcommand};
pub use descriptor::{CommandDescriptor, ShellPath};
pub use runner::{run_descriptor, ProcessOutput};
pub use tool_availability::ToolAvailability;
