//! The shell command abstraction and its composition contract

use std::future::Future;
use std::pin::Pin;

use crate::commands::{BootSimulatorCommand, OpenSimulatorCommand, ShutdownSimulatorCommand};
use crate::descriptor::CommandDescriptor;
use crate::runner::{run_descriptor, ProcessOutput};
use simstation_core::prelude::*;

/// A typed unit of work against the native tool.
///
/// A command knows how to build its descriptor, may declare ordered
/// prerequisite and follow-up sub-commands, and parses the raw process
/// output into a typed result.
pub trait ShellCommand {
    type Output;

    fn descriptor(&self) -> CommandDescriptor;

    /// Sub-commands run to completion, in order, before the primary
    /// descriptor is launched.
    fn prerequisites(&self) -> Vec<Subcommand> {
        Vec::new()
    }

    /// Sub-commands run to completion, in order, after the primary
    /// action succeeded.
    fn follow_ups(&self) -> Vec<Subcommand> {
        Vec::new()
    }

    fn parse(&self, output: ProcessOutput) -> Result<Self::Output>;

    /// Execute the full composition: prerequisites strictly in order
    /// (the first failure aborts before the primary descriptor is ever
    /// launched), then the primary descriptor, then follow-ups strictly
    /// in order. A follow-up failure propagates, but the primary
    /// action's effect stands; there is no compensating rollback.
    fn run(&self) -> impl Future<Output = Result<Self::Output>> + Send
    where
        Self: Sync,
        Self::Output: Send,
    {
        async move {
            for prerequisite in self.prerequisites() {
                prerequisite.run().await?;
            }

            let output = run_descriptor(&self.descriptor()).await?;
            let value = self.parse(output)?;

            for follow_up in self.follow_ups() {
                follow_up.run().await?;
            }

            Ok(value)
        }
    }
}

/// Closed set of sub-commands usable as prerequisites and follow-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subcommand {
    Boot(String),
    Shutdown(String),
    Open(String),
    /// An arbitrary descriptor, for exercising composition with stub
    /// processes.
    #[cfg(any(test, feature = "test-helpers"))]
    Raw(CommandDescriptor),
}

impl Subcommand {
    /// Run the sub-command to completion.
    ///
    /// Returns a boxed future: sub-commands may themselves carry
    /// prerequisites (`Open` boots first), so the call graph recurses
    /// through `run` and needs an indirection to stay sized.
    pub fn run(&self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        match self {
            Self::Boot(id) => Box::pin(async move { BootSimulatorCommand::new(id).run().await }),
            Self::Shutdown(id) => {
                Box::pin(async move { ShutdownSimulatorCommand::new(id).run().await })
            }
            Self::Open(id) => Box::pin(async move { OpenSimulatorCommand::new(id).run().await }),
            #[cfg(any(test, feature = "test-helpers"))]
            Self::Raw(descriptor) => {
                Box::pin(async move { run_descriptor(descriptor).await.map(|_| ()) })
            }
        }
    }
}
