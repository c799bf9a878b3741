//! # simstation-app - Stores and State Orchestration
//!
//! UI-facing stores over the command layer. Each store mutates its
//! state only after the underlying command's asynchronous result is
//! known; a failure never leaves the in-memory model out of sync with
//! what the native tool actually did.
//!
//! Depends on [`simstation_core`] for domain types and
//! [`simstation_shell`] for command execution.
//!
//! ## Public API
//!
//! - [`SimulatorStore`] - Owns the device registry (single writer);
//!   `retrieve` / `set_state` / `delete` plus creation watching
//! - [`CreateSimulatorStore`] - Guarded create flow with broadcast
//! - [`BatteryStatusStore`] - Battery retrieve/override per simulator
//! - [`ActiveProcessesStore`] - Process listing per simulator
//! - [`InstalledApplicationsStore`] - App listing and container reveals
//! - [`Environment`] - Injected command factories
//! - [`StationBroadcast`], [`StationMessage`] - The app-level event bus
//! - [`Settings`] - TOML settings from the platform config directory

pub mod applications_store;
pub mod battery_store;
pub mod broadcast;
pub mod create_store;
pub mod environment;
pub mod processes_store;
pub mod settings;
pub mod simulator_store;

pub use applications_store::InstalledApplicationsStore;
pub use battery_store::BatteryStatusStore;
pub use broadcast::{StationBroadcast, StationMessage};
pub use create_store::{CreateSimulatorStore, Selection};
pub use environment::Environment;
pub use processes_store::ActiveProcessesStore;
pub use settings::Settings;
pub use simulator_store::SimulatorStore;
