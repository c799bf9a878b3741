//! # simstation-core - Core Domain Types
//!
//! Foundation crate for Sim Station. Provides domain models, error
//! handling, the `Loadable` async value slot, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, plist, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types
//! - [`Simulator`] - A device record with all-optional fields
//! - [`SimulatorState`] - Boot state (`Booted` / `Shutdown` only)
//! - [`OsName`] - Canonical OS grouping key parsed from raw runtime keys
//! - [`SimulatorRegistry`] - The roster, grouped and sorted by [`OsName`]
//! - [`SimulatorProcess`] - One `launchctl list` row
//! - [`BatteryState`], [`BatteryChargeState`] - Status-bar battery values
//! - [`SimulatorRuntime`], [`DeviceType`] - Catalog entries for creation
//! - [`InstalledApplication`] - A `listapps` property-list entry
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum mirroring the failure taxonomy
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use simstation_core::prelude::*;
//! ```

pub mod application;
pub mod battery;
pub mod error;
pub mod loadable;
pub mod logging;
pub mod runtime;
pub mod simulator;

/// Prelude for common imports used throughout all Sim Station crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use application::InstalledApplication;
pub use battery::{BatteryChargeState, BatteryState};
pub use error::{Error, Result, ResultExt};
pub use loadable::Loadable;
pub use runtime::{DeviceType, LastUsage, SimulatorRuntime, SimulatorRuntimesResponse};
pub use simulator::{OsName, Simulator, SimulatorProcess, SimulatorRegistry, SimulatorState};
