//! Per-simulator battery status and overrides

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::environment::Environment;
use simstation_core::prelude::*;
use simstation_core::{BatteryChargeState, BatteryState, Loadable};
use simstation_shell::ShellCommand;

/// Battery state for one simulator: the last retrieved value plus a
/// draft the user edits before applying an override.
pub struct BatteryStatusStore {
    id: String,
    saved: RwLock<Loadable<BatteryState>>,
    applying: RwLock<Loadable<()>>,
    draft: RwLock<BatteryState>,
    env: Environment,
}

impl BatteryStatusStore {
    pub fn new(id: impl Into<String>, env: Environment) -> Self {
        Self {
            id: id.into(),
            saved: RwLock::new(Loadable::Idle),
            applying: RwLock::new(Loadable::Idle),
            // Nothing sensible is known until the first retrieve.
            draft: RwLock::new(BatteryState::new(BatteryChargeState::Unknown, -1)),
            env,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Fetch the current battery state; on success the draft follows
    /// the saved value.
    pub async fn retrieve(&self) {
        *self.saved.write().await = Loadable::Loading;
        match (self.env.retrieve_battery)(&self.id).run().await {
            Ok(state) => {
                *self.saved.write().await = Loadable::Loaded(state);
                *self.draft.write().await = state;
            }
            Err(e) => {
                *self.saved.write().await = Loadable::Failed(Arc::new(e));
            }
        }
    }

    pub async fn set_level(&self, level: i64) {
        self.draft.write().await.level = level;
    }

    pub async fn set_charge_state(&self, charge_state: BatteryChargeState) {
        self.draft.write().await.charge_state = charge_state;
    }

    /// Apply the draft as an override.
    ///
    /// Guard: a level outside `[0, 100]` or an `Unknown` charge state is
    /// rejected before any process is launched; the native tool would
    /// accept it without validation.
    pub async fn apply(&self) {
        let draft = *self.draft.read().await;
        if !draft.is_valid_override() {
            return;
        }

        *self.applying.write().await = Loadable::Loading;
        match (self.env.set_battery)(&self.id, draft).run().await {
            Ok(()) => *self.applying.write().await = Loadable::Loaded(()),
            Err(e) => *self.applying.write().await = Loadable::Failed(Arc::new(e)),
        }
    }

    pub async fn saved(&self) -> Loadable<BatteryState> {
        self.saved.read().await.clone()
    }

    pub async fn applying(&self) -> Loadable<()> {
        self.applying.read().await.clone()
    }

    pub async fn draft(&self) -> BatteryState {
        *self.draft.read().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simstation_shell::commands::{RetrieveBatteryStateCommand, SetBatteryStateCommand};
    use simstation_shell::{CommandDescriptor, ShellPath};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_environment(
        invocations: Arc<AtomicUsize>,
        retrieve_stub: CommandDescriptor,
    ) -> Environment {
        Environment {
            retrieve_battery: Arc::new(move |_id: &str| {
                RetrieveBatteryStateCommand::with_descriptor(retrieve_stub.clone())
            }),
            set_battery: Arc::new(move |_id: &str, _state: BatteryState| {
                invocations.fetch_add(1, Ordering::SeqCst);
                SetBatteryStateCommand::with_descriptor(CommandDescriptor::new(
                    ShellPath::Bash,
                    ["-c", "true"],
                ))
            }),
            ..Environment::live()
        }
    }

    fn no_override_stub() -> CommandDescriptor {
        CommandDescriptor::new(
            ShellPath::Bash,
            ["-c", "printf 'Status bar overrides:\\nNone\\n'"],
        )
    }

    #[tokio::test]
    async fn test_retrieve_synthesizes_full_battery_without_override() {
        let invocations = Arc::new(AtomicUsize::new(0));
        let store = BatteryStatusStore::new(
            "TEST-1",
            counting_environment(invocations, no_override_stub()),
        );

        store.retrieve().await;

        let saved = store.saved().await;
        assert_eq!(
            saved.value(),
            Some(&BatteryState::new(BatteryChargeState::Charged, 100))
        );
        assert_eq!(store.draft().await.level, 100);
    }

    #[tokio::test]
    async fn test_apply_rejects_out_of_range_level() {
        let invocations = Arc::new(AtomicUsize::new(0));
        let store = BatteryStatusStore::new(
            "TEST-1",
            counting_environment(Arc::clone(&invocations), no_override_stub()),
        );

        store.set_charge_state(BatteryChargeState::Charging).await;
        store.set_level(150).await;
        store.apply().await;

        assert_eq!(invocations.load(Ordering::SeqCst), 0);
        assert!(store.applying().await.is_idle());
    }

    #[tokio::test]
    async fn test_apply_rejects_unknown_charge_state() {
        let invocations = Arc::new(AtomicUsize::new(0));
        let store = BatteryStatusStore::new(
            "TEST-1",
            counting_environment(Arc::clone(&invocations), no_override_stub()),
        );

        store.set_level(50).await;
        // Charge state is still Unknown from construction.
        store.apply().await;

        assert_eq!(invocations.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_apply_launches_for_valid_draft() {
        let invocations = Arc::new(AtomicUsize::new(0));
        let store = BatteryStatusStore::new(
            "TEST-1",
            counting_environment(Arc::clone(&invocations), no_override_stub()),
        );

        store.set_charge_state(BatteryChargeState::Discharging).await;
        store.set_level(25).await;
        store.apply().await;

        assert_eq!(invocations.load(Ordering::SeqCst), 1);
        assert!(store.applying().await.is_loaded());
    }

    #[tokio::test]
    async fn test_retrieve_failure_keeps_draft() {
        let invocations = Arc::new(AtomicUsize::new(0));
        let failing =
            CommandDescriptor::new(ShellPath::Bash, ["-c", "echo device not booted >&2"]);
        let store =
            BatteryStatusStore::new("TEST-1", counting_environment(invocations, failing));

        store.retrieve().await;

        assert!(store.saved().await.is_failed());
        assert_eq!(store.draft().await.charge_state, BatteryChargeState::Unknown);
    }
}
