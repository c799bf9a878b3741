//! Per-simulator installed applications

use tokio::sync::RwLock;

use crate::environment::Environment;
use simstation_core::prelude::*;
use simstation_core::{InstalledApplication, Loadable};
use simstation_shell::ShellCommand;

/// Non-system applications installed on one simulator, plus shortcuts
/// into their on-disk containers.
pub struct InstalledApplicationsStore {
    id: String,
    applications: RwLock<Loadable<Vec<InstalledApplication>>>,
    env: Environment,
}

impl InstalledApplicationsStore {
    pub fn new(id: impl Into<String>, env: Environment) -> Self {
        Self {
            id: id.into(),
            applications: RwLock::new(Loadable::Idle),
            env,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub async fn retrieve(&self) {
        *self.applications.write().await = Loadable::Loading;
        let result = (self.env.fetch_applications)(&self.id).run().await;
        *self.applications.write().await = Loadable::from_result(result);
    }

    /// Reveal the application's data container. A missing container is
    /// a quiet no-op; not every app has one.
    pub async fn open_data_folder(&self, application: &InstalledApplication) -> Result<()> {
        let Some(container) = &application.data_container else {
            return Ok(());
        };
        (self.env.open_path)(container).run().await
    }

    /// Reveal the application's preferences plist inside its container.
    pub async fn open_user_defaults(&self, application: &InstalledApplication) -> Result<()> {
        let Some(container) = &application.data_container else {
            return Ok(());
        };
        let path = format!(
            "{}/Library/Preferences/{}.plist",
            container.trim_end_matches('/'),
            application.identifier
        );
        (self.env.open_path)(&path).run().await
    }

    pub async fn applications(&self) -> Loadable<Vec<InstalledApplication>> {
        self.applications.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simstation_shell::commands::OpenPathCommand;
    use simstation_shell::{CommandDescriptor, ShellPath};
    use std::sync::{Arc, Mutex};

    fn sample_app(data_container: Option<&str>) -> InstalledApplication {
        InstalledApplication {
            application_type: "User".to_string(),
            bundle: "file:///bundles/com.example.app/".to_string(),
            display_name: "Example".to_string(),
            executable: "Example".to_string(),
            identifier: "com.example.app".to_string(),
            bundle_name: "Example".to_string(),
            version: "1".to_string(),
            data_container: data_container.map(str::to_string),
            path: "/containers/com.example.app".to_string(),
            group_containers: None,
            sb_app_tags: None,
        }
    }

    /// Environment whose open-path factory records the requested path
    /// and runs a stub.
    fn recording_environment(opened: Arc<Mutex<Vec<String>>>) -> Environment {
        Environment {
            open_path: Arc::new(move |path: &str| {
                opened.lock().unwrap().push(path.to_string());
                OpenPathCommand::with_descriptor(CommandDescriptor::new(
                    ShellPath::Bash,
                    ["-c", "true"],
                ))
            }),
            ..Environment::live()
        }
    }

    #[tokio::test]
    async fn test_open_data_folder_without_container_is_a_no_op() {
        let opened = Arc::new(Mutex::new(Vec::new()));
        let store = InstalledApplicationsStore::new(
            "TEST-1",
            recording_environment(Arc::clone(&opened)),
        );

        store.open_data_folder(&sample_app(None)).await.unwrap();

        assert!(opened.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_open_user_defaults_builds_preferences_path() {
        let opened = Arc::new(Mutex::new(Vec::new()));
        let store = InstalledApplicationsStore::new(
            "TEST-1",
            recording_environment(Arc::clone(&opened)),
        );

        store
            .open_user_defaults(&sample_app(Some("/containers/data/")))
            .await
            .unwrap();

        assert_eq!(
            opened.lock().unwrap().as_slice(),
            ["/containers/data/Library/Preferences/com.example.app.plist"]
        );
    }

    #[tokio::test]
    async fn test_open_data_folder_opens_the_container() {
        let opened = Arc::new(Mutex::new(Vec::new()));
        let store = InstalledApplicationsStore::new(
            "TEST-1",
            recording_environment(Arc::clone(&opened)),
        );

        store
            .open_data_folder(&sample_app(Some("/containers/data")))
            .await
            .unwrap();

        assert_eq!(opened.lock().unwrap().as_slice(), ["/containers/data"]);
    }
}
