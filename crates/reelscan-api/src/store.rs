//! Project state storage.
//!
//! The device owns all setup state; handlers reach it through the
//! [`ProjectStore`] trait so the HTTP layer never touches a concrete
//! backend. The in-memory implementation backs the development server and
//! the tests.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use reelscan_models::{
    resolve_path_template, FilmData, PerforationLocation, ProjectId, ProjectPathEntry, ScanArea,
};

/// Store errors surfaced to the API layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Project with name \"{0}\" already exists")]
    DuplicateName(String),
}

/// Storage seam for the current project and the project index.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Id → name map of all stored projects.
    async fn all_projects(&self) -> HashMap<ProjectId, String>;

    /// Name of the currently loaded project.
    async fn name(&self) -> String;

    /// Rename the current project; fails on a name already taken by
    /// another project.
    async fn set_name(&self, name: String) -> Result<String, StoreError>;

    /// Id of the currently loaded project.
    async fn id(&self) -> ProjectId;

    /// All storage-path entries.
    async fn all_paths(&self) -> HashMap<String, ProjectPathEntry>;

    /// Upsert one storage-path entry, re-expanding its `${var}` template.
    async fn upsert_path(&self, entry: ProjectPathEntry) -> ProjectPathEntry;

    async fn film_data(&self) -> FilmData;
    async fn set_film_data(&self, data: FilmData) -> FilmData;

    async fn perf_location(&self) -> Option<PerforationLocation>;

    /// Store a new perforation location together with the scan area derived
    /// from it, atomically: readers never see a new perforation with a
    /// stale area.
    async fn set_perforation(&self, location: PerforationLocation, scan_area: ScanArea);

    async fn scan_area(&self) -> Option<ScanArea>;
    async fn set_scan_area(&self, scan_area: ScanArea);
}

/// Mutable state of one project.
#[derive(Debug, Clone)]
pub struct ProjectState {
    pub all_projects: HashMap<ProjectId, String>,
    pub name: String,
    pub id: ProjectId,
    pub paths: HashMap<String, ProjectPathEntry>,
    pub film_data: FilmData,
    pub perf_location: Option<PerforationLocation>,
    pub scan_area: Option<ScanArea>,
}

/// In-memory [`ProjectStore`].
pub struct InMemoryProjectStore {
    inner: RwLock<ProjectState>,
}

impl InMemoryProjectStore {
    pub fn new(initial: ProjectState) -> Self {
        Self {
            inner: RwLock::new(initial),
        }
    }

    /// A populated store for the development server and tests: one loaded
    /// project with the standard path layout, no perforation detected yet.
    pub fn fixture() -> Self {
        let base = "/var/data/reelscan";
        let name = "TestProject";

        let paths = HashMap::from([
            (
                "project".to_string(),
                ProjectPathEntry {
                    name: "project".to_string(),
                    description: "General project data storage".to_string(),
                    path: "${name}".to_string(),
                    resolved: format!("{base}/{name}"),
                },
            ),
            (
                "scanned".to_string(),
                ProjectPathEntry {
                    name: "scanned".to_string(),
                    description: "Folder for raw scanned images".to_string(),
                    path: "${project}/scanned_images".to_string(),
                    resolved: format!("{base}/{name}/scanned_images"),
                },
            ),
            (
                "final".to_string(),
                ProjectPathEntry {
                    name: "final".to_string(),
                    description: "Images after processing".to_string(),
                    path: "${project}/final_images".to_string(),
                    resolved: format!("{base}/{name}/final_images"),
                },
            ),
        ]);

        let all_projects = HashMap::from([
            (ProjectId(1), "Holiday Reel".to_string()),
            (ProjectId(2), "Garden 1972".to_string()),
            (ProjectId(3), "Wedding".to_string()),
        ]);

        Self::new(ProjectState {
            all_projects,
            name: name.to_string(),
            id: ProjectId(4),
            paths,
            film_data: FilmData::default(),
            perf_location: None,
            scan_area: None,
        })
    }

    /// Template variables visible to path expansion: the project name plus
    /// every already-resolved entry.
    fn template_vars(state: &ProjectState) -> HashMap<String, String> {
        let mut vars: HashMap<String, String> = state
            .paths
            .values()
            .map(|entry| (entry.name.clone(), entry.resolved.clone()))
            .collect();
        vars.insert("name".to_string(), state.name.clone());
        vars
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn all_projects(&self) -> HashMap<ProjectId, String> {
        self.inner.read().await.all_projects.clone()
    }

    async fn name(&self) -> String {
        self.inner.read().await.name.clone()
    }

    async fn set_name(&self, name: String) -> Result<String, StoreError> {
        let mut state = self.inner.write().await;
        if state
            .all_projects
            .iter()
            .any(|(id, existing)| *existing == name && *id != state.id)
        {
            return Err(StoreError::DuplicateName(name));
        }
        state.name = name.clone();
        Ok(name)
    }

    async fn id(&self) -> ProjectId {
        self.inner.read().await.id
    }

    async fn all_paths(&self) -> HashMap<String, ProjectPathEntry> {
        self.inner.read().await.paths.clone()
    }

    async fn upsert_path(&self, mut entry: ProjectPathEntry) -> ProjectPathEntry {
        let mut state = self.inner.write().await;
        entry.resolved = resolve_path_template(&entry.path, &Self::template_vars(&state));
        state.paths.insert(entry.name.clone(), entry.clone());
        entry
    }

    async fn film_data(&self) -> FilmData {
        self.inner.read().await.film_data.clone()
    }

    async fn set_film_data(&self, data: FilmData) -> FilmData {
        let mut state = self.inner.write().await;
        state.film_data = data.clone();
        data
    }

    async fn perf_location(&self) -> Option<PerforationLocation> {
        self.inner.read().await.perf_location
    }

    async fn set_perforation(&self, location: PerforationLocation, scan_area: ScanArea) {
        let mut state = self.inner.write().await;
        state.perf_location = Some(location);
        state.scan_area = Some(scan_area);
    }

    async fn scan_area(&self) -> Option<ScanArea> {
        self.inner.read().await.scan_area
    }

    async fn set_scan_area(&self, scan_area: ScanArea) {
        self.inner.write().await.scan_area = Some(scan_area);
    }
}
