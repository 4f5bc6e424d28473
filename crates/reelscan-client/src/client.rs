//! The device API client.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::{Response, StatusCode};
use url::Url;

use reelscan_models::{
    FilmData, FilmFormat, NormalizedPoint, PerforationLocation, ProjectId, ProjectPathEntry,
    ScanArea,
};

use crate::error::{ClientError, ClientResult, DetectError};

/// Nonstandard status the device uses for a perforation-detection miss.
const STATUS_DETECTION_FAILED: u16 = 420;

/// Typed client for the ReelScan device setup API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct SetupClient {
    http: reqwest::Client,
    base_url: Url,
}

impl SetupClient {
    /// Create a client for the device at `base_url` (e.g.
    /// `http://reelscan:8080/`).
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            http,
            base_url: Url::parse(base_url)?,
        })
    }

    fn url(&self, path: &str) -> ClientResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Turn a non-success response into an API error.
    async fn check(response: Response) -> ClientResult<Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(ClientError::from_response(response).await)
        }
    }

    /// Map a 404 to `None`; the device answers 404 for values that are not
    /// set yet (perforation location, scan area).
    fn optional<T>(result: ClientResult<T>) -> ClientResult<Option<T>> {
        match result {
            Ok(v) => Ok(Some(v)),
            Err(err) if err.status() == Some(StatusCode::NOT_FOUND) => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.http.get(self.url(path)?).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    // Project management

    /// Id → name map of all projects stored on the device.
    pub async fn all_projects(&self) -> ClientResult<HashMap<ProjectId, String>> {
        self.get_json("/api/projects/all").await
    }

    /// Name of the currently loaded project.
    pub async fn project_name(&self) -> ClientResult<String> {
        self.get_json("/api/project/name").await
    }

    /// Rename the current project. The device rejects empty names (400) and
    /// names already taken by another project (409).
    pub async fn set_project_name(&self, name: &str) -> ClientResult<String> {
        let response = self
            .http
            .put(self.url("/api/project/name")?)
            .query(&[("name", name)])
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// Numeric id of the currently loaded project.
    pub async fn project_id(&self) -> ClientResult<ProjectId> {
        self.get_json("/api/project/id").await
    }

    /// All storage-path entries of the current project.
    pub async fn all_paths(&self) -> ClientResult<HashMap<String, ProjectPathEntry>> {
        self.get_json("/api/project/allpaths").await
    }

    /// Upsert one storage-path entry.
    pub async fn set_path(&self, entry: &ProjectPathEntry) -> ClientResult<ProjectPathEntry> {
        let response = self
            .http
            .put(self.url("/api/project/path")?)
            .json(entry)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    // Film metadata

    /// The device's built-in film format catalogue.
    pub async fn film_formats(&self) -> ClientResult<Vec<FilmFormat>> {
        self.get_json("/api/filmformats").await
    }

    pub async fn film_data(&self) -> ClientResult<FilmData> {
        self.get_json("/api/project/filmdata").await
    }

    pub async fn set_film_data(&self, data: &FilmData) -> ClientResult<FilmData> {
        let response = self
            .http
            .put(self.url("/api/project/filmdata")?)
            .json(data)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    // Perforation & scan area

    /// The stored perforation location, or `None` when detection has not
    /// run yet.
    pub async fn perf_location(&self) -> ClientResult<Option<PerforationLocation>> {
        Self::optional(self.get_json("/api/project/perf/location").await)
    }

    /// Store a perforation location. The device derives a fresh default
    /// scan area from it.
    pub async fn set_perf_location(&self, location: &PerforationLocation) -> ClientResult<()> {
        let response = self
            .http
            .put(self.url("/api/project/perf/location")?)
            .json(location)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Ask the device to detect the perforation hole.
    ///
    /// `NormalizedPoint::AUTO_DETECT` requests a full automatic search; any
    /// other in-bounds point seeds the search near that location. A miss
    /// surfaces as [`DetectError::NotDetected`] with the echoed seed.
    pub async fn detect_perforation(
        &self,
        seed: NormalizedPoint,
    ) -> Result<PerforationLocation, DetectError> {
        let response = self
            .http
            .post(self.url("/api/project/perf/detect")?)
            .json(&seed)
            .send()
            .await
            .map_err(ClientError::from)?;

        match Self::check(response).await {
            Ok(response) => Ok(response.json().await.map_err(ClientError::from)?),
            Err(ClientError::Api { status, body, .. })
                if status.as_u16() == STATUS_DETECTION_FAILED =>
            {
                // the device echoes the seed point in the failure body
                let seed = serde_json::from_value(body).unwrap_or(seed);
                Err(DetectError::NotDetected { seed })
            }
            Err(err) => Err(err.into()),
        }
    }

    /// The stored scan area, or `None` when no perforation is set.
    pub async fn scan_area(&self) -> ClientResult<Option<ScanArea>> {
        Self::optional(self.get_json("/api/project/scanarea").await)
    }

    pub async fn set_scan_area(&self, scan_area: &ScanArea) -> ClientResult<()> {
        let response = self
            .http
            .put(self.url("/api/project/scanarea")?)
            .json(scan_area)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    // Camera

    /// Fetch the current preview frame as PNG bytes.
    pub async fn preview_frame(&self) -> ClientResult<Vec<u8>> {
        let response = self.http.get(self.url("/api/camera/preview")?).send().await?;
        Ok(Self::check(response).await?.bytes().await?.to_vec())
    }
}
