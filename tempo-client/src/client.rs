use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::domain::{DataBundle, LoginResponse, Project, Task, TimeEntry, User};
use crate::mock::MockBackend;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("InvalidUrl: {0}")]
    InvalidUrl(String),
    #[error("ResponseError: {0}")]
    Response(String),
    #[error("ParsingError: {0}")]
    Parsing(String),
}

/// Client for the ProjectManager REST API.
///
/// Construct with [`ApiClient::new`] for a real server or
/// [`ApiClient::dev`] for the seeded in-memory backend. Every request
/// carries the bearer token when one is set; 401/403 responses map to
/// [`ApiError::Unauthorized`] so callers can prompt for a new login.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    token: Option<String>,
    mock: Option<MockBackend>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        Ok(Self {
            http: Client::new(),
            base_url,
            token,
            mock: None,
        })
    }

    /// Offline client backed by [`MockBackend`]; no server required.
    pub fn dev() -> Self {
        Self {
            http: Client::new(),
            base_url: Url::parse("http://localhost").expect("static url"),
            token: None,
            mock: Some(MockBackend::new()),
        }
    }

    pub fn mock_backend(&self) -> Option<&MockBackend> {
        self.mock.as_ref()
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", path, e)))
    }

    async fn request<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        call_name: &str,
    ) -> Result<T, ApiError> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        debug!(call = call_name, "sending request");
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Response(format!("{}: {}", call_name, e)))?;

        if matches!(
            response.status(),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            return Err(ApiError::Unauthorized);
        }
        if !response.status().is_success() {
            return Err(ApiError::Response(format!(
                "{} returned {}",
                call_name,
                response.status()
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parsing(format!("{}: {}", call_name, e)))
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        if let Some(mock) = &self.mock {
            return Ok(mock.login());
        }

        self.request(
            self.http
                .post(self.endpoint("/api/auth/login")?)
                .json(&LoginRequest { email, password }),
            "POST /api/auth/login",
        )
        .await
    }

    pub async fn fetch_projects(&self) -> Result<Vec<Project>, ApiError> {
        if let Some(mock) = &self.mock {
            return Ok(mock.projects());
        }
        self.request(
            self.http.get(self.endpoint("/api/projects")?),
            "GET /api/projects",
        )
        .await
    }

    pub async fn fetch_tasks(&self) -> Result<Vec<Task>, ApiError> {
        if let Some(mock) = &self.mock {
            return Ok(mock.tasks());
        }
        self.request(self.http.get(self.endpoint("/api/tasks")?), "GET /api/tasks")
            .await
    }

    pub async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        if let Some(mock) = &self.mock {
            return Ok(mock.users());
        }
        self.request(self.http.get(self.endpoint("/api/users")?), "GET /api/users")
            .await
    }

    pub async fn fetch_time_entries(&self) -> Result<Vec<TimeEntry>, ApiError> {
        if let Some(mock) = &self.mock {
            return mock.time_entries();
        }
        self.request(
            self.http.get(self.endpoint("/api/time-entry")?),
            "GET /api/time-entry",
        )
        .await
    }

    /// Persist one entry. Fire-and-forget beyond success/failure: callers
    /// refetch the bundle afterwards rather than patching from the echo.
    pub async fn create_time_entry(&self, entry: &TimeEntry) -> Result<TimeEntry, ApiError> {
        if let Some(mock) = &self.mock {
            return mock.create_time_entry(entry);
        }
        self.request(
            self.http
                .post(self.endpoint("/api/time-entry/create")?)
                .json(entry),
            "POST /api/time-entry/create",
        )
        .await
    }

    /// Reload every list the client displays, concurrently.
    pub async fn fetch_bundle(&self) -> Result<DataBundle, ApiError> {
        let (projects, tasks, users, time_entries) = tokio::try_join!(
            self.fetch_projects(),
            self.fetch_tasks(),
            self.fetch_users(),
            self.fetch_time_entries(),
        )?;
        Ok(DataBundle {
            projects,
            tasks,
            users,
            time_entries,
        })
    }
}
