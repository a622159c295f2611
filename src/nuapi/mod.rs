pub mod dto;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AppError;
use crate::models::{Building, Course, Instructor, Room, School, Subject, Term};

pub const DEFAULT_BASE_URL: &str = "https://api.asg.northwestern.edu";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug, Deserialize)]
pub struct NuApiConfig {
    pub key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Read-only view of the course catalog provider.
#[async_trait]
pub trait NuApiClient: Send + Sync {
    async fn terms(&self) -> Result<Vec<Term>, AppError>;
    async fn schools(&self) -> Result<Vec<School>, AppError>;
    async fn subjects(&self, term_id: i64, school: &str) -> Result<Vec<Subject>, AppError>;
    async fn courses(&self, term_id: i64, subject: &str) -> Result<Vec<Course>, AppError>;
    async fn instructors(&self, subject: &str) -> Result<Vec<Instructor>, AppError>;
    async fn buildings(&self, query: &dto::BuildingsQuery) -> Result<Vec<Building>, AppError>;
    async fn rooms(&self, building_id: i64) -> Result<Vec<Room>, AppError>;
}

pub struct NuApiHttpClient {
    client: Client,
    config: NuApiConfig,
}

impl NuApiHttpClient {
    pub fn new(config: NuApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    async fn list<T, Q>(&self, endpoint: &str, query: &Q) -> Result<Vec<T>, AppError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), endpoint);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.config.key.as_str())])
            .query(query)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<dto::ApiErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            return Err(AppError::Api {
                status: status.as_u16(),
                message,
            });
        }

        match serde_json::from_str::<Vec<T>>(&body) {
            Ok(records) => Ok(records),
            Err(parse_err) => match serde_json::from_str::<dto::ApiErrorBody>(&body) {
                Ok(api_err) => Err(AppError::Api {
                    status: status.as_u16(),
                    message: api_err.error,
                }),
                Err(_) => Err(AppError::Parse(parse_err)),
            },
        }
    }
}

#[async_trait]
impl NuApiClient for NuApiHttpClient {
    async fn terms(&self) -> Result<Vec<Term>, AppError> {
        self.list("terms", &[] as &[(&str, &str)]).await
    }

    async fn schools(&self) -> Result<Vec<School>, AppError> {
        self.list("schools", &[] as &[(&str, &str)]).await
    }

    async fn subjects(&self, term_id: i64, school: &str) -> Result<Vec<Subject>, AppError> {
        self.list("subjects", &dto::SubjectsQuery { term: term_id, school })
            .await
    }

    async fn courses(&self, term_id: i64, subject: &str) -> Result<Vec<Course>, AppError> {
        self.list("courses", &dto::CoursesQuery { term: term_id, subject })
            .await
    }

    async fn instructors(&self, subject: &str) -> Result<Vec<Instructor>, AppError> {
        self.list("instructors", &dto::InstructorsQuery { subject })
            .await
    }

    async fn buildings(&self, query: &dto::BuildingsQuery) -> Result<Vec<Building>, AppError> {
        self.list("buildings", query).await
    }

    async fn rooms(&self, building_id: i64) -> Result<Vec<Room>, AppError> {
        self.list("rooms", &dto::RoomsQuery { building: building_id })
            .await
    }
}
