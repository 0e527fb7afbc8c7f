use crate::models::{NewUser, UserRecord};
use crate::services::http::{decode, endpoint, ensure_success, ServiceError};
use reqwest::Client;

/// Client for the Users service
#[derive(Debug, Clone)]
pub struct UsersService {
    base_url: String,
    client: Client,
}

impl UsersService {
    pub fn new(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Register a new user
    ///
    /// POST /users
    pub async fn create(&self, user: &NewUser) -> Result<UserRecord, ServiceError> {
        let url = endpoint(&self.base_url, "/users");

        tracing::debug!("Creating user at: {}", url);

        let response = self.client.post(&url).json(user).send().await?;
        let response = ensure_success(response).await?;
        let record: UserRecord = decode(response, "user").await?;

        if record.id.is_empty() {
            return Err(ServiceError::InvalidResponse(
                "User response is missing an id".into(),
            ));
        }

        tracing::debug!("Created user {}", record.id);

        Ok(record)
    }
}
