use crate::models::{PreferencePayload, PreferenceRecord};
use crate::services::http::{decode, endpoint, ensure_success, ServiceError};
use reqwest::{Client, StatusCode};

/// Client for the Preferences service
#[derive(Debug, Clone)]
pub struct PreferencesService {
    base_url: String,
    client: Client,
}

impl PreferencesService {
    pub fn new(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create or update the preferences of a user
    ///
    /// POST /
    pub async fn save(
        &self,
        payload: &PreferencePayload,
    ) -> Result<PreferenceRecord, ServiceError> {
        let url = endpoint(&self.base_url, "/");

        tracing::debug!("Saving preferences for {} at: {}", payload.user_id, url);

        let response = self.client.post(&url).json(payload).send().await?;
        let response = ensure_success(response).await?;

        decode(response, "preferences").await
    }

    /// Fetch the stored preferences of a user
    ///
    /// GET /{user_id}. A 404 or a `null` body means nothing is stored.
    pub async fn fetch(&self, user_id: &str) -> Result<PreferenceRecord, ServiceError> {
        let path = format!("/{}", urlencoding::encode(user_id));
        let url = endpoint(&self.base_url, &path);

        tracing::debug!("Fetching preferences from: {}", url);

        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ServiceError::NotFound(format!(
                "Preferences not found for user {}",
                user_id
            )));
        }

        let response = ensure_success(response).await?;
        let record: Option<PreferenceRecord> = decode(response, "preferences").await?;

        record.ok_or_else(|| {
            ServiceError::NotFound(format!("Preferences not found for user {}", user_id))
        })
    }
}
