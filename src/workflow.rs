use crate::config::ServiceSettings;
use crate::core::query::listing_query;
use crate::core::view::{Section, SearchView, ViewUpdate, NO_RESULTS};
use crate::error::WorkflowError;
use crate::models::{
    ListingRecord, NewPreferences, NewUser, PreferencePayload, PreferenceRecord, UserRecord,
};
use crate::services::{ListingsService, PreferencesService, ServiceError, UsersService};
use reqwest::Client;
use validator::Validate;

/// Outcome of a preference-driven search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub preferences: PreferenceRecord,
    pub listings: Vec<ListingRecord>,
}

/// Runs the user-facing workflows against the three services
///
/// Each call is a straight sequence of awaited requests ending in a single
/// `Ok` or `Err`. Clones share the underlying connection pool, so several
/// workflows can be in flight at once.
#[derive(Debug, Clone)]
pub struct WorkflowClient {
    users: UsersService,
    preferences: PreferencesService,
    listings: ListingsService,
}

impl WorkflowClient {
    /// Create a client for the given service base URLs
    pub fn new(
        users_url: impl Into<String>,
        preferences_url: impl Into<String>,
        listings_url: impl Into<String>,
    ) -> Result<Self, ServiceError> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, users_url, preferences_url, listings_url))
    }

    /// Create a client that reuses an existing `reqwest::Client`
    pub fn with_client(
        client: Client,
        users_url: impl Into<String>,
        preferences_url: impl Into<String>,
        listings_url: impl Into<String>,
    ) -> Self {
        Self {
            users: UsersService::new(users_url, client.clone()),
            preferences: PreferencesService::new(preferences_url, client.clone()),
            listings: ListingsService::new(listings_url, client),
        }
    }

    pub fn from_settings(settings: &ServiceSettings) -> Result<Self, ServiceError> {
        Self::new(
            settings.users_url.clone(),
            settings.preferences_url.clone(),
            settings.listings_url.clone(),
        )
    }

    /// Register a user with the Users service
    pub async fn register_user(&self, input: &NewUser) -> Result<UserRecord, WorkflowError> {
        input.validate()?;

        tracing::info!("Registering user");
        tracing::debug!("Registration email: {}", input.email);

        let user = self.users.create(input).await.map_err(|e| {
            tracing::error!("Failed to register user: {}", e);
            WorkflowError::from(e)
        })?;

        tracing::info!("Registered user {}", user.id);

        Ok(user)
    }

    /// Store preferences for a previously registered user
    ///
    /// The Preferences service decides whether `user_id` is known.
    pub async fn save_preferences(
        &self,
        user_id: &str,
        input: NewPreferences,
    ) -> Result<PreferenceRecord, WorkflowError> {
        let payload = PreferencePayload::new(user_id, input);
        payload.validate()?;

        tracing::info!("Saving preferences for user {}", user_id);

        let record = self.preferences.save(&payload).await.map_err(|e| {
            tracing::error!("Failed to save preferences for {}: {}", user_id, e);
            WorkflowError::from(e)
        })?;

        tracing::info!("Saved preferences for user {}", user_id);

        Ok(record)
    }

    /// Load a user's preferences and search listings with them
    pub async fn search_listings(&self, user_id: &str) -> Result<SearchOutcome, WorkflowError> {
        if user_id.is_empty() {
            return Err(WorkflowError::Validation("user_id".to_string()));
        }

        tracing::info!("Searching listings for user {}", user_id);

        let preferences = self.preferences.fetch(user_id).await.map_err(|e| {
            tracing::warn!("Could not load preferences for {}: {}", user_id, e);
            WorkflowError::from(e)
        })?;

        let query = listing_query(&preferences);

        let listings = self.listings.search(&query).await.map_err(|e| {
            tracing::error!("Failed to fetch listings for {}: {}", user_id, e);
            WorkflowError::from(e)
        })?;

        tracing::info!(
            "Returning {} listings for user {}",
            listings.len(),
            user_id
        );

        Ok(SearchOutcome {
            preferences,
            listings,
        })
    }

    /// Registration form submit, as a view update
    pub async fn submit_user_form(&self, input: &NewUser) -> ViewUpdate {
        match self.register_user(input).await {
            Ok(user) => ViewUpdate::succeeded(
                Section::User,
                format!("User created. ID: {}", user.id),
            )
            .with_user_id(user.id),
            Err(e) => ViewUpdate::failed(Section::User, format!("Error creating user: {}", e)),
        }
    }

    /// Preferences form submit, as a view update
    pub async fn submit_preferences_form(
        &self,
        user_id: &str,
        input: NewPreferences,
    ) -> ViewUpdate {
        match self.save_preferences(user_id, input).await {
            Ok(_) => ViewUpdate::succeeded(Section::Preferences, "Preferences saved successfully"),
            Err(e) => ViewUpdate::failed(
                Section::Preferences,
                format!("Error saving preferences: {}", e),
            ),
        }
    }

    /// Search form submit, as a view update
    pub async fn submit_search_form(&self, user_id: &str) -> ViewUpdate {
        match self.search_listings(user_id).await {
            Ok(outcome) => {
                let message = if outcome.listings.is_empty() {
                    NO_RESULTS.to_string()
                } else {
                    format!("Found {} listing(s)", outcome.listings.len())
                };
                ViewUpdate::succeeded(Section::Search, message).with_results(SearchView {
                    preferences: outcome.preferences,
                    listings: outcome.listings,
                })
            }
            Err(e) => ViewUpdate::failed(Section::Search, e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_workflow_client_creation() {
        let client = WorkflowClient::new(
            "http://users.test:8000",
            "http://prefs.test:8080",
            "http://listings.test:8000",
        )
        .unwrap();

        assert_eq!(client.users.base_url(), "http://users.test:8000");
        assert_eq!(client.preferences.base_url(), "http://prefs.test:8080");
        assert_eq!(client.listings.base_url(), "http://listings.test:8000");
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_registration_logs_omit_email_at_info() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        // Nothing listens on port 1, so the failure path is logged too
        let client = WorkflowClient::new("http://127.0.0.1:1", "http://p", "http://l").unwrap();
        let result = tracing::subscriber::with_default(subscriber, || {
            tokio_test::block_on(client.register_user(&NewUser::new("Ann", "ann@private.test")))
        });
        assert!(result.is_err());

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Failed to register user"));
        assert!(!output.contains("ann@private.test"));
    }

    #[tokio::test]
    async fn test_blank_search_user_is_rejected() {
        let client = WorkflowClient::new("http://u", "http://p", "http://l").unwrap();
        let err = client.search_listings("").await.unwrap_err();
        assert_eq!(err, WorkflowError::Validation("user_id".to_string()));
    }
}
