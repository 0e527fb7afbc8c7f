use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration form input, sent as-is to `POST /users`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewUser {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub housing_preference: Option<String>,
    /// Always sent, `null` when the caller has none
    #[serde(default)]
    pub listing_group: Option<String>,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Default::default()
        }
    }
}

/// Preferences form input
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewPreferences {
    pub max_budget: f64,
    pub min_size: f64,
    #[validate(length(min = 1))]
    pub location_area: String,
    pub rooms: u32,
}

/// Body of `POST /` on the Preferences service
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PreferencePayload {
    #[validate(length(min = 1))]
    pub user_id: String,
    pub max_budget: f64,
    pub min_size: f64,
    #[validate(length(min = 1))]
    pub location_area: String,
    pub rooms: u32,
}

impl PreferencePayload {
    pub fn new(user_id: impl Into<String>, input: NewPreferences) -> Self {
        Self {
            user_id: user_id.into(),
            max_budget: input.max_budget,
            min_size: input.min_size,
            location_area: input.location_area,
            rooms: input.rooms,
        }
    }
}
