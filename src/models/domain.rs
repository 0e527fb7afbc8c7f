use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Registered user, owned by the Users service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Server-assigned opaque identifier
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub housing_preference: Option<String>,
    #[serde(default)]
    pub listing_group: Option<String>,
}

/// Search preferences stored by the Preferences service for one user
///
/// The service may omit fields it does not know, so everything but the
/// owner id is optional on the way in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub max_budget: Option<f64>,
    #[serde(default)]
    pub min_size: Option<f64>,
    #[serde(default)]
    pub location_area: Option<String>,
    #[serde(default, deserialize_with = "integral_count")]
    pub rooms: Option<u32>,
}

/// Postal location of a listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

/// Apartment listing returned by the Listings service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    /// String or numeric on the wire, kept as text
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    pub monthly_rent: f64,
    #[serde(default, deserialize_with = "integral_count")]
    pub num_bedrooms: Option<u32>,
}

/// Filter sent to the Listings service
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingQuery {
    pub max_rent: Option<f64>,
    pub city: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "expected a string or number id, got {}",
            other
        ))),
    }
}

/// Counts may arrive as `2` or `2.0`
fn integral_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<f64>::deserialize(deserializer)? else {
        return Ok(None);
    };

    if value.fract() != 0.0 || value < 0.0 || value > u32::MAX as f64 {
        return Err(de::Error::custom(format!("expected a whole count, got {}", value)));
    }

    Ok(Some(value as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_listing_id() {
        let listing: ListingRecord =
            serde_json::from_str(r#"{"id":7,"monthly_rent":1500,"num_bedrooms":1}"#).unwrap();
        assert_eq!(listing.id, "7");
        assert_eq!(listing.num_bedrooms, Some(1));
    }

    #[test]
    fn test_integral_float_counts() {
        let prefs: PreferenceRecord =
            serde_json::from_str(r#"{"user_id":"u1","rooms":2.0}"#).unwrap();
        assert_eq!(prefs.rooms, Some(2));

        let listing: ListingRecord =
            serde_json::from_str(r#"{"id":"a1","monthly_rent":900,"num_bedrooms":3.0}"#).unwrap();
        assert_eq!(listing.num_bedrooms, Some(3));
    }

    #[test]
    fn test_null_and_missing_counts() {
        let prefs: PreferenceRecord =
            serde_json::from_str(r#"{"user_id":"u1","rooms":null}"#).unwrap();
        assert_eq!(prefs.rooms, None);

        let prefs: PreferenceRecord = serde_json::from_str(r#"{"user_id":"u1"}"#).unwrap();
        assert_eq!(prefs.rooms, None);
    }

    #[test]
    fn test_fractional_count_is_rejected() {
        let result = serde_json::from_str::<PreferenceRecord>(r#"{"user_id":"u1","rooms":2.5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_object_id_is_rejected() {
        let result =
            serde_json::from_str::<ListingRecord>(r#"{"id":{"oid":1},"monthly_rent":900}"#);
        assert!(result.is_err());
    }
}
