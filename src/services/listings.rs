use crate::core::query::to_query_params;
use crate::models::{ListingQuery, ListingRecord};
use crate::services::http::{decode, endpoint, ensure_success, ServiceError};
use reqwest::Client;

/// Client for the Listings service
#[derive(Debug, Clone)]
pub struct ListingsService {
    base_url: String,
    client: Client,
}

impl ListingsService {
    pub fn new(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search listings matching the query
    ///
    /// GET /listings?max_rent=&city=. Ordering is whatever the service returns.
    pub async fn search(&self, query: &ListingQuery) -> Result<Vec<ListingRecord>, ServiceError> {
        let url = endpoint(&self.base_url, "/listings");
        let params = to_query_params(query);

        tracing::debug!("Querying listings at {} with {:?}", url, params);

        let response = self.client.get(&url).query(&params).send().await?;
        let response = ensure_success(response).await?;
        let listings: Vec<ListingRecord> = decode(response, "listings").await?;

        tracing::debug!("Listings service returned {} results", listings.len());

        Ok(listings)
    }
}
