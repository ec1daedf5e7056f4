use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error};

use crate::clients::HttpClient;
use crate::config::{Connection, SupabaseConfig};
use crate::error::{Error, Result};
use crate::models::{CategoryFilter, VendorListing};

pub const LISTING_COLUMNS: &str =
    "id,business_name,categories,city,state_province,country,starting_price,currency,is_verified";
pub const LISTING_ORDER: &str = "is_verified.desc,created_at.desc";

/// Error payload PostgREST sends with non-success responses.
#[derive(Debug, Deserialize)]
struct BackendError {
    message: Option<String>,
}

/// Anything that can hand back approved listings for a category selector.
#[async_trait]
pub trait VendorSource: Send + Sync {
    async fn fetch_listings(&self, filter: &CategoryFilter) -> Result<Vec<VendorListing>>;
}

/// Query parameters for the vendor table's REST endpoint.
pub fn listing_query(filter: &CategoryFilter) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("select", LISTING_COLUMNS.to_string()),
        ("is_approved", "eq.true".to_string()),
        ("order", LISTING_ORDER.to_string()),
    ];

    if let Some(operand) = filter.contains_operand() {
        params.push(("categories", operand));
    }

    params
}

pub fn table_url(connection: &Connection<'_>) -> String {
    format!("{}/rest/v1/{}", connection.base_url, connection.table)
}

/// Full request URL with percent-encoded query parameters.
pub fn listing_url(connection: &Connection<'_>, filter: &CategoryFilter) -> String {
    let query = listing_query(filter)
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{query}", table_url(connection))
}

/// Reads the vendor table through the backend's auto-generated REST API.
#[derive(Clone)]
pub struct ApiService {
    client: HttpClient,
    supabase: SupabaseConfig,
}

impl ApiService {
    pub fn new(client: HttpClient, supabase: SupabaseConfig) -> Self {
        Self { client, supabase }
    }
}

#[async_trait]
impl VendorSource for ApiService {
    async fn fetch_listings(&self, filter: &CategoryFilter) -> Result<Vec<VendorListing>> {
        let connection = self.supabase.connection()?;
        let url = listing_url(&connection, filter);

        debug!(url = url, category = %filter, "Fetching vendor listings");

        let request = self.client.get(&url, &connection);
        let response = self.client.send(request).await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&body).into_owned();
            error!(
                status = status.as_u16(),
                body = %body,
                category = %filter,
                "Vendor listing request failed"
            );
            let message = serde_json::from_str::<BackendError>(&body)
                .ok()
                .and_then(|e| e.message);
            return Err(Error::Status {
                status,
                message,
                body,
            });
        }

        serde_json::from_slice(&body).map_err(|e| {
            let body_str = String::from_utf8_lossy(&body);
            error!(
                error = %e,
                body = %body_str,
                "Failed to parse vendor listing response"
            );
            Error::from(e)
        })
    }
}
