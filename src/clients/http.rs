use http::header::{ACCEPT, AUTHORIZATION};
use rquest::{Client, RequestBuilder, Response};
use tracing::debug;

use crate::config::Connection;
use crate::error::Result;

const API_KEY_HEADER: &str = "apikey";

/// Thin wrapper that stamps backend credentials onto every request.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    pub fn get(&self, url: &str, connection: &Connection<'_>) -> RequestBuilder {
        debug!(url = url, "Creating GET request");

        self.client
            .get(url)
            .header(API_KEY_HEADER, connection.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", connection.api_key))
            .header(ACCEPT, "application/json")
    }

    pub async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;

        debug!(
            status = response.status().as_u16(),
            url = %response.url(),
            "Response received"
        );

        Ok(response)
    }
}
