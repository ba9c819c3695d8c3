// API client module: a small blocking HTTP client for the users endpoint.
// One request is in flight at a time; the caller decides what counts as
// success, so the client only reports the raw status and body.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::time::Duration;

use crate::users::UserRecord;

/// Holds a reqwest blocking client and the URL records are posted to.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    url: String,
}

/// Status and body text returned by the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiClient {
    /// Build a client for `url`. Requests never time out.
    pub fn new(url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            url: url.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// POST one record as the JSON body. Errors are transport or
    /// serialization failures; any HTTP status is returned as a response.
    pub fn post_user(&self, user: &UserRecord) -> Result<ApiResponse, reqwest::Error> {
        let res = self.client.post(&self.url).json(user).send()?;
        let status = res.status().as_u16();
        let body = res.text().unwrap_or_else(|_| "".into());
        Ok(ApiResponse { status, body })
    }
}
