use super::models::{Event, EventPayload, EventsListRequest, EventsResponse};
use crate::config::Config;
use crate::error::{delete_error, fetch_error, save_error, AppResult, Error};
use reqwest::{Client, Response};
use tracing::debug;
use url::Url;

/// Typed access to the events REST backend
#[derive(Debug, Clone)]
pub struct EventsClient {
    base_url: Url,
    client: Client,
}

impl EventsClient {
    /// Create a client for the backend at `base_url`
    pub fn new(base_url: &str) -> AppResult<Self> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            client: Client::new(),
        })
    }

    /// Create a client from the application config
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            base_url: Url::parse(&config.api_base_url)?,
            client,
        })
    }

    /// `GET /api/events`
    pub async fn fetch_events(&self) -> AppResult<Vec<Event>> {
        let url = self.endpoint(&["api", "events"])?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| fetch_error(&format!("Request failed: {}", e)))?;
        let response = ensure_success(response, fetch_error).await?;

        let body: EventsResponse = response
            .json()
            .await
            .map_err(|e| fetch_error(&format!("Failed to parse events response: {}", e)))?;

        Ok(body.events)
    }

    /// `POST /api/events` with the full payload as body
    pub async fn create_event(&self, payload: &EventPayload) -> AppResult<()> {
        let url = self.endpoint(&["api", "events"])?;
        debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| save_error(&format!("Request failed: {}", e)))?;
        ensure_success(response, save_error).await?;

        Ok(())
    }

    /// `PUT /api/events/{id}` with the full payload as body
    pub async fn update_event(&self, id: &str, payload: &EventPayload) -> AppResult<()> {
        let url = self.endpoint(&["api", "events", id])?;
        debug!("PUT {}", url);

        let response = self
            .client
            .put(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| save_error(&format!("Request failed: {}", e)))?;
        ensure_success(response, save_error).await?;

        Ok(())
    }

    /// `POST /api/events-list`
    pub async fn create_events(&self, events: &[EventPayload]) -> AppResult<()> {
        let url = self.endpoint(&["api", "events-list"])?;
        debug!("POST {} ({} events)", url, events.len());

        let response = self
            .client
            .post(url)
            .json(&EventsListRequest { events })
            .send()
            .await
            .map_err(|e| save_error(&format!("Request failed: {}", e)))?;
        ensure_success(response, save_error).await?;

        Ok(())
    }

    /// `DELETE /api/events/{id}`
    pub async fn delete_event(&self, id: &str) -> AppResult<()> {
        let url = self.endpoint(&["api", "events", id])?;
        debug!("DELETE {}", url);

        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(|e| delete_error(&format!("Request failed: {}", e)))?;
        ensure_success(response, delete_error).await?;

        Ok(())
    }

    /// Append path segments to the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("Base URL cannot have a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Turn any non-2xx response into an error built by `make_error`
async fn ensure_success(response: Response, make_error: fn(&str) -> Error) -> AppResult<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let error_body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response".to_string());
    Err(make_error(&format!("HTTP {} - {}", status, error_body)))
}
