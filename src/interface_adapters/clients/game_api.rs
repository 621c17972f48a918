use crate::domain::{ApiError, BossId, GameApi, PlayerAction, StateSnapshot};
use crate::interface_adapters::protocol::{
    ActionRequest, KnightNameRequest, KnightProfileDto, StateSnapshotDto,
};
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, header::CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::time::Duration;
use url::Url;

// Thin reqwest client for the boss-rush game API.
#[derive(Clone)]
pub struct GameApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl GameApiClient {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // Appends path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    // Every request carries a JSON content type, bodies or not. Set here so a
    // later `.json()` keeps it instead of adding a second header.
    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        self.http
            .request(method, self.endpoint(segments))
            .header(CONTENT_TYPE, "application/json")
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        // Keep the upstream body verbatim as the error detail.
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(parse_body(&body))
    }
}

// An empty or non-JSON success body resolves to an empty object.
pub(crate) fn parse_body(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or(Value::Object(Map::new()))
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Protocol(e.to_string()))
}

#[async_trait]
impl GameApi for GameApiClient {
    #[tracing::instrument(name = "fetch_state", skip_all)]
    async fn fetch_state(&self) -> Result<StateSnapshot, ApiError> {
        let request = self.request(Method::GET, &["api", "state"]);
        let snapshot: StateSnapshotDto = decode(self.send(request).await?)?;
        Ok(snapshot.into())
    }

    #[tracing::instrument(name = "create_knight", skip(self))]
    async fn create_knight(&self, name: &str) -> Result<String, ApiError> {
        let request = self
            .request(Method::POST, &["api", "knight"])
            .json(&KnightNameRequest { name });
        let profile: KnightProfileDto = decode(self.send(request).await?)?;
        Ok(profile.name)
    }

    #[tracing::instrument(name = "start_boss", skip(self, boss), fields(boss = %boss))]
    async fn start_boss(&self, boss: &BossId, name: &str) -> Result<(), ApiError> {
        let request = self
            .request(Method::POST, &["api", "start_boss", boss.as_str()])
            .json(&KnightNameRequest { name });
        self.send(request).await?;
        Ok(())
    }

    #[tracing::instrument(
        name = "send_action",
        skip(self, action),
        fields(action = action.as_str())
    )]
    async fn send_action(&self, action: PlayerAction) -> Result<(), ApiError> {
        let request = self
            .request(Method::POST, &["api", "action"])
            .json(&ActionRequest {
                action: action.as_str(),
            });
        self.send(request).await?;
        Ok(())
    }

    #[tracing::instrument(name = "load_knight", skip(self))]
    async fn load_knight(&self, name: &str) -> Result<String, ApiError> {
        let request = self.request(Method::GET, &["api", "load", name]);
        let profile: KnightProfileDto = decode(self.send(request).await?)?;
        Ok(profile.name)
    }

    #[tracing::instrument(name = "save_knight", skip(self))]
    async fn save_knight(&self, name: &str) -> Result<(), ApiError> {
        let request = self.request(Method::GET, &["api", "save", name]);
        self.send(request).await?;
        Ok(())
    }
}
