use common::models::{
    DeleteEnvelope, Envelope, NewPlayerEnvelope, PlayerDraft, PlayerEnvelope, PlayerId,
    PlayersEnvelope,
};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::{
    config::Config,
    error::{ApiError, ApiResult},
};

/// One round trip per method against the remote player service.
///
/// Implementations return the decoded envelope of a successful response and
/// classify everything else as an [`ApiError`].
#[allow(async_fn_in_trait)]
pub trait PlayerService {
    async fn fetch_players(&self) -> ApiResult<PlayersEnvelope>;

    async fn fetch_player(&self, id: &PlayerId) -> ApiResult<PlayerEnvelope>;

    async fn add_player(&self, draft: &PlayerDraft) -> ApiResult<NewPlayerEnvelope>;

    async fn remove_player(&self, id: &PlayerId) -> ApiResult<DeleteEnvelope>;
}

#[derive(Debug, Clone)]
pub struct HttpPlayerService {
    client: Client,
    base_url: String,
}

impl HttpPlayerService {
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpPlayerService {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> ApiResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(HttpPlayerService {
            client: builder.build()?,
            base_url: config.base_url(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn players_url(&self) -> String {
        format!("{}/players", self.base_url)
    }

    fn player_url(&self, id: &PlayerId) -> String {
        format!(
            "{}/players/{}",
            self.base_url,
            urlencoding::encode(id.as_str())
        )
    }

    async fn read_envelope<T: DeserializeOwned>(response: Response) -> ApiResult<Envelope<T>> {
        let status = response.status();
        let body = response.text().await?;
        debug!(status = %status, bytes = body.len(), "player service responded");

        if !status.is_success() {
            // Error bodies are usually envelopes too, but fall back to raw text.
            let message = serde_json::from_str::<Envelope<Value>>(&body)
                .ok()
                .and_then(|envelope| envelope.error_message())
                .or_else(|| {
                    let text = body.trim();
                    (!text.is_empty()).then(|| text.to_string())
                });
            return Err(ApiError::Status { status, message });
        }

        let envelope: Envelope<T> = serde_json::from_str(&body)?;
        if !envelope.success {
            return Err(ApiError::Rejected {
                message: envelope.error_message(),
            });
        }

        Ok(envelope)
    }
}

impl PlayerService for HttpPlayerService {
    async fn fetch_players(&self) -> ApiResult<PlayersEnvelope> {
        let response = self.client.get(self.players_url()).send().await?;
        Self::read_envelope(response).await
    }

    async fn fetch_player(&self, id: &PlayerId) -> ApiResult<PlayerEnvelope> {
        let response = self.client.get(self.player_url(id)).send().await?;
        Self::read_envelope(response).await
    }

    async fn add_player(&self, draft: &PlayerDraft) -> ApiResult<NewPlayerEnvelope> {
        let response = self
            .client
            .post(self.players_url())
            .json(draft)
            .send()
            .await?;
        Self::read_envelope(response).await
    }

    async fn remove_player(&self, id: &PlayerId) -> ApiResult<DeleteEnvelope> {
        let response = self.client.delete(self.player_url(id)).send().await?;
        Self::read_envelope(response).await
    }
}
