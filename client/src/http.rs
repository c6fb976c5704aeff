//! [`BattleServer`] over the page's HTTP endpoints
//!
//! Every call is a form post or a GET carrying the session cookies, the
//! `X-Requested-With` marker and the CSRF token. Bodies are decoded with the
//! `pokearena_protocol` parsers.

use anyhow::{Context, Result};
use async_trait::async_trait;
use pokearena_protocol::{
    ActionRequest, EvolutionReply, InventoryItem, LearnMoveReply, MoveReplacement, TeamReply,
    TurnResult, parse_evolution_reply, parse_items_reply, parse_learn_move_reply,
    parse_team_reply, parse_turn_result,
};
use reqwest::header::{HeaderMap, HeaderValue};

use crate::config::BattleConfig;
use crate::error::ClientError;
use crate::ports::BattleServer;

const REQUESTED_WITH: &str = "x-requested-with";
const CSRF_HEADER: &str = "x-csrftoken";

pub struct HttpBattleServer {
    client: reqwest::Client,
    config: BattleConfig,
}

impl HttpBattleServer {
    pub fn new(config: BattleConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self::with_client(client, config))
    }

    /// Reuse a client, e.g. one already holding the session cookie
    pub fn with_client(client: reqwest::Client, config: BattleConfig) -> Self {
        Self { client, config }
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(REQUESTED_WITH, HeaderValue::from_static("XMLHttpRequest"));
        if let Ok(token) = HeaderValue::from_str(&self.config.csrf_token) {
            headers.insert(CSRF_HEADER, token);
        }
        headers
    }

    async fn post_form(&self, endpoint: &str, request: &ActionRequest) -> Result<String> {
        let url = self.config.url(endpoint);
        let params = request.to_form_params(&self.config.csrf_token);
        tracing::debug!(%url, action = ?request.discriminator(), "Posting battle request");

        let response = self
            .client
            .post(&url)
            .headers(self.headers())
            .form(&params)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;

        read_body(url, response).await
    }

    async fn get(&self, endpoint: &str, query: &[(&'static str, String)]) -> Result<String> {
        let url = self.config.url(endpoint);
        tracing::debug!(%url, ?query, "Loading menu content");

        let response = self
            .client
            .get(&url)
            .headers(self.headers())
            .query(query)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;

        read_body(url, response).await
    }
}

async fn read_body(url: String, response: reqwest::Response) -> Result<String> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Status {
            url,
            status: status.as_u16(),
        }
        .into());
    }

    response.text().await.map_err(|source| {
        ClientError::Transport {
            url,
            source,
        }
        .into()
    })
}

/// Attach the URL to a body that failed to parse
fn decode<T>(url: &str, body: &str, parse: fn(&str) -> Result<T>) -> Result<T> {
    parse(body).map_err(|e| {
        ClientError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

/// Query of the team endpoint
pub(crate) fn team_query(
    trainer_id: Option<u64>,
    exclude_pokemon_id: Option<u64>,
) -> Vec<(&'static str, String)> {
    let mut query = Vec::with_capacity(2);
    if let Some(trainer_id) = trainer_id {
        query.push(("trainer_id", trainer_id.to_string()));
    }
    if let Some(pokemon_id) = exclude_pokemon_id {
        query.push(("exclude_pokemon_id", pokemon_id.to_string()));
    }
    query
}

/// Query of the items endpoint
pub(crate) fn items_query(trainer_id: Option<u64>) -> Vec<(&'static str, String)> {
    trainer_id
        .map(|id| vec![("trainer_id", id.to_string())])
        .unwrap_or_default()
}

#[async_trait]
impl BattleServer for HttpBattleServer {
    async fn act(&self, request: &ActionRequest) -> Result<TurnResult> {
        let endpoint = &self.config.urls.action;
        let body = self.post_form(endpoint, request).await?;
        decode(endpoint, &body, parse_turn_result)
    }

    async fn confirm_evolution(&self, evolution_id: u64) -> Result<EvolutionReply> {
        let endpoint = &self.config.urls.action;
        let body = self
            .post_form(endpoint, &ActionRequest::ConfirmEvolution { evolution_id })
            .await?;
        decode(endpoint, &body, parse_evolution_reply)
    }

    async fn learn_move(
        &self,
        pokemon_id: u64,
        new_move_id: u64,
        replacement: MoveReplacement,
    ) -> Result<LearnMoveReply> {
        let endpoint = &self.config.urls.learn_move;
        let request = ActionRequest::LearnMove {
            pokemon_id,
            new_move_id,
            replacement,
        };
        let body = self.post_form(endpoint, &request).await?;
        decode(endpoint, &body, parse_learn_move_reply)
    }

    async fn team(&self, exclude_pokemon_id: Option<u64>) -> Result<TeamReply> {
        let endpoint = &self.config.urls.get_team;
        let query = team_query(self.config.player_trainer_id, exclude_pokemon_id);
        let body = self.get(endpoint, &query).await?;
        decode(endpoint, &body, parse_team_reply)
    }

    async fn items(&self) -> Result<Vec<InventoryItem>> {
        let endpoint = &self.config.urls.get_items;
        let body = self
            .get(endpoint, &items_query(self.config.player_trainer_id))
            .await?;
        Ok(decode(endpoint, &body, parse_items_reply)?.items)
    }
}
