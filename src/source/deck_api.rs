//! Client for the deck-of-cards web service.
//!
//! The service keeps the shuffled shoe on its side. Opening a session returns
//! a deck id; every draw names that id and reports what is left.

use core::time::Duration;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use reqwest::blocking::Client as HttpClient;
use serde::Deserialize;

use crate::card::Card;
use crate::error::SourceError;

use super::{CardSource, Draw};

/// Public endpoint of the deck-of-cards service.
pub const DEFAULT_BASE_URL: &str = "https://deckofcardsapi.com/api/deck";

/// Timeout for connections and requests.
const TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct ShuffleResponse {
    success: bool,
    #[serde(default)]
    deck_id: String,
    #[serde(default)]
    remaining: usize,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DrawResponse {
    success: bool,
    #[serde(default)]
    cards: Vec<CardPayload>,
    #[serde(default)]
    remaining: usize,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CardPayload {
    code: String,
}

fn transport(err: impl ToString) -> SourceError {
    SourceError::Transport(err.to_string())
}

fn rejected(error: Option<String>) -> SourceError {
    SourceError::Rejected {
        message: error.unwrap_or_else(|| "internal API server error".to_string()),
    }
}

fn decode_shuffle(body: &str) -> Result<(String, usize), SourceError> {
    let response: ShuffleResponse = serde_json::from_str(body).map_err(transport)?;
    if !response.success {
        return Err(rejected(response.error));
    }
    Ok((response.deck_id, response.remaining))
}

fn decode_draw(body: &str) -> Result<Draw, SourceError> {
    let response: DrawResponse = serde_json::from_str(body).map_err(transport)?;
    if !response.success {
        return Err(rejected(response.error));
    }

    let cards = response
        .cards
        .iter()
        .map(|card| card.code.parse::<Card>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Draw {
        cards,
        remaining: response.remaining,
    })
}

/// A card source backed by the deck-of-cards web service.
#[derive(Debug, Clone)]
pub struct DeckApi {
    base_url: String,
    http_client: HttpClient,
    deck_id: String,
    remaining: usize,
}

impl DeckApi {
    /// Opens a freshly shuffled shoe of `decks` decks on the public service.
    ///
    /// # Errors
    ///
    /// Returns an error if the service cannot be reached or refuses the request.
    pub fn shuffle(decks: u8) -> Result<Self, SourceError> {
        Self::shuffle_at(DEFAULT_BASE_URL, decks)
    }

    /// Opens a freshly shuffled shoe on the service rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built, the service cannot
    /// be reached, or it refuses the request.
    pub fn shuffle_at(base_url: impl Into<String>, decks: u8) -> Result<Self, SourceError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http_client = HttpClient::builder()
            .timeout(TIMEOUT)
            .build()
            .map_err(transport)?;

        let url = format!("{base_url}/new/shuffle/?deck_count={decks}");
        let body = get_body(&http_client, &url)?;
        let (deck_id, remaining) = decode_shuffle(&body)?;
        log::debug!("opened deck {deck_id} with {remaining} cards");

        Ok(Self {
            base_url,
            http_client,
            deck_id,
            remaining,
        })
    }

    /// Returns the session id the service assigned to this shoe.
    #[must_use]
    pub fn deck_id(&self) -> &str {
        &self.deck_id
    }
}

fn get_body(http_client: &HttpClient, url: &str) -> Result<String, SourceError> {
    log::debug!("GET {url}");
    let response = http_client.get(url).send().map_err(transport)?;

    let status = response.status();
    if !status.is_success() {
        let message = response.text().unwrap_or_default();
        return Err(SourceError::Unavailable {
            status: status.as_u16(),
            message,
        });
    }

    response.text().map_err(transport)
}

impl CardSource for DeckApi {
    fn remaining(&self) -> usize {
        self.remaining
    }

    fn draw(&mut self, count: usize) -> Result<Draw, SourceError> {
        let url = format!("{}/{}/draw/?count={count}", self.base_url, self.deck_id);
        let body = get_body(&self.http_client, &url)?;
        let draw = decode_draw(&body)?;
        self.remaining = draw.remaining;
        Ok(draw)
    }
}
