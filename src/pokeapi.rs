//! PokeAPI client: fetches one creature record per identifier.
//!
//! Two sequential GETs per identifier: the base `pokemon` record (name,
//! types, sprite), then the `pokemon-species` record for the localized
//! Japanese name.

use crate::config::Config;
use crate::lang::DisplayLanguage;
use crate::round::CreatureRecord;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("POKEAPI_BASE_URL is not set")]
    MissingBaseUrl,

    #[error("PokeAPI error ({status}) for {url}")]
    Http {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("PokeAPI request failed: {0}")]
    Network(#[source] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct PokemonResponse {
    name: String,
    types: Vec<TypeSlot>,
    sprites: Sprites,
}

#[derive(Debug, Deserialize)]
struct TypeSlot {
    #[serde(rename = "type")]
    type_: NamedResource,
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
}

#[derive(Debug, Deserialize)]
struct Sprites {
    front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SpeciesResponse {
    names: Vec<LocalizedName>,
}

#[derive(Debug, Deserialize)]
struct LocalizedName {
    language: NamedResource,
    name: String,
}

/// HTTP client for the PokeAPI, configured once at construction.
pub struct PokeClient {
    client: reqwest::Client,
    config: Config,
}

impl PokeClient {
    pub fn new(config: Config) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.http_timeout_secs))
            .build()
            .map_err(FetchError::Network)?;

        Ok(Self { client, config })
    }

    /// Fetch the full record for one creature identifier.
    ///
    /// A species record without a Japanese entry yields an empty localized
    /// name; any HTTP or network failure on either request yields an error.
    pub async fn fetch_creature(&self, id: u32) -> Result<CreatureRecord, FetchError> {
        let base = match self.config.api_base_url.as_deref() {
            Some(base) => base.trim_end_matches('/'),
            None => {
                warn!("POKEAPI_BASE_URL is not set, cannot fetch pokemon #{}", id);
                return Err(FetchError::MissingBaseUrl);
            }
        };

        let pokemon: PokemonResponse = self.get_json(&format!("{}/pokemon/{}", base, id)).await?;
        let species: SpeciesResponse = self
            .get_json(&format!("{}/pokemon-species/{}", base, id))
            .await?;

        let localized_name = species
            .names
            .into_iter()
            .find(|n| n.language.name == DisplayLanguage::Japanese.code())
            .map(|n| n.name)
            .unwrap_or_default();

        Ok(CreatureRecord {
            canonical_name: pokemon.name,
            localized_name,
            type_tags: pokemon.types.into_iter().map(|t| t.type_.name).collect(),
            image_url: pokemon.sprites.front_default,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!("request to {} failed: {}", url, e);
            FetchError::Network(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("PokeAPI error ({}) for {}", status, url);
            return Err(FetchError::Http {
                status,
                url: url.to_string(),
            });
        }

        response.json().await.map_err(|e| {
            warn!("failed to parse response from {}: {}", url, e);
            FetchError::Network(e)
        })
    }
}
