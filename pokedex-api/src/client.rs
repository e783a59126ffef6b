use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::description::{select_description, LocalePreference};
use crate::error::PokedexError;
use crate::types::{CatalogPage, ItemRecord, ItemSummary, SpeciesRecord};
use crate::view::DetailViewModel;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Client for the PokeAPI catalog.
#[derive(Debug, Clone)]
pub struct PokedexClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for PokedexClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PokedexClient {
    /// Creates a client for the public API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client rooted at a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Builds `{base_url}/{segments...}`. Each segment is percent-encoded as a
    /// single path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, PokedexError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| PokedexError::InvalidBaseUrl(format!("{}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| PokedexError::InvalidBaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, PokedexError> {
        debug!(%url, "Sending request");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(PokedexError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        debug!(len = body.len(), "Received successful response");

        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetches the first page of the catalog.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn fetch_catalog_page(&self) -> Result<CatalogPage, PokedexError> {
        let url = self.endpoint(&["pokemon", ""])?;
        self.get_json(url.as_str()).await
    }

    /// Fetches the catalog summaries. Pagination is not followed.
    pub async fn fetch_listing(&self) -> Result<Vec<ItemSummary>, PokedexError> {
        Ok(self.fetch_catalog_page().await?.results)
    }

    /// Fetches the full record of one item by name or number.
    #[instrument(skip(self))]
    pub async fn fetch_item(&self, identifier: &str) -> Result<ItemRecord, PokedexError> {
        let identifier = identifier.trim().to_lowercase();
        if identifier.is_empty() {
            return Err(PokedexError::InvalidIdentifier(identifier));
        }
        let url = self.endpoint(&["pokemon", &identifier])?;
        self.get_json(url.as_str()).await
    }

    /// Fetches a species record from the absolute URL found in an item record.
    #[instrument(skip(self))]
    pub async fn fetch_species(&self, url: &str) -> Result<SpeciesRecord, PokedexError> {
        self.get_json(url).await
    }

    /// Resolves the detail view of an item with the default locales.
    pub async fn resolve_detail(&self, identifier: &str) -> Result<DetailViewModel, PokedexError> {
        self.resolve_detail_with(identifier, &LocalePreference::default())
            .await
    }

    /// Fetches the item, then its species, and selects the description.
    ///
    /// The species request is only made once the item request succeeded.
    #[instrument(skip(self, locales), fields(primary = %locales.primary))]
    pub async fn resolve_detail_with(
        &self,
        identifier: &str,
        locales: &LocalePreference,
    ) -> Result<DetailViewModel, PokedexError> {
        let record = self.fetch_item(identifier).await?;
        let species = self.fetch_species(&record.species.url).await?;
        let description = select_description(&species, locales);

        debug!(id = record.id, "Resolved detail");

        Ok(DetailViewModel {
            record,
            description,
        })
    }
}
