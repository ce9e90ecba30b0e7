use reqwest::Client;

use shasha_core::config::JikanConfig;
use shasha_core::models::{CatalogItem, DetailRecord};

use super::error::JikanError;
use super::types::{JikanDetailResponse, JikanListResponse, JikanRecord};

/// How many search hits to pull per query; the ranking half of search only
/// supplements the multi-type results.
const SEARCH_LIMIT: &str = "5";

/// Jikan v4 client. Unauthenticated; list endpoints answer with a `data`
/// array mapping into `CatalogItem`s tagged `Source::Jikan`.
pub struct JikanClient {
    base_url: String,
    http: Client,
}

impl JikanClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    pub fn from_config(config: &JikanConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    /// Check the HTTP response for errors and return the body text on failure.
    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, JikanError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status, "Jikan API error");
            Err(JikanError::Api {
                status,
                message: body,
            })
        }
    }

    async fn fetch_list(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<CatalogItem>, JikanError> {
        let resp = self
            .http
            .get(format!("{}{path}", self.base_url))
            .query(query)
            .send()
            .await?;

        let resp = Self::check_response(resp).await?;
        let body: JikanListResponse = resp
            .json()
            .await
            .map_err(|e| JikanError::Parse(e.to_string()))?;

        Ok(body.data.into_iter().filter_map(JikanRecord::into_item).collect())
    }

    /// One page of the global anime ranking.
    pub async fn top_anime(&self, page: u32) -> Result<Vec<CatalogItem>, JikanError> {
        let page = page.to_string();
        self.fetch_list("/top/anime", &[("page", page.as_str())]).await
    }

    /// Title search, capped at `SEARCH_LIMIT` hits.
    pub async fn search_anime(&self, query: &str) -> Result<Vec<CatalogItem>, JikanError> {
        self.fetch_list("/anime", &[("q", query), ("limit", SEARCH_LIMIT)])
            .await
    }

    /// Detail lookup; the single synthesized season carries the episode
    /// count.
    pub async fn anime_detail(&self, id: u64) -> Result<DetailRecord, JikanError> {
        let resp = self
            .http
            .get(format!("{}/anime/{id}", self.base_url))
            .send()
            .await?;

        let resp = Self::check_response(resp).await?;
        let body: JikanDetailResponse = resp
            .json()
            .await
            .map_err(|e| JikanError::Parse(e.to_string()))?;

        Ok(body.data.into_detail())
    }
}
