use reqwest::Client;

use shasha_core::config::TmdbConfig;
use shasha_core::models::{CatalogItem, DetailRecord, Language, MediaKind};

use super::error::TmdbError;
use super::types::{TmdbListResponse, TmdbTvDetail};

/// Keyword id marking anime titles on TMDB's discover endpoint.
const ANIME_KEYWORD: &str = "210024";

/// TMDB v3 client. Query-string authenticated; every list endpoint answers
/// with a `results` array that maps record-by-record into `CatalogItem`s
/// tagged `Source::Tmdb`.
pub struct TmdbClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl TmdbClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    pub fn from_config(config: &TmdbConfig) -> Self {
        Self::new(config.api_key.clone(), config.base_url.clone())
    }

    /// Check the HTTP response for errors and return the body text on failure.
    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, TmdbError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status, "TMDB API error");
            Err(TmdbError::Api {
                status,
                message: body,
            })
        }
    }

    /// One list request: fetch, check, map every record into the
    /// normalized model.
    async fn fetch_list(
        &self,
        path: &str,
        query: &[(&str, &str)],
        default_kind: Option<MediaKind>,
    ) -> Result<Vec<CatalogItem>, TmdbError> {
        let resp = self
            .http
            .get(format!("{}{path}", self.base_url))
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .send()
            .await?;

        let resp = Self::check_response(resp).await?;
        let body: TmdbListResponse = resp
            .json()
            .await
            .map_err(|e| TmdbError::Parse(e.to_string()))?;

        Ok(body
            .results
            .into_iter()
            .filter_map(|r| r.into_item(default_kind))
            .collect())
    }

    /// Today's trending titles across movies and tv; rows carry their own
    /// `media_type` tag.
    pub async fn trending(
        &self,
        lang: Language,
        page: u32,
    ) -> Result<Vec<CatalogItem>, TmdbError> {
        let page = page.to_string();
        self.fetch_list(
            "/trending/all/day",
            &[("language", lang.tag()), ("page", page.as_str())],
            None,
        )
        .await
    }

    pub async fn popular_movies(
        &self,
        lang: Language,
        page: u32,
    ) -> Result<Vec<CatalogItem>, TmdbError> {
        let page = page.to_string();
        self.fetch_list(
            "/movie/popular",
            &[("language", lang.tag()), ("page", page.as_str())],
            Some(MediaKind::Movie),
        )
        .await
    }

    pub async fn popular_tv(
        &self,
        lang: Language,
        page: u32,
    ) -> Result<Vec<CatalogItem>, TmdbError> {
        let page = page.to_string();
        self.fetch_list(
            "/tv/popular",
            &[("language", lang.tag()), ("page", page.as_str())],
            Some(MediaKind::Series),
        )
        .await
    }

    /// Japanese-language tv discovery restricted to the anime keyword; the
    /// TMDB half of the anime shelf.
    pub async fn discover_anime(
        &self,
        lang: Language,
        page: u32,
    ) -> Result<Vec<CatalogItem>, TmdbError> {
        let page = page.to_string();
        self.fetch_list(
            "/discover/tv",
            &[
                ("with_keywords", ANIME_KEYWORD),
                ("with_original_language", "ja"),
                ("language", lang.tag()),
                ("page", page.as_str()),
            ],
            Some(MediaKind::Anime),
        )
        .await
    }

    pub async fn arabic_movies(
        &self,
        lang: Language,
        page: u32,
    ) -> Result<Vec<CatalogItem>, TmdbError> {
        self.discover_movies("ar", lang, page).await
    }

    pub async fn korean_movies(
        &self,
        lang: Language,
        page: u32,
    ) -> Result<Vec<CatalogItem>, TmdbError> {
        self.discover_movies("ko", lang, page).await
    }

    async fn discover_movies(
        &self,
        original_language: &str,
        lang: Language,
        page: u32,
    ) -> Result<Vec<CatalogItem>, TmdbError> {
        let page = page.to_string();
        self.fetch_list(
            "/discover/movie",
            &[
                ("with_original_language", original_language),
                ("sort_by", "popularity.desc"),
                ("language", lang.tag()),
                ("page", page.as_str()),
            ],
            Some(MediaKind::Movie),
        )
        .await
    }

    pub async fn top_rated_movies(
        &self,
        lang: Language,
        page: u32,
    ) -> Result<Vec<CatalogItem>, TmdbError> {
        let page = page.to_string();
        self.fetch_list(
            "/movie/top_rated",
            &[("language", lang.tag()), ("page", page.as_str())],
            Some(MediaKind::Movie),
        )
        .await
    }

    /// Multi-type search; rows carry their own `media_type` tag and person
    /// rows are dropped in mapping.
    pub async fn search_multi(
        &self,
        query: &str,
        lang: Language,
    ) -> Result<Vec<CatalogItem>, TmdbError> {
        self.fetch_list(
            "/search/multi",
            &[("query", query), ("language", lang.tag())],
            None,
        )
        .await
    }

    /// Full season list for a tv title.
    pub async fn tv_detail(&self, id: u64) -> Result<DetailRecord, TmdbError> {
        let resp = self
            .http
            .get(format!("{}/tv/{id}", self.base_url))
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;

        let resp = Self::check_response(resp).await?;
        let detail: TmdbTvDetail = resp
            .json()
            .await
            .map_err(|e| TmdbError::Parse(e.to_string()))?;

        Ok(detail.into_detail())
    }
}
