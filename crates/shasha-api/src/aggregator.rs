use shasha_core::models::{CatalogItem, Collection, DetailRecord, Language, Source};

use crate::jikan::JikanClient;
use crate::tmdb::TmdbClient;

/// Queries shorter than this never reach the network.
pub const SEARCH_MIN_CHARS: usize = 3;

/// The seven shelves of the home screen, fetched in one fan-out. Every
/// bucket is always present; a failed branch is just empty.
#[derive(Debug, Default)]
pub struct HomeBundle {
    pub trending: Vec<CatalogItem>,
    pub movies: Vec<CatalogItem>,
    pub series: Vec<CatalogItem>,
    pub anime: Vec<CatalogItem>,
    pub arabic: Vec<CatalogItem>,
    pub korean: Vec<CatalogItem>,
    pub international: Vec<CatalogItem>,
}

/// Composes the two catalog clients into unified collections.
///
/// Public operations never surface a transport error: each branch degrades
/// independently to an empty sequence (traced, not propagated), so a
/// partial upstream outage only makes shelves emptier. The flip side is
/// that "no results" and "fetch failed" are indistinguishable to callers.
pub struct Aggregator {
    tmdb: TmdbClient,
    jikan: JikanClient,
}

impl Aggregator {
    pub fn new(tmdb: TmdbClient, jikan: JikanClient) -> Self {
        Self { tmdb, jikan }
    }

    /// Fetch all seven home shelves concurrently; one dead upstream never
    /// empties the rest.
    pub async fn home_bundle(&self, lang: Language) -> HomeBundle {
        let (trending, movies, series, anime, arabic, korean, international) = tokio::join!(
            self.tmdb.trending(lang, 1),
            self.tmdb.popular_movies(lang, 1),
            self.tmdb.popular_tv(lang, 1),
            self.anime_page(lang, 1),
            self.tmdb.arabic_movies(lang, 1),
            self.tmdb.korean_movies(lang, 1),
            self.tmdb.top_rated_movies(lang, 1),
        );
        HomeBundle {
            trending: absorb("trending", trending),
            movies: absorb("movies", movies),
            series: absorb("series", series),
            anime,
            arabic: absorb("arabic", arabic),
            korean: absorb("korean", korean),
            international: absorb("international", international),
        }
    }

    /// One page of a shelf, for incremental pagination.
    pub async fn fetch_page(
        &self,
        collection: Collection,
        lang: Language,
        page: u32,
    ) -> Vec<CatalogItem> {
        match collection {
            Collection::Trending => absorb("trending", self.tmdb.trending(lang, page).await),
            Collection::Movies => absorb("movies", self.tmdb.popular_movies(lang, page).await),
            Collection::Series => absorb("series", self.tmdb.popular_tv(lang, page).await),
            Collection::Anime => self.anime_page(lang, page).await,
            Collection::Arabic => absorb("arabic", self.tmdb.arabic_movies(lang, page).await),
            Collection::Korean => absorb("korean", self.tmdb.korean_movies(lang, page).await),
            Collection::International => {
                absorb("international", self.tmdb.top_rated_movies(lang, page).await)
            }
        }
    }

    /// The anime shelf interleave: Jikan's ranking page first, TMDB's
    /// thematic discovery page after — always in that order, regardless of
    /// result counts.
    async fn anime_page(&self, lang: Language, page: u32) -> Vec<CatalogItem> {
        let (jikan, tmdb) = tokio::join!(
            self.jikan.top_anime(page),
            self.tmdb.discover_anime(lang, page),
        );
        let mut items = absorb("anime/jikan", jikan);
        items.extend(absorb("anime/tmdb", tmdb));
        items
    }

    /// Cross-source search, Jikan hits first. Queries below
    /// `SEARCH_MIN_CHARS` return empty without touching the network.
    /// There is no relevance merging across sources, and a title present in
    /// both catalogs shows up twice.
    pub async fn search(&self, query: &str, lang: Language) -> Vec<CatalogItem> {
        if query.chars().count() < SEARCH_MIN_CHARS {
            return Vec::new();
        }
        let (jikan, tmdb) = tokio::join!(
            self.jikan.search_anime(query),
            self.tmdb.search_multi(query, lang),
        );
        let mut items = absorb("search/jikan", jikan);
        items.extend(absorb("search/tmdb", tmdb));
        items
    }

    /// Detail lookup, routed strictly by the item's source tag — never by
    /// id. Lookup failures are absorbed to `None`; built-in channels have
    /// no detail to look up.
    pub async fn detail(&self, id: u64, source: Source) -> Option<DetailRecord> {
        match source {
            Source::Tmdb => match self.tmdb.tv_detail(id).await {
                Ok(detail) => Some(detail),
                Err(e) => {
                    tracing::debug!(id, error = %e, "TMDB detail lookup failed");
                    None
                }
            },
            Source::Jikan => match self.jikan.anime_detail(id).await {
                Ok(detail) => Some(detail),
                Err(e) => {
                    tracing::debug!(id, error = %e, "Jikan detail lookup failed");
                    None
                }
            },
            Source::Builtin => None,
        }
    }
}

/// Collapse a failed branch into an empty bucket, leaving only a console
/// trace behind.
fn absorb<T, E: std::fmt::Display>(bucket: &'static str, result: Result<Vec<T>, E>) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(bucket, error = %e, "catalog fetch failed, degrading to empty");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_aggregator() -> Aggregator {
        // Reserved port: connections are refused immediately.
        Aggregator::new(
            TmdbClient::new("test-key", "http://127.0.0.1:1"),
            JikanClient::new("http://127.0.0.1:1"),
        )
    }

    #[test]
    fn test_absorb_passes_results_and_swallows_errors() {
        let ok: Result<Vec<u32>, std::fmt::Error> = Ok(vec![1, 2]);
        assert_eq!(absorb("bucket", ok), vec![1, 2]);

        let err: Result<Vec<u32>, std::fmt::Error> = Err(std::fmt::Error);
        assert!(absorb("bucket", err).is_empty());
    }

    #[tokio::test]
    async fn test_short_queries_return_empty_immediately() {
        let aggregator = offline_aggregator();
        assert!(aggregator.search("", Language::En).await.is_empty());
        assert!(aggregator.search("a", Language::En).await.is_empty());
        assert!(aggregator.search("ab", Language::En).await.is_empty());
    }

    #[tokio::test]
    async fn test_builtin_source_has_no_detail() {
        let aggregator = offline_aggregator();
        assert!(aggregator.detail(1, Source::Builtin).await.is_none());
    }

    #[tokio::test]
    async fn test_home_bundle_survives_total_outage() {
        let bundle = offline_aggregator().home_bundle(Language::Ar).await;
        assert!(bundle.trending.is_empty());
        assert!(bundle.movies.is_empty());
        assert!(bundle.series.is_empty());
        assert!(bundle.anime.is_empty());
        assert!(bundle.arabic.is_empty());
        assert!(bundle.korean.is_empty());
        assert!(bundle.international.is_empty());
    }
}
