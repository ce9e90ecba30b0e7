use serde::Deserialize;

use shasha_core::models::{CatalogItem, DetailRecord, MediaKind, SeasonSummary, Source};

/// Episode count assumed when the upstream has no number yet (airing shows).
const DEFAULT_EPISODES: u32 = 12;

// ── Responses ───────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct JikanListResponse {
    #[serde(default)]
    pub data: Vec<JikanRecord>,
}

#[derive(Debug, Deserialize)]
pub struct JikanDetailResponse {
    pub data: JikanRecord,
}

/// One record from a Jikan `data` array. Poster URLs are always fully
/// qualified and there is no backdrop at all.
#[derive(Debug, Deserialize)]
pub struct JikanRecord {
    pub mal_id: u64,
    pub title: Option<String>,
    pub synopsis: Option<String>,
    pub images: Option<JikanImages>,
    pub score: Option<f32>,
    pub episodes: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct JikanImages {
    pub jpg: Option<JikanImageSet>,
}

#[derive(Debug, Deserialize)]
pub struct JikanImageSet {
    pub large_image_url: Option<String>,
}

// ── Conversions ─────────────────────────────────────────────────

impl JikanRecord {
    /// Map into the normalized model; titleless records are dropped.
    pub fn into_item(self) -> Option<CatalogItem> {
        let title = self.title?;
        Some(CatalogItem {
            id: self.mal_id,
            title,
            overview: self.synopsis.unwrap_or_default(),
            poster: self
                .images
                .and_then(|i| i.jpg)
                .and_then(|jpg| jpg.large_image_url),
            backdrop: None,
            rating: self.score,
            kind: MediaKind::Anime,
            source: Source::Jikan,
            release_date: None,
            stream_url: None,
        })
    }

    /// The upstream has no season concept; synthesize a single season
    /// wrapping the episode count.
    pub fn into_detail(self) -> DetailRecord {
        DetailRecord {
            id: self.mal_id,
            seasons: vec![SeasonSummary {
                season_number: 1,
                episode_count: self.episodes.unwrap_or(DEFAULT_EPISODES),
            }],
        }
    }
}
