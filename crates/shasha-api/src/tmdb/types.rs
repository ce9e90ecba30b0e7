use serde::Deserialize;

use shasha_core::models::{CatalogItem, DetailRecord, MediaKind, SeasonSummary, Source};

// ── List responses ──────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TmdbListResponse {
    #[serde(default)]
    pub results: Vec<TmdbRecord>,
}

/// One record from a TMDB `results` array. Movie rows carry
/// `title`/`release_date`, tv rows carry `name`/`first_air_date`; only the
/// multi-type endpoints tag rows with `media_type`.
#[derive(Debug, Deserialize)]
pub struct TmdbRecord {
    pub id: u64,
    pub title: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    pub vote_average: Option<f32>,
    pub media_type: Option<String>,
}

impl TmdbRecord {
    /// Map into the normalized model. `default_kind` supplies the kind for
    /// endpoints whose rows carry no `media_type` tag. Returns `None` for
    /// rows that are not catalog entries: person results, unknown tags,
    /// untagged rows without a default, or rows with no usable title.
    pub fn into_item(self, default_kind: Option<MediaKind>) -> Option<CatalogItem> {
        let kind = match self.media_type.as_deref() {
            Some("movie") => MediaKind::Movie,
            Some("tv") => MediaKind::Series,
            Some(_) => return None,
            None => default_kind?,
        };
        let title = self.title.or(self.name)?;
        Some(CatalogItem {
            id: self.id,
            title,
            overview: self.overview,
            // Partial paths, kept raw; base composition is the consumer's.
            poster: self.poster_path,
            backdrop: self.backdrop_path,
            rating: self.vote_average,
            kind,
            source: Source::Tmdb,
            release_date: self.release_date.or(self.first_air_date),
            stream_url: None,
        })
    }
}

// ── TV detail response ──────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TmdbTvDetail {
    pub id: u64,
    #[serde(default)]
    pub seasons: Vec<TmdbSeason>,
}

#[derive(Debug, Deserialize)]
pub struct TmdbSeason {
    pub season_number: u32,
    #[serde(default)]
    pub episode_count: u32,
}

impl TmdbTvDetail {
    pub fn into_detail(self) -> DetailRecord {
        DetailRecord {
            id: self.id,
            seasons: self
                .seasons
                .into_iter()
                .map(|s| SeasonSummary {
                    season_number: s.season_number,
                    episode_count: s.episode_count,
                })
                .collect(),
        }
    }
}
