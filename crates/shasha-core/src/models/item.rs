use serde::{Deserialize, Serialize};

/// Originating upstream of a catalog item.
///
/// Ids are unique only within one source's namespace — the two catalogs can
/// and do collide on raw id values. Every detail or playback lookup routes
/// by this tag; nothing may infer the source from an id alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Tmdb,
    Jikan,
    /// Compiled-in live channels; plays via `stream_url`, no detail lookup.
    Builtin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Movie,
    Series,
    Anime,
    LiveChannel,
}

impl MediaKind {
    /// Whether playback is addressed by season/episode.
    pub fn is_episodic(self) -> bool {
        matches!(self, Self::Series | Self::Anime)
    }
}

/// Canonical in-memory representation of a catalog entry, regardless of
/// originating source. Items are constructed fresh on every query and never
/// mutated afterwards; identity is `(source, id)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    pub poster: Option<String>,
    pub backdrop: Option<String>,
    pub rating: Option<f32>,
    pub kind: MediaKind,
    pub source: Source,
    pub release_date: Option<String>,
    /// Direct HLS playlist URL; set only for `LiveChannel` items.
    pub stream_url: Option<String>,
}

impl CatalogItem {
    /// Identity of an item across the whole catalog.
    pub fn key(&self) -> (Source, u64) {
        (self.source, self.id)
    }

    /// Resolve the poster reference against an image base URL.
    ///
    /// TMDB hands out partial paths (`/abc.jpg`) while Jikan and the
    /// built-in channels carry fully-qualified URLs. The stored value keeps
    /// that duality; resolution happens here, at the consuming edge.
    pub fn poster_url(&self, image_base: &str) -> Option<String> {
        resolve_image(image_base, self.poster.as_deref())
    }

    /// Same duality resolution for the backdrop reference.
    pub fn backdrop_url(&self, backdrop_base: &str) -> Option<String> {
        resolve_image(backdrop_base, self.backdrop.as_deref())
    }
}

fn resolve_image(base: &str, image: Option<&str>) -> Option<String> {
    let image = image?;
    if image.starts_with("http") {
        Some(image.to_string())
    } else {
        Some(format!("{base}{image}"))
    }
}

/// Season/episode structure for an episodic title, as needed by the
/// episode picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    pub id: u64,
    pub seasons: Vec<SeasonSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonSummary {
    pub season_number: u32,
    pub episode_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(poster: Option<&str>) -> CatalogItem {
        CatalogItem {
            id: 603,
            title: "The Matrix".into(),
            overview: String::new(),
            poster: poster.map(Into::into),
            backdrop: Some("/backdrop.jpg".into()),
            rating: Some(8.2),
            kind: MediaKind::Movie,
            source: Source::Tmdb,
            release_date: Some("1999-03-30".into()),
            stream_url: None,
        }
    }

    #[test]
    fn test_partial_poster_composes_with_base() {
        let item = item(Some("/poster.jpg"));
        assert_eq!(
            item.poster_url("https://image.tmdb.org/t/p/w500").as_deref(),
            Some("https://image.tmdb.org/t/p/w500/poster.jpg")
        );
    }

    #[test]
    fn test_full_poster_url_passes_through() {
        let item = item(Some("https://cdn.myanimelist.net/images/anime/1/1.jpg"));
        assert_eq!(
            item.poster_url("https://image.tmdb.org/t/p/w500").as_deref(),
            Some("https://cdn.myanimelist.net/images/anime/1/1.jpg")
        );
    }

    #[test]
    fn test_missing_poster_stays_missing() {
        assert!(item(None).poster_url("https://base").is_none());
    }

    #[test]
    fn test_identity_is_source_and_id() {
        let tmdb = item(None);
        let mut jikan = item(None);
        jikan.source = Source::Jikan;
        assert_ne!(tmdb.key(), jikan.key());
    }

    #[test]
    fn test_serde_roundtrip() {
        let original = item(Some("/poster.jpg"));
        let json = serde_json::to_string(&original).unwrap();
        assert!(json.contains("\"source\":\"tmdb\""));
        assert!(json.contains("\"kind\":\"movie\""));

        let back: CatalogItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back.key(), original.key());
        assert_eq!(back.title, original.title);
    }

    #[test]
    fn test_episodic_kinds() {
        assert!(MediaKind::Series.is_episodic());
        assert!(MediaKind::Anime.is_episodic());
        assert!(!MediaKind::Movie.is_episodic());
        assert!(!MediaKind::LiveChannel.is_episodic());
    }
}
