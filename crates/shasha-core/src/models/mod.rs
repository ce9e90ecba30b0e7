//! Shared data model for the catalog.

mod item;

pub use item::{CatalogItem, DetailRecord, MediaKind, SeasonSummary, Source};

use serde::{Deserialize, Serialize};

/// Interface language, doubling as the `language` query tag on catalog
/// requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ar,
    En,
}

impl Language {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::En => "en",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// The seven logical shelves the home screen is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Trending,
    Movies,
    Series,
    Anime,
    Arabic,
    Korean,
    International,
}
