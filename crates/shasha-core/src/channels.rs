//! Compiled-in live channel table.

use crate::models::{CatalogItem, MediaKind, Source};

/// A built-in live channel definition. Posters and stream URLs are fully
/// qualified; nothing here needs base-URL composition.
pub struct LiveChannel {
    pub id: u64,
    pub name: &'static str,
    pub logo: &'static str,
    pub poster: &'static str,
    pub stream_url: &'static str,
}

pub const LIVE_CHANNELS: &[LiveChannel] = &[
    LiveChannel {
        id: 1,
        name: "beIN Sports 1 HD",
        logo: "https://upload.wikimedia.org/wikipedia/commons/b/bc/BeIN_Sports_1_logo.svg",
        poster: "https://images.unsplash.com/photo-1508098682722-e99c43a406b2?auto=format&fit=crop&q=80&w=800",
        stream_url: "https://live.p7.itv-app.com/bein1/index.m3u8",
    },
    LiveChannel {
        id: 2,
        name: "beIN Sports 2 HD",
        logo: "https://upload.wikimedia.org/wikipedia/commons/1/1e/BeIN_Sports_2_logo.svg",
        poster: "https://images.unsplash.com/photo-1540747913346-19e3ad643121?auto=format&fit=crop&q=80&w=800",
        stream_url: "https://live.p7.itv-app.com/bein2/index.m3u8",
    },
    LiveChannel {
        id: 3,
        name: "beIN Sports 3 HD",
        logo: "https://upload.wikimedia.org/wikipedia/commons/8/8e/BeIN_Sports_3_logo.svg",
        poster: "https://images.unsplash.com/photo-1574629810360-7efbbe195018?auto=format&fit=crop&q=80&w=800",
        stream_url: "https://live.p7.itv-app.com/bein3/index.m3u8",
    },
    LiveChannel {
        id: 4,
        name: "beIN Sports 4 HD",
        logo: "https://upload.wikimedia.org/wikipedia/commons/1/1d/BeIN_Sports_4_logo.svg",
        poster: "https://images.unsplash.com/photo-1579952363873-27f3bade9f55?auto=format&fit=crop&q=80&w=800",
        stream_url: "https://live.p7.itv-app.com/bein4/index.m3u8",
    },
];

impl LiveChannel {
    pub fn to_item(&self) -> CatalogItem {
        CatalogItem {
            id: self.id,
            title: self.name.to_string(),
            overview: String::new(),
            poster: Some(self.poster.to_string()),
            backdrop: None,
            rating: None,
            kind: MediaKind::LiveChannel,
            source: Source::Builtin,
            release_date: None,
            stream_url: Some(self.stream_url.to_string()),
        }
    }
}

/// All built-in channels as catalog items.
pub fn channel_items() -> Vec<CatalogItem> {
    LIVE_CHANNELS.iter().map(LiveChannel::to_item).collect()
}
