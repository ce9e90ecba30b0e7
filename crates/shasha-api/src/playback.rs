//! Embed URL templating for third-party players.

use shasha_core::models::{CatalogItem, MediaKind};

use crate::servers::ServerEntry;

/// Build the playback URL for an item on the given server.
///
/// Live channels bypass the embed providers entirely: playback is the
/// channel's own HLS playlist, handed to an adaptive-bitrate video
/// element. Everything else is string-templated into the provider's
/// convention, keyed by the server key — `vidlink`, `smashy` and `multi`
/// each have their own parameter shape; all other providers share the
/// `/movie/{id}` and `/tv/{id}/{season}/{episode}` paths.
pub fn playback_url(
    key: &str,
    server: &ServerEntry,
    item: &CatalogItem,
    season: u32,
    episode: u32,
) -> Option<String> {
    if item.kind == MediaKind::LiveChannel {
        return item.stream_url.clone();
    }

    let id = item.id;
    let base = &server.url;
    let url = if item.kind.is_episodic() {
        match key {
            "smashy" => format!("{base}?tmdb={id}&s={season}&e={episode}"),
            "multi" => format!("{base}?video_id={id}&tmdb=1&s={season}&e={episode}"),
            "vidlink" => {
                format!("{base}/tv/{id}/{season}/{episode}?primaryColor=ff0000&autoplay=true")
            }
            _ => format!("{base}/tv/{id}/{season}/{episode}"),
        }
    } else {
        match key {
            "smashy" => format!("{base}?tmdb={id}"),
            "multi" => format!("{base}?video_id={id}&tmdb=1"),
            "vidlink" => format!("{base}/movie/{id}?primaryColor=ff0000&autoplay=true"),
            _ => format!("{base}/movie/{id}"),
        }
    };
    Some(url)
}
