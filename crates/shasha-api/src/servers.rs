//! Playback server table and its remote override.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use shasha_core::config::ServersConfig;

/// One embed provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerEntry {
    pub name: String,
    pub url: String,
}

/// Ordered key → provider mapping. Defaults keep their shipped order;
/// remote-only keys append after them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerMap {
    entries: Vec<(String, ServerEntry)>,
}

impl ServerMap {
    pub fn get(&self, key: &str) -> Option<&ServerEntry> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, e)| e)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ServerEntry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, key: String, entry: ServerEntry) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = entry,
            None => self.entries.push((key, entry)),
        }
    }

    /// Shallow-merge a remote payload over this map: matching keys are
    /// overwritten in place, unmatched keys survive untouched, unknown
    /// remote keys are appended.
    pub fn merge_remote(&mut self, remote: BTreeMap<String, ServerEntry>) {
        for (key, entry) in remote {
            self.insert(key, entry);
        }
    }
}

/// The compiled-in embed provider table.
pub fn default_servers() -> ServerMap {
    let mut map = ServerMap::default();
    for (key, name, url) in [
        ("vidlink", "VidLink PRO", "https://vidlink.pro/embed"),
        ("vidsrc_pro", "Vidsrc PRO", "https://vidsrc.pro/embed"),
        ("vidsrc_me", "Vidsrc ME", "https://vidsrc.me/embed"),
        ("embed_su", "Embed SU", "https://embed.su/embed"),
        ("vidsrc_xyz", "Vidsrc XYZ", "https://vidsrc.xyz/embed"),
        ("vidsrc_in", "Vidsrc IN", "https://vidsrc.in/embed"),
        ("movieapi", "MovieAPI", "https://moviesapi.club/embed"),
        ("auto_embed", "AutoEmbed", "https://player.vidsrc.nl/embed"),
    ] {
        map.insert(
            key.to_string(),
            ServerEntry {
                name: name.into(),
                url: url.into(),
            },
        );
    }
    map
}

/// Fetch the remote override map and merge it over the defaults. Any
/// failure — network, non-2xx status, malformed payload — falls back to
/// the defaults unchanged. Called once per process lifetime; the result is
/// held in memory thereafter.
pub async fn load(config: &ServersConfig) -> ServerMap {
    let mut servers = default_servers();
    match fetch_remote(&config.remote_config_url).await {
        Ok(remote) => servers.merge_remote(remote),
        Err(e) => {
            tracing::warn!(error = %e, "remote server config failed, using defaults");
        }
    }
    servers
}

async fn fetch_remote(url: &str) -> Result<BTreeMap<String, ServerEntry>, reqwest::Error> {
    reqwest::Client::new()
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, url: &str) -> ServerEntry {
        ServerEntry {
            name: name.into(),
            url: url.into(),
        }
    }

    #[test]
    fn test_default_table() {
        let servers = default_servers();
        assert_eq!(servers.len(), 8);
        assert!(servers.contains("vidsrc_in"));
        assert_eq!(servers.keys().next(), Some("vidlink"));
        assert_eq!(
            servers.get("movieapi").unwrap().url,
            "https://moviesapi.club/embed"
        );
    }

    #[test]
    fn test_merge_overwrites_matches_keeps_rest_adds_unknown() {
        let mut servers = ServerMap::default();
        servers.insert("a".into(), entry("A", "x"));
        servers.insert("b".into(), entry("B", "y"));

        let remote = BTreeMap::from([
            ("b".to_string(), entry("B", "z")),
            ("c".to_string(), entry("C", "w")),
        ]);
        servers.merge_remote(remote);

        assert_eq!(servers.len(), 3);
        assert_eq!(servers.get("a").unwrap().url, "x");
        assert_eq!(servers.get("b").unwrap().url, "z");
        assert_eq!(servers.get("c").unwrap().url, "w");
    }

    #[test]
    fn test_merge_keeps_default_ordering() {
        let mut servers = default_servers();
        let remote = BTreeMap::from([
            ("vidlink".to_string(), entry("VidLink PRO", "https://mirror")),
            ("extra".to_string(), entry("Extra", "https://extra")),
        ]);
        servers.merge_remote(remote);

        // Overwritten key stays in place, unknown key lands at the end.
        assert_eq!(servers.keys().next(), Some("vidlink"));
        assert_eq!(servers.get("vidlink").unwrap().url, "https://mirror");
        assert_eq!(servers.keys().last(), Some("extra"));
    }

    #[tokio::test]
    async fn test_load_falls_back_to_defaults_when_unreachable() {
        let config = ServersConfig {
            remote_config_url: "http://127.0.0.1:1/servers".into(),
            default_server: "vidsrc_in".into(),
        };
        let servers = load(&config).await;
        assert_eq!(servers, default_servers());
    }
}
