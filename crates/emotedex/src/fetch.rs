use std::path::PathBuf;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::aggregate::RawEmote;
use crate::error::{EmoteError, Result};
use crate::util::{append_line, now_utc_iso};

pub const DEFAULT_BASE_URL: &str = "https://raw.communitydragon.org";

/// Icon path value the CDN publishes for entries without an icon.
pub const EMPTY_ASSETS_MARKER: &str = "/lol-game-data/assets/";

/// Asset root stripped from icon paths before tag derivation.
pub const EMOTE_ASSET_PREFIX: &str = "/lol-game-data/assets/ASSETS/Loadouts/SummonerEmotes/";

/// URL templates for the CDN, parameterized by base so tests can point the
/// pipeline at fixture endpoints.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn locale_index_url(&self) -> String {
        format!(
            "{}/json/latest/plugins/rcp-be-lol-game-data/global/",
            self.base
        )
    }

    #[must_use]
    pub fn manifest_url(&self, locale: &str) -> String {
        format!(
            "{}/latest/plugins/rcp-be-lol-game-data/global/{locale}/v1/summoner-emotes.json",
            self.base
        )
    }

    #[must_use]
    pub fn icon_url(&self, path: &str) -> String {
        format!(
            "{}/latest/plugins/rcp-be-lol-game-data/global/default/assets/loadouts/summoneremotes/{path}",
            self.base
        )
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[derive(Debug, Clone, Deserialize)]
struct DirectoryEntry {
    name: String,
}

/// Blocking CDN client. Every fetch either returns the response body of a
/// successful request or fails the whole run; a non-success status is never
/// treated as empty data.
#[derive(Debug)]
pub struct CdnClient {
    client: Client,
    endpoints: Endpoints,
    log_file: Option<PathBuf>,
}

impl CdnClient {
    pub fn new(
        endpoints: Endpoints,
        timeout_seconds: u64,
        log_file: Option<PathBuf>,
    ) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            endpoints,
            log_file,
        })
    }

    #[must_use]
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    fn get_text(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send()?;
        let status = response.status();

        if let Some(path) = &self.log_file {
            let _ = append_line(
                path,
                &format!("[{}] GET {url} status={}", now_utc_iso(), status.as_u16()),
            );
        }

        if !status.is_success() {
            return Err(EmoteError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text()?)
    }

    /// Lists the locale identifiers published under the global data root,
    /// in the order the CDN returns them.
    pub fn discover_locales(&self) -> Result<Vec<String>> {
        let url = self.endpoints.locale_index_url();
        let body = self.get_text(&url)?;
        let entries: Vec<DirectoryEntry> = serde_json::from_str(&body)
            .map_err(|error| EmoteError::shape(&url, error.to_string()))?;

        Ok(entries.into_iter().map(|entry| entry.name).collect())
    }

    /// Fetches one locale's emote manifest.
    pub fn fetch_manifest(&self, locale: &str) -> Result<Vec<RawEmote>> {
        let url = self.endpoints.manifest_url(locale);
        let body = self.get_text(&url)?;

        serde_json::from_str(&body).map_err(|error| EmoteError::shape(&url, error.to_string()))
    }
}
