//! Playlist parsing and artwork catalog assembly.
//!
//! The artwork endpoint serves a playlist document; each track may carry an
//! `artwork_url`. Only those links matter here - everything else in the
//! document is ignored.

use crate::{AssetSource, FetchError};
use memory_core::Asset;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Playlist document as served by the artwork endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// Tracks in playlist order
    pub tracks: Vec<Track>,
}

/// One playlist track; only the artwork link is of interest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Artwork link; tracks without artwork are skipped
    #[serde(default)]
    pub artwork_url: Option<String>,
}

impl Playlist {
    /// Parse a playlist JSON document.
    pub fn parse(json: &str) -> Result<Self, FetchError> {
        serde_json::from_str(json).map_err(|err| {
            warn!(%err, "failed to parse playlist document");
            FetchError::Parsing
        })
    }

    /// Artwork URLs in track order, skipping tracks without artwork.
    pub fn artwork_urls(&self) -> Vec<&str> {
        self.tracks
            .iter()
            .filter_map(|track| track.artwork_url.as_deref())
            .collect()
    }
}

/// Asset source backed by a parsed playlist and a payload loader.
///
/// The loader stands in for the download step: it maps an artwork URL to
/// raw image bytes, or `None` when the download failed. Assets whose
/// payloads compare equal collapse to one entry, so the same cover
/// published under several URLs yields a single card face.
pub struct PlaylistSource<L>
where
    L: FnMut(&str) -> Option<Vec<u8>>,
{
    playlist: Playlist,
    loader: L,
}

impl<L> PlaylistSource<L>
where
    L: FnMut(&str) -> Option<Vec<u8>>,
{
    pub fn new(playlist: Playlist, loader: L) -> Self {
        Self { playlist, loader }
    }
}

impl<L> AssetSource for PlaylistSource<L>
where
    L: FnMut(&str) -> Option<Vec<u8>>,
{
    fn fetch_assets(&mut self, minimum_required: usize) -> Result<Vec<Arc<Asset>>, FetchError> {
        let mut seen = HashSet::new();
        let mut catalog = Vec::new();

        for track in &self.playlist.tracks {
            let Some(url) = track.artwork_url.as_deref() else {
                continue;
            };
            let Some(image) = (self.loader)(url) else {
                debug!(url, "artwork download failed, skipping");
                continue;
            };

            let asset = Arc::new(Asset::new(url, Some(image)));
            if seen.insert(Arc::clone(&asset)) {
                catalog.push(asset);
            }
        }

        if catalog.len() < minimum_required {
            warn!(
                required = minimum_required,
                available = catalog.len(),
                "playlist yielded too little unique artwork"
            );
            return Err(FetchError::InsufficientArtwork {
                required: minimum_required,
                available: catalog.len(),
            });
        }

        Ok(catalog)
    }
}
