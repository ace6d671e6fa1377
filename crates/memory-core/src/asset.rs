//! Artwork assets used as card faces and backs.
//!
//! An asset is an opaque piece of artwork: the URL it came from plus the raw
//! image payload once it has been downloaded. The engine never decodes the
//! payload. Equality and hashing compare payloads, not URLs, because the
//! same artwork is routinely published under several URLs and the supply
//! pipeline deduplicates on content.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// One piece of artwork: a source URL and, once fetched, the raw bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    /// URL the artwork was (or will be) fetched from
    pub artwork_url: String,
    /// Raw image payload; `None` until the supply pipeline has downloaded it
    pub image: Option<Vec<u8>>,
}

impl Asset {
    /// Create an asset, optionally with its payload already attached.
    pub fn new(artwork_url: impl Into<String>, image: Option<Vec<u8>>) -> Self {
        Self {
            artwork_url: artwork_url.into(),
            image,
        }
    }

    /// Payload size in bytes; 0 while the image is missing.
    pub fn image_size(&self) -> usize {
        self.image.as_ref().map_or(0, Vec::len)
    }
}

// Size check first so the common case (different images) never touches the
// payload bytes.
impl PartialEq for Asset {
    fn eq(&self, other: &Self) -> bool {
        self.image_size() == other.image_size() && self.image == other.image
    }
}

impl Eq for Asset {}

impl Hash for Asset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.image_size().hash(state);
    }
}
