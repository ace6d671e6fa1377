//! Artwork supply pipeline for the Memory game.
//!
//! Turns a playlist document into the deduplicated artwork list a game
//! board is built from: parse the document, attach downloaded image
//! payloads, collapse duplicate artwork, and check that enough unique
//! images remain. Transport stays with the host; this crate consumes bytes
//! and never opens a connection.

pub mod playlist;

use memory_core::Asset;
use std::sync::Arc;
use thiserror::Error;

pub use playlist::{Playlist, PlaylistSource, Track};

/// Failures in the artwork supply pipeline.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Could not reach the playlist or artwork endpoint. Produced by
    /// transport-owning hosts; this crate itself never connects.
    #[error("unable to connect to the artwork server")]
    Connection,

    /// Playlist document did not parse
    #[error("failed to parse playlist")]
    Parsing,

    /// Not enough unique artwork for the requested board
    #[error("insufficient unique artwork: need {required}, have {available}")]
    InsufficientArtwork { required: usize, available: usize },
}

/// Supplies the deduplicated artwork list a game is built from.
///
/// The game host calls this once before constructing an engine; the engine
/// itself only ever sees the ready list.
pub trait AssetSource {
    /// Produce at least `minimum_required` unique assets, or fail.
    fn fetch_assets(&mut self, minimum_required: usize) -> Result<Vec<Arc<Asset>>, FetchError>;
}
