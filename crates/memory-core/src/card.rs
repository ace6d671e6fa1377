//! A flippable game card.

use crate::asset::Asset;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Identity of a face asset within one board build.
///
/// Two cards match iff they carry the same pair id and sit at different
/// board positions. Matching on the id instead of the face image keeps the
/// rules correct even if two distinct assets happen to hold identical bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairId(pub u32);

/// One card on the board: a hidden face, the shared back, and flip state.
///
/// Cards are created in bulk by the board builder at each reset and mutated
/// only by the engine during turn resolution. Hosts read them for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    /// Artwork shown while the card is face-up
    pub face: Arc<Asset>,
    /// Artwork shown while face-down; shared across the whole board
    pub back: Arc<Asset>,
    /// Which pair this card belongs to
    pub pair: PairId,
    /// Whether the face is currently showing
    pub is_flipped: bool,
    /// Matched cards stay face-up for the rest of the game
    pub is_matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    pub fn new(face: Arc<Asset>, back: Arc<Asset>, pair: PairId) -> Self {
        Self {
            face,
            back,
            pair,
            is_flipped: false,
            is_matched: false,
        }
    }
}
