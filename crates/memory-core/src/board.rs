//! Board construction.
//!
//! Builds the paired deck for one game: pick `board_size / 2` assets, lay
//! each one down twice, then shuffle the deck so pairs are not adjacent.

use crate::asset::Asset;
use crate::card::{Card, PairId};
use crate::game::GameError;
use rand::seq::SliceRandom;
use std::sync::Arc;

/// Build a game board from the supplied artwork.
///
/// Fails with [`GameError::InsufficientAssets`] when fewer than
/// `board_size / 2` assets are available and with
/// [`GameError::InvalidBoardSize`] when `board_size` is zero or odd.
///
/// When `shuffle` is set, a copy of the asset list is permuted before the
/// first `board_size / 2` entries are taken (with more assets than cards
/// this varies the artwork from game to game), and the finished deck is
/// permuted independently so paired cards land apart. Both permutations use
/// [`SliceRandom::shuffle`], which is an unbiased Fisher-Yates. The caller's
/// asset list is never reordered.
pub fn build_board(
    assets: &[Arc<Asset>],
    board_size: usize,
    card_back: &Arc<Asset>,
    shuffle: bool,
) -> Result<Vec<Card>, GameError> {
    if board_size == 0 || board_size % 2 != 0 {
        return Err(GameError::InvalidBoardSize { size: board_size });
    }

    let pairs = board_size / 2;
    if assets.len() < pairs {
        return Err(GameError::InsufficientAssets {
            required: pairs,
            available: assets.len(),
        });
    }

    let mut pool = assets.to_vec();
    if shuffle {
        pool.shuffle(&mut rand::thread_rng());
    }

    let mut board = Vec::with_capacity(board_size);
    for index in 0..board_size {
        let pair = index % pairs;
        board.push(Card::new(
            Arc::clone(&pool[pair]),
            Arc::clone(card_back),
            PairId(pair as u32),
        ));
    }

    if shuffle {
        board.shuffle(&mut rand::thread_rng());
    }

    Ok(board)
}
