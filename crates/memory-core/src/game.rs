//! Core game state machine.
//!
//! This module contains the [`GameEngine`], which owns the board, the
//! two-card turn-resolution state, and the elapsed-time clock. The host
//! drives it through exactly two operations, [`GameEngine::select_card`] and
//! [`GameEngine::reset`], plus [`GameEngine::timer_fired`] for delivering
//! due timers, and reacts to the [`GameEvent`]s each call returns.

use crate::asset::Asset;
use crate::board::build_board;
use crate::card::Card;
use crate::events::GameEvent;
use crate::scheduler::{Scheduler, TimerHandle};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// How long a mismatched pair stays face-up before auto-unflipping.
pub const MISMATCH_DELAY: Duration = Duration::from_millis(1100);

/// Game clock tick interval.
pub const CLOCK_TICK: Duration = Duration::from_secs(1);

/// Errors from board construction and engine configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameError {
    /// Not enough unique artwork to fill the board. Recoverable: the engine
    /// stays idle with an empty board until the next reset.
    #[error("board needs {required} assets, only {available} available")]
    InsufficientAssets { required: usize, available: usize },

    /// Board size must be even and positive
    #[error("board size must be even and positive, got {size}")]
    InvalidBoardSize { size: usize },
}

/// Where the engine is in the two-card flip protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No board: fresh engine, or the last rebuild failed
    Idle,

    /// Waiting for the first card of a turn
    AwaitingFirstFlip,

    /// One card face-up, waiting for its candidate match
    AwaitingSecondFlip {
        /// Board index of the first flipped card
        first: usize,
    },

    /// Mismatch on display, waiting out the delay or a fast-reveal click
    TurnPending {
        /// Board index of the first flipped card
        first: usize,
        /// Board index of the mismatched second card
        second: usize,
    },

    /// Every pair matched; terminal until the next reset
    Solved,
}

/// Engine configuration, fixed at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of cards on the board; must be even and positive
    pub board_size: usize,
    /// Whether a click may clear a shown mismatch early instead of waiting
    /// out the delay
    pub fast_reveal_allowed: bool,
    /// Artwork shown on every face-down card
    pub card_back: Arc<Asset>,
}

/// The memory game engine.
///
/// One logical owner drives all entry points through `&mut self`, which
/// serializes clock ticks, unflip firings, and selections by construction.
/// A multi-threaded host puts the engine behind its own lock.
#[derive(Debug)]
pub struct GameEngine<S: Scheduler> {
    config: GameConfig,
    assets: Vec<Arc<Asset>>,
    board: Vec<Card>,
    phase: GamePhase,
    seconds_elapsed: u32,
    clock_timer: Option<TimerHandle>,
    unflip_timer: Option<TimerHandle>,
    scheduler: S,
}

impl<S: Scheduler> GameEngine<S> {
    /// Create an engine over an asset supply and a timer facility.
    ///
    /// The board stays empty until the first [`reset`](Self::reset).
    pub fn new(
        config: GameConfig,
        assets: Vec<Arc<Asset>>,
        scheduler: S,
    ) -> Result<Self, GameError> {
        if config.board_size == 0 || config.board_size % 2 != 0 {
            return Err(GameError::InvalidBoardSize {
                size: config.board_size,
            });
        }

        Ok(Self {
            config,
            assets,
            board: Vec::new(),
            phase: GamePhase::Idle,
            seconds_elapsed: 0,
            clock_timer: None,
            unflip_timer: None,
            scheduler,
        })
    }

    /// The current board, in render order. Empty while idle.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// Current phase of the flip protocol.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Seconds since the first flip of the current game.
    pub fn seconds_elapsed(&self) -> u32 {
        self.seconds_elapsed
    }

    /// Engine configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Replace the asset supply used by subsequent resets.
    pub fn set_assets(&mut self, assets: Vec<Arc<Asset>>) {
        self.assets = assets;
    }

    /// Access the timer facility, e.g. to pump a [`ManualScheduler`]
    /// (`ManualScheduler::advance`) and feed the due handles back through
    /// [`timer_fired`](Self::timer_fired).
    ///
    /// [`ManualScheduler`]: crate::scheduler::ManualScheduler
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// A non-empty board with every card matched is solved.
    pub fn is_solved(&self) -> bool {
        !self.board.is_empty() && self.board.iter().all(|card| card.is_matched)
    }

    /// End the current game and rebuild the board for a new one.
    ///
    /// Both outstanding timers are cancelled before anything else, so a
    /// stale unflip can never fire against the new board. On success the
    /// clock is back at zero and the engine awaits the first flip; on
    /// [`GameError::InsufficientAssets`] the engine is left idle with an
    /// empty board and the caller decides how to surface the failure.
    pub fn reset(&mut self) -> Result<Vec<GameEvent>, GameError> {
        self.reset_board(true)
    }

    /// Reset without shuffling: the deck repeats the asset list order, so
    /// card positions are known in advance. Meant for tests and demos.
    pub fn reset_ordered(&mut self) -> Result<Vec<GameEvent>, GameError> {
        self.reset_board(false)
    }

    fn reset_board(&mut self, shuffle: bool) -> Result<Vec<GameEvent>, GameError> {
        self.cancel_clock();
        self.cancel_unflip();
        self.seconds_elapsed = 0;

        match build_board(
            &self.assets,
            self.config.board_size,
            &self.config.card_back,
            shuffle,
        ) {
            Ok(board) => {
                self.board = board;
                self.phase = GamePhase::AwaitingFirstFlip;
                Ok(vec![
                    GameEvent::BoardChanged,
                    GameEvent::ClockChanged { seconds: 0 },
                ])
            }
            Err(err) => {
                warn!(%err, "could not populate game board");
                self.board.clear();
                self.phase = GamePhase::Idle;
                Err(err)
            }
        }
    }

    /// Select (flip) the card at `index`.
    ///
    /// While a mismatch is on display the click is spent on clearing it:
    /// with fast-reveal the pending pair unflips immediately and no new card
    /// flips, without it the click does nothing until the delay fires.
    /// Out-of-range indices and cards already face-up or matched are
    /// ignored; the rendering layer is the only caller and stale clicks are
    /// routine, not errors.
    pub fn select_card(&mut self, index: usize) -> Vec<GameEvent> {
        if let GamePhase::TurnPending { first, second } = self.phase {
            if self.config.fast_reveal_allowed {
                self.cancel_unflip();
                return self.unflip(first, second);
            }
            return Vec::new();
        }

        let Some(card) = self.board.get(index) else {
            return Vec::new();
        };
        if card.is_flipped || card.is_matched {
            return Vec::new();
        }

        match self.phase {
            GamePhase::AwaitingFirstFlip => {
                self.board[index].is_flipped = true;
                if self.clock_timer.is_none() {
                    self.seconds_elapsed = 0;
                    self.clock_timer = Some(self.scheduler.schedule_repeating(CLOCK_TICK));
                }
                self.phase = GamePhase::AwaitingSecondFlip { first: index };
                vec![GameEvent::BoardChanged]
            }

            GamePhase::AwaitingSecondFlip { first } => {
                self.board[index].is_flipped = true;
                let mut events = vec![GameEvent::BoardChanged];

                let is_match = first != index && self.board[first].pair == self.board[index].pair;
                if is_match {
                    self.board[first].is_matched = true;
                    self.board[index].is_matched = true;

                    if self.is_solved() {
                        self.cancel_clock();
                        self.phase = GamePhase::Solved;
                        events.push(GameEvent::Solved {
                            total_seconds: self.seconds_elapsed,
                        });
                    } else {
                        self.phase = GamePhase::AwaitingFirstFlip;
                    }
                } else {
                    // Leave the mismatch up long enough to memorize, then
                    // auto-unflip.
                    self.phase = GamePhase::TurnPending {
                        first,
                        second: index,
                    };
                    self.unflip_timer = Some(self.scheduler.schedule_once(MISMATCH_DELAY));
                }

                events
            }

            // Idle has no cards to hit; Solved cards are all matched and
            // filtered above; TurnPending returned early.
            GamePhase::Idle | GamePhase::Solved | GamePhase::TurnPending { .. } => Vec::new(),
        }
    }

    /// Deliver a due timer.
    ///
    /// Handles the engine no longer holds are ignored, so a firing that
    /// raced a reset or a fast-reveal is harmless.
    pub fn timer_fired(&mut self, handle: TimerHandle) -> Vec<GameEvent> {
        if self.clock_timer == Some(handle) {
            self.seconds_elapsed += 1;
            return vec![GameEvent::ClockChanged {
                seconds: self.seconds_elapsed,
            }];
        }

        if self.unflip_timer == Some(handle) {
            self.unflip_timer = None;
            if let GamePhase::TurnPending { first, second } = self.phase {
                return self.unflip(first, second);
            }
        }

        Vec::new()
    }

    fn unflip(&mut self, first: usize, second: usize) -> Vec<GameEvent> {
        self.board[first].is_flipped = false;
        self.board[second].is_flipped = false;
        self.phase = GamePhase::AwaitingFirstFlip;
        vec![GameEvent::BoardChanged]
    }

    fn cancel_clock(&mut self) {
        if let Some(handle) = self.clock_timer.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn cancel_unflip(&mut self) {
        if let Some(handle) = self.unflip_timer.take() {
            self.scheduler.cancel(handle);
        }
    }
}
