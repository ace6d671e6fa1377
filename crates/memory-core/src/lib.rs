//! Memory - a card-matching game engine
//!
//! This crate provides the core game logic for Memory, including:
//! - Board construction: a shuffled deck with two cards per artwork
//! - The two-card flip protocol with timed mismatch-reversal and
//!   fast-reveal override
//! - Win detection and the elapsed-time game clock
//!
//! # Architecture
//!
//! The engine is host-agnostic. It never touches a wall clock or a render
//! surface: timers go through an injected [`Scheduler`], and every mutating
//! call returns the [`GameEvent`]s the host should react to. Any UI loop
//! that can deliver clicks and pump timers can drive it.
//!
//! # Modules
//!
//! - [`asset`]: Artwork assets used as card faces and backs
//! - [`card`]: Flippable cards and pair identity
//! - [`board`]: Deck construction and shuffling
//! - [`scheduler`]: Cooperative timer facility
//! - [`events`]: Notifications returned to the host
//! - [`game`]: The game state machine

pub mod asset;
pub mod board;
pub mod card;
pub mod events;
pub mod game;
pub mod scheduler;

// Re-export commonly used types
pub use asset::Asset;
pub use board::build_board;
pub use card::{Card, PairId};
pub use events::GameEvent;
pub use game::{GameConfig, GameEngine, GameError, GamePhase, CLOCK_TICK, MISMATCH_DELAY};
pub use scheduler::{ManualScheduler, Scheduler, TimerHandle};
