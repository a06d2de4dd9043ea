//! A Golf card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs nine rounds ("holes") and
//! keeps score, and a [`Round`] state machine covering the deal, the initial
//! two-card flip, turns, the last-chance turns after a hand is fully face
//! up, and end-of-round scoring with pairs and four corners.
//!
//! # Example
//!
//! ```
//! use golfrs::{CardAction, DrawAction, Game, GolfOptions, Slot};
//!
//! let mut game = Game::new(["Ada", "Brian"], GolfOptions::default(), 42);
//! let round = game.begin_round().unwrap();
//! for player in 0..round.player_count() {
//!     round.flip_initial(player, [Slot::TOP_LEFT, Slot::TOP_RIGHT]).unwrap();
//! }
//!
//! round.draw_action(DrawAction::Draw).unwrap();
//! round.card_action(CardAction::Replace(Slot::MIDDLE_LEFT)).unwrap();
//! round.end_turn().unwrap();
//! assert_eq!(round.current_player(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;

// Re-export main types
pub use card::{Card, DECK_SIZE, Deck, Rank, Suit};
pub use error::{BeginRoundError, CardError, ErrorKind, FlipError, SlotError, TurnError};
pub use game::{Game, Player};
pub use hand::{Face, HAND_SIZE, Hand, HandCard, Slot};
pub use options::GolfOptions;
pub use result::{GameResult, RoundResult, standings};
pub use round::{CardAction, DrawAction, DrawSource, Round, RoundState, TurnPhase};
