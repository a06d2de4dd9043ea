//! A single deal of golf: dealing, turn order and end-of-round detection.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use crate::card::{Card, Deck};
use crate::error::BeginRoundError;
use crate::hand::{HAND_SIZE, Hand};
use crate::options::GolfOptions;
use crate::result::RoundResult;

mod actions;
pub mod state;

pub use actions::{CardAction, DrawAction};
pub use state::{DrawSource, RoundState, TurnPhase};

/// One round ("hole") of golf.
///
/// The round owns its deck, the top of the discard pile and one hand per
/// player. Hands are indexed in turn order, which matches the game's player
/// order.
#[derive(Debug, Clone)]
pub struct Round {
    /// Cards left to draw.
    deck: Deck,
    /// Player hands, in turn order.
    hands: Vec<Hand>,
    /// Which players have made their initial two-card flip.
    flipped: Vec<bool>,
    /// Top of the discard pile.
    last_discard: Card,
    /// Index of the hand whose turn it is.
    current: usize,
    /// Index of the first hand to become fully face up.
    terminal: Option<usize>,
    /// Progress through the current turn.
    phase: TurnPhase,
    /// Rules in effect.
    options: GolfOptions,
}

impl Round {
    /// Deals a new round from `deck`.
    ///
    /// Six cards go to each of `players` hands face down, one at a time
    /// around the table, then one more card starts the discard pile.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no players or the deck is too small.
    pub fn deal(
        players: usize,
        mut deck: Deck,
        options: GolfOptions,
    ) -> Result<Self, BeginRoundError> {
        if players == 0 {
            return Err(BeginRoundError::NoPlayers);
        }
        let needed = players
            .checked_mul(HAND_SIZE)
            .and_then(|cards| cards.checked_add(1))
            .ok_or(BeginRoundError::NotEnoughCards)?;
        if deck.len() < needed {
            return Err(BeginRoundError::NotEnoughCards);
        }

        let mut dealt: Vec<Vec<Card>> = vec![Vec::with_capacity(HAND_SIZE); players];
        for _ in 0..HAND_SIZE {
            for cards in &mut dealt {
                cards.push(deck.draw().ok_or(BeginRoundError::NotEnoughCards)?);
            }
        }

        let hands = dealt
            .into_iter()
            .map(|cards| {
                <[Card; HAND_SIZE]>::try_from(cards)
                    .map(Hand::from_cards)
                    .map_err(|_| BeginRoundError::NotEnoughCards)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let last_discard = deck.draw().ok_or(BeginRoundError::NotEnoughCards)?;

        tracing::info!(
            players,
            cards_remaining = deck.len(),
            %last_discard,
            "round dealt"
        );

        Ok(Self {
            deck,
            hands,
            flipped: vec![false; players],
            last_discard,
            current: 0,
            terminal: None,
            phase: TurnPhase::AwaitingDraw,
            options,
        })
    }

    /// Returns the current round state.
    #[must_use]
    pub fn state(&self) -> RoundState {
        match self.terminal {
            Some(terminal) if terminal == self.current => RoundState::Finished,
            Some(_) => RoundState::Terminal,
            None if self.flipped.iter().all(|&flipped| flipped) => RoundState::Active,
            None => RoundState::Flipping,
        }
    }

    /// Returns whether some hand has become fully face up.
    ///
    /// Stays `true` once the round has finished.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.terminal.is_some()
    }

    /// Returns whether every hand has had its last turn.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state() == RoundState::Finished
    }

    /// Returns the number of hands in the round.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.hands.len()
    }

    /// Returns the index of the player whose turn it is.
    #[must_use]
    pub const fn current_player(&self) -> usize {
        self.current
    }

    /// Returns the hand of the player whose turn it is.
    #[must_use]
    pub fn current_hand(&self) -> &Hand {
        &self.hands[self.current]
    }

    /// Returns the index of the player who ended the round, if any.
    #[must_use]
    pub const fn terminal_player(&self) -> Option<usize> {
        self.terminal
    }

    /// Returns the hand of the given player.
    #[must_use]
    pub fn hand(&self, player: usize) -> Option<&Hand> {
        self.hands.get(player)
    }

    /// Returns every hand in turn order.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns whether the given player has made their initial flip.
    #[must_use]
    pub fn has_flipped(&self, player: usize) -> bool {
        self.flipped.get(player).copied().unwrap_or(false)
    }

    /// Returns the card on top of the discard pile.
    #[must_use]
    pub const fn last_discard(&self) -> Card {
        self.last_discard
    }

    /// Returns the progress of the current turn.
    #[must_use]
    pub const fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Returns the card the current player is holding, if any.
    #[must_use]
    pub const fn drawn_card(&self) -> Option<Card> {
        match self.phase {
            TurnPhase::Drawn { card, .. } => Some(card),
            TurnPhase::AwaitingDraw | TurnPhase::Played => None,
        }
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the rules in effect.
    #[must_use]
    pub const fn options(&self) -> &GolfOptions {
        &self.options
    }

    /// Turns every card in every hand face up, for the end-of-round reveal.
    ///
    /// Scoring ignores face state, so this never changes [`Round::result`].
    pub fn reveal_all(&mut self) {
        for hand in &mut self.hands {
            hand.flip_all();
        }
    }

    /// Scores every hand, applying the four corners penalty.
    #[must_use]
    pub fn result(&self) -> RoundResult {
        RoundResult::score(&self.hands, self.options.four_corners_penalty)
    }
}
