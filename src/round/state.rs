//! Round state types.

use crate::card::Card;

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Players are choosing the two cards to turn up.
    Flipping,
    /// Turns are being played and no hand is fully face up.
    Active,
    /// A hand is fully face up; every other hand gets one last turn.
    Terminal,
    /// Every last turn has been played and the round can be scored.
    Finished,
}

/// Where the card in play this turn came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawSource {
    /// Taken from the top of the discard pile.
    DiscardPile,
    /// Drawn from the deck.
    Deck,
}

/// Progress through the current player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// The player must take or draw a card.
    AwaitingDraw,
    /// The player holds a card and must discard it or swap it in.
    Drawn {
        /// The card in play.
        card: Card,
        /// Where it came from.
        source: DrawSource,
    },
    /// The card has been played; the turn can end.
    Played,
}
