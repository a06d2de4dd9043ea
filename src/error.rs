//! Error types for game operations.

use thiserror::Error;

/// Broad classification shared by every error in this crate.
///
/// Interactive front ends should re-prompt on [`ErrorKind::InvalidMove`];
/// the other kinds mean the caller broke the engine's contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A card could not be built from the given value.
    InvalidValue,
    /// A player asked for something the rules do not allow.
    InvalidMove,
    /// The round or game was not in a state that accepts the operation.
    InvalidState,
}

/// Errors that can occur when building a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Not one of the four standard suits.
    #[error("invalid suit")]
    InvalidSuit,
    /// Not one of the thirteen standard ranks.
    #[error("invalid rank")]
    InvalidRank,
}

impl CardError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidValue
    }
}

/// Errors that can occur when naming a hand slot or card action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SlotError {
    /// Slot outside the six card grid.
    #[error("slot {0} is out of range")]
    OutOfRange(usize),
    /// Action selector is neither discard nor a slot.
    #[error("unknown action selector {0}")]
    UnknownSelector(u8),
}

impl SlotError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidMove
    }
}

/// Errors that can occur during the initial two-card flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlipError {
    /// Invalid round state for flipping.
    #[error("invalid round state for flipping")]
    InvalidState,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Player already flipped their two cards.
    #[error("player already flipped their cards")]
    AlreadyFlipped,
    /// Both flips named the same slot.
    #[error("cannot flip the same card twice")]
    SameSlot,
}

impl FlipError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::SameSlot => ErrorKind::InvalidMove,
            Self::InvalidState | Self::PlayerNotFound | Self::AlreadyFlipped => {
                ErrorKind::InvalidState
            }
        }
    }
}

/// Errors that can occur during a player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// Player already drew a card this turn.
    #[error("a card was already drawn this turn")]
    AlreadyDrawn,
    /// Player has not drawn a card yet.
    #[error("no card has been drawn this turn")]
    NotDrawn,
    /// Player already played the drawn card this turn.
    #[error("the drawn card was already played")]
    AlreadyPlayed,
    /// Player has not played the drawn card yet.
    #[error("the drawn card has not been played")]
    NotPlayed,
    /// A card taken from the discard pile must be swapped into the hand.
    #[error("a card taken from the discard pile must replace a card")]
    MustReplace,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

impl TurnError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MustReplace => ErrorKind::InvalidMove,
            Self::InvalidState
            | Self::AlreadyDrawn
            | Self::NotDrawn
            | Self::AlreadyPlayed
            | Self::NotPlayed
            | Self::NoCards => ErrorKind::InvalidState,
        }
    }
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BeginRoundError {
    /// The game has no players.
    #[error("the game has no players")]
    NoPlayers,
    /// Every round of the game has been played.
    #[error("all rounds have been played")]
    RoundLimitReached,
    /// The current round has not finished.
    #[error("the current round has not finished")]
    RoundInProgress,
    /// Not enough cards in the deck to deal every player and the discard.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

impl BeginRoundError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidState
    }
}
