use crate::card::Card;
use crate::error::{FlipError, SlotError, TurnError};
use crate::hand::Slot;

use super::{DrawSource, Round, RoundState, TurnPhase};

/// How the current player gets a card at the start of their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawAction {
    /// Take the top card of the discard pile.
    Take,
    /// Draw the top card of the deck.
    Draw,
}

/// What the current player does with the card they drew.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    /// Put the card on the discard pile.
    Discard,
    /// Swap the card into the hand, discarding the card it replaces.
    Replace(Slot),
}

impl CardAction {
    /// Parses a menu selector: 0 discards, 1 to 6 replace that position.
    ///
    /// # Errors
    ///
    /// Returns an error for any other selector.
    pub const fn from_selector(selector: u8) -> Result<Self, SlotError> {
        if selector == 0 {
            return Ok(Self::Discard);
        }
        match Slot::from_position(selector as usize) {
            Ok(slot) => Ok(Self::Replace(slot)),
            Err(_) => Err(SlotError::UnknownSelector(selector)),
        }
    }
}

impl Round {
    fn ensure_turn(&self) -> Result<(), TurnError> {
        match self.state() {
            RoundState::Active | RoundState::Terminal => Ok(()),
            RoundState::Flipping | RoundState::Finished => Err(TurnError::InvalidState),
        }
    }

    /// Turns two of a player's cards face up before play begins.
    ///
    /// Every player must flip before the first turn. Players may flip in any
    /// order.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is past the flipping phase, the player
    /// does not exist or already flipped, or both slots are the same.
    pub fn flip_initial(&mut self, player: usize, slots: [Slot; 2]) -> Result<(), FlipError> {
        if self.state() != RoundState::Flipping {
            return Err(FlipError::InvalidState);
        }

        let flipped = self
            .flipped
            .get_mut(player)
            .ok_or(FlipError::PlayerNotFound)?;
        if *flipped {
            return Err(FlipError::AlreadyFlipped);
        }

        self.hands[player].flip_pair(slots[0], slots[1])?;
        *flipped = true;

        tracing::debug!(
            player,
            first = %slots[0],
            second = %slots[1],
            "initial flip"
        );

        Ok(())
    }

    /// Starts the current player's turn by taking or drawing a card.
    ///
    /// Returns the card now in play. Taking leaves the discard pile as it
    /// is until the card is played; the card played this turn becomes the
    /// new top.
    ///
    /// # Errors
    ///
    /// Returns an error if turns are not being played, the player already
    /// drew this turn, or the deck is empty.
    pub fn draw_action(&mut self, action: DrawAction) -> Result<Card, TurnError> {
        self.ensure_turn()?;

        match self.phase {
            TurnPhase::AwaitingDraw => {}
            TurnPhase::Drawn { .. } => return Err(TurnError::AlreadyDrawn),
            TurnPhase::Played => return Err(TurnError::AlreadyPlayed),
        }

        let (card, source) = match action {
            DrawAction::Take => (self.last_discard, DrawSource::DiscardPile),
            DrawAction::Draw => (
                self.deck.draw().ok_or(TurnError::NoCards)?,
                DrawSource::Deck,
            ),
        };
        self.phase = TurnPhase::Drawn { card, source };

        tracing::debug!(player = self.current, ?source, %card, "card drawn");

        Ok(card)
    }

    /// Plays the card drawn this turn.
    ///
    /// Returns the new top of the discard pile.
    ///
    /// # Errors
    ///
    /// Returns an error if turns are not being played, no card is in play,
    /// or a card taken from the discard pile is discarded while the rules
    /// forbid it.
    pub fn card_action(&mut self, action: CardAction) -> Result<Card, TurnError> {
        self.ensure_turn()?;

        let (card, source) = match self.phase {
            TurnPhase::Drawn { card, source } => (card, source),
            TurnPhase::AwaitingDraw => return Err(TurnError::NotDrawn),
            TurnPhase::Played => return Err(TurnError::AlreadyPlayed),
        };

        self.last_discard = match action {
            CardAction::Discard => {
                if source == DrawSource::DiscardPile && !self.options.discard_after_take {
                    return Err(TurnError::MustReplace);
                }
                card
            }
            CardAction::Replace(slot) => self.hands[self.current].replace(slot, card),
        };
        self.phase = TurnPhase::Played;

        tracing::debug!(
            player = self.current,
            ?action,
            discard = %self.last_discard,
            "card played"
        );

        Ok(self.last_discard)
    }

    /// Ends the current player's turn and passes play to the next hand.
    ///
    /// The first time any hand is fully face up at the end of a turn, the
    /// current player is recorded as the terminal player. The round
    /// finishes when play comes back round to that player, so every other
    /// hand gets exactly one more turn.
    ///
    /// Returns the state after the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if turns are not being played or the drawn card has
    /// not been played.
    pub fn end_turn(&mut self) -> Result<RoundState, TurnError> {
        self.ensure_turn()?;

        if self.phase != TurnPhase::Played {
            return Err(TurnError::NotPlayed);
        }

        if self.terminal.is_none() && self.hands.iter().any(|hand| hand.is_all_face_up()) {
            tracing::info!(player = self.current, "hand fully face up, last turns");
            self.terminal = Some(self.current);
        }

        self.current = (self.current + 1) % self.hands.len();
        self.phase = TurnPhase::AwaitingDraw;

        let state = self.state();
        if state == RoundState::Finished {
            tracing::info!(scores = ?self.result().scores, "round finished");
        }

        Ok(state)
    }
}
