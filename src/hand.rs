//! Player hands: six cards laid out as three rows of two.

use core::fmt;

use crate::card::Card;
use crate::error::{FlipError, SlotError};

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 6;

/// Number of cards in each row of the grid.
const ROW_WIDTH: usize = 2;

/// A position in the 3×2 card grid.
///
/// Slots are numbered 0 to 5 internally, left to right and top to bottom.
/// Players name them by position, 1 to 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot(u8);

impl Slot {
    /// Top left card.
    pub const TOP_LEFT: Self = Self(0);
    /// Top right card.
    pub const TOP_RIGHT: Self = Self(1);
    /// Middle left card.
    pub const MIDDLE_LEFT: Self = Self(2);
    /// Middle right card.
    pub const MIDDLE_RIGHT: Self = Self(3);
    /// Bottom left card.
    pub const BOTTOM_LEFT: Self = Self(4);
    /// Bottom right card.
    pub const BOTTOM_RIGHT: Self = Self(5);

    /// Every slot in index order.
    pub const ALL: [Self; HAND_SIZE] = [
        Self::TOP_LEFT,
        Self::TOP_RIGHT,
        Self::MIDDLE_LEFT,
        Self::MIDDLE_RIGHT,
        Self::BOTTOM_LEFT,
        Self::BOTTOM_RIGHT,
    ];

    /// The four outer slots checked by the four corners rule.
    pub const CORNERS: [Self; 4] = [
        Self::TOP_LEFT,
        Self::TOP_RIGHT,
        Self::BOTTOM_LEFT,
        Self::BOTTOM_RIGHT,
    ];

    /// Creates a slot from a 0-based index.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not in `0..6`.
    pub const fn new(index: usize) -> Result<Self, SlotError> {
        if index < HAND_SIZE {
            Ok(Self(index as u8))
        } else {
            Err(SlotError::OutOfRange(index))
        }
    }

    /// Creates a slot from the 1-based position players use.
    ///
    /// # Errors
    ///
    /// Returns an error if `position` is not in `1..=6`.
    pub const fn from_position(position: usize) -> Result<Self, SlotError> {
        match position.checked_sub(1) {
            Some(index) if index < HAND_SIZE => Ok(Self(index as u8)),
            _ => Err(SlotError::OutOfRange(position)),
        }
    }

    /// Returns the 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the 1-based position.
    #[must_use]
    pub const fn position(self) -> usize {
        self.index() + 1
    }

    /// Returns the row (0 = top, 2 = bottom).
    #[must_use]
    pub const fn row(self) -> usize {
        self.index() / ROW_WIDTH
    }

    /// Returns a human readable name such as `"middle right"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self.0 {
            0 => "top left",
            1 => "top right",
            2 => "middle left",
            3 => "middle right",
            4 => "bottom left",
            _ => "bottom right",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which side of a card is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Face {
    /// Hidden from every player.
    #[default]
    Down,
    /// Visible to every player.
    Up,
}

/// A card in a hand, with its face state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandCard {
    /// The card itself.
    pub card: Card,
    /// Whether the card is showing.
    pub face: Face,
}

impl HandCard {
    /// Returns whether the card is face up.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        matches!(self.face, Face::Up)
    }
}

/// Face-down cards render as an empty string.
impl fmt::Display for HandCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.face {
            Face::Up => fmt::Display::fmt(&self.card, f),
            Face::Down => Ok(()),
        }
    }
}

/// One player's six cards for a single round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: [HandCard; HAND_SIZE],
}

impl Hand {
    /// Creates a hand from six dealt cards, all face down.
    #[must_use]
    pub fn from_cards(cards: [Card; HAND_SIZE]) -> Self {
        Self {
            cards: cards.map(|card| HandCard {
                card,
                face: Face::Down,
            }),
        }
    }

    /// Returns the cards in slot order.
    #[must_use]
    pub const fn cards(&self) -> &[HandCard; HAND_SIZE] {
        &self.cards
    }

    /// Returns the card in `slot`.
    #[must_use]
    pub const fn get(&self, slot: Slot) -> &HandCard {
        &self.cards[slot.index()]
    }

    /// Returns the cards grouped into top, middle and bottom rows.
    #[must_use]
    pub fn rows(&self) -> [[HandCard; ROW_WIDTH]; 3] {
        core::array::from_fn(|row| {
            [
                self.cards[row * ROW_WIDTH],
                self.cards[row * ROW_WIDTH + 1],
            ]
        })
    }

    /// Turns the card in `slot` face up. Flipping a face-up card does nothing.
    pub const fn flip(&mut self, slot: Slot) {
        self.cards[slot.index()].face = Face::Up;
    }

    /// Turns two distinct cards face up, as at the start of a round.
    ///
    /// # Errors
    ///
    /// Returns an error if both slots are the same.
    pub const fn flip_pair(&mut self, first: Slot, second: Slot) -> Result<(), FlipError> {
        if first.0 == second.0 {
            return Err(FlipError::SameSlot);
        }
        self.flip(first);
        self.flip(second);
        Ok(())
    }

    /// Turns every card face up.
    pub fn flip_all(&mut self) {
        for hand_card in &mut self.cards {
            hand_card.face = Face::Up;
        }
    }

    /// Puts `card` face up in `slot` and returns the card it replaced.
    pub const fn replace(&mut self, slot: Slot, card: Card) -> Card {
        let outgoing = self.cards[slot.index()].card;
        self.cards[slot.index()] = HandCard {
            card,
            face: Face::Up,
        };
        outgoing
    }

    /// Returns the number of face-up cards.
    #[must_use]
    pub fn face_up_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_face_up()).count()
    }

    /// Returns whether every card is face up.
    #[must_use]
    pub fn is_all_face_up(&self) -> bool {
        self.cards.iter().all(HandCard::is_face_up)
    }

    /// Calculates the end-of-round score of the hand.
    ///
    /// Each row of two cards sharing a rank scores zero; any other row
    /// scores the sum of its cards. Face state is ignored.
    #[must_use]
    pub fn score(&self) -> i32 {
        self.rows()
            .iter()
            .map(|[left, right]| {
                if left.card.rank == right.card.rank {
                    0
                } else {
                    left.card.points() + right.card.points()
                }
            })
            .sum()
    }

    /// Calculates the score of the face-up cards only.
    ///
    /// A row cancels only when both of its cards are showing.
    #[must_use]
    pub fn visible_score(&self) -> i32 {
        self.rows()
            .iter()
            .map(|[left, right]| match (left.is_face_up(), right.is_face_up()) {
                (true, true) if left.card.rank == right.card.rank => 0,
                (true, true) => left.card.points() + right.card.points(),
                (true, false) => left.card.points(),
                (false, true) => right.card.points(),
                (false, false) => 0,
            })
            .sum()
    }

    /// Returns whether all four corner cards share a rank.
    #[must_use]
    pub fn is_four_corners(&self) -> bool {
        let rank = self.get(Slot::TOP_LEFT).card.rank;
        Slot::CORNERS
            .iter()
            .all(|&slot| self.get(slot).card.rank == rank)
    }
}
