//! Card types and deck utilities.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// Every suit, in deck construction order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the singular lowercase name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "club",
            Self::Diamonds => "diamond",
            Self::Hearts => "heart",
            Self::Spades => "spade",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = CardError;

    /// Accepts the singular or plural name in any case, or the initial letter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_suffix(['s', 'S']).filter(|rest| rest.len() > 1).unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|suit| {
                s.eq_ignore_ascii_case(suit.name()) || s.eq_ignore_ascii_case(&suit.name()[..1])
            })
            .ok_or(CardError::InvalidSuit)
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// Every rank, ace low.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the rank number (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the short symbol printed on the card.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        let index = number.checked_sub(1).ok_or(CardError::InvalidRank)?;
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(CardError::InvalidRank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|rank| s.eq_ignore_ascii_case(rank.symbol()))
            .ok_or(CardError::InvalidRank)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Builds a card from its textual suit and rank, e.g. `("spade", "Q")`.
    ///
    /// # Errors
    ///
    /// Returns an error if either part does not name a standard suit or rank.
    pub fn parse(suit: &str, rank: &str) -> Result<Self, CardError> {
        Ok(Self::new(suit.parse()?, rank.parse()?))
    }

    /// Returns the points the card is worth at the end of a round.
    ///
    /// Aces are -2, kings 0, the queen of spades 40, other face cards 10
    /// and number cards their face value.
    #[must_use]
    pub const fn points(self) -> i32 {
        match (self.rank, self.suit) {
            (Rank::Ace, _) => -2,
            (Rank::King, _) => 0,
            (Rank::Queen, Suit::Spades) => 40,
            (Rank::Jack | Rank::Queen, _) => 10,
            (rank, _) => rank.number() as i32,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}s", self.rank, self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// The face-down draw pile for a single round.
///
/// Cards are drawn from the back of the underlying vector, so a deck built
/// with [`Deck::from_draws`] is reversed on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled deck holding every suit and rank once.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Creates a standard deck and shuffles it uniformly.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.cards.shuffle(rng);
        deck
    }

    /// Creates a deck that yields `draws` in order.
    ///
    /// Useful for replaying a recorded deal; no uniqueness check is made.
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Draws a card, or returns `None` once the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the number of cards left to draw.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
