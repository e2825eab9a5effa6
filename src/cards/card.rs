use super::rank::Rank;
use super::suit::Suit;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// (rank, suit) str pair, as it arrives from form fields or the wire
impl TryFrom<(&str, &str)> for Card {
    type Error = String;
    fn try_from((rank, suit): (&str, &str)) -> std::result::Result<Self, Self::Error> {
        Ok(Self {
            rank: Rank::try_from(rank)?,
            suit: Suit::try_from(suit)?,
        })
    }
}

/// "A of spades"
impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}
