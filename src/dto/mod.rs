//! Wire shapes for the analysis and chat endpoints.
//!
//! Cards travel as strings and are parsed into domain types at the edge.
mod request;
mod response;

pub use request::*;
pub use response::*;

use crate::cards::Card;
use crate::cards::Hand;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardBody {
    pub rank: String,
    pub suit: String,
}

impl From<Card> for CardBody {
    fn from(card: Card) -> Self {
        Self {
            rank: card.rank().to_string(),
            suit: card.suit().to_string(),
        }
    }
}

impl TryFrom<&CardBody> for Card {
    type Error = String;
    fn try_from(body: &CardBody) -> Result<Self, Self::Error> {
        Card::try_from((body.rank.as_str(), body.suit.as_str()))
    }
}

pub fn cards(hand: &Hand) -> Vec<CardBody> {
    hand.iter().map(CardBody::from).collect()
}

pub fn hand(cards: &[CardBody]) -> Result<Hand, String> {
    cards
        .iter()
        .map(Card::try_from)
        .collect::<Result<Vec<Card>, String>>()
        .and_then(Hand::try_from)
}
