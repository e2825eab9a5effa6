use super::CardBody;
use crate::Probability;
use crate::cards::Hand;
use crate::api::HandResult;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub cards: Vec<CardBody>,
}

impl From<&Hand> for AnalyzeRequest {
    fn from(hand: &Hand) -> Self {
        Self {
            cards: super::cards(hand),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandBody {
    pub cards: Vec<CardBody>,
    pub winrate: Probability,
}

impl From<&HandResult> for HandBody {
    fn from(result: &HandResult) -> Self {
        Self {
            cards: super::cards(&result.cards),
            winrate: result.winrate,
        }
    }
}

/// `hand` is sent as an explicit `null` before any analysis has completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub hand: Option<HandBody>,
}

impl From<(&str, Option<&HandResult>)> for ChatRequest {
    fn from((message, hand): (&str, Option<&HandResult>)) -> Self {
        Self {
            message: message.to_string(),
            hand: hand.map(HandBody::from),
        }
    }
}
