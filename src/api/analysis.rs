use super::error::AnalysisError;
use super::error::DecodeError;
use super::error::TransportError;
use super::transport::Transport;
use crate::Probability;
use crate::cards::Hand;
use crate::dto::AnalyzeRequest;
use crate::dto::AnalyzeResponse;

/// A hand together with the win rate the service assigned it.
#[derive(Debug, Clone, PartialEq)]
pub struct HandResult {
    pub cards: Hand,
    pub winrate: Probability,
}

/// Posts a hand to the win rate endpoint.
///
/// Every call is an independent request. Callers that must not overlap
/// analyses are responsible for serializing them.
#[derive(Debug)]
pub struct AnalysisClient<T> {
    transport: T,
    url: String,
}

impl<T> AnalysisClient<T>
where
    T: Transport,
{
    pub fn new(transport: T, url: impl Into<String>) -> Self {
        Self {
            transport,
            url: url.into(),
        }
    }

    /// The win rate is passed through untouched, even outside [0, 1].
    /// Echoed cards replace the submitted ones when the service sends them.
    pub async fn analyze(&self, hand: Hand) -> Result<HandResult, AnalysisError> {
        let body = serde_json::to_string(&AnalyzeRequest::from(&hand))
            .map_err(TransportError::encode)?;
        let text = self.transport.post(&self.url, body).await?;
        let response = serde_json::from_str::<AnalyzeResponse>(&text).map_err(DecodeError::from)?;
        let cards = match response.cards {
            Some(ref echoed) => crate::dto::hand(echoed).map_err(DecodeError)?,
            None => hand,
        };
        log::info!("{} analyzed at {:.3}", cards, response.winrate);
        Ok(HandResult {
            cards,
            winrate: response.winrate,
        })
    }
}
