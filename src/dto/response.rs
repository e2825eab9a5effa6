use super::CardBody;
use crate::Probability;
use serde::Deserialize;
use serde::Serialize;

/// `cards` is the service echoing the request back; older deployments omit it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub winrate: Probability,
    #[serde(default)]
    pub cards: Option<Vec<CardBody>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}
