/// Where the analyze flow stands. Chatting is possible in every phase.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    CardEntry,
    Analyzing,
    AnalysisDone,
}

impl Phase {
    /// Phases from which the analyze action may start a new hand.
    pub fn can_trigger(&self) -> bool {
        matches!(self, Phase::Idle | Phase::AnalysisDone)
    }
    pub fn accepts_cards(&self) -> bool {
        matches!(self, Phase::CardEntry)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::CardEntry => write!(f, "card entry"),
            Phase::Analyzing => write!(f, "analyzing"),
            Phase::AnalysisDone => write!(f, "analysis done"),
        }
    }
}
