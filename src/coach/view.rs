//! Presentation-only derivations. Nothing here feeds back into state.
use super::phase::Phase;
use crate::Probability;
use crate::camera::CameraStatus;
use serde::Serialize;

/// "73.2%", with ties rounded up rather than to even.
pub fn percent(winrate: Probability) -> String {
    format!("{:.1}%", (winrate * 1000.0).round() / 10.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Favorable,
    Marginal,
}

impl From<Probability> for Tone {
    fn from(winrate: Probability) -> Self {
        if winrate > crate::FAVORABLE_WINRATE {
            Tone::Favorable
        } else {
            Tone::Marginal
        }
    }
}

impl Tone {
    pub fn color(&self) -> &'static str {
        match self {
            Tone::Favorable => crate::COLOR_GOOD,
            Tone::Marginal => crate::COLOR_FAIR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinRateView {
    pub text: String,
    pub tone: Tone,
    pub color: &'static str,
}

impl From<Probability> for WinRateView {
    fn from(winrate: Probability) -> Self {
        let tone = Tone::from(winrate);
        Self {
            text: percent(winrate),
            tone,
            color: tone.color(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Indicator {
    pub text: &'static str,
    pub color: &'static str,
}

impl From<bool> for Indicator {
    fn from(present: bool) -> Self {
        match present {
            true => Self {
                text: "Yes",
                color: crate::COLOR_GOOD,
            },
            false => Self {
                text: "No",
                color: crate::COLOR_BAD,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Button {
    pub enabled: bool,
    pub label: &'static str,
}

/// Which controls the page should offer right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Affordances {
    pub camera: Button,
    pub analyze: Button,
    pub card_input_visible: bool,
    pub submit_enabled: bool,
    pub detection: Indicator,
}

impl Affordances {
    pub fn derive(phase: Phase, camera: CameraStatus, present: bool) -> Self {
        Self {
            camera: Button {
                enabled: matches!(camera, CameraStatus::Off),
                label: match camera {
                    CameraStatus::Running => "Camera Running",
                    _ => "Start Camera",
                },
            },
            analyze: Button {
                enabled: camera.is_running() && present && phase.can_trigger(),
                label: match phase {
                    Phase::CardEntry | Phase::Analyzing => "Waiting for cards...",
                    _ => "Analyze Hand",
                },
            },
            card_input_visible: phase != Phase::Idle,
            submit_enabled: phase.accepts_cards(),
            detection: Indicator::from(present),
        }
    }
}
