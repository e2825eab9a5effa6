use serde::Deserialize;
use serde::Serialize;

/// Normalized image coordinates of one hand keypoint.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

/// The part of a detector result the coach cares about.
///
/// Mirrors the detector's `results` object, where `multiHandLandmarks` is
/// missing when nothing was found and otherwise holds one keypoint list per hand.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    #[serde(default)]
    pub multi_hand_landmarks: Option<Vec<Vec<Landmark>>>,
}

impl Frame {
    pub fn hand_present(&self) -> bool {
        self.multi_hand_landmarks
            .as_ref()
            .is_some_and(|hands| !hands.is_empty())
    }
    pub fn hands(&self) -> usize {
        self.multi_hand_landmarks.as_ref().map_or(0, Vec::len)
    }
}

impl From<Vec<Vec<Landmark>>> for Frame {
    fn from(hands: Vec<Vec<Landmark>>) -> Self {
        Self {
            multi_hand_landmarks: Some(hands),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_landmarks() {
        let frame = serde_json::from_str::<Frame>(r#"{"image":{}}"#).unwrap();
        assert!(!frame.hand_present());
        assert!(frame.hands() == 0);
    }

    #[test]
    fn empty_landmarks() {
        let frame = serde_json::from_str::<Frame>(r#"{"multiHandLandmarks":[]}"#).unwrap();
        assert!(!frame.hand_present());
    }

    #[test]
    fn one_hand() {
        let frame = serde_json::from_str::<Frame>(
            r#"{"multiHandLandmarks":[[{"x":0.1,"y":0.2,"z":-0.01,"visibility":0.9}]]}"#,
        )
        .unwrap();
        assert!(frame.hand_present());
        assert!(frame.hands() == 1);
    }
}
