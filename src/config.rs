use serde::Serialize;

/// Options handed to the landmark detector, named the way it expects them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tracking {
    pub max_num_hands: u8,
    pub model_complexity: u8,
    pub min_detection_confidence: f32,
    pub min_tracking_confidence: f32,
}

impl Default for Tracking {
    fn default() -> Self {
        Self {
            max_num_hands: crate::MAX_NUM_HANDS,
            model_complexity: crate::MODEL_COMPLEXITY,
            min_detection_confidence: crate::MIN_DETECTION_CONFIDENCE,
            min_tracking_confidence: crate::MIN_TRACKING_CONFIDENCE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Video {
    pub width: u32,
    pub height: u32,
}

impl Default for Video {
    fn default() -> Self {
        Self {
            width: crate::VIDEO_WIDTH,
            height: crate::VIDEO_HEIGHT,
        }
    }
}

/// Session configuration. The base URL is the only thing that varies
/// between deployments.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    api_url: String,
    pub tracking: Tracking,
    pub video: Video,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: String::from(crate::API_URL),
            tracking: Tracking::default(),
            video: Video::default(),
        }
    }
}

impl Config {
    /// Trailing slashes are dropped so endpoint paths join cleanly.
    pub fn with_api_url(self, url: &str) -> anyhow::Result<Self> {
        let url = url.trim().trim_end_matches('/');
        anyhow::ensure!(
            url.starts_with("http://") || url.starts_with("https://"),
            "api url must be http(s), got {:?}",
            url
        );
        Ok(Self {
            api_url: url.to_string(),
            ..self
        })
    }

    /// Reads [`crate::API_URL_VAR`], falling back to [`crate::API_URL`].
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> anyhow::Result<Self> {
        let ref url = std::env::var(crate::API_URL_VAR).unwrap_or_else(|_| String::from(crate::API_URL));
        Self::default().with_api_url(url)
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
    pub fn analyze_url(&self) -> String {
        format!("{}{}", self.api_url, crate::ANALYZE_PATH)
    }
    pub fn chat_url(&self) -> String {
        format!("{}{}", self.api_url, crate::CHAT_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoints() {
        let config = Config::default();
        assert!(config.analyze_url() == "http://localhost:8080/api/analyze");
        assert!(config.chat_url() == "http://localhost:8080/api/chat");
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let config = Config::default().with_api_url("https://coach.example/ ").unwrap();
        assert!(config.chat_url() == "https://coach.example/api/chat");
    }

    #[test]
    fn rejects_non_http() {
        assert!(Config::default().with_api_url("ftp://coach").is_err());
        assert!(Config::default().with_api_url("").is_err());
    }

    #[test]
    fn tracking_options_use_detector_names() {
        let json = serde_json::to_value(Tracking::default()).unwrap();
        assert!(json["maxNumHands"] == 2);
        assert!(json["modelComplexity"] == 1);
        assert!(json["minDetectionConfidence"] == 0.5);
    }
}
