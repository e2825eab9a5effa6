//! Camera-gated starting hand coach.
//!
//! A hand-tracking collaborator reports whether a hand is in frame, the user
//! enters their two hole cards, a remote service estimates the win rate, and a
//! remote assistant comments on the result in a running conversation.
pub mod api;
pub mod camera;
pub mod cards;
pub mod coach;
pub mod config;
pub mod conversation;
pub mod detection;
pub mod dto;
pub mod input;

#[cfg(all(feature = "client", target_arch = "wasm32"))]
pub mod wasm;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Win rate reported by the analysis service, used verbatim.
pub type Probability = f64;

// ============================================================================
// REMOTE ENDPOINTS
// ============================================================================
/// Base URL of the analysis and chat service when none is configured.
pub const API_URL: &str = "http://localhost:8080";
/// Environment variable overriding [`API_URL`] on native targets.
pub const API_URL_VAR: &str = "ROBOCOACH_API_URL";
/// Path of the win rate endpoint relative to the base URL.
pub const ANALYZE_PATH: &str = "/api/analyze";
/// Path of the assistant endpoint relative to the base URL.
pub const CHAT_PATH: &str = "/api/chat";

// ============================================================================
// HAND TRACKING
// Options forwarded to the landmark detector running in the page.
// ============================================================================
/// Maximum number of hands the detector tracks per frame.
pub const MAX_NUM_HANDS: u8 = 2;
/// Landmark model complexity (0 = lite, 1 = full).
pub const MODEL_COMPLEXITY: u8 = 1;
/// Minimum confidence for a palm detection to count.
pub const MIN_DETECTION_CONFIDENCE: f32 = 0.5;
/// Minimum confidence to keep tracking between frames.
pub const MIN_TRACKING_CONFIDENCE: f32 = 0.5;
/// Requested camera frame width in pixels.
pub const VIDEO_WIDTH: u32 = 640;
/// Requested camera frame height in pixels.
pub const VIDEO_HEIGHT: u32 = 480;
/// Frames buffered between the detector and the coach before senders wait.
pub const FRAME_BUFFER: usize = 8;

// ============================================================================
// PRESENTATION
// ============================================================================
/// Win rates strictly above this read as favorable.
pub const FAVORABLE_WINRATE: Probability = 0.5;
pub const COLOR_GOOD: &str = "#4CAF50";
pub const COLOR_FAIR: &str = "#ff9800";
pub const COLOR_BAD: &str = "#ff4444";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging, honoring `RUST_LOG` and defaulting to INFO.
/// Safe to call more than once.
#[cfg(feature = "native")]
pub fn log() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init()
        .ok();
}
