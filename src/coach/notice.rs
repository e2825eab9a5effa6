use crate::api::AnalysisError;
use crate::camera::PermissionError;
use crate::input::ValidationError;

/// A user-facing rejection, shown as a modal or inline message.
///
/// Every variant is recoverable: the user fixes the cause and tries again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Notice {
    #[error("No hand detected! Please show your poker cards to the camera.")]
    NoHandDetected,
    #[error("A hand is already being analyzed.")]
    Busy,
    #[error("Press Analyze Hand before submitting cards.")]
    AwaitingTrigger,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Error analyzing hand: {0}")]
    Analysis(#[from] AnalysisError),
    #[error("Error accessing camera: {0}")]
    Camera(#[from] PermissionError),
}
