/// The browser (or the user) refused access to the camera.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct PermissionError(pub String);

/// Source of the frames the hand detector consumes.
///
/// Opening is the only operation the coach needs; once open, frames flow to
/// the detector outside of this crate.
#[async_trait::async_trait(?Send)]
pub trait Camera {
    async fn open(&self) -> Result<(), PermissionError>;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CameraStatus {
    #[default]
    Off,
    Starting,
    Running,
}

impl CameraStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, CameraStatus::Running)
    }
}
