//! Session orchestration: detection gating, card entry, analysis, and chat.
pub mod insight;
pub use insight::*;

pub mod notice;
pub use notice::*;

pub mod orchestrator;
pub use orchestrator::*;

pub mod phase;
pub use phase::*;

pub mod view;
pub use view::*;

pub use crate::api::HandResult;
