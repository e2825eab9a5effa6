//! Hand presence as reported by the landmark detector running in the page.
pub mod frame;
pub use frame::*;

pub mod observer;
pub use observer::*;

pub mod state;
pub use state::*;
