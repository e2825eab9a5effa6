//! The running exchange between the player and the assistant.
pub mod entry;
pub use entry::*;

pub mod history;
pub use history::*;

pub mod transcript;
pub use transcript::*;
