//! Clients for the remote analysis and chat endpoints.
pub mod analysis;
pub use analysis::*;

pub mod chat;
pub use chat::*;

pub mod error;
pub use error::*;

pub mod transport;
pub use transport::*;

#[cfg(feature = "native")]
pub mod http;
#[cfg(feature = "native")]
pub use http::*;

#[cfg(all(feature = "client", target_arch = "wasm32"))]
pub mod browser;
#[cfg(all(feature = "client", target_arch = "wasm32"))]
pub use browser::*;
