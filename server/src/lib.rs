//! Session bookkeeping for two-player minesweeper duels.
//!
//! [`SessionManager`] is transport agnostic: feed it [`Inbound`](duelsweep_protocol::Inbound)
//! intents and deliver the [`Envelope`](duelsweep_protocol::Envelope)s it returns.

pub use config::*;
pub use error::*;
pub use manager::*;
pub use registry::*;
pub use session::*;

mod config;
mod error;
mod manager;
mod registry;
mod session;
