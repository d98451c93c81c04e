//! Response Adapters
//!
//! Implementations of the ResponseProvider port.
//!
//! - **FixtureResponses** - Fixed answers keyed by prompt id (tests, scripted runs)
//! - **FnResponses** - Wraps a closure
//! - **TerminalResponses** - Interactive answers from stdin

mod closure;
mod fixture;
mod terminal;

pub use closure::FnResponses;
pub use fixture::{FixtureLoadError, FixtureResponses};
pub use terminal::TerminalResponses;
