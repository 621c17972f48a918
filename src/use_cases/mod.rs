// Use cases layer: client workflows on top of the domain ports.

pub mod client_loop;
pub mod dispatcher;
pub mod driver;
pub mod poller;
pub mod render;
#[cfg(test)]
pub(crate) mod test_support;
pub mod types;

pub use client_loop::ClientLoop;
pub use driver::{ClientHandle, ClientSettings, spawn_client};
pub use poller::{Cadence, PollIntervals, PollerState};
pub use types::{ClientEvent, Command};
