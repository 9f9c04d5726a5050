//! Keyboard input: the remappable key table and the sources that feed the session.

pub mod handler;
pub mod source;

pub use handler::{KeyBindings, parse_key};
pub use source::{ChannelInput, InputSource, PollingInput, spawn_key_reader};
