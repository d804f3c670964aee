pub mod system;

use crate::model::deck;

pub use system::SystemMsg;

/// Top-level message
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Msg {
    System(SystemMsg),
    Deck(deck::Message),
}

impl Msg {
    /// Messages that arrive many times per second
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(system_msg) => system_msg.is_frequent(),
            Msg::Deck(deck::Message::GestureMoved { .. }) => true,
            Msg::Deck(_) => false,
        }
    }
}
