use crate::{
    core::{cmd::Cmd, msg::Msg, state::AppState},
    model::deck,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    if !msg.is_frequent() {
        log::debug!("update: {msg:?}");
    }

    match msg {
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        Msg::Deck(deck_msg) => {
            let commands = match state.deck.update(deck_msg) {
                Some(settled) => {
                    if settled.changed() {
                        log::info!("slide {} -> {}", settled.from + 1, settled.to + 1);
                    }
                    vec![Cmd::RequestRender]
                }
                // Live drag feedback
                None if matches!(deck_msg, deck::Message::GestureMoved { .. })
                    && state.deck.gesture().is_dragging() =>
                {
                    vec![Cmd::RequestRender]
                }
                None => vec![],
            };
            (state, commands)
        }
    }
}
