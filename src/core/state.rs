use crate::{
    core::{cmd::Cmd, msg::system::SystemMsg},
    infrastructure::config::Config,
    model::deck::Deck,
};

/// Unified application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub deck: Deck,
    pub system: SystemState,
    pub config: Config,
}

impl AppState {
    pub fn new(deck: Deck, config: Config) -> Self {
        Self {
            deck,
            system: SystemState::default(),
            config,
        }
    }
}

/// System-related state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemState {
    pub should_quit: bool,
    /// Last known terminal size
    pub viewport: Option<(u16, u16)>,
}

impl SystemState {
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }
            SystemMsg::Resize(width, height) => {
                self.viewport = Some((width, height));
                vec![Cmd::resize(width, height), Cmd::RequestRender]
            }
            SystemMsg::Tick => vec![],
        }
    }
}
