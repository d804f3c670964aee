use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::Mutex;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        msg::Msg,
        state::AppState,
        translator::translate_event,
        update::update,
    },
    infrastructure::tui::{event_source::EventSource, Event, Frame, TuiLike},
    presentation::components::Components,
};

/// Drives the deck: pulls terminal events, runs them through `update` and
/// redraws on the next render tick after a change.
pub struct AppRunner {
    state: AppState,
    tui: Arc<Mutex<dyn TuiLike + Send>>,
    events: EventSource,
    components: Components,
    render_requested: bool,
}

impl AppRunner {
    /// Runner reading events from the terminal it draws to
    pub fn new(state: AppState, tui: Arc<Mutex<dyn TuiLike + Send>>) -> Self {
        let events = EventSource::real(Arc::clone(&tui));
        Self {
            state,
            tui,
            events,
            components: Components::new(),
            render_requested: true,
        }
    }

    /// Replace where events come from; the terminal is still drawn to
    pub fn with_event_source(mut self, events: EventSource) -> Self {
        self.events = events;
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Enter the terminal, loop until quit or the event source closes,
    /// then leave the terminal even if the loop failed.
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.render().await?;

        let result = loop {
            match self.run_one_cycle().await {
                Ok(true) => {}
                Ok(false) => break Ok(()),
                Err(e) => break Err(e),
            }
        };

        self.tui.lock().await.exit()?;
        result
    }

    /// Handle one event. Returns `false` once the runner should stop.
    pub async fn run_one_cycle(&mut self) -> Result<bool> {
        let Some(event) = self.events.next().await else {
            log::info!("event source closed");
            return Ok(false);
        };
        let is_render_tick = event == Event::Render;

        for msg in translate_event(event, &self.state) {
            let commands = self.process(msg);
            self.execute(commands).await?;
        }

        if self.state.system.should_quit {
            return Ok(false);
        }
        if is_render_tick && self.render_requested {
            self.render().await?;
        }
        Ok(true)
    }

    fn process(&mut self, msg: Msg) -> Vec<Cmd> {
        let (state, commands) = update(msg, self.state.clone());
        self.state = state;
        commands
    }

    async fn execute(&mut self, commands: Vec<Cmd>) -> Result<()> {
        for cmd in commands {
            match cmd {
                Cmd::Tui(TuiCommand::Resize { width, height }) => {
                    self.tui
                        .lock()
                        .await
                        .resize(Rect::new(0, 0, width, height))?;
                }
                Cmd::RequestRender => self.render_requested = true,
            }
        }
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        let state = &self.state;
        let components = &self.components;
        self.tui
            .lock()
            .await
            .draw(&mut |f: &mut Frame<'_>| components.render(f, state))?;
        self.render_requested = false;
        Ok(())
    }
}
