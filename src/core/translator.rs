use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::{
    core::{
        msg::{system::SystemMsg, Msg},
        state::AppState,
    },
    infrastructure::tui::Event,
    model::deck,
    presentation::config::Action,
};

/// Translates terminal events into domain messages.
/// Pure: reads the state for bindings and row height, never changes it.
pub fn translate_event(event: Event, state: &AppState) -> Vec<Msg> {
    match event {
        Event::Quit | Event::Closed => vec![Msg::System(SystemMsg::Quit)],
        Event::Tick => vec![Msg::System(SystemMsg::Tick)],
        Event::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],
        Event::Key(key) => translate_key_event(key, state),
        Event::Mouse(mouse) => translate_mouse_event(mouse, state),

        // Rendering is driven by the runner; the rest carries no deck meaning
        Event::Init
        | Event::Render
        | Event::Error
        | Event::FocusGained
        | Event::FocusLost
        | Event::Paste(_) => vec![],
    }
}

/// Left button press, drag and release become the pointer start, move and
/// end of a swipe. The row is scaled to pointer units by `row_height`.
fn translate_mouse_event(mouse: MouseEvent, state: &AppState) -> Vec<Msg> {
    let y = f64::from(mouse.row) * state.config.gesture.row_height;
    let message = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => deck::Message::GestureStarted { y },
        MouseEventKind::Drag(MouseButton::Left) => deck::Message::GestureMoved { y },
        MouseEventKind::Up(MouseButton::Left) => deck::Message::GestureEnded,
        _ => return vec![],
    };
    vec![Msg::Deck(message)]
}

fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if let KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        ..
    } = key
    {
        return vec![Msg::System(SystemMsg::Quit)];
    }

    match state.config.keybindings.get(&key) {
        Some(action) => vec![translate_action(*action)],
        None => vec![],
    }
}

fn translate_action(action: Action) -> Msg {
    match action {
        Action::Quit => Msg::System(SystemMsg::Quit),
        Action::NextSlide => Msg::Deck(deck::Message::NextSlideRequested),
        Action::PreviousSlide => Msg::Deck(deck::Message::PreviousSlideRequested),
    }
}
