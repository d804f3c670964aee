/// UI (TUI) specific sub-commands executed by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Side effects requested by `update`, executed by the runner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    Tui(TuiCommand),
    /// Redraw the deck; coalesced by the runner
    RequestRender,
}

impl Cmd {
    pub fn resize(width: u16, height: u16) -> Self {
        Cmd::Tui(TuiCommand::Resize { width, height })
    }
}
