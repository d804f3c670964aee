/// Messages specific to SystemState
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemMsg {
    Quit,
    Resize(u16, u16),
    Tick,
}

impl SystemMsg {
    /// Determine if this is a frequent message during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, SystemMsg::Tick)
    }
}
