/// Operations exposed to buttons and key bindings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Start,
    Stop,
    /// Start when stopped, stop when running
    Toggle,
    /// Reset to frame 0 with a fresh random grid
    Reset,
}

impl Control {
    pub const fn label(self) -> &'static str {
        match self {
            Control::Start => "Start",
            Control::Stop => "Stop",
            Control::Toggle => "Start/Stop",
            Control::Reset => "Reset",
        }
    }
}
