/// Top-level screens of the drill.
///
/// `Setup` is initial. The only transitions are `Setup → Quiz`, `Quiz → Result`,
/// `Quiz → Setup` (abandon) and `Result → Setup` (restart).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    Setup,
    Quiz,
    Result,
}

impl Screen {
    /// Returns true if `self → next` is an allowed transition.
    #[must_use]
    pub fn can_transition_to(self, next: Screen) -> bool {
        matches!(
            (self, next),
            (Screen::Setup, Screen::Quiz)
                | (Screen::Quiz, Screen::Result)
                | (Screen::Quiz, Screen::Setup)
                | (Screen::Result, Screen::Setup)
        )
    }
}
