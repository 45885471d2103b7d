//! Navigation drawer state.
//!
//! The DOM wiring in `wasm::menu` mirrors this state onto the `active`
//! classes and the document scroll lock; keeping the transition table here
//! pins the invariant that an open drawer always locks scrolling.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Open drawer ⇒ the document behind it must not scroll.
    pub fn scroll_locked(self) -> bool {
        self.is_open()
    }
}
