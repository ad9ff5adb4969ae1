//! Type definitions for the application state.

/// Which control has keyboard focus.
///
/// Tab walks the variants in declaration order, Shift+Tab walks back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Username,
    Search,
    Sort,
    ForksOnly,
    Repos,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Username,
        Focus::Search,
        Focus::Sort,
        Focus::ForksOnly,
        Focus::Repos,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Focus {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Focus {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Focus targets that take free text.
    pub fn is_text_input(self) -> bool {
        matches!(self, Focus::Username | Focus::Search)
    }
}
