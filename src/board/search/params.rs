#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Plies searched when nothing else is asked for
pub const DEFAULT_DEPTH: u32 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchParams {
    /// Full-width search depth in plies
    pub depth: u32,
}

impl SearchParams {
    #[must_use]
    pub const fn with_depth(depth: u32) -> Self {
        SearchParams { depth }
    }

    /// Depth the root actually searches; the root always looks one ply ahead
    /// so it has a move to return.
    #[must_use]
    pub const fn root_depth(self) -> u32 {
        if self.depth == 0 {
            1
        } else {
            self.depth
        }
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            depth: DEFAULT_DEPTH,
        }
    }
}
