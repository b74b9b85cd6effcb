//! Acquisition mode selector

use serde::{Deserialize, Serialize};

/// Selector state for the acquisition loop
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Mode {
    /// Trigger enabled, events recorded
    Acquiring,
    /// Trigger suspended, table kept
    Halted,
    /// Transient: clear the table, then settle
    Resetting,
}

impl Mode {
    /// The state a selector left in this position settles into once a
    /// reset completes. A selector still reading `Resetting` settles
    /// into `Acquiring` rather than clearing again.
    pub fn settled(self) -> Mode {
        match self {
            Mode::Resetting => Mode::Acquiring,
            m => m,
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Acquiring
    }
}
