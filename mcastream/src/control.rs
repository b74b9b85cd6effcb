use anyhow::Result;
use mcatools::hist::{Spectrum, Stats};
use mcatools::mode::Mode;
use parking_lot::Mutex;
use std::sync::Arc;

use crate::Ctrl;

/// The read/reset operations and mode selector exposed to the host
/// command collaborator.
///
/// Every multi-step access to the shared spectrum happens under a
/// single lock acquisition, so the sampling loop can never interleave
/// mid-operation: the firmware's interrupt-mask bracket becomes the
/// scoped mutex guard, released on all exit paths.
pub struct Control {
    spectrum: Arc<Mutex<Spectrum>>,
    tx_ctrl: flume::Sender<Ctrl>,
    mode: Mode,
    after_reset: Mode,
}

impl Control {
    pub fn new(
        spectrum: Arc<Mutex<Spectrum>>,
        tx_ctrl: flume::Sender<Ctrl>,
        after_reset: Mode,
    ) -> Control {
        Control {
            spectrum,
            tx_ctrl,
            mode: Mode::Acquiring,
            after_reset,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Consistent `(events, maximum)` snapshot: both fields read under
    /// one lock acquisition, never torn by an event between them.
    pub fn read_stats(&self) -> Stats {
        self.spectrum.lock().stats()
    }

    /// Snapshot of all `2^bits` counters in ascending channel order.
    ///
    /// The clone happens in a single lock acquisition, so the dump is
    /// one consistent instant of the table; the trigger is suspended
    /// only for the copy, not for however long the host takes to drain
    /// the result. The returned vector can be iterated from the start
    /// any number of times.
    pub fn dump(&self) -> Vec<u16> {
        self.spectrum.lock().dump()
    }

    /// Zero every counter and both statistics. Idempotent; leaves the
    /// system at `events = 0, maximum = 0`.
    pub fn reset(&self) {
        self.spectrum.lock().clear();
    }

    /// Drive the mode selector. `Resetting` clears the table and then
    /// settles into the configured post-reset state; `Halted` and
    /// `Acquiring` suspend and resume the sampling of pulses.
    pub fn set_mode(&mut self, mode: Mode) -> Result<()> {
        match mode {
            Mode::Resetting => {
                self.reset();
                return self.set_mode(self.after_reset.settled());
            }
            Mode::Halted => self.tx_ctrl.send(Ctrl::Halt)?,
            Mode::Acquiring => self.tx_ctrl.send(Ctrl::Run)?,
        }
        self.mode = mode;
        Ok(())
    }
}
