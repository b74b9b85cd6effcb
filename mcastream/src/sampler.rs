use anyhow::Result;
use mcatools::bus;
use mcatools::cfg::Acquisition;
use mcatools::hist::Spectrum;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

use crate::Ctrl;

enum Step {
    Pulse(u16),
    Ctrl(Ctrl),
    Done,
}

/// Spawn the sampling loop, the interrupt-handler analogue.
///
/// While acquiring, pulses and control messages are both serviced.
/// While halted only control messages are, so the pulse channel backs
/// up and the source stalls on its handshake: the suspended trigger.
///
/// Per pulse: decode the address, record under the spectrum lock, then
/// send exactly one accept pulse, whether or not the bucket had room.
/// The inhibit line is not consulted (see [`mcatools::bus`]).
pub fn main(
    spectrum: Arc<Mutex<Spectrum>>,
    cfg: Acquisition,
    rx_pulse: flume::Receiver<u16>,
    tx_ack: flume::Sender<()>,
    rx_ctrl: flume::Receiver<Ctrl>,
) -> Result<()> {
    std::thread::spawn(move || {
        let bits = cfg.bits;
        let mut acquiring = true;
        loop {
            let step = if acquiring {
                flume::Selector::new()
                    .recv(&rx_pulse, |r| r.map(Step::Pulse).unwrap_or(Step::Done))
                    .recv(&rx_ctrl, |r| r.map(Step::Ctrl).unwrap_or(Step::Done))
                    .wait()
            } else {
                rx_ctrl.recv().map(Step::Ctrl).unwrap_or(Step::Done)
            };
            match step {
                Step::Pulse(raw) => {
                    let channel = bus::decode(raw, bits);
                    let events = {
                        let mut s = spectrum.lock();
                        s.record(channel);
                        s.stats.events
                    };
                    if cfg.liveness != 0 && events % cfg.liveness == 0 {
                        debug!("{} events", events);
                    }
                    if tx_ack.send(()).is_err() {
                        break;
                    }
                }
                Step::Ctrl(Ctrl::Run) => acquiring = true,
                Step::Ctrl(Ctrl::Halt) => acquiring = false,
                Step::Done => break,
            }
        }
    });
    Ok(())
}
