use anyhow::Result;

/// A source of detected pulses.
///
/// `next_pulse` blocks until the converter signals its ready line and
/// returns the raw active-low bus word, or `None` once the source is
/// exhausted. The word must stay valid until the accept pulse comes
/// back; the trigger loop never asks for another word before then.
pub trait PulseSource: Send {
    fn next_pulse(&mut self) -> Option<u16>;
}

/// Spawn the trigger thread, pacing raw bus words into the sampling
/// loop one conversion at a time.
///
/// The bounded pulse channel plus the wait on the accept channel keeps
/// at most one conversion in service: no word is offered while the
/// previous one is still unacknowledged. This is the sole re-entrancy
/// guard for the sampling loop.
pub fn main<S>(
    mut source: S,
    tx_pulse: flume::Sender<u16>,
    rx_ack: flume::Receiver<()>,
) -> Result<()>
where
    S: PulseSource + 'static,
{
    std::thread::spawn(move || {
        while let Some(raw) = source.next_pulse() {
            if tx_pulse.send(raw).is_err() {
                break;
            }
            if rx_ack.recv().is_err() {
                break;
            }
        }
    });
    Ok(())
}
