use anyhow::Result;
use mcatools::hist::Spectrum;
use mcatools::Sample;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Full-scale level of the display output, 8 bits per axis
pub const FULL_SCALE: u32 = 0xff;

/// Spawn the display sweep thread.
///
/// Each dwell period one counter is read and one `(x, y)` pair is
/// emitted, with `y = count >> scale` clamped to [`FULL_SCALE`]. The
/// lock is held for a single counter read per sample, so the sampling
/// loop is never held off for longer than that. After any sweep in
/// which an unclamped level exceeded full scale, the shared scale
/// factor is raised by one; it never drops back on its own.
pub fn main(
    spectrum: Arc<Mutex<Spectrum>>,
    tx: flume::Sender<Sample>,
    raster: usize,
    dwell: Duration,
    scale: Arc<AtomicU32>,
) -> Result<()> {
    std::thread::spawn(move || {
        // One sweep covers the whole table at a fixed stride; a table
        // smaller than the raster shortens the sweep to one pass
        let (raster, stride) = {
            let s = spectrum.lock();
            let raster = raster.clamp(1, 256).min(s.hist.len());
            (raster, (s.hist.len() / raster).max(1))
        };
        loop {
            let shift = scale.load(Ordering::Relaxed);
            let mut clipped = false;
            for pos in 0..raster {
                let count = { spectrum.lock().hist.get((pos * stride) as u16) };
                let level = u32::from(count) >> shift;
                if level > FULL_SCALE {
                    clipped = true;
                }
                let sample = Sample {
                    x: pos as u8,
                    y: level.min(FULL_SCALE) as u8,
                };
                if tx.send(sample).is_err() {
                    return;
                }
                if !dwell.is_zero() {
                    std::thread::sleep(dwell);
                }
            }
            if clipped {
                scale.fetch_add(1, Ordering::Relaxed);
            }
        }
    });
    Ok(())
}
