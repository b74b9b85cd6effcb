use mcatools::bus;
use rand::prelude::*;
use std::time::Duration;

use crate::trigger::PulseSource;

/// Simulated converter: a flat background under a few bell-shaped
/// peaks, paced at a fixed mean rate.
///
/// Peaks are shaped by averaging uniform draws, which is close enough
/// to Gaussian for a demo spectrum without a distributions crate.
pub struct SimSource {
    rng: StdRng,
    bits: u8,
    period: Duration,
    remaining: u64,
    peaks: Vec<(u16, u16)>,
}

impl SimSource {
    /// A source emitting `events` pulses at roughly `rate` counts per
    /// second (0 means unpaced), reproducible from `seed`.
    pub fn new(bits: u8, rate: u32, events: u64, seed: u64) -> SimSource {
        let span = 1u32 << bits;
        SimSource {
            rng: StdRng::seed_from_u64(seed),
            bits,
            period: if rate == 0 {
                Duration::ZERO
            } else {
                Duration::from_secs(1) / rate
            },
            remaining: events,
            peaks: vec![
                ((span / 4) as u16, (span / 64).max(1) as u16),
                ((span * 5 / 8) as u16, (span / 32).max(1) as u16),
            ],
        }
    }

    fn sample_channel(&mut self) -> u16 {
        let span = 1i32 << self.bits;
        // A quarter of the events land in the flat background
        if self.rng.gen_ratio(1, 4) {
            return self.rng.gen_range(0..span) as u16;
        }
        let (center, halfwidth) = self.peaks[self.rng.gen_range(0..self.peaks.len())];
        let mut off = 0i32;
        for _ in 0..3 {
            off += self.rng.gen_range(-i32::from(halfwidth)..=i32::from(halfwidth));
        }
        (i32::from(center) + off / 3).clamp(0, span - 1) as u16
    }
}

impl PulseSource for SimSource {
    fn next_pulse(&mut self) -> Option<u16> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        if !self.period.is_zero() {
            std::thread::sleep(self.period);
        }
        Some(bus::encode(self.sample_channel(), self.bits))
    }
}
