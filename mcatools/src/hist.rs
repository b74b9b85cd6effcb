//! Saturating histogram storage and its running statistics

use crate::COUNT_CAP;

/// Fixed-size table of saturating counters, one per energy channel.
///
/// A counter at [`COUNT_CAP`] stays there: further increments are
/// no-ops, never a wrap back to zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram {
    counts: Vec<u16>,
    bits: u8,
}

impl Histogram {
    /// A zeroed table of `2^bits` channels
    pub fn new(bits: u8) -> Histogram {
        assert!(crate::bus::valid_bits(bits));
        Histogram {
            counts: vec![0; 1 << bits],
            bits,
        }
    }

    pub fn bits(&self) -> u8 {
        self.bits
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn get(&self, channel: u16) -> u16 {
        self.counts[channel as usize]
    }

    pub fn counts(&self) -> &[u16] {
        &self.counts
    }

    /// Saturating increment. Returns the counter value after the
    /// event, unchanged if the counter was already at the cap.
    pub fn increment(&mut self, channel: u16) -> u16 {
        let c = &mut self.counts[channel as usize];
        if *c < COUNT_CAP {
            *c += 1;
        }
        *c
    }

    /// Full rescan for the largest counter. The sampling path keeps
    /// [`Stats::maximum`] current in O(1) instead; this is for resets
    /// and verification.
    pub fn max(&self) -> u16 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn clear(&mut self) {
        self.counts.fill(0);
    }
}

/// Running totals co-maintained with the table
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Accepted pulses since the last reset, counted whether or not
    /// the target bucket had room
    pub events: u64,
    /// Largest counter in the table
    pub maximum: u16,
}

/// The table and its statistics, kept together so one lock covers both
/// and a reader can never see them torn apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Spectrum {
    pub hist: Histogram,
    pub stats: Stats,
}

impl Spectrum {
    pub fn new(bits: u8) -> Spectrum {
        Spectrum {
            hist: Histogram::new(bits),
            stats: Stats::default(),
        }
    }

    /// Record one accepted pulse on `channel`: saturating bucket
    /// increment, O(1) maximum update, unconditional event count.
    pub fn record(&mut self, channel: u16) {
        let c = self.hist.increment(channel);
        if c > self.stats.maximum {
            self.stats.maximum = c;
        }
        self.stats.events += 1;
    }

    /// Zero the table and both statistics. Idempotent.
    pub fn clear(&mut self) {
        self.hist.clear();
        self.stats = Stats::default();
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Owned snapshot of all counters in ascending channel order
    pub fn dump(&self) -> Vec<u16> {
        self.hist.counts().to_vec()
    }
}
