//! Configuration tools: formats for declaring and recording runs

use chrono::{offset::Local, DateTime};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::mode::Mode;

/// Acquisition settings shared by the sampling loop and the display
/// sweep. Durations are parsed as in
/// [humantime](https://docs.rs/humantime/), e.g. `50us` or `2ms`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Acquisition {
    /// Converter resolution in bits; the table holds `2^bits` channels
    pub bits: u8,
    /// Display sweep dwell per raster position
    #[serde(with = "humantime_serde")]
    pub dwell: Duration,
    /// Raster positions per display sweep
    pub raster: usize,
    /// Events between liveness markers in the log; 0 disables them
    pub liveness: u64,
    /// Mode the selector settles into after a reset
    pub after_reset: Mode,
}

impl Default for Acquisition {
    fn default() -> Self {
        Acquisition {
            bits: crate::DEFAULT_BITS,
            dwell: Duration::from_micros(50),
            raster: 256,
            liveness: 1 << 16,
            after_reset: Mode::Acquiring,
        }
    }
}

/// Run specification for both declaring and recording runs in text
/// files. For concreteness, JSON is the on-disk format.
///
/// A declaration sets a description, optionally a time limit and the
/// acquisition settings. When the run is recorded, the timestamp and
/// the final statistics are filled in alongside whatever the
/// declaration provided.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Run {
    pub description: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Local>>,
    #[serde(with = "humantime_serde", default)]
    pub limit: Option<Duration>,
    #[serde(default)]
    pub acquisition: Option<Acquisition>,
    #[serde(default)]
    pub events: Option<u64>,
    #[serde(default)]
    pub maximum: Option<u16>,
}

/// Creates an empty Run. Specific defaults should be implementation-dependent.
impl Default for Run {
    fn default() -> Self {
        Run {
            description: String::new(),
            timestamp: None,
            limit: None,
            acquisition: None,
            events: None,
            maximum: None,
        }
    }
}
