pub mod bus;
pub mod cfg;
pub mod hist;
pub mod mode;

/// Saturation cap for a single histogram counter
pub const COUNT_CAP: u16 = u16::MAX;

/// Default converter resolution in bits
pub const DEFAULT_BITS: u8 = 11;

/// One raster point for the display collaborator: a pair of levels on
/// the sweep and intensity axes
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub struct Sample {
    /// Raster position along the sweep
    pub x: u8,
    /// Scaled count level at that position
    pub y: u8,
}
