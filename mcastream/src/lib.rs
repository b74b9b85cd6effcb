pub mod control;
pub mod sampler;
pub mod scanner;
pub mod sim;
pub mod trigger;

use argh::FromArgs;

#[derive(Debug, FromArgs, Clone)]
/// Pulse-height acquisition runtime: histograms converter events and
/// reports the spectrum and its statistics
pub struct CliArgs {
    /// print version information
    #[argh(switch, short = 'v')]
    pub version: bool,
    /// converter resolution in bits
    #[argh(option, default = "11")]
    pub bits: u8,
    /// mean simulated event rate, counts per second
    #[argh(option, default = "50000")]
    pub rate: u32,
    /// acquisition duration in seconds
    #[argh(option, short = 'd', default = "5")]
    pub duration: u64,
    /// run declaration file (JSON)
    #[argh(option, short = 'c')]
    pub config: Option<String>,
    /// write the final spectrum as TSV to stdout
    #[argh(switch)]
    pub dump: bool,
}

/// Messages from the control surface to the sampling loop
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Ctrl {
    /// Enable the trigger and record events
    Run,
    /// Suspend the trigger without clearing the table
    Halt,
}
