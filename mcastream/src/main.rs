use anyhow::{ensure, Result};
use chrono::Local;
use mcatools::bus;
use mcastream::control::Control;
use mcastream::{sampler, scanner, sim, trigger, CliArgs};
use mcatools::cfg::{Acquisition, Run};
use mcatools::hist::Spectrum;
use mcatools::mode::Mode;
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

fn main() -> Result<()> {
    // Parse command line arguments
    let args: CliArgs = argh::from_env();

    if args.version {
        println!(concat!(env!("CARGO_BIN_NAME"), " ", env!("CARGO_PKG_VERSION")));
        return Ok(());
    }

    tracing_subscriber::fmt::init();

    // Load the run declaration, or fall back to command line arguments
    let config = match &args.config {
        Some(c) => {
            let f = File::open(c)?;
            let rdr = BufReader::new(f);
            serde_json::from_reader(rdr)?
        }
        None => Run::default(),
    };
    let cfg = config.acquisition.clone().unwrap_or(Acquisition {
        bits: args.bits,
        ..Default::default()
    });
    let limit = config.limit.unwrap_or(Duration::from_secs(args.duration));
    ensure!(
        bus::valid_bits(cfg.bits),
        "bits must be between 1 and {}",
        bus::MAX_BITS
    );

    let spectrum = Arc::new(Mutex::new(Spectrum::new(cfg.bits)));
    let scale = Arc::new(AtomicU32::new(0));

    let (tx_pulse, rx_pulse) = flume::bounded(1);
    let (tx_ack, rx_ack) = flume::bounded(1);
    let (tx_ctrl, rx_ctrl) = flume::unbounded();
    let (tx_scan, rx_scan) = flume::bounded(1024);

    // Acquisition threads: simulated converter, trigger, sampler
    let source = sim::SimSource::new(cfg.bits, args.rate, u64::MAX, rand::random());
    trigger::main(source, tx_pulse, rx_ack)?;
    sampler::main(spectrum.clone(), cfg.clone(), rx_pulse, tx_ack, rx_ctrl)?;

    // Display sweep; nothing is attached to the scope here, so drain
    // the samples
    scanner::main(spectrum.clone(), tx_scan, cfg.raster, cfg.dwell, scale.clone())?;
    std::thread::spawn(move || while rx_scan.recv().is_ok() {});

    let mut control = Control::new(spectrum.clone(), tx_ctrl, cfg.after_reset);

    let timestamp = Local::now();
    let tick_rate = Duration::from_secs(1);
    let first_tick = Instant::now();
    let mut last_tick = first_tick;
    loop {
        let stats = control.read_stats();
        info!(
            "{} events, maximum {}, scale {}",
            stats.events,
            stats.maximum,
            scale.load(Ordering::Relaxed),
        );

        if first_tick.elapsed() > limit {
            break;
        }

        // Sleep for the rest of tick rate
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));
        std::thread::sleep(timeout);
        last_tick = Instant::now();
    }

    control.set_mode(Mode::Halted)?;

    let stats = control.read_stats();
    let dump = control.dump();
    info!(
        "run complete: {} events, maximum {}",
        stats.events, stats.maximum
    );

    if args.dump {
        let stdout = std::io::stdout();
        let mut wtr = BufWriter::new(stdout.lock());
        for (channel, count) in dump.iter().enumerate() {
            writeln!(wtr, "{}\t{}", channel, count)?;
        }
    }

    // Record the run to disk alongside the declaration
    if let Some(c) = args.config {
        let record = Run {
            timestamp: Some(timestamp),
            limit: Some(limit),
            acquisition: Some(cfg),
            events: Some(stats.events),
            maximum: Some(stats.maximum),
            ..config
        };
        let json_record = serde_json::to_string_pretty(&record)?;

        let cfg_path = std::path::PathBuf::from(c);
        let mut rcd_stem = cfg_path
            .as_path()
            .file_stem()
            .unwrap_or_else(|| std::ffi::OsStr::new("data"))
            .to_string_lossy()
            .to_string();
        rcd_stem.push('_');
        rcd_stem.push_str(&timestamp.format("%F_%H-%M-%S").to_string());
        let mut rcd_path = cfg_path.with_file_name(rcd_stem);
        rcd_path.set_extension("json");
        let f = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&rcd_path)?;
        let mut wtr = BufWriter::new(f);
        wtr.write_all(json_record.as_bytes())?;
        info!("run record written to {}", rcd_path.display());
    }

    Ok(())
}
