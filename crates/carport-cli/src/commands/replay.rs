//! Replay recorded signal frames through a car interface session

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use can_chrysler_protocol::{ChryslerFrame, Fingerprint, MessageId};
use carport_can_common::{MessageSample, SignalFrame};
use carport_interface::{CarOutput, ChryslerInterface, InterfaceConfig};
use carport_types::CarControl;
use clap::Args;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::CliError;
use crate::output;

#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Interface configuration (YAML, or JSON by extension)
    #[arg(short, long, env = "CARPORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Recorded signal frames, one JSON object per line
    #[arg(short, long)]
    pub frames: PathBuf,

    /// Planner decisions, one JSON object per line, matched to frames by line
    #[arg(long)]
    pub controls: Option<PathBuf>,

    /// Observed fingerprint (JSON map of address to payload length), used
    /// when the configuration names no variant
    #[arg(long)]
    pub fingerprint: Option<PathBuf>,
}

/// One line of a frames file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FrameRecord {
    pub now_ns: u64,
    /// Keyed by bus message name, e.g. `EPS_STATUS`.
    pub messages: BTreeMap<String, MessageSample>,
}

impl FrameRecord {
    pub fn into_signal_frame(self) -> std::result::Result<SignalFrame<MessageId>, String> {
        let mut frame = SignalFrame::new(self.now_ns);
        for (name, sample) in self.messages {
            let id = MessageId::from_str(&name).map_err(|e| e.to_string())?;
            frame.insert(id, sample);
        }
        Ok(frame)
    }
}

/// What one replayed cycle produced.
#[derive(Debug, Clone, Serialize)]
pub struct CycleReport {
    pub cycle: usize,
    #[serde(flatten)]
    pub output: CarOutput,
    pub frames: Vec<ChryslerFrame>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    pub variant: String,
    pub cycles: usize,
    pub valid_cycles: usize,
    /// Cycles that put at least one frame on the bus.
    pub commanding_cycles: usize,
    pub frames_sent: usize,
    /// Cycles whose steering command was altered by the torque limiter.
    pub rate_limited_cycles: usize,
}

pub fn execute(args: &ReplayArgs, json: bool) -> Result<()> {
    let config = match &args.config {
        Some(path) => InterfaceConfig::load(path)
            .map_err(CliError::from)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => InterfaceConfig::default(),
    };

    let mut interface = start_session(config, args.fingerprint.as_deref())?;
    info!(variant = interface.variant().name(), "replay session started");

    let frames = read_jsonl::<FrameRecord>(&args.frames)?;
    let controls = match &args.controls {
        Some(path) => read_jsonl::<CarControl>(path)?,
        None => Vec::new(),
    };

    let mut summary = ReplaySummary {
        variant: interface.variant().name().to_string(),
        ..Default::default()
    };

    for (index, (line, record)) in frames.into_iter().enumerate() {
        let frame = record.into_signal_frame().map_err(|reason| {
            CliError::invalid_record(args.frames.display().to_string(), line, reason)
        })?;
        let control = controls
            .get(index)
            .map(|(_, control)| *control)
            .unwrap_or_default();

        let output = interface.update(&frame);
        let sent = interface.apply(&control);
        debug!(cycle = index, frames = sent.len(), "cycle replayed");

        summary.cycles += 1;
        summary.valid_cycles += usize::from(output.state.can_valid);
        summary.commanding_cycles += usize::from(!sent.is_empty());
        summary.frames_sent += sent.len();
        summary.rate_limited_cycles +=
            usize::from(!sent.is_empty() && interface.encoder_session().steer_rate_limited);

        let report = CycleReport {
            cycle: index,
            output,
            frames: sent,
        };
        output::print_cycle(&report, json);
    }

    output::print_summary(&summary, json);
    Ok(())
}

fn start_session(
    config: InterfaceConfig,
    fingerprint: Option<&Path>,
) -> Result<ChryslerInterface> {
    if config.variant.is_none() && fingerprint.is_none() {
        return Err(CliError::NoVariant.into());
    }

    let fingerprint = match fingerprint {
        Some(path) => {
            let file = File::open(path)
                .map_err(CliError::from)
                .with_context(|| format!("opening fingerprint {}", path.display()))?;
            serde_json::from_reader::<_, Fingerprint>(BufReader::new(file))
                .map_err(CliError::from)
                .with_context(|| format!("parsing fingerprint {}", path.display()))?
        }
        None => Fingerprint::new(),
    };

    let interface =
        ChryslerInterface::from_fingerprint(config, &fingerprint).map_err(CliError::from)?;
    Ok(interface)
}

/// Read a JSON-lines file, keeping 1-based line numbers. Blank lines are
/// skipped.
fn read_jsonl<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<(usize, T)>> {
    let file = File::open(path)
        .map_err(CliError::from)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut records = Vec::new();

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line_number = index + 1;
        let line = line
            .map_err(CliError::from)
            .with_context(|| format!("reading {}:{line_number}", path.display()))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record = serde_json::from_str(line).map_err(|e| {
            CliError::invalid_record(path.display().to_string(), line_number, e)
        })?;
        records.push((line_number, record));
    }

    Ok(records)
}
