//! questboard-sim: headless challenge and round simulation.
//!
//! Drives the challenge session and round orchestration without a
//! browser or a board rig. Useful for:
//!
//! - Checking how trace quality maps to scores (`trace --trace offset`)
//! - Reproducing a full round from a seed (`round --seed 7`)
//! - Feeding raw rig frames through the codec and sensor matching
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin questboard-sim -- trace --shape circle
//! cargo run --release --bin questboard-sim -- round --seed 7 --frames "4,EFFECT_DONE,17"
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use questboard_challenge::{
    ChallengeConfig, ChallengeSession, Point, SessionPhase, ShapeKind, shape,
};
use questboard_game::{BoardSensors, GameRound, QuestCatalog, SensorOutcome};
use questboard_rig::RigEvent;

/// Headless questboard challenge and round simulation.
#[derive(Parser)]
#[command(name = "questboard-sim", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run one tracing challenge attempt with a synthetic trace.
    Trace(TraceArgs),
    /// Draw a round and feed rig frames through sensor matching.
    Round(RoundArgs),
}

#[derive(Parser)]
struct TraceArgs {
    /// Which reference shape to trace.
    #[arg(long, value_enum, default_value_t = Shape::Circle)]
    shape: Shape,

    /// Synthetic trace quality.
    #[arg(long, value_enum, default_value_t = Trace::Perfect)]
    trace: Trace,

    /// Horizontal offset in pixels for `--trace offset`.
    #[arg(long, default_value_t = 30.0)]
    offset_px: f64,

    /// Stop capturing after this many seconds instead of letting the
    /// countdown expire.
    #[arg(long)]
    stop_after: Option<u32>,

    /// Write the post-scoring snapshot as a PNG.
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Output the result as JSON instead of a human-readable report.
    #[arg(long)]
    json: bool,

    /// Full challenge config as a JSON string.
    ///
    /// When provided, a valid `ChallengeConfig` serialization replaces
    /// the defaults.
    #[arg(long)]
    config_json: Option<String>,
}

#[derive(Parser)]
struct RoundArgs {
    /// RNG seed for the number draw and quest picks.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Comma-separated raw rig frames to replay (e.g. "4,EFFECT_DONE,17").
    #[arg(long, default_value = "")]
    frames: String,

    /// Output the round report as JSON.
    #[arg(long)]
    json: bool,
}

/// Shape selection.
#[derive(Clone, Copy, ValueEnum)]
enum Shape {
    /// Parametric heart curve.
    Heart,
    /// Circle of fixed radius.
    Circle,
    /// Five-pointed star.
    Star,
}

impl From<Shape> for ShapeKind {
    fn from(shape: Shape) -> Self {
        match shape {
            Shape::Heart => Self::Heart,
            Shape::Circle => Self::Circle,
            Shape::Star => Self::Star,
        }
    }
}

/// Machine-readable summary of a drawn round.
#[derive(Debug, Serialize)]
struct RoundReport {
    numbers: Vec<u8>,
}

/// Synthetic trace quality.
#[derive(Clone, Copy, ValueEnum)]
enum Trace {
    /// Replay the ideal outline exactly.
    Perfect,
    /// Replay the ideal outline shifted horizontally by `--offset-px`.
    Offset,
    /// Draw nothing and let the countdown expire.
    None,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Trace(args) => run_trace(&args),
        Command::Round(args) => run_round(&args),
    }
}

/// Replay a trace of the ideal outline through the pointer protocol.
fn replay_trace(session: &mut ChallengeSession, kind: ShapeKind, offset: f64) {
    let outline = shape::render_outline(kind, session.config().surface);
    let points = outline.points();
    let Some(&first) = points.first() else {
        return;
    };
    session.pointer_down(Point::new(first.x + offset, first.y));
    for p in &points[1..] {
        session.pointer_move(Point::new(p.x + offset, p.y));
    }
    session.pointer_up();
}

fn run_trace(args: &TraceArgs) -> ExitCode {
    let config: ChallengeConfig = match args.config_json.as_deref() {
        Some(json) => match serde_json::from_str(json) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error parsing --config-json: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => ChallengeConfig::default(),
    };
    let countdown = config.countdown_seconds;
    let kind = ShapeKind::from(args.shape);

    let mut session = ChallengeSession::new(config);
    if let Err(e) = session.arm(kind, None) {
        eprintln!("Error arming session: {e}");
        return ExitCode::FAILURE;
    }
    session.start();

    match args.trace {
        Trace::Perfect => replay_trace(&mut session, kind, 0.0),
        Trace::Offset => replay_trace(&mut session, kind, args.offset_px),
        Trace::None => {}
    }

    match args.stop_after {
        Some(secs) => {
            for _ in 0..secs.min(countdown) {
                session.tick();
            }
            session.stop();
        }
        None => {
            while session.phase() == SessionPhase::Capturing {
                session.tick();
            }
        }
    }

    let Some(result) = session.result() else {
        eprintln!("Session ended without a result");
        return ExitCode::FAILURE;
    };

    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing result: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("Shape: {kind:?}");
        if let Some(breakdown) = session.breakdown() {
            println!(
                "Pixels: {} drawn of {} inspected",
                breakdown.drawn, breakdown.total
            );
        }
        println!("Score: {:.2}%", result.percentage);
        println!("Passed: {}", if result.passed { "yes" } else { "no" });
    }

    if let Some(ref path) = args.snapshot {
        let Some(snapshot) = session.snapshot() else {
            eprintln!("No snapshot available");
            return ExitCode::FAILURE;
        };
        let bytes = match questboard_export::snapshot_png(snapshot) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("Error encoding snapshot: {e}");
                return ExitCode::FAILURE;
            }
        };
        if let Err(e) = std::fs::write(path, &bytes) {
            eprintln!("Error writing {}: {e}", path.display());
            return ExitCode::FAILURE;
        }
        eprintln!("Snapshot written to {} ({} bytes)", path.display(), bytes.len());
    }

    ExitCode::SUCCESS
}

fn run_round(args: &RoundArgs) -> ExitCode {
    let catalog = match QuestCatalog::embedded() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error loading embedded catalogue: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut rng = StdRng::seed_from_u64(args.seed);
    let round = match GameRound::draw(&catalog, &mut rng) {
        Ok(round) => round,
        Err(e) => {
            eprintln!("Error drawing round: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        let report = RoundReport {
            numbers: round.numbers().to_vec(),
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing round: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("Drawn numbers: {:?}", round.numbers());
    }

    let mut sensors = BoardSensors::new();
    let mut triggered = None;

    for frame in args.frames.split(',').filter(|f| !f.is_empty()) {
        match RigEvent::parse(frame.trim()) {
            Ok(RigEvent::SensorActivated(id)) => {
                match sensors.sensor_activated(id, &round, &mut rng) {
                    SensorOutcome::OutOfRange => {
                        println!("frame {frame:?}: cell {id} out of range");
                    }
                    SensorOutcome::Noted => {
                        println!("frame {frame:?}: cell {id} noted (square {})", id + 1);
                    }
                    SensorOutcome::Matched { number, quest } => {
                        println!(
                            "frame {frame:?}: square {number} matched, quest '{}' ({:?})",
                            quest.title, quest.kind
                        );
                        if triggered.is_none() {
                            triggered = Some(quest.clone());
                        }
                    }
                }
            }
            Ok(RigEvent::EffectDone) => println!("frame {frame:?}: effect done"),
            Err(e) => println!("frame {frame:?}: {e}"),
        }
    }

    println!("Active cells: {:?}", sensors.active_cells());

    // Run the first auto-triggered quest when it is a tracing challenge.
    if let Some(quest) = triggered {
        if quest.kind.is_trace_challenge() {
            println!("Running '{}' with a perfect trace...", quest.title);
            let mut session = ChallengeSession::new(ChallengeConfig::default());
            if let Err(e) = session.arm_for_quest(&quest) {
                eprintln!("Error arming quest session: {e}");
                return ExitCode::FAILURE;
            }
            session.start();
            if let Some(kind) = session.shape() {
                replay_trace(&mut session, kind, 0.0);
            }
            session.stop();
            if let Some(result) = session.result() {
                println!(
                    "Quest result: {:.2}% ({})",
                    result.percentage,
                    if result.passed { "passed" } else { "failed" }
                );
            }
        } else {
            println!(
                "First triggered quest '{}' is a {:?} quest, nothing to simulate",
                quest.title, quest.kind
            );
        }
    }

    ExitCode::SUCCESS
}
