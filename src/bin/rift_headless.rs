//! Headless Runner
//!
//! Drives the simulation without a renderer: replays a scripted key sequence,
//! then prints a summary or a JSON snapshot.
//!
//! Script tokens (whitespace separated):
//!   KeyJ / KeyK / Escape / Digit1..Digit9   - commands, as bound in the prototype
//!   +KeyW / -KeyW (also A, S, D, arrows)     - press / release a movement key
//!   wait:N                                  - advance N frames

use std::path::PathBuf;

use clap::Parser;
use rift_core::entity::MovementInput;
use rift_core::simulation::{clamp_dt, EventLog};
use rift_core::{Command, Result, SimConfig, SimError, Simulation};

/// Headless Runner - scripted simulation without presentation
#[derive(Parser, Debug)]
#[command(name = "rift_headless")]
#[command(about = "Run the simulation core headless from a scripted key sequence")]
struct Args {
    /// TOML config file (defaults apply for anything it omits)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed, overriding the config
    #[arg(long)]
    seed: Option<u64>,

    /// Frames to run after the script finishes
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Frame delta in seconds (capped at the config's max_dt)
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Scripted key sequence
    #[arg(long, default_value = "")]
    script: String,

    /// Print the final snapshot as JSON instead of a text summary
    #[arg(long)]
    json: bool,

    /// Print every event as it happens
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// One parsed script token
#[derive(Debug, Clone, PartialEq)]
enum Step {
    Command(Command),
    Press(MoveKey),
    Release(MoveKey),
    Wait(u32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum MoveKey {
    Up,
    Down,
    Left,
    Right,
}

impl MoveKey {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "KeyW" | "ArrowUp" => Some(MoveKey::Up),
            "KeyS" | "ArrowDown" => Some(MoveKey::Down),
            "KeyA" | "ArrowLeft" => Some(MoveKey::Left),
            "KeyD" | "ArrowRight" => Some(MoveKey::Right),
            _ => None,
        }
    }

    fn set(self, input: &mut MovementInput, held: bool) {
        match self {
            MoveKey::Up => input.up = held,
            MoveKey::Down => input.down = held,
            MoveKey::Left => input.left = held,
            MoveKey::Right => input.right = held,
        }
    }
}

fn parse_script(script: &str) -> Result<Vec<Step>> {
    script
        .split_whitespace()
        .map(|token| {
            if let Some(n) = token.strip_prefix("wait:") {
                return n
                    .parse()
                    .map(Step::Wait)
                    .map_err(|e| SimError::InvalidConfig(format!("bad wait '{}': {}", token, e)));
            }
            if let Some(code) = token.strip_prefix('+') {
                if let Some(key) = MoveKey::from_code(code) {
                    return Ok(Step::Press(key));
                }
            }
            if let Some(code) = token.strip_prefix('-') {
                if let Some(key) = MoveKey::from_code(code) {
                    return Ok(Step::Release(key));
                }
            }
            Command::from_key_code(token)
                .map(Step::Command)
                .ok_or_else(|| SimError::InvalidConfig(format!("unknown script token '{}'", token)))
        })
        .collect()
}

struct Runner {
    sim: Simulation,
    log: EventLog,
    dt: f32,
    verbose: bool,
}

impl Runner {
    fn frame(&mut self) {
        self.sim.tick(self.dt);
        self.flush();
    }

    fn flush(&mut self) {
        let events = self.sim.drain_events();
        if self.verbose {
            for event in &events {
                println!("{}", event);
            }
        }
        self.log.extend(events);
    }

    fn run_step(&mut self, step: &Step) {
        match *step {
            Step::Command(command) => self.sim.apply(command),
            Step::Press(key) | Step::Release(key) => {
                let mut input = self.sim.input();
                key.set(&mut input, matches!(step, Step::Press(_)));
                self.sim.set_input(input);
            }
            Step::Wait(frames) => {
                for _ in 0..frames {
                    self.frame();
                }
            }
        }
        self.flush();
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("rift_core=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let steps = parse_script(&args.script)?;
    let dt = clamp_dt(args.dt, config.max_dt);
    let log = EventLog::new(config.event_log_capacity);

    let mut runner = Runner {
        sim: Simulation::new(config)?,
        log,
        dt,
        verbose: args.verbose,
    };
    runner.flush();

    for step in &steps {
        runner.run_step(step);
    }
    for _ in 0..args.frames {
        runner.frame();
    }

    let snapshot = runner.sim.snapshot();
    if args.json {
        println!("{}", snapshot.to_json()?);
        return Ok(());
    }

    println!("=== RIFT CORE ===");
    println!("{}", snapshot.status_line());
    println!(
        "Elapsed: {:.2}s{}",
        snapshot.elapsed,
        if snapshot.paused { " (paused)" } else { "" }
    );
    println!();
    for c in &snapshot.characters {
        println!(
            "{} {:<8} {:<8} HP {:>4}/{:<4} Corr {:>3}/{} {:?}{}",
            if c.active { ">" } else { " " },
            c.name,
            c.role.label(),
            c.hp.round(),
            c.max_hp,
            c.corruption.round(),
            snapshot.corruption_limit,
            c.tier,
            if c.incapacitated { " [incapacitated]" } else { "" }
        );
    }
    println!();
    println!("--- Recent events ---");
    for entry in runner.log.iter().take(10) {
        println!("{}", entry);
    }

    Ok(())
}
