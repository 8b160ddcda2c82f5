//! Command-line options.
//!
//! - `--steps N` - initial curve steps per section (at least 1).
//! - `--seed N` - seed for point velocities, for reproducible sessions.
//! - `--running` - start with motion enabled instead of paused.
//! - `--profile` - log frame timing statistics when the session ends.

use knot_core::{config::Config, points::VelocitySource, steps::StepCount};
use std::str::FromStr;

#[derive(Debug)]
pub struct Options {
    pub cfg: Config,
    pub seed: Option<u64>,
    pub profile: bool,
}

impl Options {
    /// Parses `args` (program name included). Invalid values are logged and
    /// replaced by defaults.
    pub fn from_args(args: &[String]) -> Self {
        let mut cfg = Config::default();

        if let Some(n) = parse_arg::<u32>(args, "--steps") {
            match StepCount::new(n) {
                Some(steps) => cfg.steps = steps,
                None => log::warn!("--steps must be at least 1, using {}", cfg.steps.get()),
            }
        }
        if has_flag(args, "--running") {
            cfg.start_paused = false;
        }

        Self {
            cfg,
            seed: parse_arg(args, "--seed"),
            profile: has_flag(args, "--profile"),
        }
    }

    pub fn velocity_source(&self) -> VelocitySource {
        match self.seed {
            Some(seed) => VelocitySource::seeded(seed, self.cfg.max_speed),
            None => VelocitySource::random(self.cfg.max_speed),
        }
    }
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|v| v == flag)
}

fn parse_arg<T: FromStr>(args: &[String], flag: &str) -> Option<T> {
    let raw = args
        .iter()
        .position(|v| v == flag)
        .and_then(|i| args.get(i + 1))?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("ignoring invalid value {raw:?} for {flag}");
            None
        }
    }
}
