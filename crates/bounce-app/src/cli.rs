//! Command-line options for the `bounce` binary.

use std::path::PathBuf;

use bounce_core::enums::{CollisionResponse, ScenePreset};
use bounce_sim::engine::SimConfig;

use crate::error::AppError;

pub const USAGE: &str = "bounce: headless circle physics toy\n\
     \n\
     Options:\n\
     \n\
       --config <path>      JSON SimConfig (flags below override it)\n\
       --scene <name>       rain | follow-mouse | follow-point (default: rain)\n\
       --collision <name>   ordered | negate (default: ordered)\n\
       --seed <N>           RNG seed (default: 42)\n\
       --ticks <N>          Ticks to run (default: 600)\n\
       --every <N>          Print every Nth frame snapshot (default: 60)\n\
       --fast               Do not throttle to the display rate\n\
     \n\
     Snapshots are printed to stdout as JSON lines. Set RUST_LOG for logs.\n";

pub const DEFAULT_TICKS: u64 = 600;
pub const DEFAULT_EVERY: u64 = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub config_path: Option<PathBuf>,
    pub scene: Option<ScenePreset>,
    pub collision: Option<CollisionResponse>,
    pub seed: Option<u64>,
    pub ticks: u64,
    pub every: u64,
    pub fast: bool,
    pub help: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            config_path: None,
            scene: None,
            collision: None,
            seed: None,
            ticks: DEFAULT_TICKS,
            every: DEFAULT_EVERY,
            fast: false,
            help: false,
        }
    }
}

impl RunOptions {
    /// Load the base config (file or defaults) and apply flag overrides.
    pub fn sim_config(&self) -> Result<SimConfig, AppError> {
        let mut config = match &self.config_path {
            Some(path) => SimConfig::load(path)?,
            None => SimConfig::default(),
        };
        if let Some(scene) = self.scene {
            config.scene = scene;
        }
        if let Some(collision) = self.collision {
            config.collision = collision;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        Ok(config)
    }
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, AppError> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| AppError::Usage(format!("{flag} requires a value")))
}

fn number(raw: &str, flag: &str) -> Result<u64, AppError> {
    raw.parse::<u64>()
        .map_err(|_| AppError::Usage(format!("{flag} expects a non-negative integer, got {raw:?}")))
}

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<RunOptions, AppError> {
    let mut opts = RunOptions::default();
    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--config" => {
                opts.config_path = Some(PathBuf::from(value(args, i, flag)?));
                i += 1;
            }
            "--scene" => {
                let raw = value(args, i, flag)?;
                opts.scene = Some(
                    ScenePreset::parse(raw)
                        .ok_or_else(|| AppError::Usage(format!("unknown scene: {raw}")))?,
                );
                i += 1;
            }
            "--collision" => {
                let raw = value(args, i, flag)?;
                opts.collision = Some(
                    CollisionResponse::parse(raw)
                        .ok_or_else(|| AppError::Usage(format!("unknown collision: {raw}")))?,
                );
                i += 1;
            }
            "--seed" => {
                opts.seed = Some(number(value(args, i, flag)?, flag)?);
                i += 1;
            }
            "--ticks" => {
                opts.ticks = number(value(args, i, flag)?, flag)?;
                i += 1;
            }
            "--every" => {
                opts.every = number(value(args, i, flag)?, flag)?.max(1);
                i += 1;
            }
            "--fast" => opts.fast = true,
            "help" | "--help" | "-h" => opts.help = true,
            other => return Err(AppError::Usage(format!("unknown argument: {other}"))),
        }
        i += 1;
    }
    Ok(opts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn defaults_when_empty() {
        let opts = parse_args(&[]).unwrap();
        assert_eq!(opts, RunOptions::default());
        assert_eq!(opts.sim_config().unwrap(), SimConfig::default());
    }

    #[test]
    fn flags_override_config() {
        let opts = parse_args(&args(
            "--scene follow-mouse --collision negate --seed 9 --ticks 10 --every 2 --fast",
        ))
        .unwrap();
        assert_eq!(opts.ticks, 10);
        assert_eq!(opts.every, 2);
        assert!(opts.fast);

        let config = opts.sim_config().unwrap();
        assert_eq!(config.scene, ScenePreset::FollowMouse);
        assert_eq!(config.collision, CollisionResponse::Negate);
        assert_eq!(config.seed, 9);
    }

    #[test]
    fn every_is_at_least_one() {
        assert_eq!(parse_args(&args("--every 0")).unwrap().every, 1);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(parse_args(&args("--scene snow")), Err(AppError::Usage(_))));
        assert!(matches!(parse_args(&args("--ticks -3")), Err(AppError::Usage(_))));
        assert!(matches!(parse_args(&args("--seed")), Err(AppError::Usage(_))));
        assert!(matches!(parse_args(&args("--bogus")), Err(AppError::Usage(_))));
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let opts = parse_args(&args("--config /nonexistent/bounce.json")).unwrap();
        assert!(matches!(opts.sim_config(), Err(AppError::Sim(_))));
    }
}
