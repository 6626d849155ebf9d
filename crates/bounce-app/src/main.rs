//! bounce: run the circle simulation headlessly and print frame snapshots.
//!
//! Usage:
//!   bounce --scene rain --ticks 600 --every 60
//!   bounce --scene follow-mouse --fast --ticks 300 --every 30

use std::io::Write;
use std::process;

use log::{error, info};

use bounce_app::cli::{self, RunOptions};
use bounce_app::error::AppError;
use bounce_app::game_loop::{spawn_game_loop, LoopCommand, LoopSettings};
use bounce_core::enums::ScenePreset;
use bounce_core::input::{BoundingRect, MouseEvent};
use bounce_core::types::Arena;

/// Pointer orbiting the arena center, one revolution every 4 seconds.
fn scripted_pointer(tick: u64, arena: &Arena) -> MouseEvent {
    let center = arena.center();
    let angle = tick as f64 * std::f64::consts::TAU / 240.0;
    let radius = arena.height / 3.0;
    MouseEvent::new(
        center.x + angle.cos() * radius,
        center.y + angle.sin() * radius,
    )
}

fn run(opts: &RunOptions) -> Result<(), AppError> {
    let config = opts.sim_config()?;
    let arena = config.arena;
    let follow_mouse = config.scene == ScenePreset::FollowMouse;
    info!(
        "running {} ticks of {} (every {}, fast={})",
        opts.ticks,
        config.scene.as_str(),
        opts.every,
        opts.fast
    );

    let settings = LoopSettings {
        max_ticks: Some(opts.ticks),
        emit_every: if follow_mouse { 1 } else { opts.every },
        throttle: !opts.fast,
    };
    let game = spawn_game_loop(config, settings)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for snapshot in game.frames.iter() {
        if follow_mouse {
            // The surface sits at the client origin.
            let event = scripted_pointer(snapshot.tick, &arena);
            let _ = game.commands.send(LoopCommand::MouseMove {
                event,
                rect: BoundingRect::default(),
            });
        }
        if snapshot.tick % opts.every == 0 {
            writeln!(out, "{}", serde_json::to_string(&snapshot)?)?;
        }
    }
    out.flush()?;

    let ticks = game.join()?;
    info!("done after {ticks} ticks");
    Ok(())
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = match cli::parse_args(&args) {
        Ok(opts) => opts,
        Err(e) => {
            error!("{e}");
            eprint!("{}", cli::USAGE);
            process::exit(1);
        }
    };
    if opts.help {
        eprint!("{}", cli::USAGE);
        return;
    }

    if let Err(e) = run(&opts) {
        error!("{e}");
        process::exit(1);
    }
}
