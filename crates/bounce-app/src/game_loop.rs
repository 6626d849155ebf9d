//! Game loop thread: ticks the simulation at the display rate and emits
//! snapshots.
//!
//! The simulation is created inside this thread because it's cleaner for
//! ownership. Pointer input arrives via `mpsc` and is applied only between
//! ticks, so input handling never overlaps a tick. There is no frame
//! skipping: a slow tick simply delays the next one.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{debug, info};

use bounce_core::constants::FRAME_RATE;
use bounce_core::input::{BoundingRect, MouseEvent};
use bounce_core::state::FrameSnapshot;
use bounce_sim::engine::{SimConfig, Simulation};
use bounce_sim::error::SimError;
use bounce_sim::surface::RecordingSurface;

use crate::error::AppError;

/// Nominal duration of one frame.
pub const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Messages from the host to the loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// A pointer move over the drawing surface.
    MouseMove {
        event: MouseEvent,
        rect: BoundingRect,
    },
    /// Stop after the current tick.
    Shutdown,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopSettings {
    /// Stop after this many ticks; `None` runs until shutdown.
    pub max_ticks: Option<u64>,
    /// Emit every Nth snapshot.
    pub emit_every: u64,
    /// Sleep to hold `FRAME_RATE`; off for batch runs.
    pub throttle: bool,
}

impl Default for LoopSettings {
    fn default() -> Self {
        Self {
            max_ticks: None,
            emit_every: 1,
            throttle: true,
        }
    }
}

/// Handle to a running loop thread.
pub struct GameLoop {
    pub commands: mpsc::Sender<LoopCommand>,
    pub frames: mpsc::Receiver<FrameSnapshot>,
    handle: JoinHandle<Result<u64, SimError>>,
}

impl GameLoop {
    /// Wait for the loop to finish and return the number of ticks it ran.
    pub fn join(self) -> Result<u64, AppError> {
        drop(self.commands);
        drop(self.frames);
        let ticks = self.handle.join().map_err(|_| AppError::LoopPanicked)??;
        Ok(ticks)
    }
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop(config: SimConfig, settings: LoopSettings) -> Result<GameLoop, AppError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();
    let (frame_tx, frame_rx) = mpsc::channel::<FrameSnapshot>();

    let handle = std::thread::Builder::new()
        .name("bounce-game-loop".into())
        .spawn(move || run_game_loop(config, settings, &cmd_rx, &frame_tx))?;

    Ok(GameLoop {
        commands: cmd_tx,
        frames: frame_rx,
        handle,
    })
}

/// The game loop. Runs until the tick limit, a Shutdown command, or either
/// channel disconnecting.
fn run_game_loop(
    config: SimConfig,
    settings: LoopSettings,
    cmd_rx: &mpsc::Receiver<LoopCommand>,
    frame_tx: &mpsc::Sender<FrameSnapshot>,
) -> Result<u64, SimError> {
    let mut sim = Simulation::new(config)?;
    let mut surface = RecordingSurface::new();
    let emit_every = settings.emit_every.max(1);
    let mut next_frame_time = Instant::now();

    loop {
        if settings.max_ticks.is_some_and(|max| sim.tick_count() >= max) {
            break;
        }

        // 1. Drain all pending input
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::MouseMove { event, rect }) => {
                    if let Err(e) = sim.mouse_moved(event, &rect) {
                        debug!("mouse move ignored: {e}");
                    }
                }
                Ok(LoopCommand::Shutdown) => {
                    info!("game loop shut down after {} ticks", sim.tick_count());
                    return Ok(sim.tick_count());
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return Ok(sim.tick_count()),
            }
        }

        // 2. Advance one tick; the recorded frame is discarded once emitted
        surface.clear();
        let snapshot = sim.tick(&mut surface);

        // 3. Emit
        if snapshot.tick % emit_every == 0 && frame_tx.send(snapshot).is_err() {
            debug!("frame receiver gone; stopping");
            break;
        }

        // 4. Sleep until the next frame. A late frame resets the schedule
        //    instead of bursting to catch up.
        if settings.throttle {
            next_frame_time += FRAME_DURATION;
            let now = Instant::now();
            if next_frame_time > now {
                std::thread::sleep(next_frame_time - now);
            } else {
                next_frame_time = now;
            }
        }
    }

    Ok(sim.tick_count())
}
