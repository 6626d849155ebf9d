//! Simulation engine: the process-wide context driven once per frame.
//!
//! `Simulation` owns the store and the scheduler. Lifecycle:
//! construct (build entities, wire systems) → repeated `tick` calls → drop.
//! Completely headless; the caller supplies the drawing surface each tick.

use std::path::Path;

use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use bounce_core::constants::DEFAULT_SEED;
use bounce_core::enums::{CollisionResponse, ScenePreset};
use bounce_core::input::{BoundingRect, MouseEvent, MousePosition};
use bounce_core::state::FrameSnapshot;
use bounce_core::types::{Arena, EntityId};

use crate::error::{SimError, StoreError};
use crate::scheduler::Scheduler;
use crate::store::Store;
use crate::surface::RenderSurface;
use crate::systems;
use crate::world_setup::{self, SceneEntities};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for the initial population. Same seed = same run.
    pub seed: u64,
    pub scene: ScenePreset,
    pub collision: CollisionResponse,
    pub arena: Arena,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            scene: ScenePreset::default(),
            collision: CollisionResponse::default(),
            arena: Arena::default(),
        }
    }
}

impl SimConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

/// Build the fixed system order: clear, follow mouse, follow, gravity,
/// integrate, collision, render.
pub fn default_schedule(config: &SimConfig) -> Scheduler {
    Scheduler::new()
        .with(systems::ClearSystem)
        .with(systems::FollowMouseSystem)
        .with(systems::FollowSystem)
        .with(systems::GravitySystem)
        .with(systems::IntegrateSystem)
        .with(systems::CollisionSystem::new(config.collision, config.arena))
        .with(systems::RenderSystem)
}

pub struct Simulation {
    store: Store,
    scheduler: Scheduler,
    scene: SceneEntities,
    config: SimConfig,
    tick: u64,
}

impl Simulation {
    /// Create a simulation and populate its arena.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        let mut store = Store::new();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let scene = world_setup::setup_scene(&mut store, config.scene, &config.arena, &mut rng)?;
        let scheduler = default_schedule(&config);

        info!(
            "simulation ready: scene={} collision={} seed={} entities={}",
            config.scene.as_str(),
            config.collision.as_str(),
            config.seed,
            store.len()
        );

        Ok(Self {
            store,
            scheduler,
            scene,
            config,
            tick: 0,
        })
    }

    /// Run every system once, in order, and return the resulting frame.
    pub fn tick(&mut self, surface: &mut dyn RenderSurface) -> FrameSnapshot {
        self.scheduler.update(&mut self.store, surface);
        self.tick += 1;
        self.snapshot()
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        systems::snapshot::build_snapshot(&self.store, self.tick, self.config.scene)
    }

    /// Record a pointer move on the canvas. Takes effect on the next tick.
    pub fn mouse_moved(&mut self, event: MouseEvent, rect: &BoundingRect) -> Result<(), StoreError> {
        self.set_mouse(event.to_surface_local(rect))
    }

    /// Store a surface-local mouse position. Non-finite coordinates are
    /// rejected and the previous position is kept.
    pub fn set_mouse(&mut self, mouse: MousePosition) -> Result<(), StoreError> {
        let id = self.scene.canvas;
        let mut canvas = *self.store.canvas(id).ok_or(StoreError::UnknownEntity(id))?;
        canvas.mouse = mouse;
        self.store.attach(id, canvas)
    }

    pub fn mouse(&self) -> MousePosition {
        self.store
            .canvas(self.scene.canvas)
            .map(|c| c.mouse)
            .unwrap_or_default()
    }

    /// Number of completed ticks.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn canvas(&self) -> EntityId {
        self.scene.canvas
    }

    pub fn circles(&self) -> &[EntityId] {
        &self.scene.circles
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn system_names(&self) -> Vec<&'static str> {
        self.scheduler.system_names()
    }
}
