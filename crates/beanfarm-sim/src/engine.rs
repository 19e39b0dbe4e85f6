//! Simulation engine: the frame loop of the farm.
//!
//! `SimulationEngine` owns the inventory, the field, the farmer, both actor
//! managers and the clock. It processes player commands, runs one frame of
//! actor logic and produces `FrameSnapshot`s. Completely headless.

use std::collections::VecDeque;

use glam::IVec2;
use tracing::info;

use beanfarm_core::commands::PlayerCommand;
use beanfarm_core::config::ScenarioConfig;
use beanfarm_core::enums::GamePhase;
use beanfarm_core::events::SimEvent;
use beanfarm_core::field::Field;
use beanfarm_core::input::HeldKeys;
use beanfarm_core::inventory::Stockpile;
use beanfarm_core::state::FrameSnapshot;
use beanfarm_core::types::{Dimensions, SimTime};

use crate::context::FrameContext;
use crate::managers::{EnemyManager, NpcManager};
use crate::systems;
use crate::world_setup;

/// The simulation engine. Owns every piece of frame state.
pub struct SimulationEngine {
    time: SimTime,
    phase: GamePhase,
    dimensions: Dimensions,
    player: IVec2,
    inventory: Stockpile,
    field: Field,
    keys: HeldKeys,
    enemies: EnemyManager,
    npcs: NpcManager,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<SimEvent>,
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::from_scenario(&ScenarioConfig::default())
    }
}

impl SimulationEngine {
    /// Build an engine from an already validated scenario.
    pub fn from_scenario(config: &ScenarioConfig) -> Self {
        let field = world_setup::build_field(config);
        let enemies = world_setup::build_enemies(config);
        info!(
            spawners = enemies.spawners().len(),
            cabbages = field.cabbage_count(),
            coins = config.player.coins,
            food = config.player.food,
            "scenario_loaded"
        );

        Self {
            time: SimTime::default(),
            phase: GamePhase::default(),
            dimensions: config.dimensions,
            player: config.player.position(),
            inventory: Stockpile::new(config.player.coins, config.player.food),
            field,
            keys: HeldKeys::default(),
            enemies,
            npcs: world_setup::build_npcs(config),
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame and return the resulting snapshot.
    pub fn tick(&mut self) -> FrameSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_frame();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            self.time,
            self.phase,
            self.player,
            &self.inventory,
            self.field.cabbage_count(),
            self.enemies.render(),
            self.npcs.render(),
            events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn player(&self) -> IVec2 {
        self.player
    }

    pub fn inventory(&self) -> &Stockpile {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Stockpile {
        &mut self.inventory
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    pub fn enemies(&self) -> &EnemyManager {
        &self.enemies
    }

    pub fn enemies_mut(&mut self) -> &mut EnemyManager {
        &mut self.enemies
    }

    pub fn npcs(&self) -> &NpcManager {
        &self.npcs
    }

    pub fn npcs_mut(&mut self) -> &mut NpcManager {
        &mut self.npcs
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::MovePlayer { dx, dy } => {
                self.player += IVec2::new(dx, dy);
            }
            PlayerCommand::SetPlayerPosition { x, y } => {
                self.player = IVec2::new(x, y);
            }
            PlayerCommand::PressKey { key } => self.keys.press(key),
            PlayerCommand::ReleaseKey { key } => self.keys.release(key),
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                    info!(tick = self.time.tick, "paused");
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                    info!(tick = self.time.tick, "resumed");
                }
            }
        }
    }

    /// Run both managers in frame order. The inventory and field are
    /// shared through one context so every write is seen immediately.
    fn run_frame(&mut self) {
        let mut ctx = FrameContext {
            tick: self.time.tick,
            dimensions: self.dimensions,
            player: self.player,
            inventory: &mut self.inventory,
            field: &mut self.field,
            keys: &self.keys,
            events: &mut self.events,
        };

        // 1. Sweep, spawners, birds
        self.enemies.tick(&mut ctx);
        // 2. Sweep, placements, defenders
        self.npcs.tick(&mut ctx, &mut self.enemies);
        // 3. Hive launches and scarecrow pacification
        self.npcs.interact(&mut ctx, &mut self.enemies);
        // 4. Birds have nothing to interact with
        self.enemies.interact(&mut ctx);
    }
}
