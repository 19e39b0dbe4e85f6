#[cfg(test)]
mod tests {
    use glam::IVec2;

    use beanfarm_core::components::Kinematics;
    use beanfarm_core::enums::*;
    use beanfarm_core::events::SimEvent;
    use beanfarm_core::field::{Field, FieldQuery};
    use beanfarm_core::input::HeldKeys;
    use beanfarm_core::inventory::Stockpile;
    use beanfarm_core::timer::{FixedTimer, TickTimer};
    use beanfarm_core::types::Dimensions;

    use crate::components::{BeeHive, Bird, GuardBee, Npc, Scarecrow};
    use crate::context::FrameContext;
    use crate::managers::{BirdSpawn, EnemyManager, NpcManager, NpcSpawn};
    use crate::spawners::{EnemySpawner, PlacementSpawner};
    use crate::systems::{bee_hive, guard_bee};

    /// Owns everything a `FrameContext` borrows.
    struct Harness {
        inventory: Stockpile,
        field: Field,
        keys: HeldKeys,
        events: Vec<SimEvent>,
        player: IVec2,
    }

    impl Harness {
        fn new(coins: i32, food: i32) -> Self {
            Self {
                inventory: Stockpile::new(coins, food),
                field: Field::new(10, 10, 80),
                keys: HeldKeys::default(),
                events: Vec::new(),
                player: IVec2::new(400, 400),
            }
        }

        fn ctx(&mut self) -> FrameContext<'_> {
            FrameContext {
                tick: 0,
                dimensions: Dimensions::default(),
                player: self.player,
                inventory: &mut self.inventory,
                field: &mut self.field,
                keys: &self.keys,
                events: &mut self.events,
            }
        }

        fn count_events(&self, matches: impl Fn(&SimEvent) -> bool) -> usize {
            self.events.iter().filter(|event| matches(event)).count()
        }
    }

    fn bird(archetype: BirdArchetype, x: i32, y: i32) -> BirdSpawn {
        BirdSpawn {
            archetype,
            position: IVec2::new(x, y),
            aim: None,
        }
    }

    fn hive_at(x: i32, y: i32) -> NpcSpawn {
        NpcSpawn {
            kinematics: Kinematics::stationary(IVec2::new(x, y)),
            npc: Npc::BeeHive(BeeHive::new()),
        }
    }

    fn scarecrow_at(x: i32, y: i32) -> NpcSpawn {
        NpcSpawn {
            kinematics: Kinematics::stationary(IVec2::new(x, y)),
            npc: Npc::Scarecrow(Scarecrow),
        }
    }

    fn bee_at(position: IVec2, spawn: IVec2, target: Option<hecs::Entity>) -> NpcSpawn {
        NpcSpawn {
            kinematics: Kinematics::new(position, 2.0),
            npc: Npc::GuardBee(GuardBee {
                spawn,
                target,
                lifespan: FixedTimer::new(300),
            }),
        }
    }

    fn bird_state(enemies: &mut EnemyManager, entity: hecs::Entity) -> Bird {
        enemies
            .world_mut()
            .query_one_mut::<&Bird>(entity)
            .unwrap()
            .clone()
    }

    // ---- Bee hive ----

    #[test]
    fn test_hive_launches_exactly_one_bee_per_charge() {
        let mut h = Harness::new(0, 0);
        let mut enemies = EnemyManager::new();
        let mut npcs = NpcManager::new();
        enemies.add(bird(BirdArchetype::Magpie, 500, 400));
        enemies.add(bird(BirdArchetype::Eagle, 400, 500));
        enemies.add(bird(BirdArchetype::Magpie, 300, 400));
        npcs.add(hive_at(400, 400));

        npcs.interact(&mut h.ctx(), &mut enemies);
        assert_eq!(npcs.count(ActorKind::GuardBee), 1, "one bee per charge");

        npcs.interact(&mut h.ctx(), &mut enemies);
        assert_eq!(npcs.count(ActorKind::GuardBee), 1, "unloaded hive must not fire");
        assert_eq!(
            h.count_events(|e| matches!(e, SimEvent::BeeLaunched { .. })),
            1
        );
    }

    #[test]
    fn test_hive_ignores_birds_outside_detection_radius() {
        let mut h = Harness::new(0, 0);
        let mut enemies = EnemyManager::new();
        let mut npcs = NpcManager::new();
        // Exactly on the radius does not count.
        enemies.add(bird(BirdArchetype::Magpie, 750, 400));
        npcs.add(hive_at(400, 400));

        npcs.interact(&mut h.ctx(), &mut enemies);
        assert_eq!(npcs.count(ActorKind::GuardBee), 0);
    }

    #[test]
    fn test_hive_reloads_after_full_cycle() {
        let mut hive = BeeHive::new();
        hive.loaded = false;
        for _ in 0..239 {
            bee_hive::tick(&mut hive);
        }
        assert!(!hive.loaded, "reload must take the full cycle");
        bee_hive::tick(&mut hive);
        assert!(hive.loaded);
    }

    #[test]
    fn test_hive_skips_flagged_birds() {
        let mut h = Harness::new(0, 0);
        let mut enemies = EnemyManager::new();
        let mut npcs = NpcManager::new();
        let doomed = enemies.add(bird(BirdArchetype::Magpie, 450, 400));
        crate::systems::birds::retire_entity(
            enemies.world_mut(),
            doomed,
            RemovalCause::Expired,
            &mut h.ctx(),
        );
        npcs.add(hive_at(400, 400));

        npcs.interact(&mut h.ctx(), &mut enemies);
        assert_eq!(npcs.count(ActorKind::GuardBee), 0, "flagged birds are inert");
    }

    // ---- Guard bee ----

    #[test]
    fn test_bee_and_bird_destroy_each_other_and_loot_is_refunded() {
        let mut h = Harness::new(4, 4);
        let mut enemies = EnemyManager::new();
        let mut npcs = NpcManager::new();
        let magpie = enemies.add(bird(BirdArchetype::Magpie, 400, 400));
        enemies
            .world_mut()
            .query_one_mut::<&mut Bird>(magpie)
            .unwrap()
            .carried = 1;
        npcs.add(bee_at(
            IVec2::new(430, 400),
            IVec2::new(600, 400),
            Some(magpie),
        ));

        npcs.tick(&mut h.ctx(), &mut enemies);

        assert!(!enemies.is_live(magpie), "bird must be flagged");
        assert_eq!(npcs.count(ActorKind::GuardBee), 0, "bee must be flagged");
        assert_eq!(h.inventory.coins, 5, "carried coin goes back");
        assert_eq!(h.count_events(|e| matches!(e, SimEvent::Collision { .. })), 1);
        assert!(h.events.contains(&SimEvent::Removed {
            kind: ActorKind::Magpie,
            cause: RemovalCause::Collided,
        }));
        assert!(h.events.contains(&SimEvent::Removed {
            kind: ActorKind::GuardBee,
            cause: RemovalCause::Collided,
        }));
    }

    #[test]
    fn test_bee_collides_even_without_target() {
        let mut h = Harness::new(0, 0);
        let mut enemies = EnemyManager::new();
        let mut npcs = NpcManager::new();
        let pigeon = enemies.add(bird(BirdArchetype::Pigeon, 400, 400));
        npcs.add(bee_at(IVec2::new(420, 400), IVec2::new(700, 400), None));

        npcs.tick(&mut h.ctx(), &mut enemies);

        assert!(!enemies.is_live(pigeon));
        assert_eq!(npcs.count(ActorKind::GuardBee), 0);
    }

    #[test]
    fn test_bee_drops_stale_target_and_heads_home() {
        let mut h = Harness::new(0, 0);
        let mut enemies = EnemyManager::new();
        let mut npcs = NpcManager::new();
        let magpie = enemies.add(bird(BirdArchetype::Magpie, 100, 100));
        let bee = npcs.add(bee_at(
            IVec2::new(400, 400),
            IVec2::new(600, 400),
            Some(magpie),
        ));
        enemies.world_mut().despawn(magpie).unwrap();

        npcs.tick(&mut h.ctx(), &mut enemies);

        let mut query = npcs.world().query_one::<(&Kinematics, &Npc)>(bee).unwrap();
        let (kinematics, npc) = query.get().unwrap();
        let Npc::GuardBee(state) = npc else {
            panic!("expected a guard bee");
        };
        assert_eq!(state.target, None, "stale handle must be dropped");
        assert_eq!(kinematics.heading, 0, "bee must face its spawn");
        assert_eq!(kinematics.position, IVec2::new(402, 400));
    }

    #[test]
    fn test_bee_retargets_nearest_bird() {
        let mut h = Harness::new(0, 0);
        let mut enemies = EnemyManager::new();
        let mut npcs = NpcManager::new();
        let far = enemies.add(bird(BirdArchetype::Magpie, 400, 650));
        let near = enemies.add(bird(BirdArchetype::Magpie, 600, 400));
        let bee = npcs.add(bee_at(
            IVec2::new(400, 400),
            IVec2::new(0, 0),
            Some(far),
        ));

        npcs.tick(&mut h.ctx(), &mut enemies);

        let mut query = npcs.world().query_one::<&Npc>(bee).unwrap();
        let Some(Npc::GuardBee(state)) = query.get() else {
            panic!("expected a guard bee");
        };
        assert_eq!(state.target, Some(near));
    }

    #[test]
    fn test_bee_expires_after_lifespan() {
        let mut h = Harness::new(0, 0);
        let mut enemies = EnemyManager::new();
        let mut npcs = NpcManager::new();
        npcs.add(NpcSpawn {
            kinematics: Kinematics::new(IVec2::ZERO, 2.0),
            npc: Npc::GuardBee(GuardBee {
                spawn: IVec2::new(700, 700),
                target: None,
                lifespan: FixedTimer::new(1),
            }),
        });

        npcs.tick(&mut h.ctx(), &mut enemies);

        assert!(h.events.contains(&SimEvent::Removed {
            kind: ActorKind::GuardBee,
            cause: RemovalCause::Expired,
        }));
    }

    #[test]
    fn test_bee_contact_on_final_frame_is_a_collision() {
        let mut h = Harness::new(0, 0);
        let mut enemies = EnemyManager::new();
        let mut npcs = NpcManager::new();
        let magpie = enemies.add(bird(BirdArchetype::Magpie, 400, 400));
        npcs.add(NpcSpawn {
            kinematics: Kinematics::new(IVec2::new(420, 400), 2.0),
            npc: Npc::GuardBee(GuardBee {
                spawn: IVec2::new(700, 400),
                target: Some(magpie),
                lifespan: FixedTimer::new(1),
            }),
        });

        npcs.tick(&mut h.ctx(), &mut enemies);

        assert!(!enemies.is_live(magpie), "bird must not outlive the bee");
        assert_eq!(h.count_events(|e| matches!(e, SimEvent::Collision { .. })), 1);
        assert!(h.events.contains(&SimEvent::Removed {
            kind: ActorKind::GuardBee,
            cause: RemovalCause::Collided,
        }));
        assert!(!h.events.contains(&SimEvent::Removed {
            kind: ActorKind::GuardBee,
            cause: RemovalCause::Expired,
        }));
    }

    #[test]
    fn test_bee_facing_buckets() {
        assert_eq!(guard_bee::heading_facing(0), Facing::Right);
        assert_eq!(guard_bee::heading_facing(39), Facing::Right);
        assert_eq!(guard_bee::heading_facing(40), Facing::Down);
        assert_eq!(guard_bee::heading_facing(139), Facing::Down);
        assert_eq!(guard_bee::heading_facing(140), Facing::Left);
        assert_eq!(guard_bee::heading_facing(229), Facing::Left);
        assert_eq!(guard_bee::heading_facing(230), Facing::Up);
        assert_eq!(guard_bee::heading_facing(310), Facing::Right);
        assert_eq!(guard_bee::heading_facing(359), Facing::Right);
    }

    // ---- Scarecrow ----

    #[test]
    fn test_scarecrow_pacifies_birds_in_range() {
        let mut h = Harness::new(4, 4);
        let mut enemies = EnemyManager::new();
        let mut npcs = NpcManager::new();
        let magpie = enemies.add(bird(BirdArchetype::Magpie, 400, 400));
        let pigeon = enemies.add(bird(BirdArchetype::Pigeon, 380, 420));
        npcs.add(scarecrow_at(400, 420));

        npcs.interact(&mut h.ctx(), &mut enemies);
        assert!(!bird_state(&mut enemies, magpie).is_attacking());
        assert!(!bird_state(&mut enemies, pigeon).is_attacking());
        assert_eq!(h.count_events(|e| matches!(e, SimEvent::Pacified { .. })), 2);

        // Re-applied, not re-announced.
        npcs.interact(&mut h.ctx(), &mut enemies);
        assert_eq!(h.count_events(|e| matches!(e, SimEvent::Pacified { .. })), 2);
    }

    #[test]
    fn test_scarecrow_radius_is_exclusive() {
        let mut h = Harness::new(4, 4);
        let mut enemies = EnemyManager::new();
        let mut npcs = NpcManager::new();
        let magpie = enemies.add(bird(BirdArchetype::Magpie, 400, 400));
        npcs.add(scarecrow_at(400, 720));

        npcs.interact(&mut h.ctx(), &mut enemies);
        assert!(bird_state(&mut enemies, magpie).is_attacking());
    }

    #[test]
    fn test_pacified_bird_turns_for_home() {
        let mut h = Harness::new(4, 4);
        let mut enemies = EnemyManager::new();
        let mut npcs = NpcManager::new();
        let magpie = enemies.add(BirdSpawn {
            archetype: BirdArchetype::Magpie,
            position: IVec2::new(400, 400),
            aim: None,
        });
        enemies
            .world_mut()
            .query_one_mut::<&mut Bird>(magpie)
            .unwrap()
            .spawn = IVec2::ZERO;
        npcs.add(scarecrow_at(400, 420));

        npcs.interact(&mut h.ctx(), &mut enemies);
        enemies.tick(&mut h.ctx());

        let heading = enemies.world().get::<&Kinematics>(magpie).unwrap().heading;
        assert!(
            (220..=230).contains(&heading),
            "heading {heading} should point back at the origin"
        );

        let before = enemies.position_of(magpie).unwrap().length_squared();
        enemies.tick(&mut h.ctx());
        let after = enemies.position_of(magpie).unwrap().length_squared();
        assert!(after < before, "bird must close on its spawn");
        assert_eq!(h.inventory.coins, 4, "a pacified magpie steals nothing");
    }

    // ---- Birds ----

    #[test]
    fn test_expired_thief_refunds_loot() {
        let mut h = Harness::new(4, 4);
        let mut enemies = EnemyManager::new();
        let magpie = enemies.add(bird(BirdArchetype::Magpie, 0, 0));
        {
            let state = enemies.world_mut().query_one_mut::<&mut Bird>(magpie).unwrap();
            state.carried = 2;
            state.lifespan = FixedTimer::new(1);
        }

        enemies.tick(&mut h.ctx());

        assert!(!enemies.is_live(magpie));
        assert_eq!(h.inventory.coins, 6);
        assert!(h.events.contains(&SimEvent::Refunded {
            resource: Resource::Coins,
            amount: 2,
        }));
        assert!(h.events.contains(&SimEvent::Removed {
            kind: ActorKind::Magpie,
            cause: RemovalCause::Expired,
        }));
    }

    #[test]
    fn test_delivered_loot_is_not_refunded() {
        let mut h = Harness::new(4, 1);
        let mut enemies = EnemyManager::new();
        let eagle = enemies.add(bird(BirdArchetype::Eagle, 10, 0));
        {
            let state = enemies.world_mut().query_one_mut::<&mut Bird>(eagle).unwrap();
            state.carried = 3;
            state.spawn = IVec2::ZERO;
            state.phase = BirdPhase::Returning;
        }

        enemies.tick(&mut h.ctx());

        assert_eq!(h.inventory.food, 1, "food reached the nest");
        assert!(h.events.contains(&SimEvent::Removed {
            kind: ActorKind::Eagle,
            cause: RemovalCause::ReachedSpawn,
        }));
    }

    #[test]
    fn test_flagged_bird_is_swept_on_next_tick() {
        let mut h = Harness::new(4, 4);
        let mut enemies = EnemyManager::new();
        let magpie = enemies.add(bird(BirdArchetype::Magpie, 0, 0));
        crate::systems::birds::retire_entity(
            enemies.world_mut(),
            magpie,
            RemovalCause::Expired,
            &mut h.ctx(),
        );
        assert_eq!(enemies.len(), 1, "flagged birds wait for the sweep");
        assert_eq!(enemies.live_count(), 0);

        enemies.tick(&mut h.ctx());
        assert!(enemies.is_empty());
    }

    #[test]
    fn test_pigeon_uproots_nearest_cabbage() {
        let mut h = Harness::new(0, 0);
        h.field.plant(IVec2::new(80, 0));
        h.field.plant(IVec2::new(720, 720));
        let mut enemies = EnemyManager::new();
        let pigeon = enemies.add(bird(BirdArchetype::Pigeon, 40, 0));

        enemies.tick(&mut h.ctx());

        assert_eq!(h.field.cabbage_count(), 1);
        assert!(!bird_state(&mut enemies, pigeon).is_attacking());
        assert_eq!(h.count_events(|e| matches!(e, SimEvent::Uprooted { .. })), 1);
    }

    #[test]
    fn test_pigeon_gives_up_without_cabbages() {
        let mut h = Harness::new(0, 0);
        let mut enemies = EnemyManager::new();
        let pigeon = enemies.add(bird(BirdArchetype::Pigeon, 400, 400));

        enemies.tick(&mut h.ctx());

        assert!(!bird_state(&mut enemies, pigeon).is_attacking());
        assert!(enemies.is_live(pigeon));
    }

    #[test]
    fn test_pigeon_retargets_when_its_cabbage_vanishes() {
        let mut h = Harness::new(0, 0);
        h.field.plant(IVec2::new(400, 0));
        h.field.plant(IVec2::new(0, 400));
        let mut enemies = EnemyManager::new();
        let pigeon = enemies.add(bird(BirdArchetype::Pigeon, 0, 0));

        enemies.tick(&mut h.ctx());
        assert_eq!(enemies.world().get::<&Kinematics>(pigeon).unwrap().heading, 0);

        let eaten = h.field.tile_at(IVec2::new(400, 0)).unwrap().id;
        assert!(h.field.uproot(eaten));
        enemies.tick(&mut h.ctx());

        let state = bird_state(&mut enemies, pigeon);
        assert!(state.is_attacking(), "another cabbage is still standing");
        assert_eq!(enemies.world().get::<&Kinematics>(pigeon).unwrap().heading, 90);
    }

    #[test]
    fn test_pigeon_turns_home_when_last_cabbage_vanishes() {
        let mut h = Harness::new(0, 0);
        let cabbage = h.field.plant(IVec2::new(400, 400)).unwrap();
        let mut enemies = EnemyManager::new();
        let pigeon = enemies.add(bird(BirdArchetype::Pigeon, 0, 0));

        enemies.tick(&mut h.ctx());
        assert!(bird_state(&mut enemies, pigeon).is_attacking());

        h.field.uproot(cabbage);
        enemies.tick(&mut h.ctx());

        assert!(!bird_state(&mut enemies, pigeon).is_attacking());
        assert!(enemies.is_live(pigeon));
    }

    #[test]
    fn test_bird_aims_before_moving() {
        let mut h = Harness::new(4, 4);
        h.player = IVec2::new(0, 400);
        let mut enemies = EnemyManager::new();
        // Heading starts at 0 while the farmer is straight below.
        let magpie = enemies.add(bird(BirdArchetype::Magpie, 0, 0));

        enemies.tick(&mut h.ctx());

        assert_eq!(enemies.position_of(magpie), Some(IVec2::new(0, 1)));
    }

    // ---- Spawners ----

    #[test]
    fn test_pigeon_spawner_needs_a_cabbage() {
        let mut h = Harness::new(0, 0);
        let mut enemies = EnemyManager::new();
        enemies.add_spawner(EnemySpawner::with_interval(
            BirdArchetype::Pigeon,
            IVec2::ZERO,
            1,
        ));

        for _ in 0..50 {
            enemies.tick(&mut h.ctx());
        }
        assert!(enemies.is_empty(), "no cabbages, no pigeons");
        assert_eq!(h.count_events(|e| matches!(e, SimEvent::Spawned { .. })), 0);

        h.field.plant(IVec2::new(400, 400));
        enemies.tick(&mut h.ctx());
        assert_eq!(enemies.len(), 1);
    }

    #[test]
    fn test_spawner_fires_once_per_interval() {
        let mut h = Harness::new(0, 0);
        let mut enemies = EnemyManager::new();
        enemies.add_spawner(EnemySpawner::new(BirdArchetype::Magpie, IVec2::ZERO));

        for _ in 0..359 {
            enemies.tick(&mut h.ctx());
        }
        assert!(enemies.is_empty());
        enemies.tick(&mut h.ctx());
        assert_eq!(enemies.len(), 1);
    }

    #[test]
    fn test_placement_requires_affordability() {
        let mut h = Harness::new(2, 2);
        h.keys.press('h');
        h.keys.press('c');
        let hive = PlacementSpawner::new(DefenderKind::BeeHive, 'h');
        let scarecrow = PlacementSpawner::new(DefenderKind::Scarecrow, 'c');

        assert!(hive.tick(&mut h.ctx()).is_none());
        assert_eq!((h.inventory.coins, h.inventory.food), (2, 2));

        let placed = scarecrow.tick(&mut h.ctx()).expect("scarecrow is affordable");
        assert_eq!(placed.kinematics.position, h.player);
        assert_eq!(h.inventory.coins, 0);

        assert!(scarecrow.tick(&mut h.ctx()).is_none(), "out of coins");
    }

    #[test]
    fn test_placement_needs_key_held() {
        let mut h = Harness::new(10, 10);
        let hive = PlacementSpawner::new(DefenderKind::BeeHive, 'h');
        assert!(hive.tick(&mut h.ctx()).is_none());
        assert_eq!(h.inventory.coins, 10);
    }

    #[test]
    fn test_held_placement_key_places_every_frame() {
        let mut h = Harness::new(10, 10);
        h.keys.press('c');
        let mut enemies = EnemyManager::new();
        let mut npcs = NpcManager::new();
        npcs.add_placement(PlacementSpawner::new(DefenderKind::Scarecrow, 'c'));

        npcs.tick(&mut h.ctx(), &mut enemies);
        assert_eq!(npcs.count(ActorKind::Scarecrow), 1);
        npcs.tick(&mut h.ctx(), &mut enemies);
        assert_eq!(npcs.count(ActorKind::Scarecrow), 2, "held key places every frame");
        assert_eq!(h.inventory.coins, 6);
    }

    #[test]
    fn test_hive_placed_during_tick_is_not_ticked_that_frame() {
        let mut h = Harness::new(10, 10);
        h.keys.press('h');
        let mut enemies = EnemyManager::new();
        let mut npcs = NpcManager::new();
        npcs.add_placement(PlacementSpawner::new(DefenderKind::BeeHive, 'h'));

        npcs.tick(&mut h.ctx(), &mut enemies);

        let mut query = npcs.world().query::<&Npc>();
        let reloads: Vec<u32> = query
            .iter()
            .filter_map(|(_, npc)| match npc {
                Npc::BeeHive(hive) => Some(hive.reload.remaining()),
                _ => None,
            })
            .collect();
        assert_eq!(reloads, vec![240], "reload must start on the next frame");
    }

    #[test]
    fn test_wanderer_drifts_along_heading() {
        let mut h = Harness::new(0, 0);
        let mut enemies = EnemyManager::new();
        let mut npcs = NpcManager::new();
        let wanderer = npcs.add(crate::world_setup::wanderer(IVec2::new(100, 100), 90, 3.0));

        for _ in 0..10 {
            npcs.tick(&mut h.ctx(), &mut enemies);
        }
        npcs.interact(&mut h.ctx(), &mut enemies);

        let position = npcs.world().get::<&Kinematics>(wanderer).unwrap().position;
        assert_eq!(position, IVec2::new(100, 130));
        assert!(h.events.is_empty());
    }
}
