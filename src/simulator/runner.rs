//! Main simulation runner driving real `GameSession` mechanics.
//!
//! Each run plays a scripted session: fights, loot, travel and rest, with
//! the starter quests and built-in achievements tracked alongside.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::achievements::{default_achievements, evaluate_achievements, PlayerProgress};
use crate::core::game_logic::DamageOutcome;
use crate::core::game_state::GameSession;
use crate::items::effects::can_use_item;
use crate::items::generation::generate_random_item_with_rng;
use crate::items::types::ItemType;
use crate::quests::logic::{
    accept_quest, can_accept_quest, can_turn_in_quest, update_quest_progress,
};
use crate::quests::starter_quests;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Places the simulated player wanders between.
pub const SIM_SCENES: [&str; 8] = [
    "village", "forest", "mine", "tower", "lake", "market", "crypt", "meadow",
];

/// Health below which a resting player drinks a potion if one is carried.
const REST_POTION_THRESHOLD: i32 = 60;
const REST_HEAL: i32 = 5;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let run_stats = simulate_single_run(config, &mut rng);
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Level {}, Turns {}, Died {}, Items {}, Quests {}, Achievements {}",
                run_idx + 1,
                config.num_runs,
                run_stats.final_level,
                run_stats.turns,
                run_stats.died,
                run_stats.items_found(),
                run_stats.quests_turned_in,
                run_stats.achievements_unlocked
            );
        }
        all_runs.push(run_stats);
    }

    SimReport::from_runs(all_runs, config.target_level)
}

/// Plays one session to death, the target level, or the turn limit.
pub fn simulate_single_run(config: &SimConfig, rng: &mut impl Rng) -> RunStats {
    let mut session = GameSession::new();
    session.start_game("Simulant");

    let mut quests = starter_quests();
    for quest in quests.iter_mut().filter(|q| can_accept_quest(q)) {
        accept_quest(quest).ok();
    }
    let mut achievements = default_achievements();
    let mut progress = PlayerProgress::from_player(&session.player);
    progress.visit_scene(&session.current_scene);

    let mut stats = RunStats::default();
    let mut food_found = 0u32;
    let mut materials_found = 0u32;

    while stats.turns < config.max_turns_per_run {
        stats.turns += 1;

        if rng.gen_bool(config.encounter_chance) {
            let damage = rng.gen_range(5..=25);
            if let DamageOutcome::Depleted = session.take_damage(damage) {
                stats.died = true;
                break;
            }
            progress.record_kill();
            let xp = rng.gen_range(20..=60) * session.player.level as i64;
            session.add_experience(xp);

            if rng.gen_bool(config.loot_chance) {
                let mut item = generate_random_item_with_rng(session.player.level, rng);
                // Generated ids are time-based and may collide within a fast run.
                item.id = stats.items_found() + 1;
                stats.items_by_rarity[item.rarity as usize] += 1;
                match item.item_type {
                    ItemType::Food => food_found += 1,
                    ItemType::Material => materials_found += 1,
                    _ => {}
                }
                session.add_item(item);
                progress.record_item_collected();
            }
        } else if rng.gen_bool(0.4) {
            let scene = SIM_SCENES.choose(rng).copied().unwrap_or("village");
            session.change_scene(scene);
            progress.visit_scene(scene);
        } else {
            rest(&mut session);
        }

        let counters = [
            ("talk_elder", progress.scenes_visited.iter().any(|s| s == "village") as u32),
            ("kill_rats", progress.enemies_killed.min(u32::MAX as u64) as u32),
            ("herbs", materials_found),
            ("mushrooms", food_found),
            ("forest", visited(&progress, "forest")),
            ("mine", visited(&progress, "mine")),
            ("tower", visited(&progress, "tower")),
        ];
        for quest in quests.iter_mut() {
            for (objective_id, value) in counters {
                update_quest_progress(quest, objective_id, value);
            }
            if can_turn_in_quest(quest) && session.turn_in_quest(quest).is_ok() {
                progress.record_quest_completed();
                stats.quests_turned_in += 1;
            }
        }

        progress.sync_level(&session.player);
        let unlocked = evaluate_achievements(&mut achievements, &progress);
        stats.achievements_unlocked += unlocked.len() as u32;

        if session.player.level >= config.target_level {
            stats.reached_target = true;
            break;
        }
    }

    stats.final_level = session.player.level;
    stats.scenes_visited = progress.scenes_visited.len() as u32;
    stats
}

fn visited(progress: &PlayerProgress, scene: &str) -> u32 {
    progress.scenes_visited.iter().any(|s| s == scene) as u32
}

/// Drink the first consumable when hurt, otherwise recover a little.
fn rest(session: &mut GameSession) {
    if session.player.health < REST_POTION_THRESHOLD {
        let consumable = session
            .player
            .inventory
            .iter()
            .find(|item| can_use_item(item))
            .map(|item| item.id);
        if let Some(id) = consumable {
            if session.use_item(id).is_ok() {
                return;
            }
        }
    }
    session.heal(REST_HEAL);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_config(num_runs: u32) -> SimConfig {
        SimConfig {
            num_runs,
            seed: Some(42),
            verbosity: 0,
            ..SimConfig::quick()
        }
    }

    #[test]
    fn test_single_run_respects_turn_limit() {
        let config = SimConfig {
            max_turns_per_run: 25,
            target_level: 1_000,
            ..seeded_config(1)
        };
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let stats = simulate_single_run(&config, &mut rng);
        assert!(stats.turns <= 25);
        assert!(stats.final_level >= 1);
        assert!(!stats.reached_target);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = seeded_config(5);
        let a = run_simulation(&config);
        let b = run_simulation(&config);
        let levels_a: Vec<u32> = a.run_stats.iter().map(|r| r.final_level).collect();
        let levels_b: Vec<u32> = b.run_stats.iter().map(|r| r.final_level).collect();
        assert_eq!(levels_a, levels_b);
        assert_eq!(a.num_runs, 5);
    }

    #[test]
    fn test_max_seed_wraps_between_runs() {
        let config = SimConfig {
            seed: Some(u64::MAX),
            max_turns_per_run: 20,
            ..seeded_config(3)
        };
        let report = run_simulation(&config);
        assert_eq!(report.run_stats.len(), 3);
    }

    #[test]
    fn test_every_starter_quest_is_accepted() {
        let config = SimConfig {
            encounter_chance: 0.0,
            max_turns_per_run: 1,
            ..seeded_config(1)
        };
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let stats = simulate_single_run(&config, &mut rng);
        // The village talk quest completes on the first turn only if it was accepted.
        assert_eq!(stats.quests_turned_in, 1);
    }

    #[test]
    fn test_peaceful_run_never_dies() {
        let config = SimConfig {
            encounter_chance: 0.0,
            max_turns_per_run: 50,
            ..seeded_config(1)
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let stats = simulate_single_run(&config, &mut rng);
        assert!(!stats.died);
        assert_eq!(stats.turns, 50);
        assert_eq!(stats.items_found(), 0);
        assert!(stats.quests_turned_in >= 1);
    }

    #[test]
    fn test_rest_prefers_consumables_when_hurt() {
        use crate::items::types::{Item, ItemEffects, Rarity};

        let mut session = GameSession::new();
        session.start_game("Resting");
        session.take_damage(70);
        session.add_item(
            Item::new(1, "Bread", ItemType::Food, Rarity::Common)
                .with_effects(ItemEffects::healing(10)),
        );
        rest(&mut session);
        assert_eq!(session.player.health, 40);
        assert!(session.player.inventory.is_empty());

        rest(&mut session);
        assert_eq!(session.player.health, 45);
    }
}
