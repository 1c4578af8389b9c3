//! Simulation report generation.

use crate::items::types::Rarity;
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of a single simulated session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub final_level: u32,
    pub turns: u64,
    pub died: bool,
    pub reached_target: bool,
    /// Indexed by `Rarity as usize`
    pub items_by_rarity: [u64; 5],
    pub quests_turned_in: u32,
    pub achievements_unlocked: u32,
    pub scenes_visited: u32,
}

impl RunStats {
    pub fn items_found(&self) -> u64 {
        self.items_by_rarity.iter().sum()
    }
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub target_level: u32,
    pub runs_reached_target: u32,
    pub runs_died: u32,

    pub avg_final_level: f64,
    pub avg_turns: f64,
    pub avg_quests_turned_in: f64,
    pub avg_achievements_unlocked: f64,
    pub avg_scenes_visited: f64,

    /// Average drops per run, keyed by rarity name
    pub avg_items_by_rarity: BTreeMap<String, f64>,
    pub level_distribution: BTreeMap<u32, u32>,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, target_level: u32) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;
        let average = |f: &dyn Fn(&RunStats) -> f64| runs.iter().map(f).sum::<f64>() / divisor;

        let avg_final_level = average(&|r| r.final_level as f64);
        let avg_turns = average(&|r| r.turns as f64);
        let avg_quests_turned_in = average(&|r| r.quests_turned_in as f64);
        let avg_achievements_unlocked = average(&|r| r.achievements_unlocked as f64);
        let avg_scenes_visited = average(&|r| r.scenes_visited as f64);

        let avg_items_by_rarity = Rarity::ALL
            .iter()
            .map(|rarity| {
                let idx = *rarity as usize;
                let avg = average(&|r| r.items_by_rarity[idx] as f64);
                (rarity.name().to_string(), avg)
            })
            .collect();

        let mut level_distribution = BTreeMap::new();
        for run in &runs {
            *level_distribution.entry(run.final_level).or_insert(0) += 1;
        }

        Self {
            num_runs,
            target_level,
            runs_reached_target: runs.iter().filter(|r| r.reached_target).count() as u32,
            runs_died: runs.iter().filter(|r| r.died).count() as u32,
            avg_final_level,
            avg_turns,
            avg_quests_turned_in,
            avg_achievements_unlocked,
            avg_scenes_visited,
            avg_items_by_rarity,
            level_distribution,
            run_stats: runs,
        }
    }

    fn percent(&self, count: u32) -> f64 {
        count as f64 / self.num_runs.max(1) as f64 * 100.0
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} reached level {}, {} died ({:.1}%)\n\n",
            self.num_runs,
            self.runs_reached_target,
            self.target_level,
            self.runs_died,
            self.percent(self.runs_died)
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Final Level:     {:.1}\n", self.avg_final_level));
        report.push_str(&format!("  Avg Turns:           {:.0}\n", self.avg_turns));
        report.push_str(&format!("  Avg Quests Done:     {:.2}\n", self.avg_quests_turned_in));
        report.push_str(&format!(
            "  Avg Achievements:    {:.2}\n",
            self.avg_achievements_unlocked
        ));
        report.push_str(&format!("  Avg Scenes Visited:  {:.1}\n\n", self.avg_scenes_visited));

        report.push_str("── LOOT (avg per run) ───────────────────────────────────────────\n");
        for rarity in Rarity::ALL {
            let avg = self
                .avg_items_by_rarity
                .get(rarity.name())
                .copied()
                .unwrap_or(0.0);
            report.push_str(&format!("  {:<10} {:>6.2}\n", rarity.name(), avg));
        }
        report.push('\n');

        report.push_str("── FINAL LEVELS ─────────────────────────────────────────────────\n");
        for (level, count) in &self.level_distribution {
            let pct = self.percent(*count);
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  Lv {:3}: {:>5.1}% {}\n", level, pct, bar));
        }

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(level: u32, died: bool, reached: bool, items: [u64; 5]) -> RunStats {
        RunStats {
            final_level: level,
            turns: 100,
            died,
            reached_target: reached,
            items_by_rarity: items,
            quests_turned_in: 2,
            achievements_unlocked: 3,
            scenes_visited: 4,
        }
    }

    #[test]
    fn test_from_runs_averages() {
        let report = SimReport::from_runs(
            vec![
                run(4, true, false, [2, 0, 0, 0, 0]),
                run(6, false, true, [0, 0, 1, 0, 1]),
            ],
            5,
        );
        assert_eq!(report.num_runs, 2);
        assert_eq!(report.runs_died, 1);
        assert_eq!(report.runs_reached_target, 1);
        assert!((report.avg_final_level - 5.0).abs() < f64::EPSILON);
        assert!((report.avg_items_by_rarity["Common"] - 1.0).abs() < f64::EPSILON);
        assert!((report.avg_items_by_rarity["Legendary"] - 0.5).abs() < f64::EPSILON);
        assert_eq!(report.level_distribution[&4], 1);
    }

    #[test]
    fn test_empty_report_does_not_divide_by_zero() {
        let report = SimReport::from_runs(Vec::new(), 5);
        assert_eq!(report.num_runs, 0);
        assert_eq!(report.avg_final_level, 0.0);
        assert!(report.to_text().contains("SIMULATION REPORT"));
    }

    #[test]
    fn test_json_report_omits_individual_runs() {
        let report = SimReport::from_runs(vec![run(3, false, false, [1, 1, 1, 1, 1])], 5);
        let value: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(value["num_runs"], 1);
        assert!(value.get("run_stats").is_none());
        assert_eq!(value["level_distribution"]["3"], 1);
    }

    #[test]
    fn test_items_found() {
        assert_eq!(run(1, false, false, [1, 2, 3, 0, 1]).items_found(), 7);
    }
}
