//! # Cost Evaluators
//!
//! Pure functions that price a character. No I/O, no errors: data that
//! cannot be resolved costs 0 and is reported through `tracing`.
//!
//! ## Evaluation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        CostBreakdown::for_character                     │
//! │                                                                         │
//! │  basic_info ──► current_archetype_cost ──► fixed | meta_quality_cost    │
//! │  stats      ──► total_stat_cost        (discarded stat is free)         │
//! │  skills     ──► total_skill_cost                                        │
//! │  willpower  ──► total_willpower_cost   (No Base Will / No Willpower)    │
//! │  miracles   ──► total_miracle_cost     (mandatory miracles are free)    │
//! │                     │                                                   │
//! │                     ▼                                                   │
//! │                   total                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every evaluator reads its inputs by reference and is idempotent, so the
//! UI can call them on every keystroke.

pub mod archetype;
pub mod meta;
pub mod miracles;
pub mod stats;

pub use archetype::current_archetype_cost;
pub use meta::meta_quality_point_cost;
pub use miracles::{quality_modifier, single_miracle_cost, single_quality_cost, total_miracle_cost};
pub use stats::{
    single_skill_cost, single_stat_cost, total_skill_cost, total_stat_cost, total_willpower_cost,
    DieRates, SKILL_RATES, STAT_RATES,
};

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::points::Points;
use crate::types::Character;

// =============================================================================
// Cost Breakdown
// =============================================================================

/// Per-section cost of a character plus the grand total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CostBreakdown {
    pub archetype: Points,
    pub stats: Points,
    pub skills: Points,
    pub willpower: Points,
    pub miracles: Points,
    pub total: Points,
}

impl CostBreakdown {
    /// Prices every section of a character.
    ///
    /// ## Example
    /// ```rust
    /// use talents_core::cost::CostBreakdown;
    /// use talents_core::types::{Character, DicePool, Stat};
    ///
    /// let mut character = Character::default();
    /// character.stats.insert(Stat::Body, DicePool::new(2, 1, 0));
    ///
    /// let breakdown = CostBreakdown::for_character(&character);
    /// assert_eq!(breakdown.stats.value(), 20);
    /// assert_eq!(breakdown.total.value(), 20);
    /// ```
    pub fn for_character(character: &Character) -> Self {
        let info = &character.basic_info;

        let archetype = current_archetype_cost(info);
        let stats = total_stat_cost(&character.stats, info.discarded_attribute());
        let skills = total_skill_cost(&character.skills);
        let willpower = total_willpower_cost(
            character.willpower.base_will,
            character.willpower.willpower,
            info.has_no_base_will(),
            info.has_no_willpower(),
        );
        let miracles = total_miracle_cost(&character.miracles, &character.skills);
        let total = archetype + stats + skills + willpower + miracles;

        debug!(
            character = %character.name,
            %archetype,
            %stats,
            %skills,
            %willpower,
            %miracles,
            %total,
            "Priced character"
        );

        CostBreakdown {
            archetype,
            stats,
            skills,
            willpower,
            miracles,
            total,
        }
    }

    /// Points left from a budget. Negative when overspent.
    pub fn remaining(&self, budget: i32) -> Points {
        Points::from(budget) - self.total
    }

    pub fn is_over_budget(&self, budget: i32) -> bool {
        self.remaining(budget).is_negative()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        BasicInfo, Capacity, CustomStatsConfig, DicePool, MetaQualityConfig, Miracle,
        PowerQuality, QualityType, SkillInstance, Stat, WillpowerPurchase,
    };

    fn sample_character() -> Character {
        let mut character = Character {
            name: "Tess".into(),
            basic_info: BasicInfo {
                sources: vec!["genetic".into()],
                permissions: vec!["super".into()],
                ..BasicInfo::default()
            },
            willpower: WillpowerPurchase {
                base_will: 1,
                willpower: 4,
            },
            ..Character::default()
        };
        character.stats.insert(Stat::Body, DicePool::normal(2));
        character.stats.insert(Stat::Mind, DicePool::new(2, 1, 0));
        character
            .skills
            .push(SkillInstance::new("dodge", "Dodge", DicePool::new(3, 0, 1)));
        character.miracles.push(
            Miracle::new("Blast", DicePool::normal(4))
                .with_quality(PowerQuality::new(QualityType::Attacks, Capacity::Range)),
        );
        character
    }

    #[test]
    fn test_for_character_sections() {
        let breakdown = CostBreakdown::for_character(&sample_character());

        assert_eq!(breakdown.archetype.value(), 5);
        assert_eq!(breakdown.stats.value(), 30);
        assert_eq!(breakdown.skills.value(), 14);
        assert_eq!(breakdown.willpower.value(), 7);
        assert_eq!(breakdown.miracles.value(), 8);
        assert_eq!(breakdown.total.value(), 64);
    }

    #[test]
    fn test_discarded_stat_and_willpower_intrinsics() {
        let mut character = sample_character();
        character.basic_info.intrinsics =
            vec!["custom_stats".into(), "no_willpower".into()];
        character.basic_info.configs.insert(
            "custom_stats".into(),
            MetaQualityConfig::CustomStats(CustomStatsConfig {
                discarded: Some(Stat::Mind),
            }),
        );

        let breakdown = CostBreakdown::for_character(&character);
        assert_eq!(breakdown.stats.value(), 10);
        assert_eq!(breakdown.willpower.value(), 3);
        // super 5, custom_stats 5, no_willpower -5
        assert_eq!(breakdown.archetype.value(), 5);
    }

    #[test]
    fn test_remaining_budget() {
        let breakdown = CostBreakdown::for_character(&sample_character());
        assert_eq!(breakdown.remaining(250).value(), 186);
        assert!(!breakdown.is_over_budget(250));
        assert!(breakdown.is_over_budget(50));
    }

    #[test]
    fn test_empty_character_costs_nothing() {
        let breakdown = CostBreakdown::for_character(&Character::default());
        assert_eq!(breakdown, CostBreakdown::default());
    }

    #[test]
    fn test_idempotent() {
        let character = sample_character();
        assert_eq!(
            CostBreakdown::for_character(&character),
            CostBreakdown::for_character(&character)
        );
    }

    #[test]
    fn test_breakdown_serializes_plain_numbers() {
        let breakdown = CostBreakdown::for_character(&sample_character());
        let json = serde_json::to_value(breakdown).unwrap();
        assert_eq!(json["total"], 64);
    }
}
