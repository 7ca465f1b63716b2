//! # Stat, Skill & Willpower Cost
//!
//! ```text
//!              normal   hard   wiggle
//!   stat         5       10      20
//!   skill        2        4       8
//!
//!   willpower  = base_will × 3 + willpower × 1
//! ```

use crate::points::Points;
use crate::types::{DicePool, SkillInstance, Stat, Stats};

/// Per-die prices for one kind of pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DieRates {
    pub normal: i64,
    pub hard: i64,
    pub wiggle: i64,
}

pub const STAT_RATES: DieRates = DieRates {
    normal: 5,
    hard: 10,
    wiggle: 20,
};

pub const SKILL_RATES: DieRates = DieRates {
    normal: 2,
    hard: 4,
    wiggle: 8,
};

pub const BASE_WILL_RATE: i64 = 3;
pub const WILLPOWER_RATE: i64 = 1;

impl DieRates {
    pub fn price(&self, pool: &DicePool) -> Points {
        Points::per_die(pool.normal, self.normal)
            + Points::per_die(pool.hard, self.hard)
            + Points::per_die(pool.wiggle, self.wiggle)
    }
}

/// Cost of one stat. Free when absent or discarded by Custom Stats.
///
/// ## Example
/// ```rust
/// use talents_core::cost::single_stat_cost;
/// use talents_core::types::{DicePool, Stat};
///
/// let pool = DicePool::new(2, 1, 0);
/// assert_eq!(single_stat_cost(Some(&pool), Stat::Body, None).value(), 20);
/// assert!(single_stat_cost(Some(&pool), Stat::Body, Some(Stat::Body)).is_zero());
/// ```
pub fn single_stat_cost(pool: Option<&DicePool>, stat: Stat, discarded: Option<Stat>) -> Points {
    match pool {
        Some(pool) if discarded != Some(stat) => STAT_RATES.price(pool),
        _ => Points::zero(),
    }
}

pub fn total_stat_cost(stats: &Stats, discarded: Option<Stat>) -> Points {
    Stat::ALL
        .iter()
        .map(|stat| single_stat_cost(stats.get(stat), *stat, discarded))
        .sum()
}

pub fn single_skill_cost(pool: Option<&DicePool>) -> Points {
    pool.map(|pool| SKILL_RATES.price(pool))
        .unwrap_or_default()
}

pub fn total_skill_cost(skills: &[SkillInstance]) -> Points {
    skills
        .iter()
        .map(|skill| single_skill_cost(skill.pool.as_ref()))
        .sum()
}

/// Cost of purchased Base Will and Willpower.
///
/// No Base Will zeroes both purchases (Willpower derives from Base Will);
/// No Willpower zeroes only Willpower.
pub fn total_willpower_cost(
    purchased_base_will: u32,
    purchased_willpower: u32,
    has_no_base_will: bool,
    has_no_willpower: bool,
) -> Points {
    let (base_will, willpower) = if has_no_base_will {
        (0, 0)
    } else if has_no_willpower {
        (purchased_base_will, 0)
    } else {
        (purchased_base_will, purchased_willpower)
    };

    Points::per_die(base_will, BASE_WILL_RATE) + Points::per_die(willpower, WILLPOWER_RATE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_stat_cost_is_linear() {
        assert_eq!(single_stat_cost(Some(&DicePool::new(2, 1, 0)), Stat::Mind, None).value(), 20);
        assert_eq!(single_stat_cost(Some(&DicePool::new(1, 1, 1)), Stat::Mind, None).value(), 35);
        assert_eq!(single_stat_cost(Some(&DicePool::new(0, 0, 2)), Stat::Mind, None).value(), 40);
    }

    #[test]
    fn test_single_stat_cost_absent_or_discarded() {
        assert!(single_stat_cost(None, Stat::Charm, None).is_zero());
        let pool = DicePool::normal(3);
        assert!(single_stat_cost(Some(&pool), Stat::Charm, Some(Stat::Charm)).is_zero());
        assert_eq!(single_stat_cost(Some(&pool), Stat::Mind, Some(Stat::Charm)).value(), 15);
    }

    #[test]
    fn test_total_stat_cost() {
        let stats: Stats = [
            (Stat::Body, DicePool::normal(2)),
            (Stat::Coordination, DicePool::new(2, 1, 0)),
            (Stat::Command, DicePool::normal(4)),
        ]
        .into_iter()
        .collect();

        assert_eq!(total_stat_cost(&stats, None).value(), 10 + 20 + 20);
        assert_eq!(total_stat_cost(&stats, Some(Stat::Command)).value(), 30);
        assert!(total_stat_cost(&Stats::new(), None).is_zero());
    }

    #[test]
    fn test_single_skill_cost() {
        assert_eq!(single_skill_cost(Some(&DicePool::new(3, 0, 1))).value(), 14);
        assert_eq!(single_skill_cost(Some(&DicePool::new(0, 2, 0))).value(), 8);
        assert!(single_skill_cost(None).is_zero());
    }

    #[test]
    fn test_total_skill_cost() {
        let mut unset = SkillInstance::new("stealth", "Stealth", DicePool::default());
        unset.pool = None;
        let skills = vec![
            SkillInstance::new("dodge", "Dodge", DicePool::normal(2)),
            SkillInstance::new("knowledge", "Knowledge (Law)", DicePool::new(1, 1, 0)),
            unset,
        ];
        assert_eq!(total_skill_cost(&skills).value(), 4 + 6);
    }

    #[test]
    fn test_willpower_cost() {
        assert_eq!(total_willpower_cost(2, 5, false, false).value(), 11);
        assert_eq!(total_willpower_cost(2, 5, false, true).value(), 6);
        assert!(total_willpower_cost(2, 5, true, false).is_zero());
        assert!(total_willpower_cost(2, 5, true, true).is_zero());
    }

    #[test]
    fn test_huge_pools_do_not_overflow() {
        let pool: DicePool = serde_json::from_str(r#"{"normal": 3000000000}"#).unwrap();
        assert_eq!(pool.normal, 3_000_000_000);
        assert_eq!(
            single_stat_cost(Some(&pool), Stat::Body, None).value(),
            15_000_000_000
        );

        let max = DicePool::new(u32::MAX, u32::MAX, u32::MAX);
        let per_die = i64::from(u32::MAX);
        assert_eq!(
            single_stat_cost(Some(&max), Stat::Body, None).value(),
            per_die * (5 + 10 + 20)
        );
        assert_eq!(single_skill_cost(Some(&max)).value(), per_die * (2 + 4 + 8));
        assert_eq!(
            total_willpower_cost(u32::MAX, u32::MAX, false, false).value(),
            per_die * 4
        );
    }
}
