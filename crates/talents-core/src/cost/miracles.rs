//! # Miracle Cost
//!
//! ## Quality Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  f = base cost factor (attacks 2, hyperstat 4, hyperskill 1, ...)       │
//! │  m = levels + Σ extras + Σ flaws                                        │
//! │                                                                         │
//! │  normal dice × max(1, f + m)     ← never below 1 per die               │
//! │  hard dice   × max(0, 2f + m)                                           │
//! │  wiggle dice × max(0, 4f + m)                                           │
//! │                                                                         │
//! │  Dice come from the MIRACLE's pool, shared by all its qualities.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::warn;

use crate::catalog::modifiers::resolve_modifier;
use crate::catalog::qualities::{find_power_quality, power_quality_definitions, PowerQualityDefinition};
use crate::points::Points;
use crate::types::{Miracle, PowerQuality, SkillInstance};

/// Net per-die cost shift of a quality: levels plus every extra and flaw.
pub fn quality_modifier(quality: &PowerQuality) -> i64 {
    quality
        .extras
        .iter()
        .chain(&quality.flaws)
        .map(|applied| i64::from(resolve_modifier(applied)))
        .fold(i64::from(quality.levels), i64::saturating_add)
}

fn quality_cost_with(
    definitions: &[PowerQualityDefinition],
    quality: &PowerQuality,
    miracle: &Miracle,
) -> Points {
    let Some(definition) = find_power_quality(definitions, &quality.quality_type) else {
        warn!(
            miracle = %miracle.name,
            quality_type = %quality.quality_type,
            "Power quality type does not resolve, costing 0"
        );
        return Points::zero();
    };

    let factor = i64::from(definition.base_cost_factor);
    let modifier = quality_modifier(quality);
    let pool = &miracle.pool;

    let normal_rate = factor.saturating_add(modifier).max(1);
    let hard_rate = (2 * factor).saturating_add(modifier).max(0);
    let wiggle_rate = (4 * factor).saturating_add(modifier).max(0);

    Points::per_die(pool.normal, normal_rate)
        + Points::per_die(pool.hard, hard_rate)
        + Points::per_die(pool.wiggle, wiggle_rate)
}

/// Cost of one quality, priced on its miracle's dice.
///
/// ## Example
/// ```rust
/// use talents_core::cost::single_quality_cost;
/// use talents_core::types::{Capacity, DicePool, Miracle, PowerQuality, QualityType};
///
/// let quality = PowerQuality::new(QualityType::Attacks, Capacity::Range).with_levels(-5);
/// let miracle = Miracle::new("Weak Blast", DicePool::normal(3)).with_quality(quality.clone());
///
/// // max(1, 2 - 5) = 1 point per normal die
/// assert_eq!(single_quality_cost(&quality, &miracle, &[]).value(), 3);
/// ```
pub fn single_quality_cost(
    quality: &PowerQuality,
    miracle: &Miracle,
    all_skills: &[SkillInstance],
) -> Points {
    let definitions = power_quality_definitions(all_skills);
    quality_cost_with(&definitions, quality, miracle)
}

/// Cost of one miracle. Mandatory miracles are free.
pub fn single_miracle_cost(miracle: &Miracle, all_skills: &[SkillInstance]) -> Points {
    if miracle.is_mandatory {
        return Points::zero();
    }

    let definitions = power_quality_definitions(all_skills);
    miracle
        .qualities
        .iter()
        .map(|quality| quality_cost_with(&definitions, quality, miracle))
        .sum()
}

pub fn total_miracle_cost(miracles: &[Miracle], all_skills: &[SkillInstance]) -> Points {
    miracles
        .iter()
        .map(|miracle| single_miracle_cost(miracle, all_skills))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::modifiers::{require_extra, require_flaw};
    use crate::types::{AppliedModifier, Capacity, DicePool, QualityType, Stat};

    fn miracle_with(pool: DicePool, quality: PowerQuality) -> Miracle {
        Miracle::new("Test", pool).with_quality(quality)
    }

    #[test]
    fn test_plain_attacks() {
        let quality = PowerQuality::new(QualityType::Attacks, Capacity::Range);
        let miracle = miracle_with(DicePool::new(2, 1, 1), quality.clone());
        // 2×2 + 1×4 + 1×8
        assert_eq!(single_quality_cost(&quality, &miracle, &[]).value(), 16);
    }

    #[test]
    fn test_normal_die_floor() {
        let quality = PowerQuality::new(QualityType::Attacks, Capacity::Range).with_levels(-5);
        let miracle = miracle_with(DicePool::normal(3), quality.clone());
        assert_eq!(single_quality_cost(&quality, &miracle, &[]).value(), 3);
    }

    #[test]
    fn test_hard_and_wiggle_can_reach_zero() {
        let quality = PowerQuality::new(QualityType::Useful, Capacity::Touch)
            .with_flaw(require_flaw("self_only").unwrap().apply())
            .with_flaw(require_flaw("exhausted").unwrap().apply())
            .with_flaw(require_flaw("slow").unwrap().apply());
        // f = 2, m = -8: normal max(1,-6)=1, hard max(0,-4)=0, wiggle max(0,0)=0
        let miracle = miracle_with(DicePool::new(2, 3, 1), quality.clone());
        assert_eq!(single_quality_cost(&quality, &miracle, &[]).value(), 2);
    }

    #[test]
    fn test_extras_and_flaws_stack() {
        let quality = PowerQuality::new(QualityType::Attacks, Capacity::Range)
            .with_levels(1)
            .with_extra(require_extra("penetration").unwrap().apply())
            .with_extra(AppliedModifier::custom("Homing", 2))
            .with_flaw(require_flaw("obvious").unwrap().apply());
        assert_eq!(quality_modifier(&quality), 1 + 1 + 2 - 1);

        // f + m = 5, 2f + m = 7, 4f + m = 11
        let miracle = miracle_with(DicePool::new(4, 1, 1), quality.clone());
        assert_eq!(single_quality_cost(&quality, &miracle, &[]).value(), 20 + 7 + 11);
    }

    #[test]
    fn test_hyperstat_factor() {
        let quality = PowerQuality::new(QualityType::Hyperstat(Stat::Body), Capacity::SelfOnly);
        let miracle = miracle_with(DicePool::new(1, 1, 0), quality.clone());
        assert_eq!(single_quality_cost(&quality, &miracle, &[]).value(), 4 + 8);
    }

    #[test]
    fn test_hyperskill_resolves_by_instance() {
        let skill = SkillInstance::new("athletics", "Athletics", DicePool::normal(2));
        let quality =
            PowerQuality::new(QualityType::Hyperskill(skill.id.clone()), Capacity::SelfOnly);
        let miracle = miracle_with(DicePool::normal(4), quality.clone());

        assert_eq!(single_quality_cost(&quality, &miracle, &[skill]).value(), 4);
        // skill deleted: dangling reference costs nothing
        assert!(single_quality_cost(&quality, &miracle, &[]).is_zero());
    }

    #[test]
    fn test_miracle_sums_qualities() {
        let miracle = Miracle::new("Fire Fist", DicePool::normal(3))
            .with_quality(PowerQuality::new(QualityType::Attacks, Capacity::Touch))
            .with_quality(PowerQuality::new(QualityType::Defends, Capacity::SelfOnly));
        assert_eq!(single_miracle_cost(&miracle, &[]).value(), 12);
    }

    #[test]
    fn test_mandatory_miracle_is_free() {
        let miracle = Miracle::new("Divine Spark", DicePool::new(4, 2, 2))
            .with_quality(
                PowerQuality::new(QualityType::Attacks, Capacity::Range)
                    .with_extra(require_extra("variable_effect").unwrap().apply()),
            )
            .mandatory();
        assert!(single_miracle_cost(&miracle, &[]).is_zero());
    }

    #[test]
    fn test_total_miracle_cost() {
        let a = Miracle::new("A", DicePool::normal(2))
            .with_quality(PowerQuality::new(QualityType::Useful, Capacity::Range));
        let b = Miracle::new("B", DicePool::normal(5))
            .with_quality(PowerQuality::new(QualityType::Useful, Capacity::Range))
            .mandatory();
        assert_eq!(total_miracle_cost(&[a, b], &[]).value(), 4);
        assert!(total_miracle_cost(&[], &[]).is_zero());
    }

    #[test]
    fn test_huge_pool_prices_without_overflow() {
        let quality = PowerQuality::new(QualityType::Attacks, Capacity::Range);
        let miracle = miracle_with(DicePool::normal(1_500_000_000), quality.clone());
        assert_eq!(
            single_quality_cost(&quality, &miracle, &[]).value(),
            3_000_000_000
        );

        let maxed = miracle_with(DicePool::new(u32::MAX, u32::MAX, u32::MAX), quality.clone());
        // f = 2: 2 + 4 + 8 per die
        assert_eq!(
            single_miracle_cost(&maxed, &[]).value(),
            i64::from(u32::MAX) * 14
        );
    }

    #[test]
    fn test_extreme_modifiers_saturate() {
        let quality = PowerQuality::new(QualityType::Attacks, Capacity::Range)
            .with_levels(i32::MAX)
            .with_extra(AppliedModifier::custom("Everything", i32::MAX));
        assert_eq!(quality_modifier(&quality), 2 * i64::from(i32::MAX));

        let miracle = miracle_with(DicePool::new(u32::MAX, u32::MAX, u32::MAX), quality.clone());
        assert_eq!(single_quality_cost(&quality, &miracle, &[]).value(), i64::MAX);

        let floored = PowerQuality::new(QualityType::Attacks, Capacity::Range).with_levels(i32::MIN);
        let miracle = miracle_with(DicePool::new(7, 7, 7), floored.clone());
        assert_eq!(single_quality_cost(&floored, &miracle, &[]).value(), 7);
    }
}
