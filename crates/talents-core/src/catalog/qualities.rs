//! # Power Quality Catalog
//!
//! Base cost factors per quality type.
//!
//! ```text
//!   attacks / defends / useful   factor 2
//!   hyperstat (one per stat)     factor 4
//!   hyperskill (one per skill)   factor 1   ← generated per character
//! ```
//!
//! Hyperskill entries depend on the character's own skills, so they are
//! produced on demand by [`dynamic_power_quality_definitions`] and never
//! stored in the static catalog.

use crate::error::{CoreError, CoreResult};
use crate::types::{QualityType, SkillInstance, Stat};

/// The fixed quality types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseQuality {
    Attacks,
    Defends,
    Useful,
    Hyperstat(Stat),
}

impl BaseQuality {
    pub const ALL: [BaseQuality; 9] = [
        BaseQuality::Attacks,
        BaseQuality::Defends,
        BaseQuality::Useful,
        BaseQuality::Hyperstat(Stat::Body),
        BaseQuality::Hyperstat(Stat::Coordination),
        BaseQuality::Hyperstat(Stat::Sense),
        BaseQuality::Hyperstat(Stat::Mind),
        BaseQuality::Hyperstat(Stat::Charm),
        BaseQuality::Hyperstat(Stat::Command),
    ];

    pub const fn base_cost_factor(&self) -> i32 {
        match self {
            BaseQuality::Attacks | BaseQuality::Defends | BaseQuality::Useful => 2,
            BaseQuality::Hyperstat(_) => 4,
        }
    }

    pub fn quality_type(&self) -> QualityType {
        match self {
            BaseQuality::Attacks => QualityType::Attacks,
            BaseQuality::Defends => QualityType::Defends,
            BaseQuality::Useful => QualityType::Useful,
            BaseQuality::Hyperstat(stat) => QualityType::Hyperstat(*stat),
        }
    }

    pub fn name(&self) -> String {
        match self {
            BaseQuality::Attacks => "Attacks".to_string(),
            BaseQuality::Defends => "Defends".to_string(),
            BaseQuality::Useful => "Useful".to_string(),
            BaseQuality::Hyperstat(stat) => format!("Hyperstat ({stat})"),
        }
    }
}

/// Base cost factor for hyperskill qualities.
pub const HYPERSKILL_COST_FACTOR: i32 = 1;

/// One resolvable quality type with its cost factor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerQualityDefinition {
    pub quality_type: QualityType,
    pub name: String,
    pub base_cost_factor: i32,
}

impl From<BaseQuality> for PowerQualityDefinition {
    fn from(base: BaseQuality) -> Self {
        PowerQualityDefinition {
            quality_type: base.quality_type(),
            name: base.name(),
            base_cost_factor: base.base_cost_factor(),
        }
    }
}

/// The fixed entries: attacks, defends, useful and six hyperstats.
pub fn base_power_qualities() -> Vec<PowerQualityDefinition> {
    BaseQuality::ALL.into_iter().map(Into::into).collect()
}

/// One hyperskill entry per skill instance, keyed by instance id.
pub fn dynamic_power_quality_definitions(skills: &[SkillInstance]) -> Vec<PowerQualityDefinition> {
    skills
        .iter()
        .map(|skill| PowerQualityDefinition {
            quality_type: QualityType::Hyperskill(skill.id.clone()),
            name: format!("Hyperskill ({})", skill.name),
            base_cost_factor: HYPERSKILL_COST_FACTOR,
        })
        .collect()
}

/// Base entries extended by this character's hyperskills.
pub fn power_quality_definitions(skills: &[SkillInstance]) -> Vec<PowerQualityDefinition> {
    let mut definitions = base_power_qualities();
    definitions.extend(dynamic_power_quality_definitions(skills));
    definitions
}

pub fn find_power_quality<'a>(
    definitions: &'a [PowerQualityDefinition],
    quality_type: &QualityType,
) -> Option<&'a PowerQualityDefinition> {
    definitions
        .iter()
        .find(|definition| &definition.quality_type == quality_type)
}

/// Strict quality lookup. Fails for a hyperskill whose skill is gone.
pub fn require_power_quality<'a>(
    definitions: &'a [PowerQualityDefinition],
    quality_type: &QualityType,
) -> CoreResult<&'a PowerQualityDefinition> {
    find_power_quality(definitions, quality_type)
        .ok_or_else(|| CoreError::UnknownQualityType(quality_type.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DicePool;

    #[test]
    fn test_base_factors() {
        let base = base_power_qualities();
        assert_eq!(base.len(), 9);

        let attacks = find_power_quality(&base, &QualityType::Attacks).unwrap();
        assert_eq!(attacks.base_cost_factor, 2);

        let hyper_mind = find_power_quality(&base, &QualityType::Hyperstat(Stat::Mind)).unwrap();
        assert_eq!(hyper_mind.base_cost_factor, 4);
        assert_eq!(hyper_mind.name, "Hyperstat (mind)");
    }

    #[test]
    fn test_hyperskills_keyed_by_instance_id() {
        let history = SkillInstance::new("knowledge", "Knowledge", DicePool::normal(2));
        let physics = SkillInstance::new("knowledge", "Knowledge", DicePool::normal(3));
        let skills = vec![history.clone(), physics.clone()];

        let dynamic = dynamic_power_quality_definitions(&skills);
        assert_eq!(dynamic.len(), 2);
        assert!(dynamic.iter().all(|d| d.base_cost_factor == 1));

        let all = power_quality_definitions(&skills);
        assert_eq!(all.len(), 11);
        assert!(find_power_quality(&all, &QualityType::Hyperskill(history.id)).is_some());
        assert!(find_power_quality(&all, &QualityType::Hyperskill(physics.id)).is_some());
        assert!(find_power_quality(&all, &QualityType::Hyperskill("Knowledge".into())).is_none());
    }

    #[test]
    fn test_dynamic_entries_do_not_leak_into_base() {
        let skills = vec![SkillInstance::new("dodge", "Dodge", DicePool::normal(1))];
        let _ = power_quality_definitions(&skills);
        assert_eq!(base_power_qualities().len(), 9);
    }

    #[test]
    fn test_require_power_quality() {
        let skill = SkillInstance::new("dodge", "Dodge", DicePool::normal(1));
        let all = power_quality_definitions(std::slice::from_ref(&skill));

        let found = require_power_quality(&all, &QualityType::Hyperskill(skill.id.clone())).unwrap();
        assert_eq!(found.base_cost_factor, HYPERSKILL_COST_FACTOR);

        let missing = QualityType::Hyperskill("deleted".into());
        match require_power_quality(&all, &missing) {
            Err(CoreError::UnknownQualityType(name)) => assert_eq!(name, missing.to_string()),
            other => panic!("expected UnknownQualityType, got {other:?}"),
        }
    }
}
