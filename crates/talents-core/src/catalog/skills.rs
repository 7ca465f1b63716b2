//! Skill definitions and their governing stats.

use crate::error::{CoreError, CoreResult};
use crate::types::Stat;

#[derive(Debug, Clone, Copy)]
pub struct SkillDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub stat: Stat,
    /// Bought per specialty, e.g. Knowledge (History).
    pub specialized: bool,
}

const fn skill(id: &'static str, name: &'static str, stat: Stat, specialized: bool) -> SkillDefinition {
    SkillDefinition {
        id,
        name,
        stat,
        specialized,
    }
}

pub static SKILLS: &[SkillDefinition] = &[
    skill("athletics", "Athletics", Stat::Body, false),
    skill("block", "Block", Stat::Body, false),
    skill("brawling", "Brawling", Stat::Body, false),
    skill("endurance", "Endurance", Stat::Body, false),
    skill("melee_weapon", "Melee Weapon", Stat::Body, true),
    skill("dodge", "Dodge", Stat::Coordination, false),
    skill("driving", "Driving", Stat::Coordination, true),
    skill("ranged_weapon", "Ranged Weapon", Stat::Coordination, true),
    skill("stealth", "Stealth", Stat::Coordination, false),
    skill("empathy", "Empathy", Stat::Sense, false),
    skill("perception", "Perception", Stat::Sense, false),
    skill("scrutiny", "Scrutiny", Stat::Sense, false),
    skill("first_aid", "First Aid", Stat::Mind, false),
    skill("knowledge", "Knowledge", Stat::Mind, true),
    skill("languages", "Languages", Stat::Mind, true),
    skill("medicine", "Medicine", Stat::Mind, false),
    skill("navigation", "Navigation", Stat::Mind, false),
    skill("research", "Research", Stat::Mind, false),
    skill("security_systems", "Security Systems", Stat::Mind, false),
    skill("streetwise", "Streetwise", Stat::Mind, false),
    skill("survival", "Survival", Stat::Mind, false),
    skill("tactics", "Tactics", Stat::Mind, false),
    skill("lie", "Lie", Stat::Charm, false),
    skill("performance", "Performance", Stat::Charm, true),
    skill("persuasion", "Persuasion", Stat::Charm, false),
    skill("interrogation", "Interrogation", Stat::Command, false),
    skill("intimidation", "Intimidation", Stat::Command, false),
    skill("leadership", "Leadership", Stat::Command, false),
    skill("stability", "Stability", Stat::Command, false),
];

pub fn skill_definition(id: &str) -> Option<&'static SkillDefinition> {
    SKILLS.iter().find(|definition| definition.id == id)
}

pub fn require_skill(id: &str) -> CoreResult<&'static SkillDefinition> {
    skill_definition(id).ok_or_else(|| CoreError::UnknownSkill(id.to_string()))
}

/// Skills governed by one stat, in catalog order.
pub fn skills_for(stat: Stat) -> impl Iterator<Item = &'static SkillDefinition> {
    SKILLS.iter().filter(move |definition| definition.stat == stat)
}
