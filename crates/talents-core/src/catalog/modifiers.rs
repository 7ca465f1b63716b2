//! # Extras & Flaws
//!
//! Predefined power-quality modifiers. Each carries a fixed per-die cost
//! shift: extras raise it, flaws lower it.

use tracing::warn;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::types::AppliedModifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierKind {
    Extra,
    Flaw,
}

/// One predefined extra or flaw.
#[derive(Debug, Clone, Copy)]
pub struct ModifierDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: ModifierKind,
    pub cost: i32,
    pub summary: &'static str,
}

impl ModifierDefinition {
    const fn extra(id: &'static str, name: &'static str, cost: i32, summary: &'static str) -> Self {
        ModifierDefinition {
            id,
            name,
            kind: ModifierKind::Extra,
            cost,
            summary,
        }
    }

    const fn flaw(id: &'static str, name: &'static str, cost: i32, summary: &'static str) -> Self {
        ModifierDefinition {
            id,
            name,
            kind: ModifierKind::Flaw,
            cost,
            summary,
        }
    }

    /// Attaches this definition to a quality as a new linked instance.
    pub fn apply(&self) -> AppliedModifier {
        AppliedModifier {
            id: Uuid::new_v4().to_string(),
            definition_id: Some(self.id.to_string()),
            name: self.name.to_string(),
            cost_modifier: self.cost,
            is_custom: false,
        }
    }
}

pub static EXTRAS: &[ModifierDefinition] = &[
    ModifierDefinition::extra("area", "Area", 1, "Affects everything in a radius"),
    ModifierDefinition::extra("augment", "Augment", 4, "Adds the miracle's width to another dice pool sharing a Power Quality"),
    ModifierDefinition::extra("booster", "Booster", 1, "Multiplies the capacity tenfold"),
    ModifierDefinition::extra("burn", "Burn", 2, "Damage keeps burning"),
    ModifierDefinition::extra("controlled_effect", "Controlled Effect", 1, "Pick targets inside an area"),
    ModifierDefinition::extra("daze", "Daze", 1, "Stuns instead of harming"),
    ModifierDefinition::extra("deadly", "Deadly", 1, "Inflicts Killing damage"),
    ModifierDefinition::extra("duration", "Duration", 2, "Lasts without further rolls"),
    ModifierDefinition::extra("electrocuting", "Electrocuting", 1, "Bypasses some armor"),
    ModifierDefinition::extra("endless", "Endless", 3, "Never ends until dismissed"),
    ModifierDefinition::extra("engulf", "Engulf", 2, "Damage every round of contact"),
    ModifierDefinition::extra("go_first", "Go First", 1, "Acts before anyone else"),
    ModifierDefinition::extra("hardened_defense", "Hardened Defense", 2, "Ignores penetration"),
    ModifierDefinition::extra("high_capacity", "High Capacity", 1, "Raises one capacity"),
    ModifierDefinition::extra("interference", "Interference", 3, "Gobbles dice from an opposing roll"),
    ModifierDefinition::extra("native_power", "Native Power", 1, "Works in its native environment"),
    ModifierDefinition::extra("no_physics", "No Physics", 1, "Ignores inertia and momentum"),
    ModifierDefinition::extra("no_upward_limit", "No Upward Limit", 2, "Capacity doubles per die"),
    ModifierDefinition::extra("non_physical", "Non-Physical", 2, "Passes through barriers"),
    ModifierDefinition::extra("penetration", "Penetration", 1, "Pierces armor"),
    ModifierDefinition::extra("radius", "Radius", 2, "Area centred on the user"),
    ModifierDefinition::extra("speeding_bullet", "Speeding Bullet", 2, "Moves and acts in one action"),
    ModifierDefinition::extra("spray", "Spray", 1, "Extra dice for multiple actions"),
    ModifierDefinition::extra("subtle", "Subtle", 1, "Nobody notices it working"),
    ModifierDefinition::extra("traumatic", "Traumatic", 1, "Extra Shock damage"),
    ModifierDefinition::extra("variable_effect", "Variable Effect", 4, "Redefine the power each use"),
];

pub static FLAWS: &[ModifierDefinition] = &[
    ModifierDefinition::flaw("always_on", "Always On", -1, "Can't be switched off"),
    ModifierDefinition::flaw("armored_defense", "Armored Defense", -2, "Only reduces damage"),
    ModifierDefinition::flaw("attached", "Attached", -1, "Works only with another miracle"),
    ModifierDefinition::flaw("backfires", "Backfires", -1, "Failure hurts the user"),
    ModifierDefinition::flaw("base_will_cost", "Base Will Cost", -4, "Costs Base Will to use"),
    ModifierDefinition::flaw("delayed_effect", "Delayed Effect", -2, "Takes effect later"),
    ModifierDefinition::flaw("depleted", "Depleted", -1, "Loses dice with use"),
    ModifierDefinition::flaw("direct_feed", "Direct Feed", -1, "Damage to the power hurts the user"),
    ModifierDefinition::flaw("exhausted", "Exhausted", -3, "One use, then rest"),
    ModifierDefinition::flaw("focus", "Focus", -1, "Needs an object"),
    ModifierDefinition::flaw("go_last", "Go Last", -1, "Acts after everyone else"),
    ModifierDefinition::flaw("horrifying", "Horrifying", -1, "Triggers Stability checks"),
    ModifierDefinition::flaw("limited_damage", "Limited Damage", -1, "Shock only"),
    ModifierDefinition::flaw("limited_width", "Limited Width", -1, "Only high widths work"),
    ModifierDefinition::flaw("loopy", "Loopy", -1, "Strange side effects"),
    ModifierDefinition::flaw("mental_strain", "Mental Strain", -1, "Costs Willpower on failure"),
    ModifierDefinition::flaw("obvious", "Obvious", -1, "Can't be hidden"),
    ModifierDefinition::flaw("reduced_capacities", "Reduced Capacities", -1, "Capacities divided by ten"),
    ModifierDefinition::flaw("self_only", "Self Only", -3, "Affects only the user"),
    ModifierDefinition::flaw("slow", "Slow", -2, "Takes extra rounds"),
    ModifierDefinition::flaw("touch_only", "Touch Only", -2, "Needs contact"),
    ModifierDefinition::flaw("uncontrollable", "Uncontrollable", -2, "GM decides when it fires"),
    ModifierDefinition::flaw("willpower_bid", "Willpower Bid", -1, "Costs Willpower to activate"),
    ModifierDefinition::flaw("willpower_cost", "Willpower Cost", -2, "Costs Willpower every use"),
];

pub fn extra(id: &str) -> Option<&'static ModifierDefinition> {
    EXTRAS.iter().find(|definition| definition.id == id)
}

pub fn flaw(id: &str) -> Option<&'static ModifierDefinition> {
    FLAWS.iter().find(|definition| definition.id == id)
}

pub fn require_extra(id: &str) -> CoreResult<&'static ModifierDefinition> {
    extra(id).ok_or_else(|| CoreError::UnknownExtraOrFlaw(id.to_string()))
}

pub fn require_flaw(id: &str) -> CoreResult<&'static ModifierDefinition> {
    flaw(id).ok_or_else(|| CoreError::UnknownExtraOrFlaw(id.to_string()))
}

/// Cost shift contributed by one applied extra or flaw.
///
/// Always the instance's own `cost_modifier`. Linked instances are checked
/// against the catalog and any drift or dangling link is logged.
pub fn resolve_modifier(applied: &AppliedModifier) -> i32 {
    if applied.is_custom {
        return applied.cost_modifier;
    }

    if let Some(definition_id) = applied.definition_id.as_deref() {
        match extra(definition_id).or_else(|| flaw(definition_id)) {
            Some(definition) if definition.cost != applied.cost_modifier => {
                warn!(
                    definition_id,
                    modifier = %applied.name,
                    stored = applied.cost_modifier,
                    catalog = definition.cost,
                    "Extra/flaw cost differs from its catalog definition"
                );
            }
            Some(_) => {}
            None => {
                warn!(
                    definition_id,
                    modifier = %applied.name,
                    "Extra/flaw links to an unknown definition"
                );
            }
        }
    }

    applied.cost_modifier
}
