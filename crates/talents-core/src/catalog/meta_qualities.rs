//! # Meta-Quality Catalog
//!
//! Sources, Permissions and Intrinsics with their point values.
//!
//! ## Cost Shapes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  MetaQualityCost::Fixed(5)         ──► always 5                         │
//! │                                                                         │
//! │  MetaQualityCost::Formula(f)       ──► f(config, basic_info)            │
//! │     allergy        4×3 severity matrix, -1 .. -16                       │
//! │     inhuman_stats  +3 superior / (max-5) inferior, floor 1              │
//! │     vulnerable     extra_boxes × -2                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use crate::points::Points;
use crate::types::{
    AllergyConfig, AllergyEffect, AllergySubstance, BasicInfo, MetaQualityConfig, StatCondition,
};

// =============================================================================
// Definition Types
// =============================================================================

/// Which of the three meta-quality catalogs an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaQualityKind {
    Source,
    Permission,
    Intrinsic,
}

impl MetaQualityKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            MetaQualityKind::Source => "source",
            MetaQualityKind::Permission => "permission",
            MetaQualityKind::Intrinsic => "intrinsic",
        }
    }
}

impl fmt::Display for MetaQualityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variable cost: instance configuration (if any) and the owning character.
pub type CostFormula = fn(Option<&MetaQualityConfig>, &BasicInfo) -> Points;

/// Point value of a meta-quality.
#[derive(Clone, Copy)]
pub enum MetaQualityCost {
    Fixed(i32),
    Formula(CostFormula),
}

impl fmt::Debug for MetaQualityCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaQualityCost::Fixed(value) => f.debug_tuple("Fixed").field(value).finish(),
            MetaQualityCost::Formula(_) => f.write_str("Formula(..)"),
        }
    }
}

/// One catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct MetaQualityDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: MetaQualityKind,
    pub cost: MetaQualityCost,
    pub summary: &'static str,
}

impl MetaQualityDefinition {
    const fn fixed(
        id: &'static str,
        name: &'static str,
        kind: MetaQualityKind,
        cost: i32,
        summary: &'static str,
    ) -> Self {
        MetaQualityDefinition {
            id,
            name,
            kind,
            cost: MetaQualityCost::Fixed(cost),
            summary,
        }
    }

    const fn formula(
        id: &'static str,
        name: &'static str,
        kind: MetaQualityKind,
        formula: CostFormula,
        summary: &'static str,
    ) -> Self {
        MetaQualityDefinition {
            id,
            name,
            kind,
            cost: MetaQualityCost::Formula(formula),
            summary,
        }
    }

    /// Resolves the point value for one selection of this meta-quality.
    pub fn resolve_cost(&self, config: Option<&MetaQualityConfig>, info: &BasicInfo) -> Points {
        match self.cost {
            MetaQualityCost::Fixed(value) => Points::from(value),
            MetaQualityCost::Formula(formula) => formula(config, info),
        }
    }

    pub const fn is_variable(&self) -> bool {
        matches!(self.cost, MetaQualityCost::Formula(_))
    }
}

// =============================================================================
// Variable-Cost Formulas
// =============================================================================

/// Allergy severity matrix.
///
/// ```text
///              incapacitates   kills   drains_willpower
///   common          -4          -8          -16
///   frequent        -3          -6          -12
///   uncommon        -2          -4           -8
///   rare            -1          -2           -4
/// ```
pub const fn allergy_matrix(substance: AllergySubstance, effect: AllergyEffect) -> i32 {
    let severity = match substance {
        AllergySubstance::Common => 4,
        AllergySubstance::Frequent => 3,
        AllergySubstance::Uncommon => 2,
        AllergySubstance::Rare => 1,
    };
    let multiplier = match effect {
        AllergyEffect::Incapacitates => 1,
        AllergyEffect::Kills => 2,
        AllergyEffect::DrainsWillpower => 4,
    };
    -(severity * multiplier)
}

/// Allergy: matrix lookup, 0 while either axis is unset.
pub fn allergy_cost(config: Option<&MetaQualityConfig>, _info: &BasicInfo) -> Points {
    match config {
        Some(MetaQualityConfig::Allergy(AllergyConfig {
            substance: Some(substance),
            effect: Some(effect),
        })) => Points::from(allergy_matrix(*substance, *effect)),
        _ => Points::zero(),
    }
}

/// Inferior stats with no configured cap are treated as capped at 4.
pub const DEFAULT_INFERIOR_MAX_DICE: u32 = 4;

/// Inhuman Stats: +3 per superior stat, (max dice - 5) per inferior stat.
///
/// The permission never costs less than 1.
pub fn inhuman_stats_cost(config: Option<&MetaQualityConfig>, _info: &BasicInfo) -> Points {
    let Some(MetaQualityConfig::InhumanStats(config)) = config else {
        return Points::new(1);
    };

    let raw: Points = config
        .stats
        .values()
        .map(|setting| match setting.condition {
            StatCondition::Normal => Points::zero(),
            StatCondition::Superior => Points::new(3),
            StatCondition::Inferior => {
                let max_dice = setting
                    .inferior_max_dice
                    .unwrap_or(DEFAULT_INFERIOR_MAX_DICE);
                Points::from(i64::from(max_dice) - 5)
            }
        })
        .sum();

    raw.at_least(1)
}

/// Vulnerable: -2 per extra wound box taken.
pub fn vulnerable_cost(config: Option<&MetaQualityConfig>, _info: &BasicInfo) -> Points {
    let extra_boxes = match config {
        Some(MetaQualityConfig::Vulnerable(config)) => config.extra_boxes.unwrap_or(0),
        _ => 0,
    };
    Points::per_die(extra_boxes, -2)
}

// =============================================================================
// Catalogs
// =============================================================================

use MetaQualityKind::{Intrinsic, Permission, Source};

pub static SOURCES: &[MetaQualityDefinition] = &[
    MetaQualityDefinition::fixed("conduit", "Conduit", Source, 5, "Powers channelled from an outside entity"),
    MetaQualityDefinition::fixed("construct", "Construct", Source, 5, "Built, not born"),
    MetaQualityDefinition::fixed("cyborg", "Cyborg", Source, 5, "Machine parts grafted onto flesh"),
    MetaQualityDefinition::fixed("divine", "Divine", Source, 5, "Granted by a god or a god yourself"),
    MetaQualityDefinition::fixed("driven", "Driven", Source, 5, "Sheer force of will"),
    MetaQualityDefinition::fixed("extraterrestrial", "Extraterrestrial", Source, 5, "Not from around here"),
    MetaQualityDefinition::fixed("genetic", "Genetic", Source, 5, "Born with it"),
    MetaQualityDefinition::fixed("life_force", "Life Force", Source, 5, "Powered by your own vitality"),
    MetaQualityDefinition::fixed("paranormal", "Paranormal", Source, 5, "Magic, spirits and the uncanny"),
    MetaQualityDefinition::fixed("power_focus", "Power Focus", Source, 5, "Powers live in an object"),
    MetaQualityDefinition::fixed("psi_source", "Psi", Source, 5, "Mental powers"),
    MetaQualityDefinition::fixed("technological", "Technological", Source, 5, "Gadgets and science"),
    MetaQualityDefinition::fixed("unknown", "Unknown", Source, -5, "Nobody knows, including you"),
];

pub static PERMISSIONS: &[MetaQualityDefinition] = &[
    MetaQualityDefinition::fixed("hypertrained", "Hypertrained", Permission, 5, "Hyperskills and hyperstats only"),
    MetaQualityDefinition::formula("inhuman_stats", "Inhuman Stats", Permission, inhuman_stats_cost, "Stats above or below the human range"),
    MetaQualityDefinition::fixed("inventor", "Inventor", Permission, 5, "May build gadgets with miracles"),
    MetaQualityDefinition::fixed("one_power", "One Power", Permission, 1, "A single miracle"),
    MetaQualityDefinition::fixed("peak_performer", "Peak Performer", Permission, 5, "Hyperstats and hyperskills tied to one stat"),
    MetaQualityDefinition::fixed("power_theme", "Power Theme", Permission, 5, "Any miracle fitting a theme"),
    MetaQualityDefinition::fixed("prime_specimen", "Prime Specimen", Permission, 5, "Any hyperstat"),
    MetaQualityDefinition::fixed("super", "Super", Permission, 5, "Any miracle at all"),
    MetaQualityDefinition::fixed("super_equipment", "Super-Equipment", Permission, 2, "Miracles as removable gear"),
];

pub static INTRINSICS: &[MetaQualityDefinition] = &[
    MetaQualityDefinition::formula("allergy", "Allergy", Intrinsic, allergy_cost, "A substance hurts you"),
    MetaQualityDefinition::fixed("brute_frail", "Brute/Frail", Intrinsic, -8, "Can't use Coordination or Body skills well"),
    MetaQualityDefinition::fixed("custom_stats", "Custom Stats", Intrinsic, 5, "Replace one stat"),
    MetaQualityDefinition::fixed("mandatory_power", "Mandatory Power", Intrinsic, 0, "Every member of the archetype has this miracle"),
    MetaQualityDefinition::fixed("mutable", "Mutable", Intrinsic, 15, "Reassign dice between miracles"),
    MetaQualityDefinition::fixed("no_base_will", "No Base Will", Intrinsic, -10, "No Base Will, and so no Willpower"),
    MetaQualityDefinition::fixed("no_willpower", "No Willpower", Intrinsic, -5, "Willpower is never gained"),
    MetaQualityDefinition::fixed("unhealing", "Unhealing", Intrinsic, -8, "Damage never heals on its own"),
    MetaQualityDefinition::formula("vulnerable", "Vulnerable", Intrinsic, vulnerable_cost, "Takes extra wound boxes of damage"),
];

/// The catalog for one kind.
pub fn catalog_for(kind: MetaQualityKind) -> &'static [MetaQualityDefinition] {
    match kind {
        MetaQualityKind::Source => SOURCES,
        MetaQualityKind::Permission => PERMISSIONS,
        MetaQualityKind::Intrinsic => INTRINSICS,
    }
}

pub fn meta_quality(kind: MetaQualityKind, id: &str) -> Option<&'static MetaQualityDefinition> {
    catalog_for(kind).iter().find(|definition| definition.id == id)
}

pub fn source(id: &str) -> Option<&'static MetaQualityDefinition> {
    meta_quality(MetaQualityKind::Source, id)
}

pub fn permission(id: &str) -> Option<&'static MetaQualityDefinition> {
    meta_quality(MetaQualityKind::Permission, id)
}

pub fn intrinsic(id: &str) -> Option<&'static MetaQualityDefinition> {
    meta_quality(MetaQualityKind::Intrinsic, id)
}

// =============================================================================
// Unit Tests
// =============================================================================
