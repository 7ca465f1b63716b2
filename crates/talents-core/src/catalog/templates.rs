//! # Miracle Templates
//!
//! Predefined miracles the UI offers as starting points. Instantiating a
//! template produces an ordinary [`Miracle`] with fresh ids; after that it is
//! priced like any hand-built miracle.
//!
//! ## Instantiation
//! ```text
//! template("aces") ──► instantiate_template("aces", 4D)
//!                            │
//!                            ├── Miracle { template_id: "aces", pool: 4D }
//!                            └── Useful/self + Augment (+4)
//! ```

use tracing::debug;

use crate::catalog::modifiers::{require_extra, require_flaw};
use crate::catalog::qualities::BaseQuality;
use crate::error::{CoreError, CoreResult};
use crate::types::{Capacity, DicePool, Miracle, PowerQuality, Stat};

#[derive(Debug, Clone, Copy)]
pub struct TemplateQuality {
    pub quality: BaseQuality,
    pub capacity: Capacity,
    pub levels: i32,
    pub extras: &'static [&'static str],
    pub flaws: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct MiracleTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub qualities: &'static [TemplateQuality],
    pub summary: &'static str,
}

pub static TEMPLATES: &[MiracleTemplate] = &[
    MiracleTemplate {
        id: "harm",
        name: "Harm",
        qualities: &[TemplateQuality {
            quality: BaseQuality::Attacks,
            capacity: Capacity::Range,
            levels: 0,
            extras: &[],
            flaws: &[],
        }],
        summary: "Inflicts Shock and Killing damage at range",
    },
    MiracleTemplate {
        id: "heavy_armor",
        name: "Heavy Armor",
        qualities: &[TemplateQuality {
            quality: BaseQuality::Defends,
            capacity: Capacity::SelfOnly,
            levels: 0,
            extras: &["hardened_defense"],
            flaws: &[],
        }],
        summary: "Each die stops one point of damage",
    },
    MiracleTemplate {
        id: "flight",
        name: "Flight",
        qualities: &[TemplateQuality {
            quality: BaseQuality::Useful,
            capacity: Capacity::Speed,
            levels: 0,
            extras: &[],
            flaws: &[],
        }],
        summary: "Fly at the miracle's speed capacity",
    },
    // Augment is priced as written; no bonus against Attacks.
    MiracleTemplate {
        id: "aces",
        name: "Aces",
        qualities: &[TemplateQuality {
            quality: BaseQuality::Useful,
            capacity: Capacity::SelfOnly,
            levels: 0,
            extras: &["augment"],
            flaws: &[],
        }],
        summary: "Adds its width to another roll",
    },
    MiracleTemplate {
        id: "telepathy",
        name: "Telepathy",
        qualities: &[TemplateQuality {
            quality: BaseQuality::Useful,
            capacity: Capacity::Range,
            levels: 0,
            extras: &["non_physical"],
            flaws: &["willpower_bid"],
        }],
        summary: "Read surface thoughts",
    },
    MiracleTemplate {
        id: "perception_boost",
        name: "Perception Boost",
        qualities: &[TemplateQuality {
            quality: BaseQuality::Hyperstat(Stat::Sense),
            capacity: Capacity::SelfOnly,
            levels: 0,
            extras: &[],
            flaws: &[],
        }],
        summary: "Superhuman senses",
    },
];

pub fn template(id: &str) -> Option<&'static MiracleTemplate> {
    TEMPLATES.iter().find(|definition| definition.id == id)
}

/// Builds a new miracle from a template.
pub fn instantiate_template(id: &str, pool: DicePool) -> CoreResult<Miracle> {
    let definition = template(id).ok_or_else(|| CoreError::UnknownTemplate(id.to_string()))?;

    let mut miracle = Miracle::new(definition.name, pool);
    miracle.template_id = Some(definition.id.to_string());

    for entry in definition.qualities {
        let mut quality =
            PowerQuality::new(entry.quality.quality_type(), entry.capacity).with_levels(entry.levels);
        for extra_id in entry.extras {
            quality = quality.with_extra(require_extra(extra_id)?.apply());
        }
        for flaw_id in entry.flaws {
            quality = quality.with_flaw(require_flaw(flaw_id)?.apply());
        }
        miracle.qualities.push(quality);
    }

    debug!(template = id, miracle_id = %miracle.id, pool = %pool, "Instantiated miracle template");
    Ok(miracle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::QualityType;

    #[test]
    fn test_every_template_instantiates() {
        for definition in TEMPLATES {
            let miracle = instantiate_template(definition.id, DicePool::normal(2)).unwrap();
            assert_eq!(miracle.qualities.len(), definition.qualities.len());
            assert_eq!(miracle.template_id.as_deref(), Some(definition.id));
            assert!(!miracle.is_mandatory);
        }
    }

    #[test]
    fn test_aces_uses_plain_augment() {
        let aces = instantiate_template("aces", DicePool::normal(4)).unwrap();
        let useful = &aces.qualities[0];
        assert_eq!(useful.quality_type, QualityType::Useful);
        assert_eq!(useful.extras.len(), 1);
        assert_eq!(useful.extras[0].definition_id.as_deref(), Some("augment"));
        assert_eq!(useful.extras[0].cost_modifier, 4);
    }

    #[test]
    fn test_instances_are_independent() {
        let a = instantiate_template("harm", DicePool::normal(3)).unwrap();
        let b = instantiate_template("harm", DicePool::normal(3)).unwrap();
        assert_ne!(a.id, b.id);
        assert_ne!(a.qualities[0].id, b.qualities[0].id);
    }

    #[test]
    fn test_unknown_template() {
        assert!(matches!(
            instantiate_template("laser_eyes", DicePool::default()),
            Err(CoreError::UnknownTemplate(_))
        ));
    }
}
