//! # Rules Catalog
//!
//! Immutable reference data, built into the binary as `static` tables.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Rules Catalog                                  │
//! │                                                                         │
//! │  archetypes      ARCHETYPES      fixed cost + default meta-qualities    │
//! │  meta_qualities  SOURCES         Fixed(n) | Formula(fn)                 │
//! │                  PERMISSIONS                                            │
//! │                  INTRINSICS                                             │
//! │  modifiers       EXTRAS, FLAWS   fixed per-die cost shift               │
//! │  qualities       BaseQuality     cost factor 2 / 4                      │
//! │                  + hyperskills   factor 1, generated per character      │
//! │  skills          SKILLS          governing stat                         │
//! │  templates       TEMPLATES       predefined miracles                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here is ever mutated. Per-character extensions (hyperskills) are
//! returned as fresh `Vec`s.

pub mod archetypes;
pub mod meta_qualities;
pub mod modifiers;
pub mod qualities;
pub mod skills;
pub mod templates;

pub use archetypes::{archetype, require_archetype, ArchetypeDefinition, ARCHETYPES};
pub use meta_qualities::{
    allergy_matrix, catalog_for, intrinsic, meta_quality, permission, source, CostFormula,
    MetaQualityCost, MetaQualityDefinition, MetaQualityKind, INTRINSICS, PERMISSIONS, SOURCES,
};
pub use modifiers::{
    extra, flaw, require_extra, require_flaw, resolve_modifier, ModifierDefinition, ModifierKind,
    EXTRAS, FLAWS,
};
pub use qualities::{
    base_power_qualities, dynamic_power_quality_definitions, find_power_quality,
    power_quality_definitions, require_power_quality, BaseQuality, PowerQualityDefinition,
    HYPERSKILL_COST_FACTOR,
};
pub use skills::{require_skill, skill_definition, skills_for, SkillDefinition, SKILLS};
pub use templates::{instantiate_template, template, MiracleTemplate, TemplateQuality, TEMPLATES};

use crate::error::{CoreError, CoreResult};

/// Strict meta-quality lookup.
pub fn require_meta_quality(
    kind: MetaQualityKind,
    id: &str,
) -> CoreResult<&'static MetaQualityDefinition> {
    meta_quality(kind, id).ok_or_else(|| CoreError::UnknownMetaQuality {
        category: kind.to_string(),
        id: id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_meta_quality() {
        assert!(require_meta_quality(MetaQualityKind::Source, "genetic").is_ok());

        let err = require_meta_quality(MetaQualityKind::Intrinsic, "genetic").unwrap_err();
        assert_eq!(err.to_string(), "Unknown intrinsic meta-quality: genetic");
    }
}
