//! # Archetype Catalog
//!
//! Predefined archetypes bundle a fixed point cost with default meta-quality
//! selections. The `custom` archetype costs whatever the character's own
//! selections cost.

use crate::error::{CoreError, CoreResult};
use crate::types::CUSTOM_ARCHETYPE_ID;

/// One archetype entry.
#[derive(Debug, Clone, Copy)]
pub struct ArchetypeDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub point_cost: i32,
    pub sources: &'static [&'static str],
    pub permissions: &'static [&'static str],
    pub intrinsics: &'static [&'static str],
}

impl ArchetypeDefinition {
    pub fn is_custom(&self) -> bool {
        self.id == CUSTOM_ARCHETYPE_ID
    }
}

pub static ARCHETYPES: &[ArchetypeDefinition] = &[
    ArchetypeDefinition {
        id: "adept",
        name: "Adept",
        point_cost: 5,
        sources: &["driven"],
        permissions: &["hypertrained"],
        intrinsics: &[],
    },
    ArchetypeDefinition {
        id: "anachronist",
        name: "Anachronist",
        point_cost: 5,
        sources: &["technological"],
        permissions: &["inventor"],
        intrinsics: &[],
    },
    ArchetypeDefinition {
        id: "artificial",
        name: "Artificial",
        point_cost: -3,
        sources: &["construct"],
        permissions: &["super"],
        intrinsics: &["unhealing"],
    },
    ArchetypeDefinition {
        id: "cyborg",
        name: "Cyborg",
        point_cost: 7,
        sources: &["cyborg", "technological"],
        permissions: &["super_equipment"],
        intrinsics: &[],
    },
    ArchetypeDefinition {
        id: "godling",
        name: "Godling",
        point_cost: 5,
        sources: &["divine"],
        permissions: &["super"],
        intrinsics: &["mandatory_power"],
    },
    ArchetypeDefinition {
        id: "human_plus",
        name: "Human+",
        point_cost: 5,
        sources: &["genetic"],
        permissions: &["peak_performer"],
        intrinsics: &[],
    },
    ArchetypeDefinition {
        id: "mutant",
        name: "Mutant",
        point_cost: 5,
        sources: &["genetic"],
        permissions: &["super"],
        intrinsics: &[],
    },
    ArchetypeDefinition {
        id: "mystic",
        name: "Mystic",
        point_cost: 5,
        sources: &["paranormal"],
        permissions: &["power_theme"],
        intrinsics: &[],
    },
    ArchetypeDefinition {
        id: "psi",
        name: "Psi",
        point_cost: 5,
        sources: &["psi_source"],
        permissions: &["power_theme"],
        intrinsics: &[],
    },
    ArchetypeDefinition {
        id: CUSTOM_ARCHETYPE_ID,
        name: "Custom",
        point_cost: 0,
        sources: &[],
        permissions: &[],
        intrinsics: &[],
    },
];

pub fn archetype(id: &str) -> Option<&'static ArchetypeDefinition> {
    ARCHETYPES.iter().find(|definition| definition.id == id)
}

pub fn require_archetype(id: &str) -> CoreResult<&'static ArchetypeDefinition> {
    archetype(id).ok_or_else(|| CoreError::UnknownArchetype(id.to_string()))
}
