//! # Report Rendering
//!
//! Turns engine results into text or JSON for stdout.
//!
//! ```text
//! Mara Voss [custom]
//!   Archetype        -2 pts
//!   Stats            85 pts
//!   Miracles         16 pts
//!     Telepathy (4D)           12 pts
//!   ──────────────────────────
//!   Total           124 pts
//!   Budget          250 pts
//!   Remaining       126 pts
//! ```

use std::fmt::Write as _;

use serde::Serialize;
use talents_core::catalog::{
    base_power_qualities, catalog_for, MetaQualityCost, MetaQualityKind, ARCHETYPES, EXTRAS,
    FLAWS, HYPERSKILL_COST_FACTOR, SKILLS, TEMPLATES,
};
use talents_core::cost::{single_miracle_cost, CostBreakdown};
use talents_core::{Character, Points, ValidationError};

use crate::config::SheetSettings;

const RULE: &str = "──────────────────────────";

// =============================================================================
// Cost Report
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MiracleLine {
    pub name: String,
    pub pool: String,
    pub cost: Points,
    pub mandatory: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostReport {
    pub name: String,
    pub archetype_id: String,
    pub breakdown: CostBreakdown,
    pub miracles: Vec<MiracleLine>,
    pub point_budget: i32,
    pub remaining: Points,
    pub over_budget: bool,
}

impl CostReport {
    pub fn new(character: &Character, point_budget: i32) -> Self {
        let breakdown = CostBreakdown::for_character(character);
        let miracles = character
            .miracles
            .iter()
            .map(|miracle| MiracleLine {
                name: miracle.name.clone(),
                pool: miracle.pool.to_string(),
                cost: single_miracle_cost(miracle, &character.skills),
                mandatory: miracle.is_mandatory,
            })
            .collect();

        CostReport {
            name: character.name.clone(),
            archetype_id: character.basic_info.archetype_id.clone(),
            breakdown,
            miracles,
            point_budget,
            remaining: breakdown.remaining(point_budget),
            over_budget: breakdown.is_over_budget(point_budget),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_text(&self, settings: &SheetSettings) -> String {
        let mut out = String::new();
        let name = if self.name.is_empty() { "(unnamed)" } else { self.name.as_str() };
        let _ = writeln!(out, "{name} [{}]", self.archetype_id);

        let sections = [
            ("Archetype", self.breakdown.archetype),
            ("Stats", self.breakdown.stats),
            ("Skills", self.breakdown.skills),
            ("Willpower", self.breakdown.willpower),
            ("Miracles", self.breakdown.miracles),
        ];
        for (label, points) in sections {
            if points.is_zero() && !settings.show_zero_lines {
                continue;
            }
            let _ = writeln!(out, "  {label:<12}{:>10}", points.to_string());

            if label == "Miracles" {
                for line in &self.miracles {
                    let title = format!("{} ({})", line.name, line.pool);
                    let tag = if line.mandatory { " mandatory" } else { "" };
                    let _ = writeln!(out, "    {title:<24}{:>10}{tag}", line.cost.to_string());
                }
            }
        }

        let _ = writeln!(out, "  {RULE}");
        let _ = writeln!(out, "  {:<12}{:>10}", "Total", self.breakdown.total.to_string());
        let _ = writeln!(out, "  {:<12}{:>10}", "Budget", Points::from(self.point_budget).to_string());
        if self.over_budget {
            let _ = writeln!(out, "  {:<12}{:>10}", "Over by", (-self.remaining).to_string());
        } else {
            let _ = writeln!(out, "  {:<12}{:>10}", "Remaining", self.remaining.to_string());
        }
        out
    }
}

// =============================================================================
// Validation Report
// =============================================================================

pub fn render_validation(name: &str, errors: &[ValidationError]) -> String {
    if errors.is_empty() {
        return format!("{name}: no problems found\n");
    }

    let mut out = format!("{name}: {} problem(s)\n", errors.len());
    for error in errors {
        let _ = writeln!(out, "  - {error}");
    }
    out
}

// =============================================================================
// Catalog Listing
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CatalogSection {
    Archetypes,
    Sources,
    Permissions,
    Intrinsics,
    Extras,
    Flaws,
    Qualities,
    Skills,
    Templates,
}

fn meta_cost_label(cost: MetaQualityCost) -> String {
    match cost {
        MetaQualityCost::Fixed(value) => format!("{value:+}"),
        MetaQualityCost::Formula(_) => "varies".to_string(),
    }
}

fn join_or_dash(ids: &[&str]) -> String {
    if ids.is_empty() {
        "-".to_string()
    } else {
        ids.join(", ")
    }
}

pub fn render_catalog(section: CatalogSection) -> String {
    let mut out = String::new();

    match section {
        CatalogSection::Archetypes => {
            for archetype in ARCHETYPES {
                let _ = writeln!(
                    out,
                    "{:<14}{:>5}  sources: {}; permissions: {}; intrinsics: {}",
                    archetype.id,
                    format!("{:+}", archetype.point_cost),
                    join_or_dash(archetype.sources),
                    join_or_dash(archetype.permissions),
                    join_or_dash(archetype.intrinsics),
                );
            }
        }
        CatalogSection::Sources | CatalogSection::Permissions | CatalogSection::Intrinsics => {
            let kind = match section {
                CatalogSection::Sources => MetaQualityKind::Source,
                CatalogSection::Permissions => MetaQualityKind::Permission,
                _ => MetaQualityKind::Intrinsic,
            };
            for definition in catalog_for(kind) {
                let _ = writeln!(
                    out,
                    "{:<18}{:>7}  {}",
                    definition.id,
                    meta_cost_label(definition.cost),
                    definition.summary
                );
            }
        }
        CatalogSection::Extras | CatalogSection::Flaws => {
            let table = if section == CatalogSection::Extras { EXTRAS } else { FLAWS };
            for definition in table {
                let _ = writeln!(
                    out,
                    "{:<20}{:>4}  {}",
                    definition.id,
                    format!("{:+}", definition.cost),
                    definition.summary
                );
            }
        }
        CatalogSection::Qualities => {
            for definition in base_power_qualities() {
                let _ = writeln!(out, "{:<20}factor {}", definition.name, definition.base_cost_factor);
            }
            let _ = writeln!(out, "{:<20}factor {}", "Hyperskill (any)", HYPERSKILL_COST_FACTOR);
        }
        CatalogSection::Skills => {
            for skill in SKILLS {
                let tag = if skill.specialized { "  (specialized)" } else { "" };
                let _ = writeln!(out, "{:<18}{:<14}{tag}", skill.id, skill.stat.as_str());
            }
        }
        CatalogSection::Templates => {
            for template in TEMPLATES {
                let qualities: Vec<String> =
                    template.qualities.iter().map(|q| q.quality.name()).collect();
                let _ = writeln!(
                    out,
                    "{:<18}{}  [{}]",
                    template.id,
                    template.summary,
                    qualities.join(", ")
                );
            }
        }
    }

    out
}
