//! # Validation Module
//!
//! Character sheet checks for Talents Workshop.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation vs. Pricing                             │
//! │                                                                         │
//! │  Cost evaluators (cost::*)                                              │
//! │  ├── Never fail                                                         │
//! │  └── Missing data costs 0 and logs a warning                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  THIS MODULE                                                            │
//! │  ├── Collects EVERY problem on the sheet (never fails fast)             │
//! │  ├── Dangling ids, missing configuration, dice caps                     │
//! │  └── Advisory: an invalid sheet is still priced                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use talents_core::validation::{validate_character, validate_dice_pool};
//! use talents_core::types::{Character, DicePool};
//!
//! assert!(validate_dice_pool(&DicePool::normal(5), 5).is_ok());
//! assert!(validate_dice_pool(&DicePool::new(4, 2, 0), 5).is_err());
//!
//! assert!(validate_character(&Character::default()).is_empty());
//! ```

use std::collections::BTreeSet;

use crate::catalog::archetypes::archetype;
use crate::catalog::meta_qualities::{meta_quality, MetaQualityKind, DEFAULT_INFERIOR_MAX_DICE};
use crate::catalog::modifiers::{extra, flaw, ModifierDefinition};
use crate::catalog::qualities::{power_quality_definitions, require_power_quality};
use crate::catalog::skills::skill_definition;
use crate::error::ValidationError;
use crate::types::{
    AppliedModifier, BasicInfo, Character, DicePool, MetaQualityConfig, Stat, StatCondition,
};
use crate::{HUMAN_MAX_DICE, SUPERIOR_MAX_DICE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Single-Value Validators
// =============================================================================

fn check_pool(field: String, pool: &DicePool, max: u32) -> ValidationResult<()> {
    if pool.total_dice() > max {
        return Err(ValidationError::OutOfRange {
            field,
            min: 0,
            max: i64::from(max),
        });
    }
    Ok(())
}

/// Validates a dice pool against a cap on its total dice.
///
/// ## Example
/// ```rust
/// use talents_core::validation::validate_dice_pool;
/// use talents_core::types::DicePool;
///
/// assert!(validate_dice_pool(&DicePool::new(2, 2, 1), 5).is_ok());
/// assert!(validate_dice_pool(&DicePool::new(2, 2, 2), 5).is_err());
/// ```
pub fn validate_dice_pool(pool: &DicePool, max: u32) -> ValidationResult<()> {
    check_pool("dice_pool".to_string(), pool, max)
}

/// Validates the dice cap of an inferior stat (1..=4).
pub fn validate_inferior_max_dice(max_dice: u32) -> ValidationResult<()> {
    if !(1..=DEFAULT_INFERIOR_MAX_DICE).contains(&max_dice) {
        return Err(ValidationError::OutOfRange {
            field: "inferior_max_dice".to_string(),
            min: 1,
            max: i64::from(DEFAULT_INFERIOR_MAX_DICE),
        });
    }
    Ok(())
}

/// Dice cap of one stat, honouring Inhuman Stats.
pub fn stat_max_dice(info: &BasicInfo, stat: Stat) -> u32 {
    match info.inhuman_stat_setting(stat) {
        Some(setting) => match setting.condition {
            StatCondition::Normal => HUMAN_MAX_DICE,
            StatCondition::Superior => SUPERIOR_MAX_DICE,
            StatCondition::Inferior => setting
                .inferior_max_dice
                .unwrap_or(DEFAULT_INFERIOR_MAX_DICE),
        },
        None => HUMAN_MAX_DICE,
    }
}

/// The meta-quality id a configuration variant belongs to.
fn config_owner(config: &MetaQualityConfig) -> &'static str {
    match config {
        MetaQualityConfig::Allergy(_) => "allergy",
        MetaQualityConfig::InhumanStats(_) => "inhuman_stats",
        MetaQualityConfig::Vulnerable(_) => "vulnerable",
        MetaQualityConfig::BruteFrail(_) => "brute_frail",
        MetaQualityConfig::CustomStats(_) => "custom_stats",
        MetaQualityConfig::MandatoryPower(_) => "mandatory_power",
    }
}

// =============================================================================
// Section Validators
// =============================================================================

fn validate_basic_info(
    info: &BasicInfo,
    miracle_ids: &BTreeSet<&str>,
    errors: &mut Vec<ValidationError>,
) {
    if archetype(&info.archetype_id).is_none() {
        errors.push(ValidationError::InvalidFormat {
            field: "archetype_id".to_string(),
            reason: format!("unknown archetype '{}'", info.archetype_id),
        });
    }

    let selections = [
        (MetaQualityKind::Source, &info.sources),
        (MetaQualityKind::Permission, &info.permissions),
        (MetaQualityKind::Intrinsic, &info.intrinsics),
    ];
    for (kind, ids) in selections {
        let mut seen = BTreeSet::new();
        for id in ids {
            if meta_quality(kind, id).is_none() {
                errors.push(ValidationError::InvalidFormat {
                    field: format!("{kind}s"),
                    reason: format!("unknown {kind} '{id}'"),
                });
            }
            if !seen.insert(id.as_str()) {
                errors.push(ValidationError::Duplicate {
                    field: format!("{kind}s"),
                    value: id.clone(),
                });
            }
        }
    }

    for (id, config) in &info.configs {
        let owner = config_owner(config);
        if owner != id.as_str() {
            errors.push(ValidationError::InvalidFormat {
                field: format!("configs.{id}"),
                reason: format!("holds {owner} configuration"),
            });
        }
    }

    if info.has_intrinsic("allergy") {
        let config = match info.config_for("allergy") {
            Some(MetaQualityConfig::Allergy(config)) => *config,
            _ => Default::default(),
        };
        if config.substance.is_none() {
            errors.push(ValidationError::Required {
                field: "allergy.substance".to_string(),
            });
        }
        if config.effect.is_none() {
            errors.push(ValidationError::Required {
                field: "allergy.effect".to_string(),
            });
        }
    }

    if let Some(MetaQualityConfig::InhumanStats(config)) = info.config_for("inhuman_stats") {
        for (stat, setting) in &config.stats {
            if setting.condition != StatCondition::Inferior {
                continue;
            }
            if let Some(max_dice) = setting.inferior_max_dice {
                if let Err(ValidationError::OutOfRange { min, max, .. }) =
                    validate_inferior_max_dice(max_dice)
                {
                    errors.push(ValidationError::OutOfRange {
                        field: format!("inhuman_stats.{stat}.inferior_max_dice"),
                        min,
                        max,
                    });
                }
            }
        }
    }

    if info.has_intrinsic("mandatory_power") {
        if let Some(MetaQualityConfig::MandatoryPower(config)) = info.config_for("mandatory_power") {
            if let Some(miracle_id) = &config.miracle_id {
                if !miracle_ids.contains(miracle_id.as_str()) {
                    errors.push(ValidationError::InvalidFormat {
                        field: "mandatory_power.miracle_id".to_string(),
                        reason: format!("no miracle with id '{miracle_id}'"),
                    });
                }
            }
        }
    }
}

fn validate_stats(character: &Character, errors: &mut Vec<ValidationError>) {
    let info = &character.basic_info;
    let discarded = info.discarded_attribute();

    for (stat, pool) in &character.stats {
        if discarded == Some(*stat) {
            continue;
        }
        if let Err(error) = check_pool(format!("stats.{stat}"), pool, stat_max_dice(info, *stat)) {
            errors.push(error);
        }
    }
}

fn validate_skills(character: &Character, errors: &mut Vec<ValidationError>) {
    let mut seen = BTreeSet::new();

    for skill in &character.skills {
        if !seen.insert(skill.id.as_str()) {
            errors.push(ValidationError::Duplicate {
                field: "skills.id".to_string(),
                value: skill.id.clone(),
            });
        }
        if skill_definition(&skill.skill_id).is_none() {
            errors.push(ValidationError::InvalidFormat {
                field: format!("skills.{}", skill.name),
                reason: format!("unknown skill '{}'", skill.skill_id),
            });
        }
        if let Some(pool) = &skill.pool {
            if let Err(error) = check_pool(format!("skills.{}", skill.name), pool, HUMAN_MAX_DICE) {
                errors.push(error);
            }
        }
    }
}

fn validate_modifiers(
    field: &str,
    applied: &[AppliedModifier],
    lookup: fn(&str) -> Option<&'static ModifierDefinition>,
    errors: &mut Vec<ValidationError>,
) {
    for modifier in applied {
        if modifier.is_custom {
            continue;
        }
        if let Some(definition_id) = &modifier.definition_id {
            if lookup(definition_id).is_none() {
                errors.push(ValidationError::InvalidFormat {
                    field: field.to_string(),
                    reason: format!("unknown definition '{definition_id}' for '{}'", modifier.name),
                });
            }
        }
    }
}

fn validate_miracles(character: &Character, errors: &mut Vec<ValidationError>) {
    let definitions = power_quality_definitions(&character.skills);
    let mut seen = BTreeSet::new();

    for miracle in &character.miracles {
        let field = format!("miracles.{}", miracle.name);

        if !seen.insert(miracle.id.as_str()) {
            errors.push(ValidationError::Duplicate {
                field: "miracles.id".to_string(),
                value: miracle.id.clone(),
            });
        }
        if miracle.qualities.is_empty() {
            errors.push(ValidationError::Required {
                field: format!("{field}.qualities"),
            });
        }

        for quality in &miracle.qualities {
            if let Err(error) = require_power_quality(&definitions, &quality.quality_type) {
                errors.push(ValidationError::InvalidFormat {
                    field: format!("{field}.qualities"),
                    reason: error.to_string(),
                });
            }
            validate_modifiers(&format!("{field}.extras"), &quality.extras, extra, errors);
            validate_modifiers(&format!("{field}.flaws"), &quality.flaws, flaw, errors);
        }
    }
}

// =============================================================================
// Character Validator
// =============================================================================

/// Checks a whole character and returns every problem found.
///
/// An empty list means the sheet is clean.
pub fn validate_character(character: &Character) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let miracle_ids: BTreeSet<&str> =
        character.miracles.iter().map(|miracle| miracle.id.as_str()).collect();

    validate_basic_info(&character.basic_info, &miracle_ids, &mut errors);
    validate_stats(character, &mut errors);
    validate_skills(character, &mut errors);
    validate_miracles(character, &mut errors);

    errors
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::types::{
        AllergyConfig, AllergySubstance, Capacity, InhumanStatSetting, InhumanStatsConfig,
        MandatoryPowerConfig, Miracle, PowerQuality, QualityType, SkillInstance, VulnerableConfig,
    };

    fn inhuman(stat: Stat, condition: StatCondition, inferior_max_dice: Option<u32>) -> BasicInfo {
        let mut info = BasicInfo {
            permissions: vec!["inhuman_stats".into()],
            ..BasicInfo::default()
        };
        info.configs.insert(
            "inhuman_stats".into(),
            MetaQualityConfig::InhumanStats(InhumanStatsConfig {
                stats: [(
                    stat,
                    InhumanStatSetting {
                        condition,
                        inferior_max_dice,
                    },
                )]
                .into_iter()
                .collect(),
            }),
        );
        info
    }

    #[test]
    fn test_validate_dice_pool() {
        assert!(validate_dice_pool(&DicePool::default(), 5).is_ok());
        assert!(validate_dice_pool(&DicePool::new(3, 1, 1), 5).is_ok());
        assert_eq!(
            validate_dice_pool(&DicePool::normal(6), 5),
            Err(ValidationError::OutOfRange {
                field: "dice_pool".into(),
                min: 0,
                max: 5
            })
        );
    }

    #[test]
    fn test_validate_inferior_max_dice() {
        assert!(validate_inferior_max_dice(1).is_ok());
        assert!(validate_inferior_max_dice(4).is_ok());
        assert!(validate_inferior_max_dice(0).is_err());
        assert!(validate_inferior_max_dice(5).is_err());
    }

    #[test]
    fn test_stat_max_dice() {
        assert_eq!(stat_max_dice(&BasicInfo::default(), Stat::Body), 5);
        assert_eq!(stat_max_dice(&inhuman(Stat::Body, StatCondition::Superior, None), Stat::Body), 10);
        assert_eq!(stat_max_dice(&inhuman(Stat::Body, StatCondition::Superior, None), Stat::Mind), 5);
        assert_eq!(stat_max_dice(&inhuman(Stat::Mind, StatCondition::Inferior, Some(2)), Stat::Mind), 2);
        assert_eq!(stat_max_dice(&inhuman(Stat::Mind, StatCondition::Inferior, None), Stat::Mind), 4);
    }

    #[test]
    fn test_clean_character() {
        let skill = SkillInstance::new("athletics", "Athletics", DicePool::normal(3));
        let mut character = Character {
            basic_info: BasicInfo {
                archetype_id: "mutant".into(),
                sources: vec!["genetic".into()],
                permissions: vec!["super".into()],
                ..BasicInfo::default()
            },
            ..Character::default()
        };
        character.stats.insert(Stat::Body, DicePool::new(3, 1, 1));
        character.miracles.push(
            Miracle::new("Leap", DicePool::normal(4)).with_quality(PowerQuality::new(
                QualityType::Hyperskill(skill.id.clone()),
                Capacity::SelfOnly,
            )),
        );
        character.skills.push(skill);

        assert_eq!(validate_character(&character), Vec::new());
    }

    #[test]
    fn test_unknown_ids_reported() {
        let character = Character {
            basic_info: BasicInfo {
                archetype_id: "dragon".into(),
                sources: vec!["moon".into()],
                permissions: vec!["flying".into()],
                intrinsics: vec!["scales".into()],
                ..BasicInfo::default()
            },
            ..Character::default()
        };
        let errors = validate_character(&character);
        assert_eq!(errors.len(), 4);
        assert!(errors
            .iter()
            .all(|error| matches!(error, ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn test_duplicate_selection() {
        let info = BasicInfo {
            sources: vec!["genetic".into(), "genetic".into()],
            ..BasicInfo::default()
        };
        let errors = validate_character(&Character {
            basic_info: info,
            ..Character::default()
        });
        assert_eq!(
            errors,
            vec![ValidationError::Duplicate {
                field: "sources".into(),
                value: "genetic".into()
            }]
        );
    }

    #[test]
    fn test_allergy_axes_required() {
        let mut info = BasicInfo {
            intrinsics: vec!["allergy".into()],
            ..BasicInfo::default()
        };
        assert_eq!(
            validate_character(&Character {
                basic_info: info.clone(),
                ..Character::default()
            })
            .len(),
            2
        );

        info.configs.insert(
            "allergy".into(),
            MetaQualityConfig::Allergy(AllergyConfig {
                substance: Some(AllergySubstance::Rare),
                effect: None,
            }),
        );
        let errors = validate_character(&Character {
            basic_info: info,
            ..Character::default()
        });
        assert_eq!(
            errors,
            vec![ValidationError::Required {
                field: "allergy.effect".into()
            }]
        );
    }

    #[test]
    fn test_config_under_wrong_id() {
        let mut info = BasicInfo::default();
        info.configs.insert(
            "allergy".into(),
            MetaQualityConfig::Vulnerable(VulnerableConfig { extra_boxes: Some(1) }),
        );
        let errors = validate_character(&Character {
            basic_info: info,
            ..Character::default()
        });
        assert!(matches!(
            &errors[..],
            [ValidationError::InvalidFormat { field, .. }] if field == "configs.allergy"
        ));
    }

    #[test]
    fn test_inferior_max_out_of_range() {
        let info = inhuman(Stat::Charm, StatCondition::Inferior, Some(7));
        let errors = validate_character(&Character {
            basic_info: info,
            ..Character::default()
        });
        assert_eq!(
            errors,
            vec![ValidationError::OutOfRange {
                field: "inhuman_stats.charm.inferior_max_dice".into(),
                min: 1,
                max: 4
            }]
        );
    }

    #[test]
    fn test_stat_caps() {
        let mut character = Character {
            basic_info: inhuman(Stat::Body, StatCondition::Superior, None),
            ..Character::default()
        };
        character.stats.insert(Stat::Body, DicePool::new(6, 2, 0));
        character.stats.insert(Stat::Mind, DicePool::normal(6));

        let errors = validate_character(&character);
        assert_eq!(
            errors,
            vec![ValidationError::OutOfRange {
                field: "stats.mind".into(),
                min: 0,
                max: 5
            }]
        );
    }

    #[test]
    fn test_discarded_stat_not_capped() {
        let mut character = Character::default();
        character.basic_info.intrinsics = vec!["custom_stats".into()];
        character.basic_info.configs.insert(
            "custom_stats".into(),
            MetaQualityConfig::CustomStats(crate::types::CustomStatsConfig {
                discarded: Some(Stat::Charm),
            }),
        );
        character.stats.insert(Stat::Charm, DicePool::normal(9));
        assert!(validate_character(&character).is_empty());
    }

    #[test]
    fn test_skill_problems() {
        let skill = SkillInstance::new("dodge", "Dodge", DicePool::normal(6));
        let mut twin = skill.clone();
        twin.skill_id = "juggling".into();
        twin.pool = Some(DicePool::normal(1));

        let character = Character {
            skills: vec![skill, twin],
            ..Character::default()
        };
        let errors = validate_character(&character);
        assert_eq!(errors.len(), 3);
        assert!(errors
            .iter()
            .any(|error| matches!(error, ValidationError::Duplicate { field, .. } if field == "skills.id")));
    }

    #[test]
    fn test_miracle_problems() {
        let empty = Miracle::new("Nothing", DicePool::normal(1));
        let dangling = Miracle::new("Lost", DicePool::normal(2)).with_quality(
            PowerQuality::new(QualityType::Hyperskill("gone".into()), Capacity::SelfOnly)
                .with_extra(AppliedModifier {
                    id: "m1".into(),
                    definition_id: Some("teleport_everything".into()),
                    name: "Teleport Everything".into(),
                    cost_modifier: 9,
                    is_custom: false,
                }),
        );
        let character = Character {
            miracles: vec![empty, dangling],
            ..Character::default()
        };

        let errors = validate_character(&character);
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::Required {
            field: "miracles.Nothing.qualities".into()
        }));
        assert!(errors.contains(&ValidationError::InvalidFormat {
            field: "miracles.Lost.qualities".into(),
            reason: CoreError::UnknownQualityType(QualityType::Hyperskill("gone".into()).to_string())
                .to_string(),
        }));
    }

    #[test]
    fn test_mandatory_power_must_point_at_miracle() {
        let mut character = Character::default();
        character.basic_info.intrinsics = vec!["mandatory_power".into()];
        character.basic_info.configs.insert(
            "mandatory_power".into(),
            MetaQualityConfig::MandatoryPower(MandatoryPowerConfig {
                miracle_id: Some("missing".into()),
            }),
        );
        assert_eq!(validate_character(&character).len(), 1);
    }
}
