//! # Domain Types
//!
//! Character data handed to the engine by the presentation layer.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Character                                     │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   BasicInfo     │   │  Stats / Skills │   │    Miracle      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  archetype_id   │   │  Stat → pool    │   │  pool           │       │
//! │  │  sources[]      │   │  SkillInstance  │   │  qualities[]    │       │
//! │  │  permissions[]  │   │   id, skill_id  │   │   ├ extras[]    │       │
//! │  │  intrinsics[]   │   │   pool          │   │   └ flaws[]     │       │
//! │  │  configs{id→..} │   │                 │   │  is_mandatory   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Every dice count is a DicePool { normal, hard, wiggle }               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Semantics
//! The UI owns one current `Character` and replaces it wholesale on edit.
//! The engine only ever borrows it.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, ValidationError};

/// Archetype id that defers cost to the character's own meta-qualities.
pub const CUSTOM_ARCHETYPE_ID: &str = "custom";

// =============================================================================
// Dice Pool
// =============================================================================

/// Purchased dice for one stat, skill or miracle.
///
/// ## Token Form
/// ```text
/// DicePool { normal: 3, hard: 1, wiggle: 0 }  ⇄  "3D+1HD"
/// DicePool::default()                          ⇄  "0D"
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DicePool {
    #[serde(default, deserialize_with = "lenient_die_count")]
    pub normal: u32,
    #[serde(default, deserialize_with = "lenient_die_count")]
    pub hard: u32,
    #[serde(default, deserialize_with = "lenient_die_count")]
    pub wiggle: u32,
}

impl DicePool {
    pub const fn new(normal: u32, hard: u32, wiggle: u32) -> Self {
        DicePool {
            normal,
            hard,
            wiggle,
        }
    }

    /// Normal dice only.
    pub const fn normal(normal: u32) -> Self {
        DicePool::new(normal, 0, 0)
    }

    /// Saturates at `u32::MAX`.
    pub const fn total_dice(&self) -> u32 {
        self.normal.saturating_add(self.hard).saturating_add(self.wiggle)
    }

    pub const fn is_empty(&self) -> bool {
        self.normal == 0 && self.hard == 0 && self.wiggle == 0
    }
}

impl fmt::Display for DicePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<String> = [(self.normal, "D"), (self.hard, "HD"), (self.wiggle, "WD")]
            .iter()
            .filter(|(count, _)| *count > 0)
            .map(|(count, suffix)| format!("{count}{suffix}"))
            .collect();

        if tokens.is_empty() {
            write!(f, "0D")
        } else {
            write!(f, "{}", tokens.join("+"))
        }
    }
}

/// Strict parsing of the token form. Repeated tokens add up; a sum past
/// `u32::MAX` is rejected.
///
/// ## Example
/// ```rust
/// use talents_core::types::DicePool;
///
/// let pool: DicePool = "2WD + 3D".parse().unwrap();
/// assert_eq!(pool, DicePool::new(3, 0, 2));
/// assert!("3XD".parse::<DicePool>().is_err());
/// ```
impl FromStr for DicePool {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut pool = DicePool::default();

        for raw in s.split('+') {
            let token = raw.trim();
            let bad_token = || CoreError::InvalidDicePool {
                input: s.to_string(),
                token: token.to_string(),
            };

            let digits_end = token
                .find(|c: char| !c.is_ascii_digit())
                .ok_or_else(bad_token)?;
            let (digits, suffix) = token.split_at(digits_end);
            let count: u32 = digits.parse().map_err(|_| bad_token())?;

            let slot = match suffix.to_ascii_uppercase().as_str() {
                "D" => &mut pool.normal,
                "HD" => &mut pool.hard,
                "WD" => &mut pool.wiggle,
                _ => return Err(bad_token()),
            };
            *slot = slot.checked_add(count).ok_or_else(bad_token)?;
        }

        Ok(pool)
    }
}

/// Lenient single die-count parse: leading digits win, anything else is 0.
///
/// ```rust
/// use talents_core::types::parse_die_count;
///
/// assert_eq!(parse_die_count("4HD"), 4);
/// assert_eq!(parse_die_count(" 2 "), 2);
/// assert_eq!(parse_die_count("lots"), 0);
/// assert_eq!(parse_die_count("-3"), 0);
/// ```
pub fn parse_die_count(text: &str) -> u32 {
    let digits: String = text
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDieCount {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

fn lenient_die_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let count = match Option::<RawDieCount>::deserialize(deserializer)? {
        Some(RawDieCount::Integer(n)) => u32::try_from(n).unwrap_or(0),
        Some(RawDieCount::Float(n)) if n.is_finite() && n >= 0.0 => n.trunc() as u32,
        Some(RawDieCount::Text(text)) => parse_die_count(&text),
        _ => 0,
    };
    Ok(count)
}

// =============================================================================
// Stats
// =============================================================================

/// The six character stats.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Body,
    Coordination,
    Sense,
    Mind,
    Charm,
    Command,
}

impl Stat {
    pub const ALL: [Stat; 6] = [
        Stat::Body,
        Stat::Coordination,
        Stat::Sense,
        Stat::Mind,
        Stat::Charm,
        Stat::Command,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Stat::Body => "body",
            Stat::Coordination => "coordination",
            Stat::Sense => "sense",
            Stat::Mind => "mind",
            Stat::Charm => "charm",
            Stat::Command => "command",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Stat::ALL
            .into_iter()
            .find(|stat| stat.as_str() == wanted)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "stat".to_string(),
                allowed: Stat::ALL.iter().map(|s| s.as_str().to_string()).collect(),
            })
    }
}

/// Purchased dice per stat. A missing stat has no pool and costs nothing.
pub type Stats = BTreeMap<Stat, DicePool>;

// =============================================================================
// Skills
// =============================================================================

/// One purchased skill.
///
/// `id` is unique per instance; `name` is not (two "Knowledge" skills with
/// different specialties are normal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SkillInstance {
    pub id: String,
    /// Skill definition id in the rules catalog.
    pub skill_id: String,
    pub name: String,
    #[serde(default)]
    pub pool: Option<DicePool>,
}

impl SkillInstance {
    /// Creates a skill instance with a fresh UUID v4 id.
    pub fn new(skill_id: impl Into<String>, name: impl Into<String>, pool: DicePool) -> Self {
        SkillInstance {
            id: Uuid::new_v4().to_string(),
            skill_id: skill_id.into(),
            name: name.into(),
            pool: Some(pool),
        }
    }
}

// =============================================================================
// Willpower
// =============================================================================

/// Base Will and Willpower bought beyond what stats provide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WillpowerPurchase {
    #[serde(default, deserialize_with = "lenient_die_count")]
    pub base_will: u32,
    #[serde(default, deserialize_with = "lenient_die_count")]
    pub willpower: u32,
}

// =============================================================================
// Miracles
// =============================================================================

/// What a power quality does.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum QualityType {
    Attacks,
    Defends,
    Useful,
    Hyperstat(Stat),
    /// Keyed by skill *instance* id, not skill name.
    Hyperskill(String),
}

impl fmt::Display for QualityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualityType::Attacks => write!(f, "attacks"),
            QualityType::Defends => write!(f, "defends"),
            QualityType::Useful => write!(f, "useful"),
            QualityType::Hyperstat(stat) => write!(f, "hyperstat:{stat}"),
            QualityType::Hyperskill(skill) => write!(f, "hyperskill:{skill}"),
        }
    }
}

/// Power capacity. Descriptive only; it never changes cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Capacity {
    #[default]
    Range,
    Mass,
    Speed,
    Touch,
    #[serde(rename = "self")]
    SelfOnly,
}

/// An extra or flaw attached to a power quality.
///
/// `cost_modifier` is what pricing uses; `definition_id` only records where
/// a linked instance came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AppliedModifier {
    pub id: String,
    #[serde(default)]
    pub definition_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub cost_modifier: i32,
    #[serde(default)]
    pub is_custom: bool,
}

impl AppliedModifier {
    /// A user-authored extra or flaw that has no catalog definition.
    pub fn custom(name: impl Into<String>, cost_modifier: i32) -> Self {
        AppliedModifier {
            id: Uuid::new_v4().to_string(),
            definition_id: None,
            name: name.into(),
            cost_modifier,
            is_custom: true,
        }
    }
}

/// One functional aspect of a miracle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PowerQuality {
    pub id: String,
    pub quality_type: QualityType,
    #[serde(default)]
    pub capacity: Capacity,
    #[serde(default)]
    pub levels: i32,
    #[serde(default)]
    pub extras: Vec<AppliedModifier>,
    #[serde(default)]
    pub flaws: Vec<AppliedModifier>,
}

impl PowerQuality {
    pub fn new(quality_type: QualityType, capacity: Capacity) -> Self {
        PowerQuality {
            id: Uuid::new_v4().to_string(),
            quality_type,
            capacity,
            levels: 0,
            extras: Vec::new(),
            flaws: Vec::new(),
        }
    }

    pub fn with_levels(mut self, levels: i32) -> Self {
        self.levels = levels;
        self
    }

    pub fn with_extra(mut self, extra: AppliedModifier) -> Self {
        self.extras.push(extra);
        self
    }

    pub fn with_flaw(mut self, flaw: AppliedModifier) -> Self {
        self.flaws.push(flaw);
        self
    }
}

/// A super-power: qualities sharing one dice pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Miracle {
    pub id: String,
    #[serde(default)]
    pub template_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub pool: DicePool,
    #[serde(default)]
    pub qualities: Vec<PowerQuality>,
    /// Granted by Intrinsic: Mandatory Power; always free.
    #[serde(default)]
    pub is_mandatory: bool,
}

impl Miracle {
    pub fn new(name: impl Into<String>, pool: DicePool) -> Self {
        Miracle {
            id: Uuid::new_v4().to_string(),
            template_id: None,
            name: name.into(),
            pool,
            qualities: Vec::new(),
            is_mandatory: false,
        }
    }

    pub fn with_quality(mut self, quality: PowerQuality) -> Self {
        self.qualities.push(quality);
        self
    }

    pub fn mandatory(mut self) -> Self {
        self.is_mandatory = true;
        self
    }
}

// =============================================================================
// Meta-Quality Configuration
// =============================================================================

/// How common the allergen is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AllergySubstance {
    Common,
    Frequent,
    Uncommon,
    Rare,
}

/// What exposure does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AllergyEffect {
    Incapacitates,
    Kills,
    DrainsWillpower,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AllergyConfig {
    #[serde(default)]
    pub substance: Option<AllergySubstance>,
    #[serde(default)]
    pub effect: Option<AllergyEffect>,
}

/// Per-stat condition under Permission: Inhuman Stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StatCondition {
    #[default]
    Normal,
    Superior,
    Inferior,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InhumanStatSetting {
    #[serde(default)]
    pub condition: StatCondition,
    /// Cap for an inferior stat, 1..=4. Unset reads as 4.
    #[serde(default)]
    pub inferior_max_dice: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InhumanStatsConfig {
    #[serde(default)]
    pub stats: BTreeMap<Stat, InhumanStatSetting>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VulnerableConfig {
    #[serde(default)]
    pub extra_boxes: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BruteFrail {
    Brute,
    Frail,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BruteFrailConfig {
    #[serde(default)]
    pub choice: Option<BruteFrail>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomStatsConfig {
    /// The stat this character does without.
    #[serde(default)]
    pub discarded: Option<Stat>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MandatoryPowerConfig {
    /// The miracle bound to the intrinsic.
    #[serde(default)]
    pub miracle_id: Option<String>,
}

/// Instance configuration for one selected meta-quality.
///
/// Addressed uniformly by meta-quality id in [`BasicInfo::configs`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MetaQualityConfig {
    Allergy(AllergyConfig),
    InhumanStats(InhumanStatsConfig),
    Vulnerable(VulnerableConfig),
    BruteFrail(BruteFrailConfig),
    CustomStats(CustomStatsConfig),
    MandatoryPower(MandatoryPowerConfig),
}

// =============================================================================
// Basic Info
// =============================================================================

/// Archetype and meta-quality selections, in selection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BasicInfo {
    #[serde(default = "default_archetype_id")]
    pub archetype_id: String,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub intrinsics: Vec<String>,
    /// Meta-quality id → its instance configuration.
    #[serde(default)]
    pub configs: BTreeMap<String, MetaQualityConfig>,
}

fn default_archetype_id() -> String {
    CUSTOM_ARCHETYPE_ID.to_string()
}

impl Default for BasicInfo {
    fn default() -> Self {
        BasicInfo {
            archetype_id: default_archetype_id(),
            sources: Vec::new(),
            permissions: Vec::new(),
            intrinsics: Vec::new(),
            configs: BTreeMap::new(),
        }
    }
}

impl BasicInfo {
    pub fn is_custom_archetype(&self) -> bool {
        self.archetype_id == CUSTOM_ARCHETYPE_ID
    }

    pub fn config_for(&self, meta_quality_id: &str) -> Option<&MetaQualityConfig> {
        self.configs.get(meta_quality_id)
    }

    pub fn has_intrinsic(&self, id: &str) -> bool {
        self.intrinsics.iter().any(|selected| selected == id)
    }

    pub fn has_permission(&self, id: &str) -> bool {
        self.permissions.iter().any(|selected| selected == id)
    }

    /// The stat dropped by Intrinsic: Custom Stats, if that intrinsic is selected.
    pub fn discarded_attribute(&self) -> Option<Stat> {
        if !self.has_intrinsic("custom_stats") {
            return None;
        }
        match self.config_for("custom_stats") {
            Some(MetaQualityConfig::CustomStats(config)) => config.discarded,
            _ => None,
        }
    }

    pub fn has_no_base_will(&self) -> bool {
        self.has_intrinsic("no_base_will")
    }

    pub fn has_no_willpower(&self) -> bool {
        self.has_intrinsic("no_willpower")
    }

    /// Inhuman Stats setting for one stat, when that permission is selected.
    pub fn inhuman_stat_setting(&self, stat: Stat) -> Option<InhumanStatSetting> {
        if !self.has_permission("inhuman_stats") {
            return None;
        }
        match self.config_for("inhuman_stats") {
            Some(MetaQualityConfig::InhumanStats(config)) => config.stats.get(&stat).copied(),
            _ => None,
        }
    }
}

// =============================================================================
// Character
// =============================================================================

/// A full character snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Character {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub basic_info: BasicInfo,
    #[serde(default)]
    pub stats: Stats,
    #[serde(default)]
    pub skills: Vec<SkillInstance>,
    #[serde(default)]
    pub willpower: WillpowerPurchase,
    #[serde(default)]
    pub miracles: Vec<Miracle>,
}

// =============================================================================
// Unit Tests
// =============================================================================
