//! # talents-core: Point-Cost Engine for Talents Workshop
//!
//! This crate prices a superhero character built with the point-buy rules:
//! archetype, stats, skills, willpower and miracles. Every function is pure;
//! the host (CLI or UI) owns all I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Talents Workshop Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Presentation layer (sheet UI / talents CLI)         │   │
//! │  │    edit sheet ──► snapshot (JSON) ──► show breakdown            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ &Character                             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ talents-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   cost    │  │   types   │  │ validation│  │   │
//! │  │   │ archetype │  │ evaluators│  │ Character │  │   sheet   │  │   │
//! │  │   │ modifiers │  │ Breakdown │  │ DicePool  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Character data (DicePool, Miracle, BasicInfo, etc.)
//! - [`points`] - Signed point-cost value type
//! - [`catalog`] - Static rules reference data
//! - [`cost`] - Cost evaluators and the per-section breakdown
//! - [`validation`] - Sheet checks
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same snapshot in, same cost out
//! 2. **Permissive Pricing**: evaluators never fail; unknown data costs 0
//! 3. **Integer Points**: no floating point anywhere
//! 4. **Explicit Errors**: strict helpers return typed errors, never panics
//!
//! ## Example Usage
//!
//! ```rust
//! use talents_core::cost::CostBreakdown;
//! use talents_core::types::{BasicInfo, Character, DicePool, Stat};
//!
//! let mut character = Character {
//!     basic_info: BasicInfo {
//!         archetype_id: "mutant".into(),
//!         ..BasicInfo::default()
//!     },
//!     ..Character::default()
//! };
//! character.stats.insert(Stat::Body, DicePool::normal(3));
//!
//! let breakdown = CostBreakdown::for_character(&character);
//! assert_eq!(breakdown.total.value(), 5 + 15);
//! assert_eq!(breakdown.remaining(talents_core::DEFAULT_POINT_BUDGET).value(), 230);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod cost;
pub mod error;
pub mod points;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cost::CostBreakdown;
pub use error::{CoreError, CoreResult, ValidationError};
pub use points::Points;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Standard campaign point budget.
pub const DEFAULT_POINT_BUDGET: i32 = 250;

/// Dice cap for a human stat or skill.
pub const HUMAN_MAX_DICE: u32 = 5;

/// Dice cap for a stat set to superior under Inhuman Stats.
pub const SUPERIOR_MAX_DICE: u32 = 10;
