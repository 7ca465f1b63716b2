//! # Error Types
//!
//! Domain-specific error types for talents-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  talents-core errors (this file)                                       │
//! │  ├── CoreError        - Strict lookups, parsing, template instancing   │
//! │  └── ValidationError  - Character sheet problems                       │
//! │                                                                         │
//! │  talents-cli errors (app)                                              │
//! │  └── CliError         - Config file and sheet loading                  │
//! │                                                                         │
//! │  NOTE: cost evaluators never return errors. Missing data costs 0 and   │
//! │  is reported through `tracing::warn!` instead.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending id in the message
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised by the strict (non-evaluator) parts of the engine.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Archetype id is not in the rules catalog.
    #[error("Unknown archetype: {0}")]
    UnknownArchetype(String),

    /// Source, permission or intrinsic id is not in the rules catalog.
    #[error("Unknown {category} meta-quality: {id}")]
    UnknownMetaQuality { category: String, id: String },

    /// Extra or flaw definition id is not in the rules catalog.
    #[error("Unknown extra or flaw: {0}")]
    UnknownExtraOrFlaw(String),

    /// Power quality type cannot be resolved (e.g. hyperskill for a deleted skill).
    #[error("Unknown power quality type: {0}")]
    UnknownQualityType(String),

    /// Skill definition id is not in the rules catalog.
    #[error("Unknown skill: {0}")]
    UnknownSkill(String),

    /// Miracle template id is not in the rules catalog.
    #[error("Unknown miracle template: {0}")]
    UnknownTemplate(String),

    /// Dice pool text could not be parsed.
    ///
    /// ## When This Occurs
    /// ```text
    /// "3D+1HD"   → ok
    /// "3D+XD"    → InvalidDicePool { input: "3D+XD", token: "XD" }
    /// ```
    #[error("Invalid dice pool '{input}': bad token '{token}'")]
    InvalidDicePool { input: String, token: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Character sheet validation errors.
///
/// Validation is advisory: the evaluators still price an invalid sheet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format or a reference to something that does not exist.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Duplicate value (e.g., duplicate skill instance id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
