//! # Points Module
//!
//! Provides the `Points` type for character-creation point costs.
//!
//! ## Why a Newtype?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every evaluator returns Points, never a bare integer:                  │
//! │                                                                         │
//! │    single_stat_cost(..)  ─┐                                             │
//! │    single_skill_cost(..) ─┼──► Points ──► CostBreakdown.total          │
//! │    single_quality_cost(..)┘                                             │
//! │                                                                         │
//! │  Die counts (u32) and point costs (Points) can't be mixed up, and      │
//! │  negative costs (flaws, allergies) stay signed all the way through.    │
//! │                                                                         │
//! │  Backed by i64, so u32 die counts × rates always fit. Arithmetic       │
//! │  saturates instead of panicking or wrapping.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use talents_core::points::Points;
//!
//! let stat = Points::new(20);
//! let flaw = Points::new(-8);
//! assert_eq!((stat + flaw).value(), 12);
//! assert_eq!(format!("{}", stat * 2), "40 pts");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};
use ts_rs::TS;

// =============================================================================
// Points Type
// =============================================================================

/// A point cost. Signed: flaws and some meta-qualities refund points.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Points(i64);

impl Points {
    /// Creates a point value.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Points(value)
    }

    /// Returns zero points.
    #[inline]
    pub const fn zero() -> Self {
        Points(0)
    }

    /// Returns the raw integer value.
    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is strictly positive.
    ///
    /// Only strictly positive sources are eligible for the free-source
    /// waiver, so this is not `>= 0`.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Clamps to a lower bound.
    ///
    /// ## Example
    /// ```rust
    /// use talents_core::points::Points;
    ///
    /// assert_eq!(Points::new(-24).at_least(1).value(), 1);
    /// assert_eq!(Points::new(3).at_least(1).value(), 3);
    /// ```
    #[inline]
    pub fn at_least(self, floor: i64) -> Self {
        Points(self.0.max(floor))
    }

    /// `count` units at `rate` points each.
    ///
    /// ## Example
    /// ```rust
    /// use talents_core::points::Points;
    ///
    /// assert_eq!(Points::per_die(3, 5).value(), 15);
    /// assert_eq!(Points::per_die(u32::MAX, i64::MAX).value(), i64::MAX);
    /// ```
    #[inline]
    pub fn per_die(count: u32, rate: i64) -> Self {
        Points(i64::from(count).saturating_mul(rate))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pts", self.0)
    }
}

impl From<i32> for Points {
    fn from(value: i32) -> Self {
        Points(i64::from(value))
    }
}

impl From<i64> for Points {
    fn from(value: i64) -> Self {
        Points(value)
    }
}

impl Add for Points {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Points(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Points {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Points {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Points(self.0.saturating_sub(other.0))
    }
}

impl Neg for Points {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Points(self.0.saturating_neg())
    }
}

/// Multiplication by a die count or rate.
impl Mul<i64> for Points {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: i64) -> Self {
        Points(self.0.saturating_mul(rhs))
    }
}

impl Sum for Points {
    fn sum<I: Iterator<Item = Points>>(iter: I) -> Self {
        iter.fold(Points::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Points> for Points {
    fn sum<I: Iterator<Item = &'a Points>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
