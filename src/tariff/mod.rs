//! Attorney fee calculator.
//!
//! Three mutually exclusive procedure categories map to a three-part fee
//! quote. All operations are pure and total: an unknown tier or category
//! id yields the zero structure, and out-of-range numeric input clamps to
//! zero, so the caller always has something to display.

pub mod tables;

use serde::{Deserialize, Serialize};

pub use tables::{CriminalTier, NonAssessableCategory, CRIMINAL_TIERS, NON_ASSESSABLE_CATEGORIES};

/// Hearing surcharge for non-assessable categories (RSD).
pub const NON_ASSESSABLE_HEARING_SURCHARGE: u64 = 4_500;

/// Hearing surcharge for assessable disputes (RSD).
pub const ASSESSABLE_HEARING_SURCHARGE: u64 = 7_500;

/// A three-part fee quote in RSD: submission, hearing, appeal.
///
/// Invariant: `appeal == submission * 2` on every computation path. The
/// hearing amount is additive (category table value or a fixed surcharge),
/// never a multiple; the asymmetry mirrors the Tariff and is intentional.
/// Derived amounts saturate at `u64::MAX` for out-of-scale input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeStructure {
    pub submission: u64,
    pub hearing: u64,
    pub appeal: u64,
}

impl FeeStructure {
    pub const ZERO: FeeStructure = FeeStructure {
        submission: 0,
        hearing: 0,
        appeal: 0,
    };

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Exact lookup in the fixed six-tier criminal table.
///
/// An unknown id returns [`FeeStructure::ZERO`]; the lookup miss is a
/// displayable zero state, not an error.
pub fn criminal_fee(tier_id: &str) -> FeeStructure {
    tables::find_criminal_tier(tier_id)
        .map(|tier| tier.fees)
        .unwrap_or(FeeStructure::ZERO)
}

/// Derived quote for a non-assessable category:
/// `{base, base + 4500, base * 2}`. Unknown id returns the zero structure.
pub fn non_assessable_fee(category_id: &str) -> FeeStructure {
    tables::find_non_assessable_category(category_id)
        .map(|cat| FeeStructure {
            submission: cat.base,
            hearing: cat.base + NON_ASSESSABLE_HEARING_SURCHARGE,
            appeal: cat.base * 2,
        })
        .unwrap_or(FeeStructure::ZERO)
}

/// Piecewise non-decreasing step function over the value in controversy.
///
/// Negative or non-finite input clamps to 0 rather than erroring. A zero
/// submission yields the zero structure whole; the hearing surcharge only
/// applies on top of a non-zero submission.
pub fn assessable_fee(value: f64) -> FeeStructure {
    let value = if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    };

    let submission: u64 = if value <= 0.0 {
        0
    } else if value <= 25_000.0 {
        9_000
    } else if value <= 50_000.0 {
        13_500
    } else if value <= 100_000.0 {
        22_500
    } else if value <= 200_000.0 {
        30_000
    } else if value <= 500_000.0 {
        45_000
    } else if value <= 1_000_000.0 {
        60_000
    } else {
        // The cast saturates for astronomically large values; keep the
        // arithmetic saturating too so the fee stays non-decreasing
        // instead of wrapping.
        let slices = ((value - 1_000_000.0) / 500_000.0).ceil() as u64;
        slices.saturating_mul(3_000).saturating_add(60_000)
    };

    if submission == 0 {
        return FeeStructure::ZERO;
    }

    FeeStructure {
        submission,
        hearing: submission.saturating_add(ASSESSABLE_HEARING_SURCHARGE),
        appeal: submission.saturating_mul(2),
    }
}
