//! Ordered threshold bands mapping a raw value onto the 0-10 risk scale.
//!
//! Every scorer in this crate is a [`BandTable`]: a list of
//! `(condition, score)` pairs checked in order, first match wins, with a
//! catch-all score for anything that matches nothing. Because the fallback
//! always exists, every table is total over `f64` (including `NaN`, which
//! fails every comparison and lands in the fallback).

/// A condition on a raw parameter value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Band {
    /// `value >= threshold`
    AtLeast(f64),
    /// `value <= threshold`
    AtMost(f64),
    /// `min <= value <= max`
    Between(f64, f64),
}

impl Band {
    /// Returns `true` if `value` satisfies this condition.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        match self {
            Self::AtLeast(threshold) => value >= threshold,
            Self::AtMost(threshold) => value <= threshold,
            Self::Between(min, max) => value >= min && value <= max,
        }
    }
}

/// A [`Band`] paired with the score it yields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBand {
    pub band: Band,
    pub score: f64,
}

impl ScoreBand {
    #[must_use]
    pub const fn at_least(threshold: f64, score: f64) -> Self {
        Self {
            band: Band::AtLeast(threshold),
            score,
        }
    }

    #[must_use]
    pub const fn at_most(threshold: f64, score: f64) -> Self {
        Self {
            band: Band::AtMost(threshold),
            score,
        }
    }

    #[must_use]
    pub const fn between(min: f64, max: f64, score: f64) -> Self {
        Self {
            band: Band::Between(min, max),
            score,
        }
    }
}

/// Ordered bands plus the score for values no band matches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandTable {
    bands: &'static [ScoreBand],
    fallback: f64,
}

impl BandTable {
    #[must_use]
    pub const fn new(bands: &'static [ScoreBand], fallback: f64) -> Self {
        Self { bands, fallback }
    }

    /// Scores `value` against the bands in order.
    #[must_use]
    pub fn score(&self, value: f64) -> f64 {
        self.bands
            .iter()
            .find(|b| b.band.contains(value))
            .map_or(self.fallback, |b| b.score)
    }

    /// Every score this table can produce.
    pub fn scores(&self) -> impl Iterator<Item = f64> + '_ {
        self.bands
            .iter()
            .map(|b| b.score)
            .chain(std::iter::once(self.fallback))
    }
}
