//! Rating values and paint boundaries, kept in exact half-star steps.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A committed or previewed rating: a non-negative multiple of one half.
///
/// Stored as a count of half steps so `1.5` and `3` compare exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Rating(u32);

impl Rating {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn from_half_steps(half_steps: u32) -> Self {
        Self(half_steps)
    }

    #[must_use]
    pub const fn whole(stars: u32) -> Self {
        Self(stars.saturating_mul(2))
    }

    /// Round an arbitrary number to the nearest half star. Negative and non-finite input is zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_value(value: f64) -> Self {
        if !value.is_finite() || value <= 0.0 {
            return Self::ZERO;
        }
        let doubled = (value * 2.0).round();
        if doubled >= f64::from(u32::MAX) {
            Self(u32::MAX)
        } else {
            Self(doubled as u32)
        }
    }

    #[must_use]
    pub const fn half_steps(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn value(self) -> f64 {
        f64::from(self.0) / 2.0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn is_half(self) -> bool {
        self.0 % 2 == 1
    }

    /// Boundary that paints exactly this rating: `rating - 1`.
    #[must_use]
    pub fn boundary(self) -> EndIndex {
        let half = i64::from(self.0) - 2;
        EndIndex(i32::try_from(half).unwrap_or(i32::MAX))
    }
}

impl From<f64> for Rating {
    fn from(value: f64) -> Self {
        Self::from_value(value)
    }
}

impl From<Rating> for f64 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_half() {
            write!(f, "{}.5", self.0 / 2)
        } else {
            write!(f, "{}", self.0 / 2)
        }
    }
}

/// Highest star position to paint, in half steps.
///
/// `EndIndex::NONE` (-1) paints nothing; `EndIndex::at(2)` paints stars 0..=2;
/// a left-half boundary on star 2 is 1.5 and paints only the left half of star 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EndIndex(i32);

impl EndIndex {
    pub const NONE: Self = Self(-2);

    #[must_use]
    pub fn at(position: usize) -> Self {
        Self(i32::try_from(position.saturating_mul(2)).unwrap_or(i32::MAX))
    }

    #[must_use]
    pub fn left_of(position: usize) -> Self {
        Self(Self::at(position).0 - 1)
    }

    #[must_use]
    pub const fn from_half_steps(half_steps: i32) -> Self {
        Self(half_steps)
    }

    #[must_use]
    pub const fn half_steps(self) -> i32 {
        self.0
    }

    #[must_use]
    pub fn value(self) -> f64 {
        f64::from(self.0) / 2.0
    }

    /// Rating committed by clicking at this boundary: `end + 1`.
    #[must_use]
    pub fn rating(self) -> Rating {
        Rating(u32::try_from(self.0.saturating_add(2)).unwrap_or(0))
    }

    /// Whether the left half of `position` falls inside the boundary.
    #[must_use]
    pub fn covers_left(self, position: usize) -> bool {
        Self::left_of(position).0 <= self.0
    }

    /// Whether the right half of `position` falls inside the boundary.
    #[must_use]
    pub fn covers_right(self, position: usize) -> bool {
        Self::at(position).0 <= self.0
    }
}

/// Committed state of one widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RatingState {
    #[default]
    Unrated,
    Rated(Rating),
}

impl RatingState {
    #[must_use]
    pub const fn from_rating(rating: Rating) -> Self {
        if rating.is_zero() {
            Self::Unrated
        } else {
            Self::Rated(rating)
        }
    }

    #[must_use]
    pub const fn rating(self) -> Rating {
        match self {
            Self::Unrated => Rating::ZERO,
            Self::Rated(rating) => rating,
        }
    }

    /// Boundary restored when hover ends: `rating - 1`, or none when unrated.
    #[must_use]
    pub fn boundary(self) -> EndIndex {
        match self {
            Self::Unrated => EndIndex::NONE,
            Self::Rated(rating) => rating.boundary(),
        }
    }
}
