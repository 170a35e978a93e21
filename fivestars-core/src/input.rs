//! Mapping pointer hits on a star half to a paint boundary.
use crate::rating::EndIndex;

/// Attribute carried by each rendered polygon half.
pub const SIDE_ATTR: &str = "data-side";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Read the side from a `data-side` attribute value.
    #[must_use]
    pub fn from_attr(value: &str) -> Option<Self> {
        match value.trim() {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    /// Side of an event target: its `data-side` value, or a whole-star hit when the target
    /// carries none (the star wrapper or the space around the polygons).
    #[must_use]
    pub fn from_target(attr: Option<&str>) -> Self {
        attr.and_then(Self::from_attr).unwrap_or(Self::Right)
    }
}

/// A pointer event resolved to a star position and half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StarHit {
    pub position: usize,
    pub side: Side,
}

impl StarHit {
    #[must_use]
    pub const fn new(position: usize, side: Side) -> Self {
        Self { position, side }
    }

    #[must_use]
    pub const fn left(position: usize) -> Self {
        Self::new(position, Side::Left)
    }

    #[must_use]
    pub const fn right(position: usize) -> Self {
        Self::new(position, Side::Right)
    }
}

/// `position - 0.5` for a left-half hit, `position` otherwise.
#[must_use]
pub fn map_hit(hit: StarHit) -> EndIndex {
    match hit.side {
        Side::Left => EndIndex::left_of(hit.position),
        Side::Right => EndIndex::at(hit.position),
    }
}
