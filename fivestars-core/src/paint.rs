//! Paint classes for star halves and the prefix-painting rule.
use crate::rating::EndIndex;
use crate::render::StyleScope;
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Paint {
    #[default]
    Empty,
    Hovered,
    Active,
}

impl Paint {
    pub const ALL: [Self; 3] = [Self::Empty, Self::Hovered, Self::Active];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Hovered => "hovered",
            Self::Active => "active",
        }
    }

    /// Namespaced class name, e.g. `svg-active-fs3`.
    #[must_use]
    pub fn class_name(self, scope: &StyleScope) -> String {
        format!("svg-{}-{}", self.as_str(), scope.uid())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StarPaint {
    pub left: Paint,
    pub right: Paint,
}

impl StarPaint {
    pub const EMPTY: Self = Self {
        left: Paint::Empty,
        right: Paint::Empty,
    };

    #[must_use]
    pub const fn whole(paint: Paint) -> Self {
        Self {
            left: paint,
            right: paint,
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Self::EMPTY
    }
}

/// Paint of every star in a row, in position order.
pub type PaintRow = SmallVec<[StarPaint; 8]>;

/// Paint a row of `total` stars up to `end` with `state`; everything past it is empty.
#[must_use]
pub fn paint_row(total: usize, end: EndIndex, state: Paint) -> PaintRow {
    (0..total)
        .map(|position| StarPaint {
            left: if end.covers_left(position) {
                state
            } else {
                Paint::Empty
            },
            right: if end.covers_right(position) {
                state
            } else {
                Paint::Empty
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::InstanceId;

    #[test]
    fn class_names_are_scoped_to_instance() {
        let scope = StyleScope::new(InstanceId::new(7));
        assert_eq!(Paint::Active.class_name(&scope), "svg-active-fs7");
        assert_eq!(Paint::Empty.class_name(&scope), "svg-empty-fs7");
        assert_eq!(Paint::Hovered.class_name(&scope), "svg-hovered-fs7");
    }

    #[test]
    fn whole_boundary_paints_prefix() {
        let row = paint_row(5, EndIndex::at(2), Paint::Active);
        assert_eq!(row.len(), 5);
        assert!(row[..3].iter().all(|s| *s == StarPaint::whole(Paint::Active)));
        assert!(row[3..].iter().all(|s| s.is_empty()));
    }

    #[test]
    fn half_boundary_paints_left_half_only() {
        let row = paint_row(5, EndIndex::left_of(1), Paint::Hovered);
        assert_eq!(row[0], StarPaint::whole(Paint::Hovered));
        assert_eq!(
            row[1],
            StarPaint {
                left: Paint::Hovered,
                right: Paint::Empty
            }
        );
        assert!(row[2..].iter().all(|s| s.is_empty()));
    }

    #[test]
    fn none_boundary_and_overflow_boundary() {
        assert!(paint_row(5, EndIndex::NONE, Paint::Active).iter().all(|s| s.is_empty()));
        let all = paint_row(3, EndIndex::at(9), Paint::Active);
        assert!(all.iter().all(|s| *s == StarPaint::whole(Paint::Active)));
        assert!(paint_row(0, EndIndex::at(1), Paint::Active).is_empty());
    }
}
