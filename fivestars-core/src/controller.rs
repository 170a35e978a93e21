//! Committed rating and the paint transitions driven by pointer events.
use crate::config::RatingConfig;
use crate::input::{StarHit, map_hit};
use crate::paint::{Paint, PaintRow, StarPaint, paint_row};
use crate::rating::{EndIndex, Rating, RatingState};

/// Owns the committed rating of one widget and the paint of each of its stars.
///
/// Hover only repaints. The committed [`RatingState`] changes through [`commit`](Self::commit)
/// alone, and [`leave`](Self::leave) always restores the paint it implies.
#[derive(Debug, Clone)]
pub struct RatingController {
    config: RatingConfig,
    state: RatingState,
    paints: PaintRow,
}

impl RatingController {
    /// Build the controller and paint the configured initial rating.
    #[must_use]
    pub fn new(config: RatingConfig) -> Self {
        let total = config.total_stars as usize;
        let mut controller = Self {
            state: RatingState::from_rating(config.initial_rating),
            paints: paint_row(total, EndIndex::NONE, Paint::Empty),
            config,
        };
        controller.init_rating();
        controller
    }

    pub fn init_rating(&mut self) {
        self.paint_stars(self.config.initial_rating.boundary(), Paint::Active);
    }

    /// Paint every star up to `end` with `state`, the rest empty. Leaves the rating alone.
    pub fn paint_stars(&mut self, end: EndIndex, state: Paint) {
        self.paints = paint_row(self.paints.len(), end, state);
    }

    pub fn hover(&mut self, hit: StarHit) {
        self.paint_stars(map_hit(hit), Paint::Hovered);
    }

    /// Drop the hover preview and repaint the committed rating.
    pub fn leave(&mut self) {
        self.paint_stars(self.state.boundary(), Paint::Active);
    }

    /// Commit the rating under `hit`, notify the callback and return the new rating.
    pub fn commit(&mut self, hit: StarHit) -> Rating {
        let end = map_hit(hit);
        let rating = end.rating();
        self.paint_stars(end, Paint::Active);
        if let Some(callback) = &self.config.callback {
            callback(rating);
        }
        self.state = RatingState::from_rating(rating);
        log::debug!("rating committed: {rating}");
        rating
    }

    #[must_use]
    pub const fn state(&self) -> RatingState {
        self.state
    }

    #[must_use]
    pub const fn rating(&self) -> Rating {
        self.state.rating()
    }

    #[must_use]
    pub fn paints(&self) -> &[StarPaint] {
        &self.paints
    }

    #[must_use]
    pub const fn config(&self) -> &RatingConfig {
        &self.config
    }

    #[must_use]
    pub fn total_stars(&self) -> usize {
        self.paints.len()
    }
}

impl PartialEq for RatingController {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.paints == other.paints && self.config == other.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn classes(controller: &RatingController) -> Vec<(Paint, Paint)> {
        controller
            .paints()
            .iter()
            .map(|s| (s.left, s.right))
            .collect()
    }

    #[test]
    fn initial_rating_paints_active_prefix() {
        let controller =
            RatingController::new(RatingConfig::default().with_initial_rating(Rating::whole(3)));
        assert_eq!(controller.state(), RatingState::Rated(Rating::whole(3)));
        let row = controller.paints();
        assert!(row[..3].iter().all(|s| *s == StarPaint::whole(Paint::Active)));
        assert!(row[3..].iter().all(|s| s.is_empty()));
    }

    #[test]
    fn unrated_start_paints_nothing() {
        let controller = RatingController::new(RatingConfig::default());
        assert_eq!(controller.state(), RatingState::Unrated);
        assert!(controller.paints().iter().all(|s| s.is_empty()));
        assert_eq!(controller.total_stars(), 5);
    }

    #[test]
    fn hover_previews_without_committing() {
        let mut controller =
            RatingController::new(RatingConfig::default().with_initial_rating(Rating::whole(2)));
        let before = classes(&controller);
        controller.hover(StarHit::right(3));
        assert!(controller.paints()[..4]
            .iter()
            .all(|s| *s == StarPaint::whole(Paint::Hovered)));
        assert_eq!(controller.rating(), Rating::whole(2));
        controller.leave();
        assert_eq!(classes(&controller), before);
    }

    #[test]
    fn commit_invokes_callback_and_updates_state() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut controller = RatingController::new(
            RatingConfig::default().with_callback(move |r| sink.borrow_mut().push(r)),
        );
        let rating = controller.commit(StarHit::right(2));
        assert_eq!(rating, Rating::whole(3));
        assert_eq!(*seen.borrow(), vec![Rating::whole(3)]);
        assert_eq!(controller.state(), RatingState::Rated(Rating::whole(3)));
    }

    #[test]
    fn commit_without_callback_is_silent() {
        let mut controller = RatingController::new(RatingConfig::default());
        assert_eq!(controller.commit(StarHit::left(0)).value(), 0.5);
        assert_eq!(
            controller.paints()[0],
            StarPaint {
                left: Paint::Active,
                right: Paint::Empty
            }
        );
    }

    #[test]
    fn leave_after_commit_restores_half_star() {
        let mut controller = RatingController::new(RatingConfig::default());
        controller.commit(StarHit::left(1));
        controller.hover(StarHit::right(4));
        controller.leave();
        let row = controller.paints();
        assert_eq!(row[0], StarPaint::whole(Paint::Active));
        assert_eq!(row[1].left, Paint::Active);
        assert_eq!(row[1].right, Paint::Empty);
        assert!(row[2..].iter().all(|s| s.is_empty()));
    }

    #[test]
    fn zero_stars_renders_empty_row() {
        let mut controller = RatingController::new(RatingConfig::default().with_total_stars(0));
        controller.hover(StarHit::right(0));
        assert!(controller.paints().is_empty());
    }
}
