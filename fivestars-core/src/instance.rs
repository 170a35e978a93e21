//! Widget instances and the arena that allocates their ids.
use crate::config::RatingConfig;
use crate::controller::RatingController;
use crate::render::{StarTemplate, StyleScope};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstanceId(u32);

impl InstanceId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One attached rating widget: its identity, its markup template and its state.
#[derive(Debug, Clone)]
pub struct RatingWidget {
    pub id: InstanceId,
    pub template: StarTemplate,
    pub controller: RatingController,
}

impl RatingWidget {
    #[must_use]
    pub fn new(id: InstanceId, config: RatingConfig) -> Self {
        let template = StarTemplate::new(&config, StyleScope::new(id));
        Self {
            id,
            template,
            controller: RatingController::new(config),
        }
    }

    /// Current markup for the whole row.
    #[must_use]
    pub fn markup(&self) -> String {
        self.template.row_markup(self.controller.paints())
    }
}

/// Result of asking the arena for a widget on a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachOutcome {
    Created(InstanceId),
    AlreadyAttached(InstanceId),
}

impl AttachOutcome {
    #[must_use]
    pub const fn id(self) -> InstanceId {
        match self {
            Self::Created(id) | Self::AlreadyAttached(id) => id,
        }
    }

    #[must_use]
    pub const fn is_created(self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Owns every widget on a page. Each host key gets at most one widget.
#[derive(Debug)]
pub struct WidgetArena<K> {
    widgets: Vec<(K, RatingWidget)>,
    next_id: u32,
}

impl<K> Default for WidgetArena<K> {
    fn default() -> Self {
        Self {
            widgets: Vec::new(),
            next_id: 1,
        }
    }
}

impl<K: PartialEq> WidgetArena<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a widget for `host` unless one already exists; a repeat call changes nothing.
    pub fn attach(&mut self, host: K, config: RatingConfig) -> AttachOutcome {
        if let Some(id) = self.id_for(&host) {
            log::debug!("rating widget {id} already attached; ignoring repeat attach");
            return AttachOutcome::AlreadyAttached(id);
        }
        let id = InstanceId::new(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        log::debug!(
            "attaching rating widget {id} ({} stars, initial {})",
            config.total_stars,
            config.initial_rating
        );
        self.widgets.push((host, RatingWidget::new(id, config)));
        AttachOutcome::Created(id)
    }

    #[must_use]
    pub fn id_for(&self, host: &K) -> Option<InstanceId> {
        self.widgets
            .iter()
            .find(|(key, _)| key == host)
            .map(|(_, widget)| widget.id)
    }

    #[must_use]
    pub fn get(&self, id: InstanceId) -> Option<&RatingWidget> {
        self.widgets
            .iter()
            .map(|(_, widget)| widget)
            .find(|widget| widget.id == id)
    }

    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut RatingWidget> {
        self.widgets
            .iter_mut()
            .map(|(_, widget)| widget)
            .find(|widget| widget.id == id)
    }

    /// Drop a widget; its host key may be attached again afterwards.
    pub fn detach(&mut self, id: InstanceId) -> Option<RatingWidget> {
        let index = self.widgets.iter().position(|(_, widget)| widget.id == id)?;
        Some(self.widgets.swap_remove(index).1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::StarHit;
    use crate::paint::Paint;

    #[test]
    fn repeat_attach_on_same_host_is_a_no_op() {
        let mut arena = WidgetArena::new();
        let first = arena.attach("host-a", RatingConfig::default());
        let second = arena.attach("host-a", RatingConfig::default().with_total_stars(9));
        assert!(first.is_created());
        assert_eq!(second, AttachOutcome::AlreadyAttached(first.id()));
        assert_eq!(arena.len(), 1);
        let widget = arena.get(first.id()).unwrap();
        assert_eq!(widget.controller.paints().len(), 5);
    }

    #[test]
    fn separate_hosts_get_separate_scopes_and_state() {
        let mut arena = WidgetArena::new();
        let a = arena.attach("a", RatingConfig::default()).id();
        let b = arena.attach("b", RatingConfig::default()).id();
        assert_ne!(a, b);

        let scope_a = arena.get(a).unwrap().template.scope.clone();
        let scope_b = arena.get(b).unwrap().template.scope.clone();
        assert_ne!(
            Paint::Active.class_name(&scope_a),
            Paint::Active.class_name(&scope_b)
        );

        arena.get_mut(a).unwrap().controller.hover(StarHit::right(4));
        let untouched = arena.get(b).unwrap();
        assert!(untouched.controller.paints().iter().all(|s| s.is_empty()));
        assert!(!arena.get(b).unwrap().markup().contains(scope_a.uid()));
    }

    #[test]
    fn detach_frees_host_for_a_fresh_widget() {
        let mut arena = WidgetArena::new();
        let first = arena.attach("host", RatingConfig::default()).id();
        assert!(arena.detach(first).is_some());
        assert!(arena.detach(first).is_none());
        let again = arena.attach("host", RatingConfig::default());
        assert!(again.is_created());
        assert_ne!(again.id(), first);
    }

    #[test]
    fn lookup_by_unknown_id_is_none() {
        let arena: WidgetArena<&str> = WidgetArena::new();
        assert!(arena.is_empty());
        assert!(arena.get(InstanceId::new(42)).is_none());
    }
}
