//! Page-wide registry of rating widgets.
//!
//! One thread-local arena owns the state of every widget on the page, whether it was attached
//! to a host element or mounted directly as a component.
use fivestars_core::{
    AttachOutcome, InstanceId, RatingConfig, RatingController, RatingWidget, WidgetArena,
};
use std::cell::{Cell, RefCell};
use web_sys::Element;

#[derive(Debug, Clone, PartialEq)]
pub enum HostKey {
    Element(Element),
    Component(u32),
}

thread_local! {
    static WIDGETS: RefCell<WidgetArena<HostKey>> = RefCell::new(WidgetArena::new());
    static NEXT_COMPONENT: Cell<u32> = const { Cell::new(0) };
    static UPDATING: RefCell<Vec<InstanceId>> = const { RefCell::new(Vec::new()) };
}

pub fn register(host: HostKey, config: RatingConfig) -> AttachOutcome {
    WIDGETS.with(|widgets| widgets.borrow_mut().attach(host, config))
}

/// Register a widget for a component mounted without a host element.
pub fn register_component(config: RatingConfig) -> InstanceId {
    let key = NEXT_COMPONENT.with(|next| {
        let key = next.get();
        next.set(key.wrapping_add(1));
        key
    });
    register(HostKey::Component(key), config).id()
}

#[must_use]
pub fn is_attached(element: &Element) -> bool {
    WIDGETS.with(|widgets| {
        widgets
            .borrow()
            .id_for(&HostKey::Element(element.clone()))
            .is_some()
    })
}

/// Copy of a widget's current template and state.
#[must_use]
pub fn snapshot(id: InstanceId) -> Option<RatingWidget> {
    WIDGETS.with(|widgets| widgets.borrow().get(id).cloned())
}

/// Run `f` against a widget's controller and store the result.
///
/// The arena is not borrowed while `f` runs, so a rating callback may attach or update other
/// widgets. A nested update of the widget already being updated is refused with a warning and
/// returns `None`; the outer update's result would overwrite it.
pub fn update<R>(id: InstanceId, f: impl FnOnce(&mut RatingController) -> R) -> Option<R> {
    if UPDATING.with(|ids| ids.borrow().contains(&id)) {
        log::warn!("ignoring nested update of rating widget {id}");
        return None;
    }
    let mut controller =
        WIDGETS.with(|widgets| widgets.borrow().get(id).map(|w| w.controller.clone()))?;
    UPDATING.with(|ids| ids.borrow_mut().push(id));
    let out = f(&mut controller);
    UPDATING.with(|ids| ids.borrow_mut().retain(|busy| *busy != id));
    WIDGETS.with(|widgets| {
        if let Some(widget) = widgets.borrow_mut().get_mut(id) {
            widget.controller = controller;
        }
    });
    Some(out)
}

pub fn release(id: InstanceId) {
    WIDGETS.with(|widgets| {
        widgets.borrow_mut().detach(id);
    });
}
