use crate::registry;
use fivestars_core::{InstanceId, Rating, SIDE_ATTR, Side, StarHit};
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

/// Resolve the star half under the pointer from the target's `data-side` attribute.
///
/// Targets without one (the star wrapper, the space around the polygons) count as the whole star.
pub fn hit_from_event(position: usize, event: &MouseEvent) -> StarHit {
    let attr = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|el| el.get_attribute(SIDE_ATTR));
    StarHit::new(position, Side::from_target(attr.as_deref()))
}

pub fn hover_handler(id: InstanceId, redraw: Callback<()>) -> Callback<StarHit> {
    Callback::from(move |hit: StarHit| {
        if registry::update(id, |c| c.hover(hit)).is_some() {
            redraw.emit(());
        }
    })
}

pub fn leave_handler(id: InstanceId, redraw: Callback<()>) -> Callback<()> {
    Callback::from(move |()| {
        if registry::update(id, |c| c.leave()).is_some() {
            redraw.emit(());
        }
    })
}

pub fn commit_handler(
    id: InstanceId,
    redraw: Callback<()>,
    on_rate: Callback<Rating>,
) -> Callback<StarHit> {
    Callback::from(move |hit: StarHit| {
        if let Some(rating) = registry::update(id, |c| c.commit(hit)) {
            redraw.emit(());
            on_rate.emit(rating);
        }
    })
}
