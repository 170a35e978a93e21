mod interactions;
mod star;

use crate::registry;
use fivestars_core::{InstanceId, Rating, RatingConfig};
use interactions::{commit_handler, hover_handler, leave_handler};
use star::Star;
use std::rc::Rc;
use yew::prelude::*;

pub use interactions::hit_from_event;

pub const ROW_CLASS: &str = "fs-rating";

#[derive(Properties, PartialEq, Clone, Default)]
pub struct StarRatingProps {
    /// Read once at mount; later changes are ignored.
    #[prop_or_default]
    pub config: Rc<RatingConfig>,
    /// Widget already registered by `attach`. When absent the component registers its own.
    #[prop_or_default]
    pub instance: Option<InstanceId>,
    #[prop_or_default]
    pub on_rate: Callback<Rating>,
}

/// Spoken summary of the committed rating, e.g. `Rated 3.5 out of 5`.
#[must_use]
pub fn rating_label(rating: Rating, total: usize) -> String {
    if rating.is_zero() {
        format!("Not rated, {total} stars")
    } else {
        format!("Rated {rating} out of {total}")
    }
}

#[hook]
fn use_instance(props: &StarRatingProps) -> InstanceId {
    let owned = props.instance.is_none();
    let config = Rc::clone(&props.config);
    let instance = props.instance;
    let id = *use_state(move || {
        instance.unwrap_or_else(|| registry::register_component((*config).clone()))
    });
    use_effect_with(id, move |id| {
        let id = *id;
        move || {
            if owned {
                registry::release(id);
            }
        }
    });
    id
}

#[function_component(StarRating)]
pub fn star_rating(props: &StarRatingProps) -> Html {
    let id = use_instance(props);
    let update = use_force_update();
    let redraw = Callback::from(move |()| update.force_update());

    let Some(widget) = registry::snapshot(id) else {
        log::warn!("rating widget {id} is not registered");
        return html! {};
    };
    let controller = &widget.controller;
    let on_hover = hover_handler(id, redraw.clone());
    let on_leave = leave_handler(id, redraw.clone());
    let on_commit = commit_handler(id, redraw, props.on_rate.clone());

    html! {
        <div
            class={ROW_CLASS}
            data-instance={id.to_string()}
            role="img"
            aria-label={rating_label(controller.rating(), controller.total_stars())}
        >
            { for controller.paints().iter().enumerate().map(|(position, paint)| html! {
                <Star
                    key={position}
                    position={position}
                    template={widget.template.clone()}
                    paint={*paint}
                    on_hover={on_hover.clone()}
                    on_leave={on_leave.clone()}
                    on_commit={on_commit.clone()}
                />
            }) }
        </div>
    }
}
