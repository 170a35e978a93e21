#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod attach;
pub mod components;
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod js_api;
pub mod registry;

pub use attach::{AttachError, attach, attach_all, host_config};
pub use components::star_rating::{StarRating, StarRatingProps};
pub use fivestars_core::{AttachOutcome, InstanceId, Rating, RatingConfig, StarGradient};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
