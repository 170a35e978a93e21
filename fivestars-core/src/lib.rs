//! fivestars core
//!
//! Platform-agnostic logic for the fivestars rating widget: configuration, half-star rating
//! values, pointer hit mapping, prefix painting and star markup. The browser crate drives these
//! types from DOM events; nothing here touches the DOM.

pub mod config;
pub mod controller;
pub mod input;
pub mod instance;
pub mod paint;
pub mod rating;
pub mod render;

pub use config::{ConfigError, RatingCallback, RatingConfig, StarGradient};
pub use controller::RatingController;
pub use input::{SIDE_ATTR, Side, StarHit, map_hit};
pub use instance::{AttachOutcome, InstanceId, RatingWidget, WidgetArena};
pub use paint::{Paint, PaintRow, StarPaint, paint_row};
pub use rating::{EndIndex, Rating, RatingState};
pub use render::{GradientFill, StarTemplate, StyleScope};
