//! Widget configuration
use crate::rating::Rating;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// Callback invoked with the new rating on every commit.
pub type RatingCallback = Rc<dyn Fn(Rating)>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid rating options: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarGradient {
    pub start: String,
    pub end: String,
}

impl Default for StarGradient {
    fn default() -> Self {
        Self {
            start: "#FEF7CD".to_string(),
            end: "#FF9511".to_string(),
        }
    }
}

/// Options for one rating widget. Every field has a default; partial input overrides by key.
///
/// Values are passed through to the rendered markup without validation.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RatingConfig {
    pub total_stars: u32,
    pub empty_color: String,
    pub hover_color: String,
    pub active_color: String,
    /// Fill committed stars with `star_gradient` instead of the flat `active_color`.
    pub use_gradient: bool,
    pub star_gradient: StarGradient,
    pub stroke_width: f64,
    pub initial_rating: Rating,
    pub star_size: f64,
    #[serde(skip)]
    pub callback: Option<RatingCallback>,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            total_stars: 5,
            empty_color: "lightgray".to_string(),
            hover_color: "orange".to_string(),
            active_color: "yellow".to_string(),
            use_gradient: true,
            star_gradient: StarGradient::default(),
            stroke_width: 0.0,
            initial_rating: Rating::ZERO,
            star_size: 50.0,
            callback: None,
        }
    }
}

impl RatingConfig {
    /// Parse options from a JSON object, keeping defaults for missing keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not valid JSON or a key holds the wrong type.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Merge a JSON object over this configuration; keys absent from `json` keep their value.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not valid JSON or a key holds the wrong type.
    pub fn merge_json(&self, json: &str) -> Result<Self, ConfigError> {
        let mut base = serde_json::to_value(self)?;
        let overrides: serde_json::Value = serde_json::from_str(json)?;
        merge_values(&mut base, overrides);
        let mut merged: Self = serde_json::from_value(base)?;
        merged.callback.clone_from(&self.callback);
        Ok(merged)
    }

    #[must_use]
    pub fn with_callback(mut self, callback: impl Fn(Rating) + 'static) -> Self {
        self.callback = Some(Rc::new(callback));
        self
    }

    #[must_use]
    pub const fn with_initial_rating(mut self, rating: Rating) -> Self {
        self.initial_rating = rating;
        self
    }

    #[must_use]
    pub const fn with_total_stars(mut self, total: u32) -> Self {
        self.total_stars = total;
        self
    }

    /// Gradient stops used for the committed fill.
    #[must_use]
    pub fn active_stops(&self) -> (&str, &str) {
        if self.use_gradient {
            (&self.star_gradient.start, &self.star_gradient.end)
        } else {
            (&self.active_color, &self.active_color)
        }
    }
}

fn merge_values(base: &mut serde_json::Value, overrides: serde_json::Value) {
    match (base, overrides) {
        (serde_json::Value::Object(base), serde_json::Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) => merge_values(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

impl fmt::Debug for RatingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RatingConfig")
            .field("total_stars", &self.total_stars)
            .field("empty_color", &self.empty_color)
            .field("hover_color", &self.hover_color)
            .field("active_color", &self.active_color)
            .field("use_gradient", &self.use_gradient)
            .field("star_gradient", &self.star_gradient)
            .field("stroke_width", &self.stroke_width)
            .field("initial_rating", &self.initial_rating)
            .field("star_size", &self.star_size)
            .field("callback", &self.callback.as_ref().map(|_| "Fn(Rating)"))
            .finish()
    }
}

impl PartialEq for RatingConfig {
    fn eq(&self, other: &Self) -> bool {
        let same_callback = match (&self.callback, &other.callback) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        same_callback
            && self.total_stars == other.total_stars
            && self.empty_color == other.empty_color
            && self.hover_color == other.hover_color
            && self.active_color == other.active_color
            && self.use_gradient == other.use_gradient
            && self.star_gradient == other.star_gradient
            && self.stroke_width.to_bits() == other.stroke_width.to_bits()
            && self.initial_rating == other.initial_rating
            && self.star_size.to_bits() == other.star_size.to_bits()
    }
}
