//! Mounting rating widgets onto existing host elements.
use crate::components::star_rating::{StarRating, StarRatingProps};
use crate::dom;
use crate::registry::{self, HostKey};
use fivestars_core::{AttachOutcome, ConfigError, Rating, RatingConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::Element;
use yew::{AppHandle, Callback};

/// Marker set on every host element that carries a widget.
pub const INSTANCE_ATTR: &str = "data-fivestars-instance";
/// Option overrides as a JSON object, read by [`attach_all`].
pub const OPTIONS_ATTR: &str = "data-fivestars";
/// Initial rating, read by [`attach_all`].
pub const RATING_ATTR: &str = "data-rating";
/// Class of the element appended to a host to hold its widget.
pub const MOUNT_CLASS: &str = "fivestars-mount";

#[derive(Debug, thiserror::Error)]
pub enum AttachError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid rating options: {0}")]
    Options(String),
    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<JsValue> for AttachError {
    fn from(value: JsValue) -> Self {
        Self::Dom(dom::js_error_message(&value))
    }
}

thread_local! {
    static MOUNTED: RefCell<Vec<AppHandle<StarRating>>> = const { RefCell::new(Vec::new()) };
}

/// Attach a rating widget to `container`. Attaching to the same element again does nothing.
///
/// The widget is mounted into a new child element appended to `container`, so whatever the
/// host already holds stays in place.
///
/// # Errors
/// Returns an error if the host element cannot be marked or the mount point cannot be created.
pub fn attach(container: &Element, config: RatingConfig) -> Result<AttachOutcome, AttachError> {
    let rc_config = Rc::new(config.clone());
    let outcome = registry::register(HostKey::Element(container.clone()), config);
    let AttachOutcome::Created(id) = outcome else {
        return Ok(outcome);
    };
    let root = match mount_point(container, &id.to_string()) {
        Ok(root) => root,
        Err(err) => {
            registry::release(id);
            let _ = container.remove_attribute(INSTANCE_ATTR);
            return Err(err);
        }
    };
    let props = StarRatingProps {
        config: rc_config,
        instance: Some(id),
        on_rate: Callback::noop(),
    };
    let handle = yew::Renderer::<StarRating>::with_root_and_props(root, props).render();
    MOUNTED.with(|mounted| mounted.borrow_mut().push(handle));
    Ok(outcome)
}

/// Mark `container` and append the element the widget renders into.
fn mount_point(container: &Element, id: &str) -> Result<Element, AttachError> {
    container.set_attribute(INSTANCE_ATTR, id)?;
    let document = dom::document().ok_or_else(|| AttachError::Dom("no document".into()))?;
    let root = document.create_element("div")?;
    root.set_class_name(MOUNT_CLASS);
    container.append_child(&root)?;
    Ok(root)
}

/// Attach a widget to every element matching `selector`, reading per-host overrides from
/// `data-fivestars` (JSON options) and `data-rating` (initial rating).
///
/// # Errors
/// Returns an error if the selector is invalid, a host carries malformed options, or a host
/// cannot be marked. Hosts before the failing one stay attached.
pub fn attach_all(selector: &str, base: &RatingConfig) -> Result<Vec<AttachOutcome>, AttachError> {
    dom::query_all(selector)?
        .iter()
        .map(|host| {
            let options = host.get_attribute(OPTIONS_ATTR);
            let rating = host.get_attribute(RATING_ATTR);
            let config = host_config(base, options.as_deref(), rating.as_deref())?;
            attach(host, config)
        })
        .collect()
}

/// Merge host-level overrides over `base`.
///
/// An unparsable `data-rating` is logged and ignored; malformed option JSON is an error.
///
/// # Errors
/// Returns an error if `options` is not a valid options object.
pub fn host_config(
    base: &RatingConfig,
    options: Option<&str>,
    rating: Option<&str>,
) -> Result<RatingConfig, ConfigError> {
    let mut config = match options {
        Some(json) if !json.trim().is_empty() => base.merge_json(json)?,
        _ => base.clone(),
    };
    if let Some(raw) = rating {
        match raw.trim().parse::<f64>() {
            Ok(value) => config.initial_rating = Rating::from_value(value),
            Err(err) => log::warn!("ignoring {RATING_ATTR}={raw:?}: {err}"),
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_config_without_overrides_keeps_base() {
        let base = RatingConfig::default().with_total_stars(4);
        let cfg = host_config(&base, None, None).unwrap();
        assert_eq!(cfg, base);
        let cfg = host_config(&base, Some("  "), None).unwrap();
        assert_eq!(cfg.total_stars, 4);
    }

    #[test]
    fn rating_attribute_sets_initial_rating() {
        let cfg = host_config(&RatingConfig::default(), None, Some("3.5")).unwrap();
        assert_eq!(cfg.initial_rating.half_steps(), 7);
        let cfg = host_config(&RatingConfig::default(), None, Some("lots")).unwrap();
        assert!(cfg.initial_rating.is_zero());
    }

    #[test]
    fn options_attribute_merges_over_base() {
        let base = RatingConfig::default().with_total_stars(10);
        let cfg = host_config(
            &base,
            Some(r##"{"emptyColor": "#eee", "initialRating": 1}"##),
            Some("4"),
        )
        .unwrap();
        assert_eq!(cfg.total_stars, 10);
        assert_eq!(cfg.empty_color, "#eee");
        assert_eq!(cfg.initial_rating, Rating::whole(4));
    }

    #[test]
    fn malformed_options_are_rejected() {
        let err = host_config(&RatingConfig::default(), Some("{oops"), None).unwrap_err();
        let err = AttachError::from(err);
        assert!(err.to_string().contains("invalid rating options"));
    }
}
