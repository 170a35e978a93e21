//! JavaScript entry points.
use crate::attach::{AttachError, attach, attach_all};
use crate::dom;
use fivestars_core::{Rating, RatingConfig};
use js_sys::{Function, Reflect};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

fn to_js(err: &AttachError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Read a plain options object; a `callback` function key becomes the commit callback.
fn config_from_js(options: &JsValue) -> Result<RatingConfig, AttachError> {
    if options.is_undefined() || options.is_null() {
        return Ok(RatingConfig::default());
    }
    let mut config: RatingConfig = serde_wasm_bindgen::from_value(options.clone())
        .map_err(|err| AttachError::Options(err.to_string()))?;
    let callback = Reflect::get(options, &JsValue::from_str("callback"))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok());
    if let Some(function) = callback {
        config.callback = Some(Rc::new(move |rating: Rating| {
            if let Err(err) = function.call1(&JsValue::NULL, &JsValue::from_f64(rating.value())) {
                let message = dom::js_error_message(&err);
                log::error!("rating callback failed: {message}");
                dom::console_error(&message);
            }
        }));
    }
    Ok(config)
}

/// `fivestars(container, options)`: returns `true` when a widget was created, `false` when
/// the container already had one.
///
/// # Errors
/// Rejects malformed options and DOM failures.
#[wasm_bindgen(js_name = fivestars)]
pub fn attach_js(container: &Element, options: JsValue) -> Result<bool, JsValue> {
    let config = config_from_js(&options).map_err(|err| to_js(&err))?;
    attach(container, config)
        .map(|outcome| outcome.is_created())
        .map_err(|err| to_js(&err))
}

/// `fivestarsAll(selector, options)`: attach to every match; returns how many were created.
///
/// # Errors
/// Rejects malformed options, an invalid selector and DOM failures.
#[wasm_bindgen(js_name = fivestarsAll)]
pub fn attach_all_js(selector: &str, options: JsValue) -> Result<u32, JsValue> {
    let base = config_from_js(&options).map_err(|err| to_js(&err))?;
    let outcomes = attach_all(selector, &base).map_err(|err| to_js(&err))?;
    let created = outcomes.iter().filter(|outcome| outcome.is_created()).count();
    Ok(u32::try_from(created).unwrap_or(u32::MAX))
}
