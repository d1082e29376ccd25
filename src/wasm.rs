//! WebAssembly bindings.
//!
//! Stops and results cross the boundary as plain JS objects
//! (`{ id, latitude, longitude, address }` in, `{ orderedLocations,
//! totalDistance, estimatedDuration, mapsUrl }` out). The optional `config`
//! argument takes the fields of [`OptimizerConfig`]; pass `undefined` for
//! defaults.

use wasm_bindgen::prelude::*;

use crate::config::OptimizerConfig;
use crate::models::Stop;
use crate::optimizer::TourOptimizer;

fn js_error(err: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn optimizer(config: JsValue) -> Result<TourOptimizer, JsValue> {
    let config = if config.is_undefined() || config.is_null() {
        OptimizerConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(js_error)?
    };
    TourOptimizer::new(config).map_err(js_error)
}

fn stops(value: JsValue) -> Result<Vec<Stop>, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(js_error)
}

/// Optimizes the visiting order over all located stops.
#[wasm_bindgen(js_name = optimizeRoute)]
pub fn optimize_route(stops_js: JsValue, config: JsValue) -> Result<JsValue, JsValue> {
    let result = optimizer(config)?
        .try_optimize_route(&stops(stops_js)?)
        .map_err(js_error)?;
    serde_wasm_bindgen::to_value(&result).map_err(js_error)
}

/// Optimizes the visiting order beginning at `start_id`.
#[wasm_bindgen(js_name = optimizeRouteFromStart)]
pub fn optimize_route_from_start(
    stops_js: JsValue,
    start_id: String,
    config: JsValue,
) -> Result<JsValue, JsValue> {
    let result = optimizer(config)?
        .try_optimize_route_from_start(&stops(stops_js)?, &start_id)
        .map_err(js_error)?;
    serde_wasm_bindgen::to_value(&result).map_err(js_error)
}

/// Percentage reduction in sequential distance from `original` to `optimized`.
#[wasm_bindgen(js_name = calculateImprovement)]
pub fn calculate_improvement(original: JsValue, optimized: JsValue) -> Result<f64, JsValue> {
    Ok(crate::calculate_improvement(&stops(original)?, &stops(optimized)?))
}
