//! C ABI bindings.
//!
//! All inputs and outputs are NUL-terminated UTF-8 JSON strings. Returned
//! strings are owned by the library and must be released with
//! [`u_tour_free_string`]. Malformed input yields a null pointer.

use std::ffi::{CStr, CString};
use std::ptr;

use libc::c_char;
use tracing::warn;

use crate::config::OptimizerConfig;
use crate::error::Result;
use crate::models::Stop;
use crate::optimizer::TourOptimizer;

fn optimizer_from_json(config_json: Option<&str>) -> Result<TourOptimizer> {
    let config = match config_json {
        Some(json) => serde_json::from_str::<OptimizerConfig>(json)?,
        None => OptimizerConfig::default(),
    };
    TourOptimizer::new(config)
}

pub(crate) fn optimize_route_json(stops_json: &str, config_json: Option<&str>) -> Result<String> {
    let stops: Vec<Stop> = serde_json::from_str(stops_json)?;
    let result = optimizer_from_json(config_json)?.try_optimize_route(&stops)?;
    Ok(serde_json::to_string(&result)?)
}

pub(crate) fn optimize_route_from_start_json(
    stops_json: &str,
    start_id: &str,
    config_json: Option<&str>,
) -> Result<String> {
    let stops: Vec<Stop> = serde_json::from_str(stops_json)?;
    let result =
        optimizer_from_json(config_json)?.try_optimize_route_from_start(&stops, start_id)?;
    Ok(serde_json::to_string(&result)?)
}

pub(crate) fn calculate_improvement_json(original_json: &str, optimized_json: &str) -> Result<f64> {
    let original: Vec<Stop> = serde_json::from_str(original_json)?;
    let optimized: Vec<Stop> = serde_json::from_str(optimized_json)?;
    Ok(crate::calculate_improvement(&original, &optimized))
}

/// Reads an optional C string. Null maps to `None`.
///
/// # Safety
///
/// `ptr` must be null or point to a valid NUL-terminated string.
unsafe fn read_str<'a>(ptr: *const c_char) -> std::result::Result<Option<&'a str>, ()> {
    if ptr.is_null() {
        return Ok(None);
    }
    CStr::from_ptr(ptr).to_str().map(Some).map_err(|_| ())
}

fn into_raw(result: Result<String>) -> *mut c_char {
    match result {
        Ok(json) => CString::new(json).map_or(ptr::null_mut(), CString::into_raw),
        Err(err) => {
            warn!(error = %err, "ffi call failed");
            ptr::null_mut()
        }
    }
}

/// Optimizes a JSON array of stops. `config_json` may be null.
///
/// Returns an `OptimizedRoute` JSON object, or null on error.
///
/// # Safety
///
/// `stops_json` must be a valid NUL-terminated string; `config_json` must be
/// null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn u_tour_optimize_route(
    stops_json: *const c_char,
    config_json: *const c_char,
) -> *mut c_char {
    let (Ok(Some(stops)), Ok(config)) = (read_str(stops_json), read_str(config_json)) else {
        return ptr::null_mut();
    };
    into_raw(optimize_route_json(stops, config))
}

/// Optimizes a JSON array of stops starting at `start_id`.
///
/// Returns an `OptimizedRoute` JSON object, or null on error.
///
/// # Safety
///
/// `stops_json` and `start_id` must be valid NUL-terminated strings;
/// `config_json` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn u_tour_optimize_route_from_start(
    stops_json: *const c_char,
    start_id: *const c_char,
    config_json: *const c_char,
) -> *mut c_char {
    let (Ok(Some(stops)), Ok(Some(start)), Ok(config)) = (
        read_str(stops_json),
        read_str(start_id),
        read_str(config_json),
    ) else {
        return ptr::null_mut();
    };
    into_raw(optimize_route_from_start_json(stops, start, config))
}

/// Improvement percentage between two JSON stop arrays, or `NaN` on
/// malformed input.
///
/// # Safety
///
/// Both arguments must be valid NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn u_tour_calculate_improvement(
    original_json: *const c_char,
    optimized_json: *const c_char,
) -> f64 {
    let (Ok(Some(original)), Ok(Some(optimized))) =
        (read_str(original_json), read_str(optimized_json))
    else {
        return f64::NAN;
    };
    calculate_improvement_json(original, optimized).unwrap_or(f64::NAN)
}

/// Releases a string returned by this library. Null is ignored.
///
/// # Safety
///
/// `ptr` must be null or a pointer previously returned by this library and
/// not yet freed.
#[no_mangle]
pub unsafe extern "C" fn u_tour_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TourError;
    use crate::models::OptimizedRoute;

    const STOPS: &str = r#"[
        {"id": "b", "latitude": 0.0, "longitude": 0.01},
        {"id": "x", "latitude": null, "longitude": null},
        {"id": "a", "latitude": 0.0, "longitude": 0.0, "address": "Office"},
        {"id": "c", "latitude": 0.0, "longitude": 0.02}
    ]"#;

    #[test]
    fn test_optimize_route_json() {
        let json = optimize_route_json(STOPS, None).expect("valid input");
        let route: OptimizedRoute = serde_json::from_str(&json).expect("valid output");
        assert_eq!(route.len(), 3);
        assert!(json.contains("\"orderedLocations\""));
        assert!(json.contains("\"mapsUrl\""));
    }

    #[test]
    fn test_from_start_json() {
        let json = optimize_route_from_start_json(STOPS, "b", Some(r#"{"dwell_minutes": 0}"#))
            .expect("valid input");
        let route: OptimizedRoute = serde_json::from_str(&json).expect("valid output");
        assert_eq!(route.ordered_locations[0].id(), "b");
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            optimize_route_json("not json", None),
            Err(TourError::Json(_))
        ));
    }

    #[test]
    fn test_cap_enforced() {
        let result = optimize_route_json(STOPS, Some(r#"{"max_stops": 2}"#));
        assert!(matches!(result, Err(TourError::TooManyStops { .. })));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = optimize_route_json(STOPS, Some(r#"{"average_speed_kmh": 0}"#));
        assert!(matches!(result, Err(TourError::InvalidConfig(_))));
    }

    #[test]
    fn test_numeric_ids() {
        let stops = r#"[
            {"id": 7, "latitude": 0.0, "longitude": 0.0},
            {"id": 12, "latitude": 0.0, "longitude": 0.01}
        ]"#;
        let json = optimize_route_from_start_json(stops, "12", None).expect("valid input");
        let route: OptimizedRoute = serde_json::from_str(&json).expect("valid output");
        assert_eq!(route.stop_ids(), vec!["12", "7"]);
    }

    #[test]
    fn test_improvement_json() {
        let original = r#"[
            {"id": "a", "latitude": 0.0, "longitude": 0.0},
            {"id": "c", "latitude": 0.0, "longitude": 0.02},
            {"id": "b", "latitude": 0.0, "longitude": 0.01}
        ]"#;
        let optimized = r#"[
            {"id": "a", "latitude": 0.0, "longitude": 0.0},
            {"id": "b", "latitude": 0.0, "longitude": 0.01},
            {"id": "c", "latitude": 0.0, "longitude": 0.02}
        ]"#;
        let pct = calculate_improvement_json(original, optimized).expect("valid input");
        assert_eq!(pct, 33.3);
    }

    #[test]
    fn test_c_abi_round_trip() {
        let stops = CString::new(STOPS).expect("no interior NUL");
        unsafe {
            let out = u_tour_optimize_route(stops.as_ptr(), ptr::null());
            assert!(!out.is_null());
            let json = CStr::from_ptr(out).to_str().expect("utf-8").to_owned();
            u_tour_free_string(out);
            assert!(json.contains("\"totalDistance\""));

            let bad = CString::new("[").expect("no interior NUL");
            assert!(u_tour_optimize_route(bad.as_ptr(), ptr::null()).is_null());
            assert!(u_tour_optimize_route(ptr::null(), ptr::null()).is_null());
            assert!(u_tour_calculate_improvement(bad.as_ptr(), stops.as_ptr()).is_nan());
            u_tour_free_string(ptr::null_mut());
        }
    }
}
