//! Great-circle distance.

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two `(latitude, longitude)`
/// points given in degrees.
///
/// The haversine term is clamped into `[0, 1]` before `asin`, so rounding
/// overshoot never produces `NaN` and identical points yield exactly `0.0`.
///
/// # Examples
///
/// ```
/// use u_tour::distance::haversine_km;
///
/// let seoul = (37.5665, 126.9780);
/// let busan = (35.1796, 129.0756);
/// let d = haversine_km(seoul, busan);
/// assert!((d - 325.0).abs() < 5.0);
/// assert_eq!(haversine_km(seoul, seoul), 0.0);
/// ```
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (delta_lng / 2.0).sin().powi(2);
    let a = a.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}
