//! Waypoint reference for external mapping services.

use crate::models::Stop;

/// Renders the located stops as a directions reference: `base` followed by
/// `lat,lng` waypoints joined with `/`.
///
/// Returns an empty string when no stop is located.
///
/// ```
/// use u_tour::models::Stop;
/// use u_tour::evaluation::maps_url;
///
/// let stops = vec![Stop::new("a", 37.5, 127.0), Stop::new("b", 37.55, 126.98)];
/// assert_eq!(
///     maps_url(&stops, "https://www.google.com/maps/dir/"),
///     "https://www.google.com/maps/dir/37.5,127/37.55,126.98",
/// );
/// assert_eq!(maps_url(&[], "https://www.google.com/maps/dir/"), "");
/// ```
pub fn maps_url(stops: &[Stop], base: &str) -> String {
    let waypoints: Vec<String> = stops
        .iter()
        .filter_map(Stop::coordinates)
        .map(|(lat, lng)| format!("{lat},{lng}"))
        .collect();
    if waypoints.is_empty() {
        return String::new();
    }
    format!("{base}{}", waypoints.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.google.com/maps/dir/";

    #[test]
    fn test_single_stop() {
        let url = maps_url(&[Stop::new("a", -33.8688, 151.2093)], BASE);
        assert_eq!(url, format!("{BASE}-33.8688,151.2093"));
    }

    #[test]
    fn test_preserves_order() {
        let stops = vec![
            Stop::new("a", 1.0, 2.0),
            Stop::new("b", 3.0, 4.0),
            Stop::new("c", 5.0, 6.0),
        ];
        assert_eq!(maps_url(&stops, BASE), format!("{BASE}1,2/3,4/5,6"));
        let reversed: Vec<Stop> = stops.into_iter().rev().collect();
        assert_eq!(maps_url(&reversed, BASE), format!("{BASE}5,6/3,4/1,2"));
    }

    #[test]
    fn test_skips_unlocated() {
        let stops = vec![Stop::unlocated("x"), Stop::new("a", 1.5, 2.5)];
        assert_eq!(maps_url(&stops, BASE), format!("{BASE}1.5,2.5"));
        assert_eq!(maps_url(&[Stop::unlocated("x")], BASE), "");
    }

    #[test]
    fn test_custom_base() {
        let url = maps_url(&[Stop::new("a", 1.0, 2.0)], "geo:");
        assert_eq!(url, "geo:1,2");
    }
}
