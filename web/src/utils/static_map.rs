use shared_types::MapBounds;

const BASE_URL: &str = "https://maps.googleapis.com/maps/api/staticmap";
pub const IMAGE_SIZE: &str = "640x480";
pub const MAP_TYPE: &str = "satellite";

/// Value of the `visible` query parameter: southwest corner, a pipe, then
/// northeast corner. The analysis backend keys on this exact formatting,
/// so coordinates are emitted verbatim with no rounding or reordering.
pub fn visible_param(bounds: &MapBounds) -> String {
    format!(
        "{},{}|{},{}",
        bounds.south_west.lat, bounds.south_west.long, bounds.north_east.lat, bounds.north_east.long
    )
}

/// Full static-map snapshot URL for a captured region.
pub fn build_url(bounds: &MapBounds, api_key: &str) -> String {
    format!(
        "{}?size={}&maptype={}&visible={}&key={}",
        BASE_URL,
        IMAGE_SIZE,
        MAP_TYPE,
        visible_param(bounds),
        urlencoding::encode(api_key)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::LatLong;

    fn bounds(sw: (f64, f64), ne: (f64, f64)) -> MapBounds {
        MapBounds {
            south_west: LatLong {
                lat: sw.0,
                long: sw.1,
            },
            north_east: LatLong {
                lat: ne.0,
                long: ne.1,
            },
        }
    }

    #[test]
    fn visible_param_is_sw_then_ne() {
        let b = bounds(
            (28.6188330349765, 77.3679098161358),
            (28.6612233450371, 77.4201245987343),
        );
        assert_eq!(
            visible_param(&b),
            "28.6188330349765,77.3679098161358|28.6612233450371,77.4201245987343"
        );
    }

    #[test]
    fn visible_param_keeps_sign_and_precision() {
        let b = bounds((-33.92, 18.42), (-33.85, 18.51));
        assert_eq!(visible_param(&b), "-33.92,18.42|-33.85,18.51");
    }

    #[test]
    fn url_carries_fixed_size_and_maptype() {
        let b = bounds((1.0, 2.0), (3.0, 4.0));
        let url = build_url(&b, "test-key");
        assert!(url.starts_with("https://maps.googleapis.com/maps/api/staticmap?"));
        assert!(url.contains("size=640x480"));
        assert!(url.contains("maptype=satellite"));
        assert!(url.contains("visible=1,2|3,4"));
        assert!(url.ends_with("&key=test-key"));
    }

    #[test]
    fn api_key_is_url_encoded() {
        let b = bounds((1.0, 2.0), (3.0, 4.0));
        let url = build_url(&b, "k&y=1");
        assert!(url.ends_with("&key=k%26y%3D1"));
    }
}
