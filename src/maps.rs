//! Map links for places and hotels. Coordinates outside the valid range give `None`.

pub const DEFAULT_ZOOM: u8 = 14;

fn valid(lat: f64, lng: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng)
}

pub fn embed_url(lat: f64, lng: f64, zoom: u8) -> Option<String> {
    if !valid(lat, lng) {
        return None;
    }
    let zoom = zoom.clamp(1, 20);
    Some(format!(
        "https://maps.google.com/maps?q={lat:.6},{lng:.6}&z={zoom}&output=embed"
    ))
}

pub fn directions_url(lat: f64, lng: f64) -> Option<String> {
    if !valid(lat, lng) {
        return None;
    }
    Some(format!(
        "https://www.google.com/maps/dir/?api=1&destination={lat:.6},{lng:.6}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_url_formats_coordinates() {
        assert_eq!(
            embed_url(23.4508, 85.665, DEFAULT_ZOOM).unwrap(),
            "https://maps.google.com/maps?q=23.450800,85.665000&z=14&output=embed"
        );
    }

    #[test]
    fn zoom_is_clamped() {
        assert!(embed_url(0.0, 0.0, 0).unwrap().contains("&z=1&"));
        assert!(embed_url(0.0, 0.0, 99).unwrap().contains("&z=20&"));
    }

    #[test]
    fn invalid_coordinates_give_nothing() {
        assert!(embed_url(91.0, 0.0, 10).is_none());
        assert!(directions_url(0.0, 181.0).is_none());
        assert!(directions_url(f64::NAN, 0.0).is_none());
    }
}
