//! Geographic coordinate type and great-circle distance.
//!
//! `GeoPoint` uses `f64` (double-precision) latitude/longitude in degrees.
//! Edge weights, heuristics and reported route lengths are all kilometres
//! derived from [`GeoPoint::distance_km`], so one distance definition serves
//! the whole engine.

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in kilometres.
    ///
    /// Spherical Earth, mean radius 6371 km.  Deterministic, returns exactly
    /// 0.0 for identical points.  The error vs. an ellipsoidal model is well
    /// under 0.5 % — irrelevant next to the map-matching error of snapping
    /// clicks to road nodes.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        const R: f64 = 6371.0; // mean Earth radius, kilometres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
