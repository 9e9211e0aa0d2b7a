//! Geographic bias passed through to every search request.

use serde::{Deserialize, Serialize};

/// A center point plus radius (meters) that weights search results toward a
/// region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCircle {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: f64,
}

impl GeoCircle {
    /// Downtown Dallas with a 50 km radius, covering the DFW metroplex.
    #[must_use]
    pub fn dfw() -> Self {
        Self {
            latitude: 32.776_7,
            longitude: -96.797_0,
            radius_meters: 50_000.0,
        }
    }
}

impl std::fmt::Display for GeoCircle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({:.4}, {:.4}) r={}m",
            self.latitude, self.longitude, self.radius_meters
        )
    }
}
