//! Flat-earth distance.
//!
//! Degrees of latitude and longitude are treated as a Cartesian plane and the
//! Euclidean length is scaled by [`KM_PER_DEGREE`]. This is only meaningful
//! for city-scale tours: it ignores meridian convergence, so east-west legs
//! are overstated away from the equator, and it is not a great-circle
//! distance. Tour output depends on it, so it stays as is.

use crate::{
    constants::KM_PER_DEGREE,
    point::{LatLng, Point},
};

#[inline]
pub(crate) fn flat_km(a: LatLng, b: LatLng) -> f64 {
    let dlat = a.lat - b.lat;
    let dlng = a.lng - b.lng;
    (dlat * dlat + dlng * dlng).sqrt() * KM_PER_DEGREE
}

/// Distance in kilometers between two points.
pub fn distance(a: &Point, b: &Point) -> f64 {
    flat_km(a.coord(), b.coord())
}
