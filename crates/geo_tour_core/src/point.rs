use std::fmt;

use crate::constants::FALLBACK_LABEL_PRECISION;

/// A coordinate pair in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Planar distance in kilometers, see [`crate::distance`].
    pub fn dist_km(self, other: LatLng) -> f64 {
        crate::geo::distance::flat_km(self, other)
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut b1 = ryu::Buffer::new();
        let mut b2 = ryu::Buffer::new();
        write!(f, "{},{}", b1.format(self.lat), b2.format(self.lng))
    }
}

/// An input point: where it is and, optionally, what to call it.
///
/// Coordinates are not range checked. Out-of-range or non-finite values are
/// carried through and only produce a meaningless tour.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
    pub label: Option<String>,
}

impl Point {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn coord(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }

    /// The label, or the coordinates rounded for display when none is known.
    pub fn display_label(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!(
                "{:.prec$}, {:.prec$}",
                self.lat,
                self.lng,
                prec = FALLBACK_LABEL_PRECISION
            ),
        }
    }
}

impl From<LatLng> for Point {
    fn from(coord: LatLng) -> Self {
        Self::new(coord.lat, coord.lng)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coord())?;
        if let Some(label) = &self.label {
            write!(f, ",{label}")?;
        }
        Ok(())
    }
}
