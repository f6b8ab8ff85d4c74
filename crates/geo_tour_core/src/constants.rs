/// Kilometers per degree of arc at the equator.
pub const KM_PER_DEGREE: f64 = 111.32;

/// Smallest point set that forms a tour.
pub const MIN_TOUR_POINTS: usize = 2;

/// Decimal places used when a stop has no label and its coordinates are shown instead.
pub(crate) const FALLBACK_LABEL_PRECISION: usize = 4;

/// Default spike factor: legs longer than `average * factor` are counted as outliers.
pub(crate) const DEFAULT_OUTLIER_FACTOR: f64 = 10.0;
