use crate::{
    Error, Result,
    constants::MIN_TOUR_POINTS,
    geo::distance::distance,
    point::{LatLng, Point},
    tour::{TourResult, TourStop},
};

/// Stateless nearest-neighbor tour builder.
pub struct TourSolver;

impl TourSolver {
    /// Orders `points` into a closed tour starting and ending at `points[0]`.
    ///
    /// Fails with [`Error::InsufficientPoints`] for fewer than two points,
    /// before any work is done. Any other input, including coincident or
    /// out-of-range coordinates, yields a complete tour.
    #[geo_tour_derive::timer("solver")]
    pub fn solve(points: &[Point]) -> Result<TourResult> {
        if points.len() < MIN_TOUR_POINTS {
            return Err(Error::insufficient_points(points.len()));
        }

        log::debug!("solver: start n={}", points.len());
        let tour = nearest_neighbor(points);
        log::debug!(
            "solver: complete n={} total_km={:.3}",
            tour.len(),
            tour.total_distance
        );
        Ok(tour)
    }
}

/// Greedy construction: from the current stop, always move to the closest
/// unvisited point. Points are tracked by input index so coincident points
/// stay distinct.
///
/// `points` must be non-empty. A single point yields a self-loop of length 0.
pub(crate) fn nearest_neighbor(points: &[Point]) -> TourResult {
    let n = points.len();
    debug_assert!(n > 0, "nearest_neighbor needs a start point");

    let mut visit = Vec::with_capacity(n);
    let mut leg_by_input = vec![0.0; n];
    let mut unvisited: Vec<usize> = (1..n).collect();
    let mut total = 0.0;
    let mut current = 0;
    visit.push(current);

    while let Some((pos, dist)) = closest(points, current, &unvisited) {
        let next = unvisited.remove(pos);
        leg_by_input[current] = dist;
        total += dist;
        visit.push(next);
        current = next;
        log::trace!("solver.step: order={} input={next} km={dist:.3}", visit.len() - 1);
    }

    let closing = distance(&points[current], &points[0]);
    leg_by_input[current] = closing;
    total += closing;

    let mut path: Vec<LatLng> = visit.iter().map(|&idx| points[idx].coord()).collect();
    path.push(points[0].coord());

    let stops = visit
        .into_iter()
        .enumerate()
        .map(|(order, input_index)| TourStop {
            point: points[input_index].clone(),
            order,
            input_index,
            distance_to_next: leg_by_input[input_index],
        })
        .collect();

    TourResult {
        stops,
        total_distance: total,
        path,
    }
}

/// Single left-to-right scan of `unvisited`; the first strict minimum wins.
/// Returns the position within `unvisited` and the distance, or `None` when
/// nothing is left.
fn closest(points: &[Point], from: usize, unvisited: &[usize]) -> Option<(usize, f64)> {
    let origin = &points[from];
    let mut best: Option<(usize, f64)> = None;

    for (pos, &idx) in unvisited.iter().enumerate() {
        let dist = distance(origin, &points[idx]);
        let better = match best {
            None => true,
            // A NaN incumbent gives way to the first comparable distance.
            Some((_, best_dist)) => dist < best_dist || (best_dist.is_nan() && !dist.is_nan()),
        };
        if better {
            best = Some((pos, dist));
        }
    }

    best
}
