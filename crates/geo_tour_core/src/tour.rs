use std::fmt;

use crate::point::{LatLng, Point};

/// How a stop should be drawn: the start of the loop or any other stop.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StopRole {
    Home,
    Waypoint,
}

/// One input point annotated with its place in the tour.
#[derive(Clone, Debug, PartialEq)]
pub struct TourStop {
    pub point: Point,
    /// 0-based rank in the visiting sequence, 0 is home.
    pub order: usize,
    /// Position of `point` in the slice given to the solver.
    pub input_index: usize,
    /// Kilometers to the next stop; for the last stop, back to home.
    pub distance_to_next: f64,
}

impl TourStop {
    /// 1-based step number for display.
    pub fn step(&self) -> usize {
        self.order + 1
    }

    pub fn role(&self) -> StopRole {
        if self.order == 0 {
            StopRole::Home
        } else {
            StopRole::Waypoint
        }
    }

    pub fn display_label(&self) -> String {
        self.point.display_label()
    }
}

/// A solved closed tour.
#[derive(Clone, Debug, PartialEq)]
pub struct TourResult {
    /// Sorted by `order`.
    pub stops: Vec<TourStop>,
    pub total_distance: f64,
    /// Home, every other stop in order, then home again.
    pub path: Vec<LatLng>,
}

impl TourResult {
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn home(&self) -> Option<&TourStop> {
        self.stops.first()
    }

    pub fn stop(&self, order: usize) -> Option<&TourStop> {
        self.stops.get(order)
    }

    /// Leg lengths in visiting order, closing leg last.
    pub fn legs(&self) -> impl Iterator<Item = f64> + '_ {
        self.stops.iter().map(|s| s.distance_to_next)
    }

    /// `order` of every point, indexed by its position in the solver input.
    pub fn ranks_by_input(&self) -> Vec<usize> {
        let mut ranks = vec![0; self.stops.len()];
        for stop in &self.stops {
            ranks[stop.input_index] = stop.order;
        }
        ranks
    }

    pub(crate) fn stop_by_input_mut(&mut self, input_index: usize) -> Option<&mut TourStop> {
        self.stops.iter_mut().find(|s| s.input_index == input_index)
    }

    pub fn summary(&self) -> TourSummary<'_> {
        TourSummary { tour: self }
    }

    pub fn metrics(&self, threshold_factor: f64) -> TourMetrics {
        let n = self.len();

        if n < 2 {
            log::info!("metrics: n < 2 so there's nothing to report");
            return TourMetrics::default();
        }

        let total = self.total_distance;
        let average = total / (n as f64);
        let threshold = average * threshold_factor;
        let outliers = self.legs().filter(|d| *d > threshold).count();
        let longest = self.legs().fold(0.0_f64, f64::max);

        log::info!(
            "metrics: n={n} total_km={total:.2} longest_km={longest:.2} avg_km={average:.2} spike_threshold_km={threshold:.2} spikes={outliers}",
        );

        TourMetrics {
            longest,
            outliers,
            total,
            average,
            threshold,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TourMetrics {
    pub longest: f64,
    pub outliers: usize,
    pub total: f64,
    pub average: f64,
    pub threshold: f64,
}

/// Human readable report of a tour, see [`TourResult::summary`].
pub struct TourSummary<'a> {
    tour: &'a TourResult,
}

impl fmt::Display for TourSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total distance: {:.2} km", self.tour.total_distance)?;
        writeln!(f, "Visiting order:")?;
        for stop in &self.tour.stops {
            writeln!(
                f,
                "  {}. {} -> {:.2} km",
                stop.step(),
                stop.display_label(),
                stop.distance_to_next
            )?;
        }
        if let Some(home) = self.tour.home() {
            writeln!(f, "  {} (return to start)", home.display_label())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::StopRole;
    use crate::{point::Point, solver::TourSolver};

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0).with_label("A"),
            Point::new(0.0, 1.0).with_label("B"),
            Point::new(1.0, 1.0).with_label("C"),
            Point::new(1.0, 0.0),
        ]
    }

    #[test]
    fn roles_and_steps_follow_order() {
        let tour = TourSolver::solve(&square()).expect("solve");
        assert_eq!(tour.stops[0].role(), StopRole::Home);
        assert_eq!(tour.stops[0].step(), 1);
        assert!(tour.stops[1..].iter().all(|s| s.role() == StopRole::Waypoint));
        assert_eq!(tour.stops[3].step(), 4);
    }

    #[test]
    fn ranks_by_input_inverts_the_visiting_order() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 5.0),
            Point::new(0.0, 1.0),
        ];
        let tour = TourSolver::solve(&points).expect("solve");
        assert_eq!(tour.ranks_by_input(), vec![0, 2, 1]);
    }

    #[test]
    fn summary_lists_stops_and_return_leg() {
        let points = vec![
            Point::new(0.0, 0.0).with_label("Home"),
            Point::new(0.0, 1.0),
            Point::new(0.0, 2.0).with_label("Far"),
        ];
        let tour = TourSolver::solve(&points).expect("solve");
        let text = tour.summary().to_string();
        assert_eq!(
            text,
            "Total distance: 445.28 km\n\
             Visiting order:\n  \
             1. Home -> 111.32 km\n  \
             2. 0.0000, 1.0000 -> 111.32 km\n  \
             3. Far -> 222.64 km\n  \
             Home (return to start)\n"
        );
    }

    #[test]
    fn metrics_count_legs_above_threshold() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.1),
            Point::new(0.0, 0.2),
            Point::new(0.0, 10.0),
        ];
        let tour = TourSolver::solve(&points).expect("solve");
        let metrics = tour.metrics(1.5);
        assert!((metrics.total - tour.total_distance).abs() < 1e-9);
        assert!((metrics.longest - 10.0 * 111.32).abs() < 1e-6);
        assert!((metrics.average - tour.total_distance / 4.0).abs() < 1e-9);
        assert_eq!(metrics.outliers, 2);
    }

    #[test]
    fn metrics_default_for_degenerate_tour() {
        let tour = crate::solver::nearest_neighbor(&[Point::new(1.0, 1.0)]);
        assert_eq!(tour.metrics(10.0), super::TourMetrics::default());
    }
}
