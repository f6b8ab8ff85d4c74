use std::fmt;

use crate::{Error, Result, point::Point, solver::TourSolver, tour::TourResult};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionState {
    Empty,
    Accumulating,
    Solved,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Empty => "empty",
            Self::Accumulating => "accumulating",
            Self::Solved => "solved",
        })
    }
}

/// Interactive point set: append points, solve once, reset to start over.
///
/// Points cannot be removed or moved individually. Once solved the set is
/// frozen until [`TourSession::reset`].
#[derive(Clone, Debug, Default)]
pub struct TourSession {
    points: Vec<Point>,
    result: Option<TourResult>,
}

impl TourSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        if self.result.is_some() {
            SessionState::Solved
        } else if self.points.is_empty() {
            SessionState::Empty
        } else {
            SessionState::Accumulating
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn result(&self) -> Option<&TourResult> {
        self.result.as_ref()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether [`TourSession::solve`] would run right now.
    pub fn can_solve(&self) -> bool {
        self.result.is_none() && self.points.len() >= crate::constants::MIN_TOUR_POINTS
    }

    /// Appends a point and returns its index.
    pub fn add_point(&mut self, point: Point) -> Result<usize> {
        if self.state() == SessionState::Solved {
            return Err(Error::invalid_transition("add a point", SessionState::Solved));
        }
        self.points.push(point);
        log::debug!("session: added point n={}", self.points.len());
        Ok(self.points.len() - 1)
    }

    /// Sets the display label of an already captured point, e.g. once an
    /// address lookup finishes. A solved tour is updated in place.
    pub fn set_label(&mut self, index: usize, label: impl Into<String>) -> Result<()> {
        let len = self.points.len();
        let Some(point) = self.points.get_mut(index) else {
            return Err(Error::invalid_input(format!(
                "point index {index} out of range (n={len})"
            )));
        };
        let label = label.into();

        if let Some(stop) = self
            .result
            .as_mut()
            .and_then(|tour| tour.stop_by_input_mut(index))
        {
            stop.point.label = Some(label.clone());
        }
        point.label = Some(label);
        Ok(())
    }

    /// Solves the current point set and freezes it.
    pub fn solve(&mut self) -> Result<&TourResult> {
        if self.state() == SessionState::Solved {
            return Err(Error::invalid_transition("solve", SessionState::Solved));
        }

        let tour = TourSolver::solve(&self.points)?;
        log::info!(
            "session: solved n={} total_km={:.2}",
            tour.len(),
            tour.total_distance
        );
        Ok(&*self.result.insert(tour))
    }

    /// Drops all points and any solved tour.
    pub fn reset(&mut self) {
        self.points.clear();
        self.result = None;
        log::debug!("session: reset");
    }
}
