//! Route-ordering engine for small geographic tours.
//!
//! Given points in arrival order, [`TourSolver::solve`] builds a closed
//! nearest-neighbor tour starting at the first point and reports every leg
//! plus the total length. [`TourSession`] wraps it in the add/solve/reset
//! lifecycle an interactive caller needs.

mod constants;
mod error;
mod geo;
mod io;
pub mod logging;
mod point;
mod session;
mod solver;
mod tour;

pub(crate) use io::options;

pub use constants::{KM_PER_DEGREE, MIN_TOUR_POINTS};
pub use error::{Error, Result};
pub use geo::distance::distance;
pub use io::input::{parse_points, read_points};
pub use io::options::{LogFormat, LogLevel, OutputFormat, TourOptions};
pub use io::output::{render, write_tour};
pub use point::{LatLng, Point};
pub use session::{SessionState, TourSession};
pub use solver::TourSolver;
pub use tour::{StopRole, TourMetrics, TourResult, TourStop, TourSummary};
