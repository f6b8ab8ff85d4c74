use std::time::Instant;

use log::info;

use geo_tour_core::{Result, TourOptions, TourSession, logging, read_points, write_tour};

fn main() -> Result<()> {
    let now = Instant::now();
    let options = TourOptions::from_args()?;
    logging::init_logger(&options)?;

    info!("options: {options}");

    let mut session = TourSession::new();
    for point in read_points(options.input_path())? {
        session.add_point(point)?;
    }
    info!("input: n={}", session.len());

    let tour = session.solve()?;
    write_tour(tour, options.format, options.output_path())?;

    info!(
        "output: n={} time={:.3}s",
        tour.len(),
        now.elapsed().as_secs_f32()
    );

    tour.metrics(options.outlier_threshold);

    Ok(())
}
