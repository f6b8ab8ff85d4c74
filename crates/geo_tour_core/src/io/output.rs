use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::{Error, Result, options::OutputFormat, tour::TourResult};

const CSV_HEADER: [&str; 5] = ["order", "lat", "lng", "distance_to_next_km", "label"];

/// Writes `tour` in `format` to `path`, or stdout when `None`.
pub fn write_tour(tour: &TourResult, format: OutputFormat, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                Error::other(format!("failed to create output {}: {e}", path.display()))
            })?;
            let mut out = BufWriter::new(file);
            render(tour, format, &mut out)?;
            out.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            render(tour, format, &mut out)?;
            out.flush()?;
        }
    }
    log::debug!("output: wrote n={} format={format}", tour.len());
    Ok(())
}

pub fn render(tour: &TourResult, format: OutputFormat, out: &mut impl Write) -> io::Result<()> {
    match format {
        OutputFormat::Route => {
            for coord in &tour.path {
                writeln!(out, "{coord}")?;
            }
        }
        OutputFormat::Csv => write_csv(tour, out)?,
        OutputFormat::Summary => write!(out, "{}", tour.summary())?,
    }
    Ok(())
}

/// One row per stop; fields holding delimiters, quotes or line breaks are quoted.
fn write_csv(tour: &TourResult, out: &mut impl Write) -> io::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(out);
    writer.write_record(CSV_HEADER)?;

    for stop in &tour.stops {
        let mut lat = ryu::Buffer::new();
        let mut lng = ryu::Buffer::new();
        let mut km = ryu::Buffer::new();
        let order = stop.order.to_string();
        writer.write_record([
            order.as_str(),
            lat.format(stop.point.lat),
            lng.format(stop.point.lng),
            km.format(stop.distance_to_next),
            stop.point.label.as_deref().unwrap_or_default(),
        ])?;
    }

    writer.flush()
}
